use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::attachment::FileAttachment;
use super::enums::IncidentStatus;

/// A dental encounter ("incident") tied to one patient — scheduled,
/// in progress, completed, or cancelled.
///
/// Optional fields mean "not applicable", never invalid input: a missing
/// cost contributes nothing to totals, missing attachments and follow-up
/// dates are simply omitted from rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub appointment_date: NaiveDateTime,
    pub status: IncidentStatus,
    pub treatment: Option<String>,
    /// Non-negative; pre-validated by the external store.
    pub cost: Option<f64>,
    /// Ordered as supplied; empty when the record carries no attachments.
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    /// Follow-up visit, when one was booked at treatment time.
    pub next_date: Option<NaiveDateTime>,
    pub comments: Option<String>,
}

impl Incident {
    pub fn is_completed(&self) -> bool {
        self.status == IncidentStatus::Completed
    }
}
