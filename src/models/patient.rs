use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record as supplied by the external application store.
/// Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub contact: String,
    pub email: String,
    pub health_info: String,
}
