//! Auth-context input — the signed-in user as supplied by the external
//! session layer.
//!
//! This crate never validates sessions; it consumes exactly one thing
//! from the auth collaborator: the patient record the user is linked to.

use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// The current user, as handed over by the session layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub role: UserRole,
    /// Present only for patient accounts.
    pub patient_id: Option<String>,
}

impl CurrentUser {
    /// The patient record this user is linked to, if any. Admin accounts
    /// carry no linked patient and therefore no dashboard of their own.
    pub fn linked_patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }
}
