use thiserror::Error;

/// Crate-wide error taxonomy.
///
/// Deliberately small: absent optional fields (cost, attachments,
/// follow-up dates) are never errors, and a missing patient is an absence
/// sentinel (`None` from the summarizer), not an error variant. These
/// cover the store boundary, wire parsing, and the export path.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("State lock poisoned")]
    LockPoisoned,

    #[error("Seed parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
