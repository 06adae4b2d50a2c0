use serde::{Deserialize, Serialize};

/// A file attached to an incident: display name plus retrieval location.
///
/// The location is opaque to the derivation core. The export boundary
/// understands `data:` URLs, which is how the external store keeps
/// attachment contents inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    pub url: String,
}
