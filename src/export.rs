//! File-opener boundary — saves an incident attachment to disk.
//!
//! Attachments arrive as a display name plus a retrieval location. The
//! external store keeps attachment contents inline as `data:` URLs;
//! anything else is rejected, since this crate performs no network
//! fetches. Fire-and-forget from the derivation core's perspective.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::DashboardError;
use crate::models::FileAttachment;

/// Decodes the attachment payload and writes it under `dir` with the
/// attachment's display name. Creates `dir` when missing and returns the
/// written path.
pub fn save_attachment(file: &FileAttachment, dir: &Path) -> Result<PathBuf, DashboardError> {
    let bytes = decode_data_url(&file.url)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(safe_filename(&file.name));
    fs::write(&path, &bytes)?;

    tracing::info!(name = %file.name, bytes = bytes.len(), "attachment saved");
    Ok(path)
}

/// Saves into the default exports directory (`config::exports_dir`).
pub fn save_attachment_to_exports(file: &FileAttachment) -> Result<PathBuf, DashboardError> {
    save_attachment(file, &crate::config::exports_dir())
}

/// Extracts the payload of a `data:` URL. Base64 payloads are decoded;
/// plain-text payloads are returned verbatim.
fn decode_data_url(url: &str) -> Result<Vec<u8>, DashboardError> {
    let rest = url.strip_prefix("data:").ok_or_else(|| {
        DashboardError::InvalidAttachment(
            "unsupported retrieval location (expected a data: URL)".into(),
        )
    })?;
    let (meta, payload) = rest.split_once(',').ok_or_else(|| {
        DashboardError::InvalidAttachment("data URL has no payload".into())
    })?;

    if meta.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| DashboardError::InvalidAttachment(format!("base64 payload: {e}")))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

/// Keeps only the final path component of the display name so an
/// attachment cannot land outside the target directory.
fn safe_filename(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string()
}
