//! Dentava — the data core of a patient-facing dental care dashboard.
//!
//! Typed records (`models`), the pure appointment summarizer (`summary`),
//! renderer view models (`dashboard`), the shared snapshot store with
//! memoized recomputation (`store`), the auth-context input (`auth`), and
//! the attachment-export boundary (`export`). Authentication, persistence,
//! file storage, and networking live in external collaborators.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
pub mod summary;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the embedding application.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate default.
/// Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
