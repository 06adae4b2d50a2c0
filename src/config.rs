use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Dentava";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of rows per dashboard list section. Presentation-layer
/// slicing only; derived summaries are never capped.
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "dentava=info"
}

/// Get the application data directory
/// ~/Dentava/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Dentava")
}

/// Directory where saved attachments land.
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}
