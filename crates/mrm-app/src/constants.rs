//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.
//! This avoids magic strings scattered throughout the application.

/// Application display name.
pub const APP_NAME: &str = "Merge Requests Monitor";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application author.
pub const APP_AUTHOR: &str = "Matias Agustin Mendez <matagus@gmail.com>";

/// Project repository URL.
pub const APP_GITHUB: &str = "https://github.com/matagus/merge-requests-monitor";

/// Application description.
pub const APP_DESCRIPTION: &str =
    "A System Tray app that monitors your merge requests and let you access them quickly.";

/// Text block shown in the About dialog.
#[must_use]
pub fn about_text() -> String {
    format!("{APP_DESCRIPTION}\n\nVersion {APP_VERSION}\n\nAuthor: {APP_AUTHOR}\n\n{APP_GITHUB}")
}
