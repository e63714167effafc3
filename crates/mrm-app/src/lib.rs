//! Merge Requests Monitor - Application Library
//!
//! State, configuration, menu model and platform glue for the macOS
//! status bar application. Everything except [`tray`] and the native
//! dialog calls is platform-independent and tested off-screen.

// Core modules
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod interval;
pub mod menu;
pub mod state;

// Native dialogs (script building and reply parsing are portable)
pub mod dialog;

// Status bar event loop
#[cfg(target_os = "macos")]
pub mod tray;

pub use app::{Action, App, Directive};
pub use config::Config;
pub use error::{AppError, Result};
pub use interval::RefreshInterval;
pub use state::AppState;
