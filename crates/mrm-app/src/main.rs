//! Merge Requests Monitor - Status Bar Application
//!
//! Polls GitLab merge request Atom feeds and keeps the pending ones one
//! click away in the macOS status bar.

use anyhow::Context;
use mrm_app::constants::{APP_NAME, APP_VERSION};
use mrm_app::{App, Config};

/// Application entry point.
pub fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting {APP_NAME} {APP_VERSION}");

    let config_path = Config::config_path();
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let app = App::new(config, config_path).context("initializing the feed client")?;

    run(app)
}

#[cfg(target_os = "macos")]
fn run(app: App) -> anyhow::Result<()> {
    mrm_app::tray::run(app)
}

#[cfg(not(target_os = "macos"))]
fn run(_app: App) -> anyhow::Result<()> {
    anyhow::bail!("{APP_NAME} is a macOS status bar application")
}
