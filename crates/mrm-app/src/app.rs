//! Application core: state, configuration and the update loop.
//!
//! [`App::update`] folds a user action into the state and returns a
//! [`Directive`] telling the platform layer what to do next (poll, restart
//! the timer, open a dialog, quit). Keeping the platform work out of the
//! core makes every menu action testable off-screen.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::{parse_feed_list, Config};
use crate::interval::RefreshInterval;
use crate::menu::{self, MenuModel};
use crate::state::AppState;
use mrm_feed::FeedClient;

/// A user action originating from the menu or a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A merge request entry was clicked; the index points into the
    /// current poll result.
    OpenEntry(usize),
    /// An interval choice was clicked.
    SetInterval(RefreshInterval),
    /// The preferences item was clicked.
    ShowPreferences,
    /// The preferences dialog was confirmed with this text.
    PreferencesSubmitted(String),
    /// The preferences dialog was dismissed.
    PreferencesCancelled,
    /// The about item was clicked.
    ShowAbout,
    /// The quit item was clicked.
    Quit,
}

/// What the platform layer must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Nothing beyond refreshing the menu.
    None,
    /// Poll the feeds immediately; the running timer keeps its schedule.
    PollNow,
    /// Restart the poll timer with the (changed) interval.
    RestartTimer,
    /// Open the preferences dialog pre-filled with the current URL list.
    ShowPreferences {
        /// Comma-joined feed URLs.
        current: String,
    },
    /// Open the about dialog.
    ShowAbout,
    /// Terminate the application.
    Quit,
}

/// The running application.
pub struct App {
    /// Poll results and failure flag.
    pub state: AppState,
    /// Feed URLs and interval selection.
    pub config: Config,
    config_path: PathBuf,
    client: FeedClient,
}

impl App {
    /// Create the application around a loaded configuration.
    pub fn new(config: Config, config_path: PathBuf) -> mrm_feed::Result<Self> {
        Ok(Self {
            state: AppState::new(),
            config,
            config_path,
            client: FeedClient::new()?,
        })
    }

    /// Poll every configured feed and fold the outcome into the state.
    pub fn poll(&mut self) {
        info!("Polling {} feed(s)", self.config.feed_urls.len());
        let outcome = self.client.fetch_all(&self.config.feed_urls);
        self.state.apply_poll(outcome);
    }

    /// The menu for the current state.
    #[must_use]
    pub fn menu_model(&self) -> MenuModel {
        menu::build(&self.state, self.config.refresh_interval)
    }

    /// Fold a user action into the application.
    pub fn update(&mut self, action: Action) -> Directive {
        match action {
            Action::OpenEntry(index) => {
                match self.state.merge_requests.get(index) {
                    Some(mr) => {
                        let _ = open::that(&mr.link);
                    }
                    None => warn!("Stale menu click for entry {index}"),
                }
                Directive::None
            }
            Action::SetInterval(interval) => {
                info!("Refresh interval set to {interval}");
                self.config.refresh_interval = interval;
                self.save_config();
                Directive::RestartTimer
            }
            Action::ShowPreferences => Directive::ShowPreferences {
                current: self.config.feeds_joined(),
            },
            Action::PreferencesSubmitted(text) => {
                let urls = parse_feed_list(&text);
                if urls.is_empty() {
                    warn!("Preferences submitted without any feed URL; keeping current list");
                    return Directive::None;
                }
                self.config.feed_urls = urls;
                self.save_config();
                Directive::PollNow
            }
            Action::PreferencesCancelled => Directive::None,
            Action::ShowAbout => Directive::ShowAbout,
            Action::Quit => Directive::Quit,
        }
    }

    /// Persist the configuration, logging rather than propagating failure.
    ///
    /// A config write failing mid-session should not take the menu down;
    /// the in-memory settings stay live until exit.
    fn save_config(&self) {
        if let Err(err) = self.config.save_to(&self.config_path) {
            warn!("Failed to save config: {err}");
        }
    }
}
