//! Configuration persistence.
//!
//! The config file is TOML with a single `[gitlab]` section: `feeds` holds
//! the comma-joined URL list, `refresh_interval` the interval label. A
//! missing or malformed file is replaced with the built-in default; only
//! I/O failures beyond that are surfaced, and they are fatal at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::interval::RefreshInterval;

/// Placeholder feed URL written on first run. The user substitutes their
/// own project path and feed token through the preferences dialog.
pub const DEFAULT_FEED_URL: &str =
    "https://gitlab.com/<username>/<repo>/-/merge_requests.atom?feed_token=<token>&state=opened";

/// File name inside the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Runtime configuration: which feeds to poll and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Feed URLs, polled in order. Never empty after a successful load.
    pub feed_urls: Vec<String>,

    /// Selected refresh interval.
    pub refresh_interval: RefreshInterval,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_urls: vec![DEFAULT_FEED_URL.to_string()],
            refresh_interval: RefreshInterval::default(),
        }
    }
}

/// On-disk form of the configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    gitlab: GitlabSection,
}

/// The single recognized section.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct GitlabSection {
    /// Comma-joined URL list.
    feeds: Option<String>,
    /// Older configs stored a single URL under this key. Read, never written.
    #[serde(skip_serializing_if = "Option::is_none")]
    feed: Option<String>,
    /// Interval label.
    refresh_interval: Option<String>,
}

impl Config {
    /// Load the configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the configuration from a specific path.
    ///
    /// A missing or unparseable file is replaced by the default
    /// configuration, which is persisted before returning so the user has
    /// a file to edit. Only I/O errors beyond that are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<ConfigFile>(&text) {
                Ok(file) => Ok(Self::from_file(file)),
                Err(err) => {
                    warn!(
                        "Config file {} is not valid TOML ({err}); rewriting defaults",
                        path.display()
                    );
                    Self::write_default(path)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file at {}; creating defaults", path.display());
                Self::write_default(path)
            }
            Err(source) => Err(AppError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Persist the default configuration and return it.
    fn write_default(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Interpret a parsed config file, falling back field by field.
    fn from_file(file: ConfigFile) -> Self {
        let section = file.gitlab;

        let urls = match (&section.feeds, &section.feed) {
            (Some(feeds), _) => parse_feed_list(feeds),
            (None, Some(feed)) => parse_feed_list(feed),
            (None, None) => Vec::new(),
        };
        let feed_urls = if urls.is_empty() {
            warn!("Config file lists no feed URLs; using the placeholder");
            vec![DEFAULT_FEED_URL.to_string()]
        } else {
            urls
        };

        let refresh_interval = match section.refresh_interval.as_deref() {
            Some(label) => RefreshInterval::from_label(label).unwrap_or_else(|| {
                warn!("Unknown refresh interval {label:?}; using the default");
                RefreshInterval::default()
            }),
            None => RefreshInterval::default(),
        };

        Self {
            feed_urls,
            refresh_interval,
        }
    }

    /// Persist the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Persist the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = ConfigFile {
            gitlab: GitlabSection {
                feeds: Some(self.feeds_joined()),
                feed: None,
                refresh_interval: Some(self.refresh_interval.label().to_string()),
            },
        };

        // Serialize before opening the file so a serialization error can
        // never leave a truncated config behind.
        let text = toml::to_string_pretty(&file)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AppError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, text).map_err(|source| AppError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The feed URLs as the single comma-joined string used by the config
    /// file and the preferences dialog.
    #[must_use]
    pub fn feeds_joined(&self) -> String {
        self.feed_urls.join(", ")
    }

    /// Path of the config file in the platform config directory.
    #[must_use]
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "matagus", "MergeRequestsMonitor")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}

/// Split a comma-separated URL list, trimming whitespace and dropping
/// empty segments.
#[must_use]
pub fn parse_feed_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("config.toml")
    }

    #[test]
    fn test_first_run_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.feed_urls, vec![DEFAULT_FEED_URL.to_string()]);
        assert!(path.exists(), "default config should be persisted");

        // A second load reads the file it just wrote.
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);

        let config = Config {
            feed_urls: vec![
                "https://gitlab.com/a/x/-/merge_requests.atom?feed_token=t1".to_string(),
                "https://gitlab.com/b/y/-/merge_requests.atom?feed_token=t2".to_string(),
            ],
            refresh_interval: RefreshInterval::Hour1,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_legacy_single_feed_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);
        std::fs::write(
            &path,
            "[gitlab]\nfeed = \"https://gitlab.com/old.atom\"\nrefresh_interval = \"1h\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.feed_urls, vec!["https://gitlab.com/old.atom".to_string()]);
        assert_eq!(config.refresh_interval, RefreshInterval::Hour1);
    }

    #[test]
    fn test_feeds_key_wins_over_legacy_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);
        std::fs::write(
            &path,
            concat!(
                "[gitlab]\n",
                "feeds = \"https://gitlab.com/new1.atom, https://gitlab.com/new2.atom\"\n",
                "feed = \"https://gitlab.com/old.atom\"\n",
                "refresh_interval = \"5m\"\n",
            ),
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.feed_urls,
            vec![
                "https://gitlab.com/new1.atom".to_string(),
                "https://gitlab.com/new2.atom".to_string(),
            ]
        );
    }

    #[test]
    fn test_saved_file_has_no_legacy_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);

        Config::default().save_to(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: toml::Value = toml::from_str(&text).unwrap();
        let section = value.get("gitlab").and_then(|v| v.as_table()).unwrap();
        assert!(section.contains_key("feeds"));
        assert!(section.contains_key("refresh_interval"));
        assert!(!section.contains_key("feed"));
    }

    #[test]
    fn test_malformed_file_self_heals() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);
        std::fs::write(&path, "this is { not toml").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());

        // The broken file was replaced with a loadable one.
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(toml::from_str::<toml::Value>(&text).is_ok());
    }

    #[test]
    fn test_unknown_interval_label_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_in(&dir);
        std::fs::write(
            &path,
            "[gitlab]\nfeeds = \"https://gitlab.com/x.atom\"\nrefresh_interval = \"12h\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.refresh_interval, RefreshInterval::Min5);
        assert_eq!(config.feed_urls, vec!["https://gitlab.com/x.atom".to_string()]);
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-directory");
        std::fs::write(&blocker, "file").unwrap();

        // The parent is a file, so reading (and the default-creation
        // fallback) cannot succeed.
        let result = Config::load_from(&blocker.join("config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_feed_list() {
        assert_eq!(
            parse_feed_list("https://a/x.atom, https://b/y.atom"),
            vec!["https://a/x.atom".to_string(), "https://b/y.atom".to_string()]
        );
        assert_eq!(
            parse_feed_list("https://a/x.atom"),
            vec!["https://a/x.atom".to_string()]
        );
        assert_eq!(
            parse_feed_list("  https://a/x.atom ,, https://b/y.atom ,"),
            vec!["https://a/x.atom".to_string(), "https://b/y.atom".to_string()]
        );
        assert!(parse_feed_list("").is_empty());
        assert!(parse_feed_list(" , ,").is_empty());
    }

    proptest! {
        #[test]
        fn prop_parse_feed_list_never_yields_empty_segments(text in "[a-z:/,. ]{0,40}") {
            for url in parse_feed_list(&text) {
                prop_assert!(!url.is_empty());
                prop_assert_eq!(url.trim(), url.as_str());
                prop_assert!(!url.contains(','));
            }
        }
    }
}
