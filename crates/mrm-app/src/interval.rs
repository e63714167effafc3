//! Refresh interval table.

use std::fmt;
use std::time::Duration;

/// How often the feeds are polled.
///
/// The table is fixed: seven labels, each mapping to a whole number of
/// seconds. Lookup by any other label fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshInterval {
    /// Every minute.
    Secs60,
    /// Every five minutes.
    #[default]
    Min5,
    /// Every ten minutes.
    Min10,
    /// Every thirty minutes.
    Min30,
    /// Every hour.
    Hour1,
    /// Every three hours.
    Hour3,
    /// Every six hours.
    Hour6,
}

impl RefreshInterval {
    /// All options, in the order the menu lists them.
    pub const ALL: [Self; 7] = [
        Self::Secs60,
        Self::Min5,
        Self::Min10,
        Self::Min30,
        Self::Hour1,
        Self::Hour3,
        Self::Hour6,
    ];

    /// The label shown in the menu and stored in the config file.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Secs60 => "60s",
            Self::Min5 => "5m",
            Self::Min10 => "10m",
            Self::Min30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour3 => "3h",
            Self::Hour6 => "6h",
        }
    }

    /// Poll period in seconds.
    #[must_use]
    pub fn seconds(self) -> u64 {
        match self {
            Self::Secs60 => 60,
            Self::Min5 => 300,
            Self::Min10 => 600,
            Self::Min30 => 1800,
            Self::Hour1 => 3600,
            Self::Hour3 => 10_800,
            Self::Hour6 => 21_600,
        }
    }

    /// Poll period as a [`Duration`].
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_secs(self.seconds())
    }

    /// Look up an interval by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
