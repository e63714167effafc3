//! Error types for feed retrieval.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("feed request for {url} returned HTTP {status}")]
    Status {
        /// The feed URL that was requested.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body was not a parseable Atom document.
    #[error("could not parse feed from {url}: {reason}")]
    Parse {
        /// The feed URL whose body failed to parse.
        url: String,
        /// Parser error description.
        reason: String,
    },
}

impl FeedError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach your merge request feeds. Please check your internet connection."
            }
            Self::Status { .. } => {
                "A feed URL was rejected by the server. Check your feed URLs and access token."
            }
            Self::Parse { .. } => "A configured URL did not return a valid Atom feed.",
        }
    }

    /// Returns whether the next regular poll may succeed without changes.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Parse { .. } => false,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
