//! Feed fetching over HTTP.
//!
//! Provides the blocking client that retrieves every configured feed URL
//! once per poll cycle. Fetches run sequentially on the caller's thread;
//! the application's event loop is single-threaded by design and polls are
//! expected to block it.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};

use crate::entry::MergeRequest;
use crate::error::{FeedError, Result};
use crate::parser::parse_feed;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Accept header offered to feed servers.
const FEED_ACCEPT: &str = "application/atom+xml, application/xml;q=0.9, text/xml;q=0.8";

/// Client that fetches the configured merge request feeds.
pub struct FeedClient {
    /// HTTP client.
    client: Client,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Fetch every feed and concatenate their entries in URL order.
    ///
    /// The cycle is all-or-nothing: the first URL that fails aborts the
    /// poll, later URLs are not fetched, and already-fetched entries are
    /// discarded. Each feed's internal entry order is preserved.
    pub fn fetch_all(&self, urls: &[String]) -> Result<Vec<MergeRequest>> {
        aggregate(urls, |url| self.fetch_one(url))
    }

    /// Fetch and parse a single feed URL.
    fn fetch_one(&self, url: &str) -> Result<Vec<MergeRequest>> {
        debug!("Fetching feed: {url}");

        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                format!("merge-requests-monitor/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, FEED_ACCEPT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Feed request for {url} returned HTTP {status}");
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_feed(&body, url)
    }
}

/// Concatenate per-URL results in URL order, aborting on the first failure.
fn aggregate<F>(urls: &[String], mut fetch: F) -> Result<Vec<MergeRequest>>
where
    F: FnMut(&str) -> Result<Vec<MergeRequest>>,
{
    let mut entries = Vec::new();
    for url in urls {
        entries.extend(fetch(url)?);
    }

    debug!("Fetched {} entries from {} feeds", entries.len(), urls.len());
    Ok(entries)
}
