//! Merge request feed retrieval for Merge Requests Monitor.
//!
//! This crate fetches GitLab merge-request Atom feeds over HTTP and parses
//! them into plain `(title, link)` entries for the menu.
//!
//! # Overview
//!
//! A poll cycle fetches every configured URL in order with a blocking HTTP
//! client and concatenates the parsed entries, preserving each feed's
//! internal order. The cycle is all-or-nothing: one failing URL fails the
//! whole poll and the caller keeps showing its previous state.
//!
//! Titles are kept in their raw, HTML-escaped feed form;
//! [`MergeRequest::display_title`] decodes them for presentation.
//!
//! # Example
//!
//! ```no_run
//! use mrm_feed::FeedClient;
//!
//! fn poll() -> mrm_feed::Result<()> {
//!     let client = FeedClient::new()?;
//!     let urls = vec![
//!         "https://gitlab.com/user/repo/-/merge_requests.atom?feed_token=secret&state=opened"
//!             .to_string(),
//!     ];
//!
//!     for mr in client.fetch_all(&urls)? {
//!         println!("{} -> {}", mr.display_title(), mr.link);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod client;
pub mod entry;
pub mod error;
pub mod parser;

// Re-export main types for convenience
pub use client::FeedClient;
pub use entry::MergeRequest;
pub use error::{FeedError, Result};
pub use parser::parse_feed;
