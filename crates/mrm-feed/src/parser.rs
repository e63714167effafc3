//! Atom document parsing.
//!
//! The heavy lifting is delegated to `atom_syndication`; this module only
//! maps parsed entries into [`MergeRequest`] values and turns parser
//! failures into [`FeedError::Parse`].

use atom_syndication::Feed;
use tracing::warn;

use crate::entry::MergeRequest;
use crate::error::{FeedError, Result};

/// Parse an Atom document into merge request entries.
///
/// Document order is preserved. The `url` is only used for error context.
pub fn parse_feed(xml: &str, url: &str) -> Result<Vec<MergeRequest>> {
    let feed: Feed = xml.parse().map_err(|err: atom_syndication::Error| FeedError::Parse {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    let mut entries = Vec::with_capacity(feed.entries().len());
    for entry in feed.entries() {
        let Some(link) = entry.links().first() else {
            // GitLab always emits a link; a missing one is not worth
            // failing the whole cycle over.
            warn!("Skipping feed entry without a link: {}", entry.title().as_str());
            continue;
        };
        entries.push(MergeRequest::new(entry.title().as_str(), link.href()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_URL: &str = "https://gitlab.com/user/repo/-/merge_requests.atom";

    fn atom_document(entries: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>user/repo merge requests</title>
  <id>https://gitlab.com/user/repo/-/merge_requests</id>
  <updated>2024-05-01T12:00:00Z</updated>
{entries}
</feed>"#
        )
    }

    fn atom_entry(title: &str, link: &str) -> String {
        format!(
            r#"  <entry>
    <id>{link}</id>
    <title>{title}</title>
    <link href="{link}"/>
    <updated>2024-05-01T12:00:00Z</updated>
  </entry>"#
        )
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let xml = atom_document(&format!(
            "{}\n{}",
            atom_entry("Fix authentication bug", "https://gitlab.com/mr/1"),
            atom_entry("Add new API endpoint", "https://gitlab.com/mr/2"),
        ));

        let entries = parse_feed(&xml, FEED_URL).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Fix authentication bug");
        assert_eq!(entries[0].link, "https://gitlab.com/mr/1");
        assert_eq!(entries[1].title, "Add new API endpoint");
    }

    #[test]
    fn test_parse_keeps_entities_encoded() {
        // GitLab serves HTML titles double-escaped on the wire; the XML
        // layer strips one level and the title keeps its HTML entities.
        let xml = atom_document(&atom_entry(
            "Fix &amp;quot;bug&amp;quot; &amp;amp; improve",
            "https://gitlab.com/mr/1",
        ));

        let entries = parse_feed(&xml, FEED_URL).unwrap();
        assert_eq!(entries[0].title, "Fix &quot;bug&quot; &amp; improve");
        assert_eq!(entries[0].display_title(), "Fix \"bug\" & improve");
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        let err = parse_feed("this is not a feed", FEED_URL).unwrap_err();
        assert!(matches!(err, FeedError::Parse { .. }));

        let err = parse_feed("<rss version=\"2.0\"></rss>", FEED_URL).unwrap_err();
        assert!(matches!(err, FeedError::Parse { .. }));
    }

    #[test]
    fn test_parse_skips_entry_without_link() {
        let xml = atom_document(&format!(
            "{}\n  <entry>\n    <id>x</id>\n    <title>No link here</title>\n  </entry>",
            atom_entry("Fix bug", "https://gitlab.com/mr/1"),
        ));

        let entries = parse_feed(&xml, FEED_URL).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Fix bug");
    }

    #[test]
    fn test_parse_empty_feed() {
        let entries = parse_feed(&atom_document(""), FEED_URL).unwrap();
        assert!(entries.is_empty());
    }
}
