//! Merge request entries parsed from a feed.

use std::borrow::Cow;

/// Marker GitLab places in the title of a draft merge request.
const DRAFT_MARKER: &str = "Draft: ";

/// One pending merge request from a feed.
///
/// Entries are transient: they are rebuilt on every poll cycle and never
/// persisted. The title is kept exactly as the feed delivered it, which for
/// GitLab means HTML entities are still encoded; use [`display_title`] for
/// anything user-facing.
///
/// [`display_title`]: MergeRequest::display_title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Entry title as it appears in the feed (HTML entities not decoded).
    pub title: String,

    /// Link to the merge request page.
    pub link: String,
}

impl MergeRequest {
    /// Create an entry from a raw feed title and link.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Title with HTML entities decoded, as shown in the menu.
    #[must_use]
    pub fn display_title(&self) -> Cow<'_, str> {
        decode_html_entities(&self.title)
    }

    /// Whether the title carries the draft marker.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.title.contains(DRAFT_MARKER)
    }
}

/// Decode common HTML entities in a feed title.
///
/// GitLab titles are HTML text constructs, so characters like `"` and `&`
/// arrive as `&quot;` and `&amp;`. Named entities, `&#NN;` and `&#xHH;`
/// references are decoded; anything unrecognized is kept as-is.
fn decode_html_entities(text: &str) -> Cow<'_, str> {
    // Quick check: if no & character, return as-is
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        // Collect entity name until ; or a character no entity contains
        let mut entity = String::new();
        let mut found_semi = false;

        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                found_semi = true;
                break;
            }
            if next == '&' || (!next.is_ascii_alphanumeric() && next != '#') {
                break;
            }
            entity.push(next);
            chars.next();
            // Limit entity length; nothing legitimate is longer
            if entity.len() > 10 {
                break;
            }
        }

        if !found_semi {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        match entity.as_str() {
            "amp" => result.push('&'),
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push(' '),
            _ => match numeric_entity(&entity) {
                Some(ch) => result.push(ch),
                None => {
                    // Unknown entity, keep as-is
                    result.push('&');
                    result.push_str(&entity);
                    result.push(';');
                }
            },
        }
    }

    Cow::Owned(result)
}

/// Decode a `#NN` or `#xHH` numeric character reference.
fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse().ok()?
    };
    char::from_u32(code)
}
