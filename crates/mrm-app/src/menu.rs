//! Platform-independent menu model.
//!
//! The menu is rebuilt from [`AppState`] after every poll and preference
//! change. Building it as plain data keeps the layout testable without a
//! running status bar; the tray layer maps each [`Item`] onto a native
//! menu item.

use crate::app::Action;
use crate::interval::RefreshInterval;
use crate::state::AppState;

/// Label shown when no merge request is pending.
const EMPTY_LABEL: &str = "No pending MRs";

/// Section heading for non-draft merge requests.
const READY_SECTION: &str = "Merge Requests";

/// Section heading for draft merge requests.
const DRAFT_SECTION: &str = "Draft Merge Requests";

/// One entry of the status-bar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Disabled line showing when the last successful poll happened.
    Status {
        /// Full line text, e.g. `Last updated: 14:05`.
        label: String,
    },
    /// Submenu of refresh interval choices, the current one checked.
    IntervalPicker {
        /// Currently selected interval.
        current: RefreshInterval,
    },
    /// Horizontal separator.
    Separator,
    /// Disabled line shown instead of the sections when nothing is pending.
    Placeholder {
        /// Line text.
        label: String,
    },
    /// Disabled section heading above a run of entries.
    SectionLabel {
        /// Heading text.
        label: String,
    },
    /// Clickable merge request entry.
    Entry {
        /// Position of the merge request in the current poll result.
        index: usize,
        /// Decoded title shown to the user.
        label: String,
    },
    /// Opens the feed URL preferences dialog.
    Preferences,
    /// Opens the about dialog.
    About,
    /// Terminates the application.
    Quit,
}

/// The whole menu, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    /// Items in display order.
    pub items: Vec<Item>,
}

/// Build the menu for the current state and interval selection.
#[must_use]
pub fn build(state: &AppState, interval: RefreshInterval) -> MenuModel {
    let mut items = vec![
        Item::Status {
            label: format!("Last updated: {}", state.last_updated_label()),
        },
        Item::IntervalPicker { current: interval },
        Item::Separator,
    ];

    if state.merge_requests.is_empty() {
        items.push(Item::Placeholder {
            label: EMPTY_LABEL.to_string(),
        });
    } else {
        let (drafts, ready): (Vec<_>, Vec<_>) = state
            .merge_requests
            .iter()
            .enumerate()
            .partition(|(_, mr)| mr.is_draft());

        if !ready.is_empty() {
            items.push(Item::SectionLabel {
                label: READY_SECTION.to_string(),
            });
            for (index, mr) in &ready {
                items.push(Item::Entry {
                    index: *index,
                    label: mr.display_title().into_owned(),
                });
            }
        }

        if !ready.is_empty() && !drafts.is_empty() {
            items.push(Item::Separator);
        }

        if !drafts.is_empty() {
            items.push(Item::SectionLabel {
                label: DRAFT_SECTION.to_string(),
            });
            for (index, mr) in &drafts {
                items.push(Item::Entry {
                    index: *index,
                    label: mr.display_title().into_owned(),
                });
            }
        }
    }

    items.push(Item::Separator);
    items.push(Item::Preferences);
    items.push(Item::About);
    items.push(Item::Quit);

    MenuModel { items }
}

/// Stable menu item identifiers, shared between menu construction and
/// click dispatch.
pub mod ids {
    use crate::interval::RefreshInterval;

    /// Preferences item.
    pub const PREFERENCES: &str = "preferences";
    /// About item.
    pub const ABOUT: &str = "about";
    /// Quit item.
    pub const QUIT: &str = "quit";
    /// Prefix of merge request entry ids.
    pub const ENTRY_PREFIX: &str = "mr:";
    /// Prefix of interval choice ids.
    pub const INTERVAL_PREFIX: &str = "interval:";

    /// Id of the entry at `index` in the current poll result.
    #[must_use]
    pub fn entry(index: usize) -> String {
        format!("{ENTRY_PREFIX}{index}")
    }

    /// Id of an interval choice.
    #[must_use]
    pub fn interval(interval: RefreshInterval) -> String {
        format!("{INTERVAL_PREFIX}{}", interval.label())
    }
}

/// Map a clicked menu item id back to an [`Action`].
///
/// Ids that do not match anything in the current menu (stale clicks,
/// disabled items) yield `None` and are ignored.
#[must_use]
pub fn action_for_id(id: &str) -> Option<Action> {
    if let Some(index) = id.strip_prefix(ids::ENTRY_PREFIX) {
        return index.parse().ok().map(Action::OpenEntry);
    }
    if let Some(label) = id.strip_prefix(ids::INTERVAL_PREFIX) {
        return RefreshInterval::from_label(label).map(Action::SetInterval);
    }
    match id {
        ids::PREFERENCES => Some(Action::ShowPreferences),
        ids::ABOUT => Some(Action::ShowAbout),
        ids::QUIT => Some(Action::Quit),
        _ => None,
    }
}
