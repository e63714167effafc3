//! Native dialogs: the preferences prompt and the about box.
//!
//! The preferences prompt needs a text field, which is driven through an
//! AppleScript `display dialog` subprocess. Script construction and reply
//! parsing are plain string work and stay testable on every platform.

/// Title of the preferences dialog.
pub const PREFERENCES_TITLE: &str = "Set Preferences";

/// Prompt text of the preferences dialog.
pub const PREFERENCES_MESSAGE: &str =
    "Enter your Gitlab's merge requests feed URLs (comma separated):";

/// Escape a string for embedding in a double-quoted AppleScript literal.
fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// AppleScript source for the preferences dialog, pre-filled with the
/// current URL list.
#[must_use]
pub fn preferences_script(current: &str) -> String {
    format!(
        concat!(
            "display dialog \"{message}\" ",
            "default answer \"{answer}\" ",
            "with title \"{title}\" ",
            "buttons {{\"Cancel\", \"Save\"}} ",
            "default button \"Save\" cancel button \"Cancel\""
        ),
        message = applescript_escape(PREFERENCES_MESSAGE),
        answer = applescript_escape(current),
        title = applescript_escape(PREFERENCES_TITLE),
    )
}

/// Pull the entered text out of an osascript reply.
///
/// A confirmed dialog prints `button returned:Save, text returned:<text>`.
/// The text field is last on the line, so everything after the marker up
/// to the trailing newline is the answer, commas included.
#[must_use]
pub fn parse_dialog_reply(stdout: &str) -> Option<String> {
    let (_, text) = stdout.split_once("text returned:")?;
    Some(text.trim_end_matches(['\r', '\n']).to_string())
}

/// Show the preferences dialog and return the submitted text, or `None`
/// if the user cancelled.
#[cfg(target_os = "macos")]
pub fn prompt_feed_urls(current: &str) -> Option<String> {
    use std::process::Command;

    let script = preferences_script(current);
    let output = Command::new("osascript").args(["-e", &script]).output();

    match output {
        Ok(output) if output.status.success() => {
            parse_dialog_reply(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(_) => {
            // Cancel exits osascript with status 1.
            tracing::debug!("Preferences dialog cancelled");
            None
        }
        Err(err) => {
            tracing::warn!("Failed to run osascript: {err}");
            None
        }
    }
}

/// Show the about dialog.
#[cfg(target_os = "macos")]
pub fn show_about() {
    use crate::constants::{about_text, APP_NAME};

    let text = about_text();
    rfd::MessageDialog::new()
        .set_title(APP_NAME)
        .set_description(text.as_str())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
