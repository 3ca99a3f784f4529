//! Commit message normalization
//!
//! Mirrors what `git commit --cleanup=strip` does to a message, so the
//! Change-Id is computed over the text git will actually store:
//!
//! - everything from the first `diff --git ` line on is dropped (verbose commits)
//! - comment lines are dropped; a scissors comment drops the rest of the file
//! - trailing whitespace is trimmed, blank runs collapse to one line,
//!   leading and trailing blank lines are removed
//!
//! A message left with nothing but `Signed-off-by:` lines counts as empty.

use crate::core::models::CleanResult;

const DIFF_MARKER: &str = "diff --git ";
const SIGNED_OFF_BY: &str = "signed-off-by:";

/// Normalize a raw commit message
///
/// `should_save` is only set when a blank line had to be inserted between
/// the subject and the body.
#[must_use]
pub fn clean_message(raw: &str, comment_char: &str) -> CleanResult {
    let mut lines: Vec<&str> = Vec::new();
    let mut last_blank = true;

    for line in raw.split('\n') {
        if line.starts_with(DIFF_MARKER) {
            break;
        }

        if !comment_char.is_empty()
            && let Some(comment) = line.strip_prefix(comment_char)
        {
            if is_scissors(comment) {
                break;
            }
            continue;
        }

        let line = line.trim_end();
        if line.is_empty() {
            if !last_blank {
                lines.push(line);
            }
            last_blank = true;
        } else {
            lines.push(line);
            last_blank = false;
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    if lines.iter().filter(|l| !l.is_empty()).all(|l| is_sign_off(l)) {
        return CleanResult::empty();
    }

    let mut should_save = false;
    if lines.len() >= 2 && !lines[1].is_empty() {
        lines.insert(1, "");
        should_save = true;
    }

    CleanResult {
        message: lines.join("\n"),
        should_save,
    }
}

/// Whether a comment body (comment char already stripped) is a cut line
fn is_scissors(comment: &str) -> bool {
    let marker = comment.trim_matches(|c: char| c.is_whitespace() || c == '-');
    marker == ">8" || marker == "8<"
}

fn is_sign_off(line: &str) -> bool {
    line.get(..SIGNED_OFF_BY.len()).is_some_and(|p| p.eq_ignore_ascii_case(SIGNED_OFF_BY))
}
