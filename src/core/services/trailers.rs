//! Trailer merging
//!
//! A message is scanned line by line with a small state machine:
//!
//! ```text
//! Body --blank--> TrailerZone --trailer-shaped--> TrailerZone (buffered)
//!                     |                                 |
//!                     +------- other line (flush) ------+--> Body
//! ```
//!
//! Whatever is still buffered at the end is the trailing trailer block. New
//! trailers go into that block, before the first real trailer (but after a
//! leading `Change-Id`), or after it when the block only holds comment
//! trailers like `[cherry-picked from ...]`. Without a block, a new one is
//! appended after a blank line.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CHANGE_ID_KEY, TrailerSpec};

static TRAILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{1,64}: ").expect("valid trailer regex"));

static COMMENT_TRAILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\[.+\]|\(.+\))$").expect("valid comment trailer regex"));

/// Trailer keys removed when they credit the co-developer again
const REDUNDANT_ATTRIBUTION_KEYS: &[&str] = &["co-authored-by", "signed-off-by"];

/// A line of a trailer block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailerLine<'a> {
    /// `Key: value`
    Trailer {
        /// Trailer key
        key: &'a str,
        /// Trailer value, untrimmed
        value: &'a str,
    },
    /// `[...]` or `(...)` annotation
    Comment(&'a str),
}

impl<'a> TrailerLine<'a> {
    /// Classify a line, `None` for ordinary body text
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        if TRAILER_RE.is_match(line) {
            let (key, value) = line.split_once(':')?;
            Some(Self::Trailer { key, value })
        } else if COMMENT_TRAILER_RE.is_match(line) {
            Some(Self::Comment(line))
        } else {
            None
        }
    }

    /// Whether this is a comment trailer
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Body,
    TrailerZone,
}

/// Split a message into its leading lines and its trailing trailer block
///
/// The leading part keeps the blank line that precedes the block.
#[must_use]
pub fn split_trailer_block(message: &str) -> (Vec<&str>, Vec<&str>) {
    let mut body = Vec::new();
    let mut block = Vec::new();
    let mut state = ScanState::Body;

    for line in message.lines() {
        if line.trim().is_empty() {
            body.append(&mut block);
            body.push(line);
            state = ScanState::TrailerZone;
            continue;
        }

        match state {
            ScanState::TrailerZone if TrailerLine::parse(line).is_some() => block.push(line),
            ScanState::TrailerZone => {
                body.append(&mut block);
                body.push(line);
                state = ScanState::Body;
            },
            ScanState::Body => body.push(line),
        }
    }

    (body, block)
}

/// Merge the requested trailers into a message
#[must_use]
pub fn insert_trailers(message: &str, spec: &TrailerSpec) -> String {
    let new_lines = spec.lines();
    let (mut lines, block) = split_trailer_block(message);

    if block.is_empty() {
        if !new_lines.is_empty() {
            if lines.last().is_some_and(|l| !l.trim().is_empty()) {
                lines.push("");
            }
            lines.extend(new_lines.iter().map(String::as_str));
        }
        return lines.join("\n");
    }

    let mut block: Vec<&str> = match &spec.co_developed_by {
        Some(identity) => dedup_attribution(block, identity),
        None => block,
    };

    let tail = block.split_off(insertion_index(&block));
    block.extend(new_lines.iter().map(String::as_str));
    block.extend(tail);

    lines.extend(block);
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Drop `Co-authored-by`/`Signed-off-by` lines naming `identity`
fn dedup_attribution<'a>(block: Vec<&'a str>, identity: &str) -> Vec<&'a str> {
    let wanted = person(identity);
    block
        .into_iter()
        .filter(|line| {
            let Some((key, value)) = line.split_once(':') else {
                return true;
            };
            let redundant = REDUNDANT_ATTRIBUTION_KEYS
                .iter()
                .any(|k| key.trim().eq_ignore_ascii_case(k));
            !(redundant && person(value) == wanted)
        })
        .collect()
}

/// Position for new trailers within a trailer block
fn insertion_index(block: &[&str]) -> usize {
    let Some(first) = block
        .iter()
        .position(|line| !TrailerLine::parse(line).is_some_and(|t| t.is_comment()))
    else {
        return block.len();
    };

    match TrailerLine::parse(block[first]) {
        Some(TrailerLine::Trailer { key, .. }) if key == CHANGE_ID_KEY => first + 1,
        _ => first,
    }
}

/// The `Name <email>` part of an attribution value
fn person(value: &str) -> &str {
    let value = value.trim();
    value.find('>').map_or(value, |end| &value[..=end])
}
