//! Hook configuration
//!
//! Read once per invocation from git config. Every lookup that fails falls
//! back to its default so a broken config never blocks a commit.

use crate::core::ports::ConfigSource;

/// Keys enabling the `Change-Id` trailer, first one set wins
pub const CHANGE_ID_KEYS: &[&str] = &["gerrit.createchangeid", "commit-msg.changeid", "commitmsg.changeid"];

/// Keys enabling the `Co-developed-by` trailer, first one set wins
pub const CO_DEVELOPED_BY_KEYS: &[&str] = &["commit-msg.codevelopedby", "commitmsg.codevelopedby"];

/// Key holding git's comment character
pub const COMMENT_CHAR_KEY: &str = "core.commentchar";

/// Comment character used when none is configured
pub const DEFAULT_COMMENT_CHAR: &str = "#";

/// Settings consumed by the message pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Insert a `Change-Id` trailer
    pub create_change_id: bool,
    /// Prefix marking comment lines in the message file
    pub comment_char: String,
    /// Insert a `Co-developed-by` trailer when an agent is detected
    pub create_co_developed_by: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            create_change_id: true,
            comment_char: DEFAULT_COMMENT_CHAR.to_string(),
            create_co_developed_by: true,
        }
    }
}

impl HookConfig {
    /// Load configuration from a key-value source
    #[must_use]
    pub fn load(source: &dyn ConfigSource) -> Self {
        let defaults = Self::default();
        Self {
            create_change_id: lookup_bool(source, CHANGE_ID_KEYS)
                .unwrap_or(defaults.create_change_id),
            comment_char: lookup(source, COMMENT_CHAR_KEY)
                .and_then(|raw| normalize_comment_char(&raw))
                .unwrap_or(defaults.comment_char),
            create_co_developed_by: lookup_bool(source, CO_DEVELOPED_BY_KEYS)
                .unwrap_or(defaults.create_co_developed_by),
        }
    }
}

/// Lenient git-style truthiness: `true`, `yes`, `on`, `1` (any case)
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "on" | "1")
}

fn lookup(source: &dyn ConfigSource, key: &str) -> Option<String> {
    match source.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read git config {key}, using default: {e:#}");
            None
        },
    }
}

fn lookup_bool(source: &dyn ConfigSource, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| lookup(source, key)).map(|v| parse_bool(&v))
}

// git accepts "auto" to pick a free character at commit time; the file we
// read was written with the default in that case.
fn normalize_comment_char(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
