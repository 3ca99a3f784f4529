//! AI agent identities and the environment rules that detect them
//!
//! Each rule inspects one environment variable. Rules are evaluated in
//! table order and the first match wins, so CLI agents are listed before
//! IDE markers (an agent CLI launched from inside an IDE terminal should be
//! credited, not the IDE).

use std::collections::HashMap;

/// How an environment variable's value is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvPattern {
    /// Value must equal the given string exactly
    Exact(&'static str),
    /// Variable must be set to a truthy value (not empty, `0`, `false` or `no`)
    Truthy,
    /// Value must contain the given substring
    Contains(&'static str),
}

impl EnvPattern {
    /// Check a variable's value against this pattern
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Exact(expected) => value == expected,
            Self::Truthy => !matches!(value, "" | "0" | "false" | "no"),
            Self::Contains(needle) => value.contains(needle),
        }
    }
}

/// A single detection rule: `key` matched by `pattern` means `identity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvRule {
    /// Environment variable name
    pub key: &'static str,
    /// Pattern applied to the variable's value
    pub pattern: EnvPattern,
    /// Attribution identity, `Name <email>`
    pub identity: &'static str,
}

impl EnvRule {
    const fn new(key: &'static str, pattern: EnvPattern, identity: &'static str) -> Self {
        Self { key, pattern, identity }
    }
}

/// Known agents, highest priority first
pub const AGENT_RULES: &[EnvRule] = &[
    // CLI agents
    EnvRule::new("CLAUDECODE", EnvPattern::Exact("1"), "Claude <noreply@anthropic.com>"),
    EnvRule::new("IFLOW_CLI", EnvPattern::Truthy, "iFlow <noreply@iflow.cn>"),
    EnvRule::new("QWEN_CODE", EnvPattern::Exact("1"), "Qwen-Coder <noreply@alibabacloud.com>"),
    EnvRule::new("GEMINI_CLI", EnvPattern::Exact("1"), "Gemini <gemini-cli-agent@google.com>"),
    EnvRule::new("CODEX_SANDBOX", EnvPattern::Truthy, "Codex <noreply@openai.com>"),
    EnvRule::new("AGENT", EnvPattern::Exact("amp"), "Amp <amp@ampcode.com>"),
    EnvRule::new("OPENCODE", EnvPattern::Exact("1"), "opencode <noreply@opencode.ai>"),
    EnvRule::new("GOOSE_TERMINAL", EnvPattern::Truthy, "Goose <opensource@block.xyz>"),
    EnvRule::new("CLINE_ACTIVE", EnvPattern::Exact("true"), "Cline <noreply@cline.bot>"),
    // IDE markers
    EnvRule::new("CURSOR_TRACE_ID", EnvPattern::Truthy, "Cursor <cursoragent@cursor.com>"),
    EnvRule::new("TERM_PROGRAM", EnvPattern::Exact("kiro"), "Kiro <noreply@kiro.dev>"),
    EnvRule::new("VSCODE_GIT_ASKPASS_MAIN", EnvPattern::Contains("qoder"), "Qoder <noreply@qoder.com>"),
    EnvRule::new(
        "VSCODE_GIT_ASKPASS_MAIN",
        EnvPattern::Contains("windsurf"),
        "Windsurf <noreply@codeium.com>",
    ),
];

/// Immutable snapshot of process environment variables
///
/// Taken once per invocation so agent detection is a pure function of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of captured variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
