//! Commit message values passed between pipeline stages

use serde::Serialize;

/// Trailer key for the Gerrit-style change identifier
pub const CHANGE_ID_KEY: &str = "Change-Id";

/// Trailer key for AI co-developer attribution
pub const CO_DEVELOPED_BY_KEY: &str = "Co-developed-by";

/// Result of normalizing a raw commit message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanResult {
    /// The cleaned message, without trailing newline
    pub message: String,
    /// Whether cleaning changed the message structurally (subject/body
    /// separator inserted) so that it must be written back
    pub should_save: bool,
}

impl CleanResult {
    /// An empty message that must not be written back
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            message: String::new(),
            should_save: false,
        }
    }
}

/// Trailers requested for a single run
///
/// `None` means "leave that trailer kind alone".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrailerSpec {
    /// Value for `Change-Id`, e.g. `I0123abcd...`
    pub change_id: Option<String>,
    /// Value for `Co-developed-by`, e.g. `Claude <noreply@anthropic.com>`
    pub co_developed_by: Option<String>,
}

impl TrailerSpec {
    /// Whether no trailer is requested
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.change_id.is_none() && self.co_developed_by.is_none()
    }

    /// Render the requested trailers as lines, `Change-Id` first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(id) = &self.change_id {
            lines.push(format!("{CHANGE_ID_KEY}: {id}"));
        }
        if let Some(identity) = &self.co_developed_by {
            lines.push(format!("{CO_DEVELOPED_BY_KEY}: {identity}"));
        }
        lines
    }
}

/// Final result of one hook invocation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PipelineOutcome {
    /// Message to write back
    pub message: String,
    /// Whether the caller should write `message` to the message file
    pub should_save: bool,
}

impl PipelineOutcome {
    /// Outcome that leaves the message file untouched
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            message: String::new(),
            should_save: false,
        }
    }
}

impl From<CleanResult> for PipelineOutcome {
    fn from(clean: CleanResult) -> Self {
        Self {
            message: clean.message,
            should_save: clean.should_save,
        }
    }
}
