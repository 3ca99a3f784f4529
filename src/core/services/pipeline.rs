//! Commit message pipeline
//!
//! One invocation of the hook: classify, clean, compute trailer values and
//! merge them into the message. Reading and writing the message file is
//! left to the caller, which writes back only when
//! [`PipelineOutcome::should_save`] is set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::agent::detect_agent;
use super::change_id::generate_change_id;
use super::classifier::{is_merge_commit, is_temporary_commit};
use super::normalizer::clean_message;
use super::trailers::insert_trailers;
use crate::core::models::{EnvSnapshot, HookConfig, PipelineOutcome, TrailerSpec};
use crate::core::ports::ObjectStore;

static CHANGE_ID_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Change-Id: I[a-f0-9]+\s*$").expect("valid Change-Id regex"));

const CO_DEVELOPED_BY_PREFIX: &str = "co-developed-by:";

/// Errors that stop a hook run
#[derive(Debug, Error)]
pub enum HookError {
    /// The message file passed by git does not exist
    #[error("commit message file not found: {0}")]
    MessageFileNotFound(PathBuf),

    /// The message file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path of the message file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

/// Everything one pipeline run depends on
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    config: &'a HookConfig,
    store: Option<&'a dyn ObjectStore>,
    env: &'a EnvSnapshot,
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", self.config)
            .field("store", &self.store.map(|_| "ObjectStore"))
            .field("env_vars", &self.env.len())
            .finish()
    }
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline
    ///
    /// Pass `None` as `store` when git is unavailable; Change-Ids then use
    /// the local fallback hash and merge detection relies on the message alone.
    #[must_use]
    pub const fn new(
        config: &'a HookConfig,
        store: Option<&'a dyn ObjectStore>,
        env: &'a EnvSnapshot,
    ) -> Self {
        Self { config, store, env }
    }

    /// Process the message file at `path`
    ///
    /// Merge commits short-circuit to an outcome that must not be written.
    ///
    /// # Errors
    ///
    /// Returns an error if the message file is missing or unreadable.
    pub fn run_file(&self, path: &Path) -> Result<PipelineOutcome, HookError> {
        if !path.exists() {
            return Err(HookError::MessageFileNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|source| HookError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if is_merge_commit(path, &raw, self.store) {
            log::debug!("Merge commit, leaving message untouched");
            return Ok(PipelineOutcome::unchanged());
        }

        Ok(self.process(&raw))
    }

    /// Transform a raw message
    #[must_use]
    pub fn process(&self, raw: &str) -> PipelineOutcome {
        if raw.trim().is_empty() {
            return PipelineOutcome::unchanged();
        }

        let clean = clean_message(raw, &self.config.comment_char);
        if clean.message.trim().is_empty() {
            return PipelineOutcome::unchanged();
        }

        let spec = self.trailer_spec(&clean.message);
        if spec.is_empty() {
            return clean.into();
        }

        PipelineOutcome {
            message: insert_trailers(&clean.message, &spec),
            should_save: true,
        }
    }

    /// Decide which trailers a cleaned message still needs
    #[must_use]
    pub fn trailer_spec(&self, message: &str) -> TrailerSpec {
        if is_temporary_commit(message) {
            log::debug!("Temporary commit, no trailers");
            return TrailerSpec::default();
        }

        let change_id = (self.config.create_change_id && !has_change_id(message))
            .then(|| generate_change_id(message, self.store));

        let co_developed_by = if self.config.create_co_developed_by && !has_co_developed_by(message) {
            detect_agent(self.env).map(str::to_string)
        } else {
            None
        };

        TrailerSpec {
            change_id,
            co_developed_by,
        }
    }
}

/// Whether the message already carries a well-formed `Change-Id` line
#[must_use]
pub fn has_change_id(message: &str) -> bool {
    CHANGE_ID_LINE_RE.is_match(message)
}

/// Whether the message already carries a `Co-developed-by` line
#[must_use]
pub fn has_co_developed_by(message: &str) -> bool {
    message.lines().any(|line| {
        line.get(..CO_DEVELOPED_BY_PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(CO_DEVELOPED_BY_PREFIX))
    })
}
