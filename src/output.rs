//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::git::HookInstall;
use crate::core::models::PipelineOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a dry-run `exec`
#[derive(Debug, Serialize)]
pub struct ExecResult {
    /// The message file that was processed
    pub file: String,
    /// Whether the file would be rewritten
    pub should_save: bool,
    /// The message that would be written
    pub message: String,
}

impl ExecResult {
    /// Build from a pipeline outcome
    #[must_use]
    pub fn new(file: impl Into<String>, outcome: PipelineOutcome) -> Self {
        Self {
            file: file.into(),
            should_save: outcome.should_save,
            message: outcome.message,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.should_save {
            println!("{}", self.message);
        } else {
            eprintln!("{} {}", self.file, "would be left unchanged".dimmed());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of agent detection
#[derive(Debug, Serialize)]
pub struct DetectResult {
    /// Detected identity, `Name <email>`
    pub agent: Option<String>,
}

impl DetectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.agent {
                Some(agent) => println!("{agent}"),
                None => eprintln!("{}", "No agent found".yellow()),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of hook installation
#[derive(Debug, Serialize)]
pub struct InstallResult {
    /// Path of the hook file
    pub hook: String,
    /// What happened
    pub outcome: HookInstall,
}

impl InstallResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.outcome {
                HookInstall::Created => println!("{} {}", "Installed".green(), self.hook),
                HookInstall::Appended => {
                    println!("{} {}", "Added cotrail to existing".green(), self.hook);
                },
                HookInstall::Replaced => println!("{} {}", "Reinstalled cotrail in".green(), self.hook),
                HookInstall::AlreadyInstalled => println!(
                    "{} {} (use --force to reinstall)",
                    "Already installed in".yellow(),
                    self.hook
                ),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
