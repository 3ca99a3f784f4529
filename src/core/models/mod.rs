//! Domain models for cotrail
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`HookConfig`] - Which trailers to add and how comments look
//! - [`CleanResult`] / [`PipelineOutcome`] - Messages flowing through the pipeline
//! - [`TrailerSpec`] - Trailers requested for one run
//! - [`EnvRule`] / [`EnvSnapshot`] - Agent detection inputs

mod agent;
mod config;
mod message;

pub use agent::{AGENT_RULES, EnvPattern, EnvRule, EnvSnapshot};
pub use config::{
    CHANGE_ID_KEYS, CO_DEVELOPED_BY_KEYS, COMMENT_CHAR_KEY, DEFAULT_COMMENT_CHAR, HookConfig,
    parse_bool,
};
pub use message::{
    CHANGE_ID_KEY, CO_DEVELOPED_BY_KEY, CleanResult, PipelineOutcome, TrailerSpec,
};
