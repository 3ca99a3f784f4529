//! Business logic services
//!
//! Pure message-processing logic. Git is only reached through the
//! [`ObjectStore`](crate::core::ports::ObjectStore) port.
//!
//! - [`normalizer`] - Strip comments, diffs and redundant blank lines
//! - [`classifier`] - Detect merge and fixup/squash commits
//! - [`change_id`] - Compute the `Change-Id` trailer value
//! - [`agent`] - Detect the AI agent from environment variables
//! - [`trailers`] - Merge trailers into the trailing block
//! - [`pipeline`] - Run the whole transformation

pub mod agent;
pub mod change_id;
pub mod classifier;
pub mod normalizer;
pub mod pipeline;
pub mod trailers;

pub use agent::{detect_agent, detect_agent_with};
pub use change_id::{commit_blob, content_change_id, fallback_change_id, generate_change_id};
pub use classifier::{is_merge_commit, is_temporary_commit};
pub use normalizer::clean_message;
pub use pipeline::{HookError, Pipeline, has_change_id, has_co_developed_by};
pub use trailers::{TrailerLine, insert_trailers, split_trailer_block};
