//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the message pipeline and
//! git. Implementations live in the `adapters` module.
//!
//! The pipeline depends only on these traits, so it can run against an
//! in-memory fake in tests, and "git is unavailable" is simply the absence
//! of an [`ObjectStore`].

mod config_source;
mod object_store;

pub use config_source::ConfigSource;
pub use object_store::ObjectStore;
