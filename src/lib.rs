//! cotrail - A git commit-msg hook that adds `Change-Id` and `Co-developed-by`
//! trailers
//!
//! This library provides the commit message pipeline: cleaning the message
//! the way git does, skipping merge and fixup/squash commits, computing a
//! Gerrit-compatible Change-Id and crediting the AI agent that drove the
//! commit.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod output;
