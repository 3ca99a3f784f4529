//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Object store, config source and hook installation backed by
//!   the `git` binary

pub mod git;
