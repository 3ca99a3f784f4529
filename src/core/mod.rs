//! Core domain logic for cotrail
//!
//! This module contains pure message-processing logic. Git access is
//! abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (config, messages, agent rules)
//! - `services/` - The commit message pipeline and its stages
//! - `ports/` - Trait definitions for git access

pub mod models;
pub mod ports;
pub mod services;
