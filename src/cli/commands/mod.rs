//! Command implementations
//!
//! Each command is a thin wrapper that wires the git adapters into the
//! library and renders the result.

mod detect;
mod exec;
mod install;

pub use detect::detect;
pub use exec::exec;
pub use install::{install, uninstall};
