//! Command implementations
//!
//! Each submodule implements one CLI command on top of the installation
//! engine and the CLI argument types.

pub mod completions;
pub mod install;
