//! Library exports for canopath-cli.
//!
//! This module exports the CLI structure so integration tests and tooling
//! can reach the command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
