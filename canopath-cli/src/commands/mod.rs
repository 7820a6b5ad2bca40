//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `canon`: Print canonical forms
//! - `join`: Compose a root and a leaf
//! - `inspect`: Show every property of a path
//! - `split`: Print path segments
//! - `mkdir`: Create a directory, optionally with its ancestors
//! - `ls`: List visible directory entries
//! - `rm`: Remove a file
//! - `cwd`: Print the working directory
//! - `exe`: Print the running executable
//! - `completions`: Generate shell completion scripts

pub mod canon;
pub mod completions;
pub mod cwd;
pub mod exe;
pub mod inspect;
pub mod join;
pub mod list;
pub mod mkdir;
pub mod remove;
pub mod split;

pub use canon::CanonCommand;
pub use completions::CompletionsCommand;
pub use cwd::CwdCommand;
pub use exe::ExeCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use list::ListCommand;
pub use mkdir::MkdirCommand;
pub use remove::RemoveCommand;
pub use split::SplitCommand;
