//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonCommand, CompletionsCommand, CwdCommand, ExeCommand, InspectCommand, JoinCommand,
    ListCommand, MkdirCommand, RemoveCommand, SplitCommand,
};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting and manipulating canonical paths.
#[derive(Parser)]
#[command(name = "canopath")]
#[command(version, about = "Canonicalize and manipulate POSIX-style paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Resolve relative filesystem operands against this directory
    #[arg(long, value_name = "PATH", global = true, env = "CANOPATH_BASE_DIR")]
    pub base_dir: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true,
        env = "CANOPATH_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of one or more paths
    Canon(CanonCommand),

    /// Append a leaf path to a root path
    Join(JoinCommand),

    /// Show every property of a path
    Inspect(InspectCommand),

    /// Print the segments of a path
    Split(SplitCommand),

    /// Create a directory
    Mkdir(MkdirCommand),

    /// List the visible entries of a directory
    Ls(ListCommand),

    /// Remove a file
    Rm(RemoveCommand),

    /// Print the current working directory
    Cwd(CwdCommand),

    /// Print the path of the running executable
    Exe(ExeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
