//! Main entry point for the canopath CLI.
//!
//! This is the command-line interface for the canopath path library.
//! It provides commands for working with paths:
//! - `canon`, `join`, `split`, `inspect`: Pure path manipulation
//! - `mkdir`, `ls`, `rm`: Filesystem operations
//! - `cwd`, `exe`: Process location queries

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr based on verbosity
    let logger = canopath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        base_dir: cli.base_dir,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Canon(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Cwd(cmd) => cmd.execute(&global),
        cli::Command::Exe(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
