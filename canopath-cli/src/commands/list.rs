//! Command to list the visible entries of a directory.

use crate::error::CliError;
use crate::utils::{print_lines, resolve_operand, GlobalOptions};
use clap::Args;

/// List the entries of a directory, skipping dotfiles.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,

    /// Print entry names instead of full paths
    #[arg(long)]
    pub names: bool,
}

impl ListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = resolve_operand(&self.path, global);

        // The OS order is arbitrary; sort for stable output
        let mut entries = dir.try_list_contents()?;
        entries.sort();

        if self.names {
            let names: Vec<&str> = entries.iter().map(|entry| entry.name()).collect();
            print_lines(&names, global.format)
        } else {
            print_lines(&entries, global.format)
        }
    }
}
