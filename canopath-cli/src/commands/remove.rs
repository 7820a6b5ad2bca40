//! Command to remove a file.

use crate::error::CliError;
use crate::utils::{resolve_operand, GlobalOptions};
use clap::Args;

/// Remove a file. Directories are refused.
#[derive(Args)]
pub struct RemoveCommand {
    /// File to remove
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RemoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_operand(&self.path, global);
        path.try_unlink_file()?;

        if global.verbose {
            eprintln!("Removed {path}");
        }
        Ok(())
    }
}
