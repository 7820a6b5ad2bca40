//! Command to create a directory.

use crate::error::CliError;
use crate::utils::{resolve_operand, GlobalOptions};
use clap::Args;

/// Create a directory with owner-only permissions.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Also create missing ancestors; an existing directory is not an error
    #[arg(short, long)]
    pub parents: bool,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_operand(&self.path, global);

        if self.parents {
            path.try_mkdir_recursive()?;
        } else {
            path.try_mkdir()?;
        }

        if global.verbose {
            eprintln!("Created directory {path}");
        }
        Ok(())
    }
}
