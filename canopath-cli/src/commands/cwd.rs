//! Command to print the current working directory.

use crate::error::CliError;
use crate::utils::{print_path, GlobalOptions};
use canopath::CanonicalPath;
use clap::Args;

/// Print the current working directory.
#[derive(Args)]
pub struct CwdCommand {}

impl CwdCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = CanonicalPath::try_current_directory()?;
        print_path(&cwd, global.format)
    }
}
