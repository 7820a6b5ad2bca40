//! Command to print the path of the running executable.

use crate::error::CliError;
use crate::utils::{print_path, GlobalOptions};
use canopath::CanonicalPath;
use clap::Args;

/// Print the path of the running executable.
#[derive(Args)]
pub struct ExeCommand {
    /// Print the directory containing the executable instead
    #[arg(long)]
    pub dir: bool,
}

impl ExeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let exe = CanonicalPath::try_current_executable()?;
        let path = if self.dir { exe.parent() } else { exe };
        print_path(&path, global.format)
    }
}
