//! Command to print the canonical form of paths.

use crate::error::CliError;
use crate::utils::{print_lines, GlobalOptions};
use canopath::CanonicalPath;
use clap::Args;

/// Print the canonical form of each path.
#[derive(Args)]
pub struct CanonCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true, allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Resolve relative paths against the current directory
    #[arg(long)]
    pub absolute: bool,
}

impl CanonCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let canonical: Vec<CanonicalPath> = self
            .paths
            .iter()
            .map(|raw| {
                let path = CanonicalPath::new(raw);
                if self.absolute {
                    path.absolute_path()
                } else {
                    path
                }
            })
            .collect();

        print_lines(&canonical, global.format)
    }
}
