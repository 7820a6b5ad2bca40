//! Command to print the segments of a path.

use crate::error::CliError;
use crate::utils::{print_lines, GlobalOptions};
use canopath::CanonicalPath;
use clap::Args;

/// Print the segments of a path; a leading `/` is its own segment.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = CanonicalPath::new(&self.path);
        print_lines(&path.segments(), global.format)
    }
}
