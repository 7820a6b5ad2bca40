//! Command to compose two paths.

use crate::error::CliError;
use crate::utils::{print_path, GlobalOptions};
use canopath::CanonicalPath;
use clap::Args;

/// Append LEAF to ROOT; an absolute LEAF replaces ROOT.
#[derive(Args)]
pub struct JoinCommand {
    /// Root path
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Leaf path appended to the root
    #[arg(value_name = "LEAF")]
    pub leaf: String,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let joined = CanonicalPath::join(&self.root, &self.leaf);
        print_path(&joined, global.format)
    }
}
