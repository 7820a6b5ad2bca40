//! `canopath completions <SHELL>`: print a completion script to stdout.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "canopath";

/// Print a shell completion script for canopath.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Print where the script should be installed.
    fn install_hint(&self) -> Option<&'static str> {
        match self.shell {
            Shell::Bash => Some("canopath completions bash > ~/.local/share/bash-completion/completions/canopath"),
            Shell::Zsh => Some("canopath completions zsh > ~/.zsh/completions/_canopath"),
            Shell::Fish => Some("canopath completions fish > ~/.config/fish/completions/canopath.fish"),
            Shell::PowerShell => Some("canopath completions powershell > $PROFILE"),
            _ => None,
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = self.install_hint() {
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
