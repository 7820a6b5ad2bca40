//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command, operand
//! resolution against the configured base directory, and output helpers.

use canopath::CanonicalPath;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::error::CliError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory that relative filesystem operands are resolved against.
    pub base_dir: Option<String>,

    /// Output format.
    pub format: OutputFormat,
}

/// Turn a raw operand into a path, applying the base directory if any.
///
/// Absolute operands ignore the base directory.
pub fn resolve_operand(raw: &str, global: &GlobalOptions) -> CanonicalPath {
    let operand = CanonicalPath::new(raw);
    match &global.base_dir {
        Some(base) => CanonicalPath::new(base).concat(&operand),
        None => operand,
    }
}

/// Print a single path.
pub fn print_path(path: &CanonicalPath, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{path}")?;
            Ok(())
        }
        OutputFormat::Json => print_json(path),
    }
}

/// Print a list of values, one per line or as a JSON array.
pub fn print_lines<S: AsRef<str> + Serialize>(
    items: &[S],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            for item in items {
                writeln!(stdout, "{}", item.as_ref())?;
            }
            Ok(())
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_operand_without_base() {
        let global = GlobalOptions::default();
        assert_eq!(resolve_operand("a/./b", &global).as_str(), "a/b");
    }

    #[test]
    fn test_resolve_operand_with_base() {
        let global = GlobalOptions {
            base_dir: Some("/srv/assets/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_operand("textures/../ibl", &global).as_str(),
            "/srv/assets/ibl"
        );
        assert_eq!(resolve_operand("/etc", &global).as_str(), "/etc");
    }
}
