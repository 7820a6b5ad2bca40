//! Command to show every property of a path.
//!
//! Besides the lexical properties this stats the path, so the output
//! reflects the filesystem at the time of the call.

use crate::error::CliError;
use crate::utils::{print_json, resolve_operand, GlobalOptions, OutputFormat};
use canopath::CanonicalPath;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

/// Show the canonical form, name, extension, parent and filesystem status.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Everything known about a path.
#[derive(Debug, Serialize)]
pub struct PathReport<'a> {
    pub path: &'a CanonicalPath,
    pub absolute: CanonicalPath,
    pub parent: CanonicalPath,
    pub name: &'a str,
    pub stem: &'a str,
    pub extension: &'a str,
    pub segments: Vec<&'a str>,
    pub exists: bool,
    pub is_file: bool,
    pub is_directory: bool,
}

impl<'a> PathReport<'a> {
    pub fn new(path: &'a CanonicalPath) -> Self {
        Self {
            path,
            absolute: path.absolute_path(),
            parent: path.parent(),
            name: path.name(),
            stem: path.name_without_extension(),
            extension: path.extension(),
            segments: path.segments(),
            exists: path.exists(),
            is_file: path.is_file(),
            is_directory: path.is_directory(),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "path:         {}", self.path)?;
        writeln!(out, "absolute:     {}", self.absolute)?;
        writeln!(out, "parent:       {}", self.parent)?;
        writeln!(out, "name:         {}", self.name)?;
        writeln!(out, "stem:         {}", self.stem)?;
        writeln!(out, "extension:    {}", self.extension)?;
        writeln!(out, "segments:     {}", self.segments.join(" "))?;
        writeln!(out, "exists:       {}", self.exists)?;
        writeln!(out, "is_file:      {}", self.is_file)?;
        writeln!(out, "is_directory: {}", self.is_directory)
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_operand(&self.path, global);
        let report = PathReport::new(&path);

        match global.format {
            OutputFormat::Text => report.write_text(&mut io::stdout().lock())?,
            OutputFormat::Json => print_json(&report)?,
        }
        Ok(())
    }
}
