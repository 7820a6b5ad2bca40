//! Errors surfaced by the `canopath` binary and their exit codes.

use canopath::Error as LibError;
use std::fmt;

/// Anything a command can fail with.
#[derive(Debug)]
pub enum CliError {
    /// A filesystem operation on a path failed.
    Library(LibError),

    /// I/O error while writing output.
    Io(std::io::Error),

    /// Failure serializing JSON output.
    Serialization(serde_json::Error),
}

impl CliError {
    /// Process exit status for this error:
    /// - 1: The filesystem holds something other than what was expected
    /// - 4: Invalid arguments (e.g. the empty path)
    /// - 5: I/O error
    /// - 6: Other error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::NotADirectory { .. } => 1,
                LibError::EmptyPath { .. } => 4,
                LibError::Io { .. } => 5,
                LibError::NonUtf8Path { .. } => 6,
            },
            CliError::Io(_) => 5,
            CliError::Serialization(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Serialization(e) => write!(f, "Failed to serialize output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Serialization(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e)
    }
}
