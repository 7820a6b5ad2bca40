//! Error types for the canopath library.
//!
//! Only the `try_*` filesystem operations return these errors. The plain
//! operations report failure as `false` or as an empty value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a canopath error.
///
/// # Examples
///
/// ```
/// use canopath::{CanonicalPath, Result};
///
/// fn scratch_dir() -> Result<CanonicalPath> {
///     Ok(CanonicalPath::new("/tmp/scratch"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for filesystem operations on canonical paths.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system rejected an operation on a path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The path the operation was applied to.
        path: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// An entry exists at the path but it is not a directory.
    #[error("not a directory: '{path}'")]
    NotADirectory {
        /// The offending path.
        path: String,
    },

    /// The operating system returned a path that is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The raw path as returned by the OS.
        path: PathBuf,
    },

    /// A filesystem operation was attempted on the empty path.
    #[error("cannot {operation} the empty path")]
    EmptyPath {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl Error {
    pub(crate) fn io(path: &str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    /// The kind of the underlying OS error, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::Error;
    ///
    /// let err = Error::NotADirectory { path: "/etc/passwd".to_string() };
    /// assert_eq!(err.io_kind(), None);
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }
}
