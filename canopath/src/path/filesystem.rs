//! Host filesystem operations on canonical paths.
//!
//! Every operation here issues blocking system calls and returns once they
//! complete. The predicates and the `bool`/empty-returning operations never
//! fail; each fallible one has a `try_*` twin that keeps the OS error.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::types::CanonicalPath;
use crate::error::{Error, Result};

/// Permission bits for directories created by [`CanonicalPath::mkdir`]:
/// read, write and execute for the owner only.
pub const OWNER_ONLY_MODE: u32 = 0o700;

#[cfg(unix)]
fn create_dir(path: &str) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().mode(OWNER_ONLY_MODE).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &str) -> io::Result<()> {
    fs::DirBuilder::new().create(path)
}

fn utf8_path(path: PathBuf) -> Result<CanonicalPath> {
    path.into_os_string()
        .into_string()
        .map(CanonicalPath::new)
        .map_err(|raw| Error::NonUtf8Path {
            path: PathBuf::from(raw),
        })
}

/// Log a swallowed error and fall back to the default value.
fn or_default<T: Default>(result: Result<T>, operation: &str) -> T {
    result.unwrap_or_else(|e| {
        log::debug!("{operation} failed: {e}");
        T::default()
    })
}

impl CanonicalPath {
    /// Whether anything exists at this path (following symlinks).
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self.as_str()).is_ok()
    }

    /// Whether this path is a regular file (following symlinks).
    #[must_use]
    pub fn is_file(&self) -> bool {
        fs::metadata(self.as_str()).is_ok_and(|m| m.is_file())
    }

    /// Whether this path is a directory (following symlinks).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        fs::metadata(self.as_str()).is_ok_and(|m| m.is_dir())
    }

    /// The extension of the last segment.
    ///
    /// Empty when the path is empty, names an existing directory, has no
    /// `.` in its name, or its name is a dotfile such as `.hidden`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::new("/no/such/dir/b.txt").extension(), "txt");
    /// assert_eq!(CanonicalPath::new("/no/such/dir/.hidden").extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        if self.is_empty() || self.is_directory() {
            return "";
        }
        self.lexical_extension()
    }

    /// Resolve a relative path against the current working directory.
    ///
    /// Empty and absolute paths are returned unchanged, as is the path
    /// itself when the working directory cannot be determined.
    #[must_use]
    pub fn absolute_path(&self) -> CanonicalPath {
        if self.is_empty() || self.is_absolute() {
            return self.clone();
        }
        Self::current_directory().concat(self)
    }

    /// The process working directory, or the empty path if unavailable.
    #[must_use]
    pub fn current_directory() -> CanonicalPath {
        or_default(Self::try_current_directory(), "getting current directory")
    }

    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS cannot report the working directory or it
    /// is not valid UTF-8.
    pub fn try_current_directory() -> Result<CanonicalPath> {
        let cwd = env::current_dir().map_err(|e| Error::io(".", e))?;
        utf8_path(cwd)
    }

    /// Path of the running executable, or the empty path if unavailable.
    #[must_use]
    pub fn current_executable() -> CanonicalPath {
        or_default(Self::try_current_executable(), "getting current executable")
    }

    /// Path of the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot resolve the executable path or
    /// it is not valid UTF-8.
    pub fn try_current_executable() -> Result<CanonicalPath> {
        let exe = env::current_exe().map_err(|e| Error::io("<current executable>", e))?;
        utf8_path(exe)
    }

    /// Create exactly this directory, owner-only permissions.
    ///
    /// Missing ancestors are not created; see
    /// [`mkdir_recursive`](Self::mkdir_recursive).
    #[must_use]
    pub fn mkdir(&self) -> bool {
        or_default(self.try_mkdir().map(|()| true), "mkdir")
    }

    /// Create exactly this directory, owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for the empty path and [`Error::Io`] if
    /// the directory cannot be created (including when it already exists).
    pub fn try_mkdir(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyPath { operation: "mkdir" });
        }
        create_dir(self.as_str()).map_err(|e| Error::io(self.as_str(), e))
    }

    /// Create this directory and any missing ancestors.
    ///
    /// Succeeds if the directory already exists. The empty path trivially
    /// succeeds.
    #[must_use]
    pub fn mkdir_recursive(&self) -> bool {
        or_default(self.try_mkdir_recursive().map(|()| true), "mkdir -p")
    }

    /// Create this directory and any missing ancestors.
    ///
    /// When an ancestor is missing the parent chain is created first and the
    /// directory itself is then attempted once more. A failure while creating
    /// the parent chain is not returned directly: the final attempt reports
    /// whatever the OS says about this directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] if a non-directory already exists at
    /// this path, or [`Error::Io`] for any other creation failure.
    pub fn try_mkdir_recursive(&self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        let err = match create_dir(self.as_str()) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        match err.kind() {
            io::ErrorKind::AlreadyExists => {
                if self.is_directory() {
                    Ok(())
                } else {
                    Err(Error::NotADirectory {
                        path: self.as_str().to_string(),
                    })
                }
            }
            io::ErrorKind::NotFound => {
                let parent = self.parent();
                if parent == *self {
                    return Err(Error::io(self.as_str(), err));
                }
                if let Err(e) = parent.try_mkdir_recursive() {
                    log::debug!("creating ancestors of '{self}' failed: {e}");
                }
                self.try_mkdir()
            }
            _ => Err(Error::io(self.as_str(), err)),
        }
    }

    /// The visible children of this directory.
    ///
    /// Entries whose name starts with `.` are skipped. The order is whatever
    /// the OS returns. The result is empty when the path is missing, is not a
    /// directory or cannot be read, which is indistinguishable from an empty
    /// directory; use [`try_list_contents`](Self::try_list_contents) to tell
    /// them apart.
    #[must_use]
    pub fn list_contents(&self) -> Vec<CanonicalPath> {
        or_default(self.try_list_contents(), "listing directory")
    }

    /// The visible children of this directory.
    ///
    /// Names that are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be opened or read.
    pub fn try_list_contents(&self) -> Result<Vec<CanonicalPath>> {
        let entries = fs::read_dir(self.as_str()).map_err(|e| Error::io(self.as_str(), e))?;

        let mut contents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(self.as_str(), e))?;
            let Ok(name) = entry.file_name().into_string() else {
                log::debug!("skipping non-UTF-8 entry in '{self}'");
                continue;
            };
            if !name.starts_with('.') {
                contents.push(self.concat(&CanonicalPath::new(name)));
            }
        }
        Ok(contents)
    }

    /// Remove the file at this path.
    #[must_use]
    pub fn unlink_file(&self) -> bool {
        or_default(self.try_unlink_file().map(|()| true), "unlink")
    }

    /// Remove the file at this path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for the empty path and [`Error::Io`] if
    /// the file cannot be removed.
    pub fn try_unlink_file(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyPath { operation: "unlink" });
        }
        fs::remove_file(self.as_str()).map_err(|e| Error::io(self.as_str(), e))
    }
}
