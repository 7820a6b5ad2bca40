#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # canopath
//!
//! A library for canonicalizing and manipulating POSIX-style path strings.
//!
//! Paths are canonicalized lexically, without touching the filesystem, and
//! kept in that form by the [`CanonicalPath`] value type. Thin, never-panicking
//! wrappers over the host filesystem cover existence checks, directory
//! creation, listing and file removal.
//!
//! ## Core Types
//!
//! - [`CanonicalPath`]: A path string that is always in canonical form
//! - [`Error`] and [`Result`]: Error handling types for the `try_*` operations
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use canopath::CanonicalPath;
//!
//! let path = CanonicalPath::new("/a/b/../c/./d.txt");
//! assert_eq!(path.as_str(), "/a/c/d.txt");
//! assert_eq!(path.name(), "d.txt");
//! assert_eq!(path.name_without_extension(), "d");
//!
//! // An absolute right-hand side replaces the left
//! assert_eq!(CanonicalPath::join("/x/y", "/z").as_str(), "/z");
//! assert_eq!(CanonicalPath::join("/x/y", "z").as_str(), "/x/y/z");
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{canonicalize, CanonicalPath};
