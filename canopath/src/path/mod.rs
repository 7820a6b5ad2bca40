//! Canonical POSIX-style paths.
//!
//! This module provides the [`CanonicalPath`] value type and the lexical
//! canonicalization it is built on, plus thin wrappers over the host
//! filesystem.
//!
//! # Key Concepts
//!
//! ## Canonicalization
//!
//! Canonicalization is purely lexical. It never follows symlinks and the
//! path does not have to exist:
//! - `.` segments are dropped (a lone leading `.` is kept)
//! - `parent/..` pairs cancel out
//! - `..` at the root is dropped, and leading `..` of relative paths are kept
//! - duplicate separators collapse
//! - a leading `/` and a trailing `/` are preserved
//!
//! ## The empty path
//!
//! `""` is a valid path meaning "no path". Queries that cannot reach the
//! OS return it instead of failing.
//!
//! ## Filesystem operations
//!
//! Predicates (`exists`, `is_file`, `is_directory`) and mutators (`mkdir`,
//! `mkdir_recursive`, `unlink_file`) report failure as `false`. Each mutator
//! has a `try_*` variant that returns the underlying [`Error`](crate::Error).
//!
//! # Examples
//!
//! ```
//! use canopath::CanonicalPath;
//!
//! let textures = CanonicalPath::new("assets//textures/./");
//! assert_eq!(textures.as_str(), "assets/textures/");
//!
//! let albedo = textures.concat(&"../materials/albedo.png".into());
//! assert_eq!(albedo.as_str(), "assets/materials/albedo.png");
//! assert_eq!(albedo.name_without_extension(), "albedo");
//! assert_eq!(albedo.parent().as_str(), "assets/materials/");
//! ```

pub mod canonicalize;
mod filesystem;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use canonicalize::{canonicalize, is_canonical, SEPARATOR};
pub use filesystem::OWNER_ONLY_MODE;
pub use types::CanonicalPath;
