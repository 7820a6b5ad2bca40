//! The canonical path value type.
//!
//! [`CanonicalPath`] owns a single string that is always in canonical form
//! (see [`canonicalize`](super::canonicalize::canonicalize)). Everything in
//! this file is pure string manipulation; the operations that talk to the
//! host filesystem live in the `filesystem` module.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::canonicalize::{canonicalize, SEPARATOR};

/// A path string kept in canonical form.
///
/// The empty path is a valid value meaning "no path"; it is what the
/// filesystem queries return when the OS cannot answer.
///
/// # Examples
///
/// ```
/// use canopath::CanonicalPath;
///
/// let path = CanonicalPath::new("/usr//local/./lib/../bin");
/// assert_eq!(path.as_str(), "/usr/local/bin");
/// assert_eq!(path.name(), "bin");
/// assert_eq!(path.parent().as_str(), "/usr/local/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath {
    path: String,
}

impl CanonicalPath {
    /// Create a path by canonicalizing `path`.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: canonicalize(path.as_ref()),
        }
    }

    /// Compose two raw strings: `root` followed by `leaf`.
    ///
    /// Equivalent to `CanonicalPath::new(root).concat(&CanonicalPath::new(leaf))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::join("/x/y", "z").as_str(), "/x/y/z");
    /// assert_eq!(CanonicalPath::join("/x/y/", "z").as_str(), "/x/y/z");
    /// assert_eq!(CanonicalPath::join("/x/y", "/z").as_str(), "/z");
    /// ```
    #[must_use]
    pub fn join(root: &str, leaf: &str) -> Self {
        Self::new(root).concat(&Self::new(leaf))
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consume the path, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Replace the stored path with the canonical form of `path`.
    pub fn set_path(&mut self, path: &str) {
        self.path = canonicalize(path);
    }

    /// Whether this is the empty "no path" value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the path starts at the filesystem root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with(SEPARATOR)
    }

    /// Append `other` to this path, returning a new canonical path.
    ///
    /// An empty `other` leaves the path unchanged and an absolute `other`
    /// replaces it, as when joining paths in a POSIX shell. Appending to an
    /// empty path yields `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// let base = CanonicalPath::new("/assets/textures");
    /// assert_eq!(base.concat(&"../env/ibl.ktx".into()).as_str(), "/assets/env/ibl.ktx");
    /// assert_eq!(base.concat(&"/abs".into()).as_str(), "/abs");
    /// assert_eq!(base.concat(&CanonicalPath::default()), base);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &CanonicalPath) -> CanonicalPath {
        if other.is_empty() {
            return self.clone();
        }
        if other.is_absolute() || self.is_empty() {
            return other.clone();
        }
        Self::new(self.joined_with(other))
    }

    /// In-place variant of [`concat`](Self::concat).
    pub fn concat_to_self(&mut self, other: &CanonicalPath) {
        if other.is_empty() {
            return;
        }
        if other.is_absolute() || self.is_empty() {
            self.path.clone_from(&other.path);
            return;
        }
        self.path = canonicalize(&self.joined_with(other));
    }

    fn joined_with(&self, other: &CanonicalPath) -> String {
        let mut joined = String::with_capacity(self.path.len() + other.path.len() + 1);
        joined.push_str(&self.path);
        if !self.path.ends_with(SEPARATOR) {
            joined.push(SEPARATOR);
        }
        joined.push_str(&other.path);
        joined
    }

    /// The path segments in order.
    ///
    /// The leading `/` of an absolute path is its own `"/"` segment. The
    /// empty path has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::new("/a/b/").segments(), vec!["/", "a", "b"]);
    /// assert_eq!(CanonicalPath::new("../a").segments(), vec!["..", "a"]);
    /// assert!(CanonicalPath::default().segments().is_empty());
    /// ```
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = Vec::new();
        if self.is_absolute() {
            segments.push(&self.path[..1]);
        }
        segments.extend(self.path.split(SEPARATOR).filter(|s| !s.is_empty()));
        segments
    }

    /// The parent directory, with a trailing `/`.
    ///
    /// The parent of a single relative segment is the empty path and the
    /// parent of `/` is `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::new("/a/b/c").parent().as_str(), "/a/b/");
    /// assert_eq!(CanonicalPath::new("/a").parent().as_str(), "/");
    /// assert_eq!(CanonicalPath::new("a").parent().as_str(), "");
    /// ```
    #[must_use]
    pub fn parent(&self) -> CanonicalPath {
        if self.is_empty() {
            return CanonicalPath::default();
        }

        let mut parent = String::with_capacity(self.path.len());
        if self.is_absolute() {
            parent.push(SEPARATOR);
        }

        let mut segments = self.segments();
        segments.pop();
        for segment in segments {
            parent.push_str(segment);
            parent.push(SEPARATOR);
        }
        Self::new(parent)
    }

    /// The last segment, or `""` for the empty path.
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments().pop().unwrap_or_default()
    }

    /// The last segment up to (not including) its last `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::CanonicalPath;
    ///
    /// assert_eq!(CanonicalPath::new("/a/b.tar.gz").name_without_extension(), "b.tar");
    /// assert_eq!(CanonicalPath::new("/a/README").name_without_extension(), "README");
    /// ```
    #[must_use]
    pub fn name_without_extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(index) => &name[..index],
            None => name,
        }
    }

    /// Extension of the last segment, ignoring whether the path exists.
    ///
    /// A dot at position 0 (a dotfile) does not start an extension.
    pub(crate) fn lexical_extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(index) if index != 0 => &name[index + 1..],
            _ => "",
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for CanonicalPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for CanonicalPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.path
    }
}

impl FromStr for CanonicalPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl AsRef<std::path::Path> for CanonicalPath {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.path)
    }
}

impl Serialize for CanonicalPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for CanonicalPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
