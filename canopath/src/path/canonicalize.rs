//! Lexical canonicalization of POSIX-style path strings.
//!
//! Canonicalization never touches the filesystem. It resolves `.` and `..`
//! segments, collapses duplicate separators and keeps the absolute and
//! trailing-slash form of the input:
//!
//! - A leading `/` survives, and `..` can never climb above it.
//! - A `..` that would escape a relative path is kept as a leading `..` chain.
//! - A trailing `/` survives, except that the root is always just `/`.
//! - The empty string stays empty.

/// Separator used by every path handled in this crate.
pub const SEPARATOR: char = '/';

const CURRENT: &str = ".";
const PARENT: &str = "..";

/// Canonicalize a path string.
///
/// This is pure string algebra: it never fails and never looks at the
/// filesystem, so the path does not need to exist.
///
/// # Examples
///
/// ```
/// use canopath::path::canonicalize::canonicalize;
///
/// assert_eq!(canonicalize("/a/b/../c"), "/a/c");
/// assert_eq!(canonicalize("a/../../b"), "../b");
/// assert_eq!(canonicalize("/../a"), "/a");
/// assert_eq!(canonicalize("a//b/./c/"), "a/b/c/");
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with(SEPARATOR);
    let trailing_slash = path.ends_with(SEPARATOR);

    let mut pieces = path.split(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();
    if absolute {
        // The root marker: the empty piece before the leading '/'
        pieces.next();
        segments.push("");
    }

    for piece in pieces {
        match piece {
            "" => {}
            CURRENT => {
                if segments.is_empty() {
                    segments.push(piece);
                }
            }
            PARENT => match segments.last().copied() {
                None | Some(PARENT) => segments.push(piece),
                // Cannot go above the root
                Some("") => {}
                Some(CURRENT) => {
                    segments.pop();
                    segments.push(piece);
                }
                Some(_) => {
                    segments.pop();
                }
            },
            _ => segments.push(piece),
        }
    }

    // Every segment is followed by a separator, which leaves one extra '/'
    // at the end that is removed below unless the input had one.
    let mut canonical = String::with_capacity(path.len() + 1);
    for segment in &segments {
        canonical.push_str(segment);
        canonical.push(SEPARATOR);
    }

    if absolute && canonical.is_empty() {
        canonical.push(SEPARATOR);
    }

    if !trailing_slash && canonical.len() > 1 {
        canonical.pop();
    }

    canonical
}

/// Whether `path` is already in canonical form.
///
/// # Examples
///
/// ```
/// use canopath::path::canonicalize::is_canonical;
///
/// assert!(is_canonical("/usr/lib"));
/// assert!(!is_canonical("/usr//lib/."));
/// ```
#[must_use]
pub fn is_canonical(path: &str) -> bool {
    canonicalize(path) == path
}
