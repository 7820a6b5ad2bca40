//! Shared helpers for canopath integration tests.

use canopath::CanonicalPath;
use tempfile::TempDir;

/// A scratch directory that is removed when the fixture is dropped.
pub struct Scratch {
    // Kept alive for the duration of the test
    _dir: TempDir,
    /// Canonical path of the scratch directory.
    pub root: CanonicalPath,
}

#[allow(dead_code)]
impl Scratch {
    /// Create a fresh scratch directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = CanonicalPath::new(dir.path().to_str().expect("Temp dir is not UTF-8"));
        Self { _dir: dir, root }
    }

    /// Path of `relative` inside the scratch directory.
    pub fn child(&self, relative: &str) -> CanonicalPath {
        self.root.concat(&CanonicalPath::new(relative))
    }

    /// Create an empty file at `relative`, returning its path.
    pub fn touch(&self, relative: &str) -> CanonicalPath {
        let path = self.child(relative);
        std::fs::write(path.as_str(), b"").expect("Failed to create test file");
        path
    }
}
