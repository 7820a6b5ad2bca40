//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated scratch directory per test
//! - Command builders that ignore the caller's CANOPATH_* environment
//! - Small filesystem fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated scratch directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with configuration variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("canopath").expect("Failed to find canopath binary");
        cmd.env_remove("CANOPATH_BASE_DIR")
            .env_remove("CANOPATH_FORMAT")
            .env_remove("CANOPATH_LOG_MODE");
        cmd
    }

    /// Get a command builder whose base directory is the scratch directory.
    pub fn command_in_scratch(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--base-dir").arg(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Get the temp path as a string.
    pub fn path_str(&self) -> &str {
        self.temp_path.to_str().expect("Temp dir is not UTF-8")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file in the test environment.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, b"").expect("Failed to create test file");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run canopath");
        assert!(
            output.status.success(),
            "canopath failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
