//! Integration tests for the filesystem commands and their exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Something other than a directory is in the way
//! - 4: Invalid arguments (the empty path)
//! - 5: I/O error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// mkdir
// ============================================================================

#[test]
fn test_mkdir_single_level() {
    let env = TestEnv::new();
    env.command_in_scratch()
        .args(["mkdir", "single"])
        .assert()
        .code(0);
    assert!(env.path().join("single").is_dir());
}

#[test]
fn test_mkdir_missing_ancestor_is_io_error() {
    let env = TestEnv::new();
    env.command_in_scratch()
        .args(["mkdir", "x/y/z"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_mkdir_parents_creates_chain_and_is_idempotent() {
    let env = TestEnv::new();
    for _ in 0..2 {
        env.command_in_scratch()
            .args(["mkdir", "-p", "x/y/z"])
            .assert()
            .code(0);
    }
    assert!(env.path().join("x/y/z").is_dir());
}

#[test]
fn test_mkdir_parents_over_file_fails() {
    let env = TestEnv::new();
    env.create_file("blocker");

    env.command_in_scratch()
        .args(["mkdir", "-p", "blocker"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_mkdir_empty_path_is_invalid() {
    let env = TestEnv::new();
    env.command().args(["mkdir", ""]).assert().code(4);
}

#[test]
fn test_mkdir_verbose_reports_path() {
    let env = TestEnv::new();
    env.command_in_scratch()
        .args(["--verbose", "mkdir", "loud"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created directory"));
}

// ============================================================================
// ls
// ============================================================================

#[test]
fn test_ls_hides_dotfiles_and_sorts() {
    let env = TestEnv::new();
    env.create_file(".hidden");
    env.create_file("b");
    env.create_file("a.txt");

    let expected = format!("{0}/a.txt\n{0}/b\n", env.path_str());
    env.command()
        .args(["ls", env.path_str()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_ls_names_json() {
    let env = TestEnv::new();
    env.create_dir("models");
    env.create_file("scene.gltf");

    let stdout = env.stdout_of({
        let mut cmd = env.command_in_scratch();
        cmd.args(["--format", "json", "ls", "--names", "."]);
        cmd
    });
    let names: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(names, vec!["models", "scene.gltf"]);
}

#[test]
fn test_ls_missing_directory_fails() {
    let env = TestEnv::new();
    env.command_in_scratch()
        .args(["ls", "missing"])
        .assert()
        .code(5);
}

// ============================================================================
// rm
// ============================================================================

#[test]
fn test_rm_removes_file() {
    let env = TestEnv::new();
    let file = env.create_file("doomed.txt");

    env.command_in_scratch()
        .args(["rm", "doomed.txt"])
        .assert()
        .code(0);
    assert!(!file.exists());
}

#[test]
fn test_rm_refuses_directory() {
    let env = TestEnv::new();
    let dir = env.create_dir("keep");

    env.command_in_scratch().args(["rm", "keep"]).assert().code(5);
    assert!(dir.is_dir());
}

// ============================================================================
// cwd / exe
// ============================================================================

#[test]
fn test_cwd_prints_working_directory() {
    let env = TestEnv::new();
    let dir = env.create_dir("here");
    let expected = format!("{}\n", dir.canonicalize().unwrap().to_str().unwrap());

    env.command()
        .current_dir(&dir)
        .arg("cwd")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_exe_points_at_binary() {
    let env = TestEnv::new();
    env.command()
        .arg("exe")
        .assert()
        .success()
        .stdout(predicate::str::contains("canopath"))
        .stdout(predicate::str::starts_with("/"));
}
