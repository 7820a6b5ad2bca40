//! Renders `canopath.1` into `OUT_DIR/man` with clap_mangen.
//!
//! A build script cannot link the crate it builds, so the command tree is
//! declared again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Man-page view of the command tree. Mirrors src/cli.rs.
fn build_cli() -> Command {
    Command::new("canopath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize and manipulate POSIX-style paths")
        .long_about(
            "Command-line tool for canonicalizing, composing and inspecting paths, \
             and for creating, listing and removing filesystem entries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Resolve relative filesystem operands against this directory")
                .value_name("PATH")
                .global(true)
                .env("CANOPATH_BASE_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .global(true)
                .env("CANOPATH_FORMAT"),
        )
        .subcommands(vec![
            Command::new("canon")
                .about("Print the canonical form of one or more paths")
                .long_about("Resolve '.', '..' and duplicate separators without touching the filesystem"),
            Command::new("join")
                .about("Append a leaf path to a root path")
                .long_about("Compose two paths; an absolute leaf replaces the root"),
            Command::new("inspect")
                .about("Show every property of a path")
                .long_about("Show name, extension, parent, segments and filesystem status of a path"),
            Command::new("split")
                .about("Print the segments of a path")
                .long_about("Print each segment on its own line; a leading '/' is its own segment"),
            Command::new("mkdir")
                .about("Create a directory")
                .long_about("Create a directory with owner-only permissions, optionally with its ancestors"),
            Command::new("ls")
                .about("List the visible entries of a directory")
                .long_about("List directory entries, skipping names that start with '.'"),
            Command::new("rm")
                .about("Remove a file")
                .long_about("Remove a file; directories are refused"),
            Command::new("cwd")
                .about("Print the current working directory"),
            Command::new("exe")
                .about("Print the path of the running executable"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("canopath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
