//! Shared harness for jit-cli integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

pub fn jit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jit"))
}

/// Run the jit binary in `dir` with the given arguments.
pub fn jit(dir: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(jit_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("LC_ALL", "C")
        .output()
        .expect("failed to run jit");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run jit and panic with its stderr if it does not exit 0.
pub fn jit_ok(dir: &Path, args: &[&str]) -> CommandResult {
    let result = jit(dir, args);
    assert_eq!(
        result.exit_code, 0,
        "jit {:?} failed:\nstdout: {}\nstderr: {}",
        args, result.stdout, result.stderr
    );
    result
}

/// Fresh repository with `HEAD -> refs/heads/main` and no commits.
pub fn setup_empty_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    jit_ok(dir.path(), &["init", "-q"]);
    dir
}

pub fn read_git_file(dir: &Path, rel: &str) -> String {
    std::fs::read_to_string(dir.join(".git").join(rel)).unwrap()
}
