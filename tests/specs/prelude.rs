//! Test helpers for behavioral specifications.
//!
//! Provides a small fluent DSL for invoking the shoal binary:
//! `cli().args(&["-c", "exit 7"]).exits(7)`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Returns the path to the shoal binary.
///
/// Checks the standard target directory first, then resolves relative
/// to the test binary itself (which lives at `target/debug/deps/`).
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Create a CLI builder for shoal invocations.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Write a script file into `dir` and return its absolute path string.
pub fn script(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("failed to write script fixture");
    path.display().to_string()
}

/// Create a temp directory for test isolation.
pub fn test_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Fluent builder for one binary invocation.
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            stdin: None,
        }
    }

    /// Add CLI arguments.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set the working directory.
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Pipe text into the process's stdin. Without this, stdin is
    /// closed so stdin-script mode sees an empty script.
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    fn run(self) -> Output {
        let mut command = Command::new(binary_path("shoal"));
        command
            .args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        command.stdin(Stdio::piped());

        let mut child = command.spawn().expect("shoal should spawn");
        let mut stdin = child.stdin.take().expect("stdin should be piped");
        if let Some(text) = &self.stdin {
            stdin
                .write_all(text.as_bytes())
                .expect("writing stdin should succeed");
        }
        drop(stdin);
        let output = child.wait_with_output().expect("shoal should run");
        output
    }

    /// Run and expect success (exit code 0).
    pub fn passes(self) -> RunAssert {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected success, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (any non-zero exit code).
    pub fn fails(self) -> RunAssert {
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected failure, but it passed\nstdout: {}",
            String::from_utf8_lossy(&output.stdout)
        );
        RunAssert { output }
    }

    /// Run and expect a specific exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.run();
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions.
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as a string.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals `expected` exactly.
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout contains `needle`.
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout()
        );
        self
    }

    /// Assert stdout does not contain `needle`.
    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout().contains(needle),
            "stdout unexpectedly contains {needle:?}:\n{}",
            self.stdout()
        );
        self
    }

    /// Assert stderr contains `needle`.
    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr()
        );
        self
    }

    /// Assert stderr is completely empty.
    pub fn stderr_empty(self) -> Self {
        assert_eq!(self.stderr(), "");
        self
    }

    /// Assert stderr has exactly `n` lines.
    pub fn stderr_lines(self, n: usize) -> Self {
        let count = self.stderr().lines().count();
        assert_eq!(count, n, "stderr:\n{}", self.stderr());
        self
    }
}
