// SPDX-License-Identifier: MIT

//! Async executor that walks a parsed [`CommandList`] against one
//! [`Session`] of interpreter state.
//!
//! A [`Session`] owns shell variables, the exported-name set, the
//! working directory, the last exit status, and the exited flag. Hosts
//! create one session per independent script run; scripts sharing a
//! session observe each other's mutations unless [`Session::reset`] is
//! called between them.
//!
//! External commands are spawned with [`tokio::process::Command`].
//! Builtins: `cd`, `echo`, `exit`, `export`, `pwd`, `unset`, plus
//! standalone `NAME=VALUE` assignments.
//!
//! # Example
//!
//! ```no_run
//! use shoal_shell::{Parser, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ast = Parser::parse("GREETING=hello; echo $GREETING")?;
//! let mut session = Session::new();
//! let status = session.run(&ast).await?;
//! assert_eq!(status, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Unsupported Features
//!
//! - **Background commands** (`cmd &`) and subshells — rejected at parse
//!   time.
//! - **Redirections** and **command substitution** — not in the grammar;
//!   `$(cmd)` stays literal text.
//! - **Word splitting of expansions** — an expanded `$VAR` stays one
//!   word regardless of embedded whitespace.
//! - **Concurrent pipeline stages** — stages run left to right with
//!   captured intermediate output, so an unbounded producer ahead of a
//!   truncating consumer will stall.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::ast::{AndOrList, CommandList};

pub mod error;
mod expand;
mod run;

pub use error::ExecError;

/// One instance of interpreter state: the unit of isolation between
/// concurrently executing scripts.
#[derive(Debug)]
pub struct Session {
    /// Shell variables, including exported ones.
    vars: HashMap<String, String>,
    /// Names passed into child process environments.
    exported: HashSet<String>,
    /// Working directory for builtins and spawned processes.
    cwd: PathBuf,
    /// Directory `reset` restores.
    initial_cwd: PathBuf,
    /// Exit status of the most recent pipeline.
    last_status: i32,
    /// Set once the `exit` builtin runs.
    exited: bool,
}

impl Session {
    /// Create a session rooted at the process working directory.
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            vars: HashMap::new(),
            exported: HashSet::new(),
            initial_cwd: cwd.clone(),
            cwd,
            last_status: 0,
            exited: false,
        }
    }

    /// Root the session at `dir` instead of the process working
    /// directory.
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.initial_cwd.clone_from(&dir);
        self.cwd = dir;
        self
    }

    /// Return the session to its initial state.
    ///
    /// Clears variables, exported names, the last exit status, and the
    /// exited flag, and restores the starting working directory.
    /// Preserves nothing else; filesystem and other process-external
    /// effects of earlier runs are outside its reach.
    pub fn reset(&mut self) {
        self.vars.clear();
        self.exported.clear();
        self.cwd.clone_from(&self.initial_cwd);
        self.last_status = 0;
        self.exited = false;
    }

    /// Execute a full script, statement by statement.
    ///
    /// Stops at the first failing statement (a statement whose final
    /// exit status is non-zero fails with [`ExecError::CommandFailed`])
    /// and after the `exit` builtin. `exit 0` ends the script
    /// successfully; any other exit code surfaces as
    /// [`ExecError::Exit`].
    pub async fn run(&mut self, list: &CommandList) -> Result<i32, ExecError> {
        for statement in &list.commands {
            self.run_statement(statement).await?;
            if self.exited {
                break;
            }
        }
        Ok(self.last_status)
    }

    /// Execute a single statement against the session.
    ///
    /// Interactive hosts call this per statement so they can stop a
    /// batch as soon as [`Session::exited`] turns true.
    pub async fn run_statement(&mut self, statement: &AndOrList) -> Result<i32, ExecError> {
        match self.eval_and_or(statement).await {
            Ok(outcome) if outcome.status == 0 => Ok(0),
            Ok(outcome) => Err(ExecError::CommandFailed {
                command: outcome.command,
                code: outcome.status,
                span: outcome.span,
            }),
            Err(ExecError::Exit { code }) => {
                self.exited = true;
                self.last_status = code;
                if code == 0 {
                    Ok(0)
                } else {
                    Err(ExecError::Exit { code })
                }
            }
            Err(e) => Err(e),
        }
    }

    /// True once the `exit` builtin has run.
    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Exit status of the most recently evaluated pipeline.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Look up a session variable. Does not consult the process
    /// environment.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The session's current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
