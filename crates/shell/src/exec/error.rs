// SPDX-License-Identifier: MIT

//! Executor errors.

use thiserror::Error;

use crate::span::Span;

/// Errors raised while executing a parsed script.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The `exit` builtin ran. Not a failure in itself: the host
    /// propagates `code` verbatim as the process exit status.
    #[error("exit {code}")]
    Exit {
        /// Requested exit status.
        code: i32,
    },

    /// A statement finished with a non-zero exit status.
    #[error("command failed: {command} (exit status {code})")]
    CommandFailed {
        /// The last command the statement ran.
        command: String,
        /// Its exit status.
        code: i32,
        /// Where the command sits in the source.
        span: Span,
    },

    /// The command is no builtin and spawning it reported `NotFound`.
    #[error("command not found: {command}")]
    CommandNotFound {
        /// The name that failed to resolve.
        command: String,
        /// Where the command sits in the source.
        span: Span,
    },

    /// Spawning an external command failed for a reason other than
    /// `NotFound`.
    #[error("failed to spawn {command}: {source}")]
    SpawnFailed {
        /// The command being spawned.
        command: String,
        /// The underlying error.
        source: std::io::Error,
        /// Where the command sits in the source.
        span: Span,
    },

    /// A builtin rejected its operands.
    #[error("{command}: {message}")]
    Builtin {
        /// The builtin's name.
        command: String,
        /// What was wrong.
        message: String,
        /// Where the builtin sits in the source.
        span: Span,
    },

    /// An I/O operation outside process spawning failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// The underlying error.
        source: std::io::Error,
    },
}

impl ExecError {
    /// The explicit exit status, present only for [`ExecError::Exit`].
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            ExecError::Exit { code } => Some(*code),
            _ => None,
        }
    }

    /// The source location, for errors that carry one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExecError::CommandFailed { span, .. }
            | ExecError::CommandNotFound { span, .. }
            | ExecError::SpawnFailed { span, .. }
            | ExecError::Builtin { span, .. } => Some(*span),
            ExecError::Exit { .. } | ExecError::Io { .. } => None,
        }
    }
}
