// SPDX-License-Identifier: MIT

//! Host-level error taxonomy.

use thiserror::Error;

use shoal_shell::span::locate_span;
use shoal_shell::{ExecError, ParseError};

/// Everything that can go wrong running scripts.
///
/// The distinguished case is an [`ExecError::Exit`] inside
/// [`HostError::Exec`]: it is not reported on stderr, its code becomes
/// the process exit status verbatim. Every other variant is an ordinary
/// failure — one stderr report and a generic exit status of 1.
#[derive(Debug, Error)]
pub enum HostError {
    /// A named script source could not be read.
    #[error("{name}: {source}")]
    Source {
        /// The script source's label.
        name: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A script failed to parse; it was not executed at all.
    #[error("{name}: {detail}")]
    Parse {
        /// The script source's label.
        name: String,
        /// Rendered parse error with its location. Single-line, so
        /// aggregated reports stay one line per failure.
        detail: String,
    },

    /// Execution failed (or requested an explicit exit status).
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// Aggregated failures from the concurrent runner, one message per
    /// line in completion order.
    #[error("{0}")]
    Aggregate(String),

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Input(std::io::Error),
}

impl HostError {
    /// Build a parse failure tagged with its source label, locating the
    /// error in the script text when it carries a span.
    pub fn parse(name: impl Into<String>, text: &str, err: ParseError) -> Self {
        let detail = match err.span() {
            Some(span) => {
                let (line, col, _) = locate_span(text, span);
                format!("{err} (line {line}, column {})", col + 1)
            }
            None => err.to_string(),
        };
        HostError::Parse {
            name: name.into(),
            detail,
        }
    }

    /// The explicit exit status to propagate, if this outcome carries
    /// one.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            HostError::Exec(e) => e.exit_status(),
            _ => None,
        }
    }
}
