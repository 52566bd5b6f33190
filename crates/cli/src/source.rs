// SPDX-License-Identifier: MIT

//! Script sources: one unit of executable input.

use std::path::PathBuf;

use crate::error::HostError;

/// Where a script's text comes from. Immutable once resolved; files are
/// opened lazily at execution time.
#[derive(Debug, Clone)]
pub enum ScriptSource {
    /// Inline text from `-c`.
    Command(String),
    /// A script file path.
    File(PathBuf),
    /// The process's standard input, read to end.
    Stdin,
}

impl ScriptSource {
    /// Label used in error reports.
    pub fn label(&self) -> String {
        match self {
            ScriptSource::Command(_) => "<command>".to_string(),
            ScriptSource::File(path) => path.display().to_string(),
            ScriptSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the script text, tagging failures with the source label.
    pub fn read_text(&self) -> Result<String, HostError> {
        match self {
            ScriptSource::Command(text) => Ok(text.clone()),
            ScriptSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| HostError::Source {
                    name: self.label(),
                    source,
                })
            }
            ScriptSource::Stdin => {
                std::io::read_to_string(std::io::stdin()).map_err(|source| HostError::Source {
                    name: self.label(),
                    source,
                })
            }
        }
    }
}
