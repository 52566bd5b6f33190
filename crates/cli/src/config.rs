// SPDX-License-Identifier: MIT

//! Command-line surface and execution-mode resolution.
//!
//! Flags are parsed once at startup into an immutable [`Config`];
//! nothing downstream consults argument state again.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "shoal",
    version,
    about = "Run shell scripts sequentially, concurrently, or interactively"
)]
pub struct Cli {
    /// Execute COMMAND as an inline script
    #[arg(
        short = 'c',
        long = "command",
        value_name = "COMMAND",
        conflicts_with_all = ["scripts", "concurrent"]
    )]
    pub command: Option<String>,

    /// Script files to execute in order, sharing one session
    #[arg(value_name = "SCRIPTS")]
    pub scripts: Vec<PathBuf>,

    /// Script files to execute concurrently, each in its own session;
    /// repeatable, comma-separated values accumulate
    #[arg(
        short = 'a',
        long = "concurrent",
        value_name = "PATHS",
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub concurrent: Vec<PathBuf>,
}

/// Immutable run configuration, built once from [`Cli`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Inline script from `-c`, if given.
    pub command: Option<String>,
    /// Positional script paths, in order.
    pub scripts: Vec<PathBuf>,
    /// Concurrent script paths from `-a`.
    pub concurrent: Vec<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            command: cli.command,
            scripts: cli.scripts,
            concurrent: cli.concurrent,
        }
    }
}

/// How this invocation will execute, decided once from the [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the `-c` string as a single sequential script.
    Command(String),
    /// Prompt-driven loop on a terminal stdin.
    Interactive,
    /// Treat piped stdin as a single sequential script.
    Stdin,
    /// Run positional scripts in order, then the concurrent set in
    /// parallel.
    Batch {
        /// Scripts sharing one session, in order.
        sequential: Vec<PathBuf>,
        /// Scripts run in parallel, one fresh session each.
        concurrent: Vec<PathBuf>,
    },
}

impl Mode {
    /// Pick the execution mode.
    ///
    /// Precedence: a non-empty `-c` wins (clap already rejects it
    /// alongside other script arguments); with no script arguments at
    /// all, a terminal stdin means interactive and anything else means
    /// stdin-as-script; otherwise batch.
    pub fn resolve(config: Config, stdin_is_tty: bool) -> Mode {
        match config.command {
            Some(command) if !command.is_empty() => Mode::Command(command),
            _ => {
                if config.scripts.is_empty() && config.concurrent.is_empty() {
                    if stdin_is_tty {
                        Mode::Interactive
                    } else {
                        Mode::Stdin
                    }
                } else {
                    Mode::Batch {
                        sequential: config.scripts,
                        concurrent: config.concurrent,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
