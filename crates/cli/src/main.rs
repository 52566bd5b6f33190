// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shoal — run shell scripts sequentially, concurrently, or
//! interactively.
//!
//! Usage:
//!   shoal -c 'echo hi'          # inline command
//!   shoal a.sh b.sh             # sequential scripts, one session
//!   shoal -a x.sh -a y.sh       # concurrent scripts, isolated sessions
//!   shoal < script.sh           # stdin as a script
//!   shoal                       # interactive (terminal stdin)

mod config;
mod error;
mod interactive;
mod runner;
mod session;
mod source;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Cli, Config, Mode};
use crate::error::HostError;
use crate::interactive::run_interactive;
use crate::runner::{run_concurrent, run_sequential};
use crate::session::ExecutionSession;
use crate::source::ScriptSource;

#[tokio::main]
async fn main() {
    // Logs go to stderr so prompts and script output stay clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from(Cli::parse());
    if let Err(err) = run(config).await {
        if let Some(code) = err
            .downcast_ref::<HostError>()
            .and_then(HostError::exit_status)
        {
            std::process::exit(code);
        }
        eprintln!("shoal: {err}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let mode = Mode::resolve(config, std::io::stdin().is_terminal());
    debug!(?mode, "resolved execution mode");

    match mode {
        Mode::Command(command) => {
            let mut session = ExecutionSession::new();
            session
                .parse_and_run(&ScriptSource::Command(command))
                .await?;
        }
        Mode::Stdin => {
            let mut session = ExecutionSession::new();
            session.parse_and_run(&ScriptSource::Stdin).await?;
        }
        Mode::Interactive => {
            let mut session = ExecutionSession::new();
            let stdin = std::io::stdin();
            run_interactive(&mut session, stdin.lock(), std::io::stdout()).await?;
        }
        Mode::Batch {
            sequential,
            concurrent,
        } => {
            let mut session = ExecutionSession::new();
            let sources: Vec<ScriptSource> =
                sequential.into_iter().map(ScriptSource::File).collect();
            run_sequential(&mut session, &sources).await?;
            run_concurrent(concurrent.into_iter().map(ScriptSource::File).collect()).await?;
        }
    }
    Ok(())
}
