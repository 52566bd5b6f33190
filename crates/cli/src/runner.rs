// SPDX-License-Identifier: MIT

//! Sequential and concurrent script runners.

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::HostError;
use crate::session::ExecutionSession;
use crate::source::ScriptSource;

/// Run `sources` in order against one shared session, stopping at the
/// first failure. Later sources are never attempted after a failure.
pub async fn run_sequential(
    session: &mut ExecutionSession,
    sources: &[ScriptSource],
) -> Result<(), HostError> {
    for source in sources {
        session.parse_and_run(source).await?;
    }
    Ok(())
}

/// Run every source in parallel, each in its own fresh session.
///
/// No script observes another's interpreter state, no script is
/// cancelled when a sibling fails, and the runner always waits for
/// every script to report. Results arrive over a channel buffered to
/// the script count so no task ever blocks reporting; the aggregate
/// keeps them in completion order.
pub async fn run_concurrent(sources: Vec<ScriptSource>) -> Result<(), HostError> {
    if sources.is_empty() {
        return Ok(());
    }
    debug!(count = sources.len(), "launching concurrent scripts");

    let (tx, mut rx) = mpsc::channel(sources.len());
    for source in sources {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut session = ExecutionSession::new();
            let outcome = session.parse_and_run(&source).await;
            let _ = tx.send(outcome).await;
        });
    }
    drop(tx);

    let mut failures = Failures::new();
    while let Some(outcome) = rx.recv().await {
        failures.add(outcome);
    }
    debug!(failed = failures.has_failure(), "concurrent scripts done");
    failures.into_result()
}

/// Accumulates per-script outcomes into one composite verdict.
#[derive(Debug, Default)]
pub struct Failures {
    messages: Vec<String>,
}

impl Failures {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome. Successes contribute nothing.
    pub fn add(&mut self, outcome: Result<(), HostError>) {
        if let Err(err) = outcome {
            self.messages.push(err.to_string());
        }
    }

    /// True if any recorded outcome was a failure.
    pub fn has_failure(&self) -> bool {
        !self.messages.is_empty()
    }

    /// The composite outcome: success when nothing failed, otherwise
    /// one aggregated error with each failure message on its own line,
    /// in the order they were recorded.
    ///
    /// The aggregate is always an ordinary failure. Even when a
    /// constituent carried an explicit exit status, the process exits
    /// with the generic failure code.
    pub fn into_result(self) -> Result<(), HostError> {
        if self.messages.is_empty() {
            return Ok(());
        }
        Err(HostError::Aggregate(self.messages.join("\n")))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
