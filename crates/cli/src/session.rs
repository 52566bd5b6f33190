// SPDX-License-Identifier: MIT

//! The execution session: one parser/interpreter pairing owned by a
//! runner.

use tracing::debug;

use shoal_shell::{AndOrList, Parser, Session};

use crate::error::HostError;
use crate::source::ScriptSource;

/// Wraps one interpreter [`Session`]. Sequential runs share a session
/// (resetting it between scripts); the concurrent runner creates one
/// per script so no script observes another's state.
#[derive(Debug, Default)]
pub struct ExecutionSession {
    shell: Session,
}

impl ExecutionSession {
    /// Create a session with fresh interpreter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and run one script source as a complete unit.
    ///
    /// Parsing happens first; a script that fails to parse is never
    /// partially executed. The session is reset before execution, so
    /// each full-script run starts from clean interpreter state, and
    /// the state the script leaves behind persists until the next run.
    pub async fn parse_and_run(&mut self, source: &ScriptSource) -> Result<(), HostError> {
        let name = source.label();
        debug!(script = %name, "running script");
        let text = source.read_text()?;
        let list = Parser::parse(&text).map_err(|e| HostError::parse(&name, &text, e))?;
        self.shell.reset();
        self.shell.run(&list).await?;
        Ok(())
    }

    /// Run one statement against the session without resetting; the
    /// interactive loop accumulates state across the whole session.
    pub async fn run_statement(&mut self, statement: &AndOrList) -> Result<(), HostError> {
        self.shell.run_statement(statement).await?;
        Ok(())
    }

    /// True once the interpreter has executed `exit`.
    pub fn exited(&self) -> bool {
        self.shell.exited()
    }

    /// The wrapped interpreter state, for inspection.
    pub fn shell(&self) -> &Session {
        &self.shell
    }
}
