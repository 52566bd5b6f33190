// SPDX-License-Identifier: MIT

//! The interactive read-eval-print loop.
//!
//! An explicit state machine over one shared [`ExecutionSession`] and
//! one long-lived [`InteractiveParser`]:
//!
//! - `AwaitingStatement` — emit the primary prompt and read a line.
//! - `AwaitingContinuation` — the parser wants more input; emit the
//!   continuation prompt instead. Nothing executes while incomplete.
//! - `Exited` — terminal; the interpreter ran `exit`, remaining
//!   statements in the batch are dropped.
//! - `Failed` — terminal; reading input failed.
//!
//! The loop is generic over its reader and writer so the whole state
//! machine is testable without a terminal. Unlike sequential script
//! runs, the session is never reset here: an interactive session
//! accumulates state until it ends.

use std::io::{BufRead, Write};

use tracing::trace;

use shoal_shell::{Feed, InteractiveParser};

use crate::error::HostError;
use crate::session::ExecutionSession;

const PRIMARY_PROMPT: &str = "$ ";
const CONTINUATION_PROMPT: &str = "> ";

/// Loop states. The two terminal states carry their outcome in `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    AwaitingStatement,
    AwaitingContinuation,
    Exited,
    Failed,
}

/// Drive `session` from `input` until end of input, a read failure, or
/// an interpreter exit.
///
/// The final outcome is the last executed statement's result: a
/// mid-session runtime failure keeps the loop alive and is only
/// reported if nothing ran after it. A syntax error that can never
/// complete ends the session immediately, as does end of input while a
/// statement is still open.
pub async fn run_interactive<R, W>(
    session: &mut ExecutionSession,
    mut input: R,
    mut output: W,
) -> Result<(), HostError>
where
    R: BufRead,
    W: Write,
{
    let mut parser = InteractiveParser::new();
    let mut state = LoopState::AwaitingStatement;
    let mut last: Result<(), HostError> = Ok(());

    loop {
        let prompt = match state {
            LoopState::AwaitingStatement => PRIMARY_PROMPT,
            LoopState::AwaitingContinuation => CONTINUATION_PROMPT,
            LoopState::Exited | LoopState::Failed => break,
        };
        write_prompt(&mut output, prompt)?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            // End of input is a normal termination, not an error.
            Ok(0) => {
                return match parser.finish() {
                    Ok(()) => last,
                    Err(e) => Err(HostError::Parse {
                        name: "<stdin>".to_string(),
                        detail: e.to_string(),
                    }),
                };
            }
            Ok(_) => {}
            Err(source) => {
                trace!("interactive read failed");
                state = LoopState::Failed;
                last = Err(HostError::Input(source));
                continue;
            }
        }

        match parser.feed(&line) {
            Ok(Feed::Incomplete) => state = LoopState::AwaitingContinuation,
            Ok(Feed::Complete(list)) => {
                state = LoopState::AwaitingStatement;
                for statement in &list.commands {
                    last = session.run_statement(statement).await;
                    if session.exited() {
                        state = LoopState::Exited;
                        break;
                    }
                }
            }
            Err(e) => {
                return Err(HostError::Parse {
                    name: "<stdin>".to_string(),
                    detail: e.to_string(),
                });
            }
        }
    }

    last
}

fn write_prompt<W: Write>(output: &mut W, prompt: &str) -> Result<(), HostError> {
    let write = output
        .write_all(prompt.as_bytes())
        .and_then(|()| output.flush());
    write.map_err(HostError::Input)
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
