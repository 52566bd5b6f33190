// SPDX-License-Identifier: MIT

//! State-machine tests for the interactive loop, driven with in-memory
//! readers and writers — no terminal involved.

use std::io::{BufRead, Cursor, Read};

use super::run_interactive;
use crate::error::HostError;
use crate::session::ExecutionSession;

async fn drive(input: &str) -> (Result<(), HostError>, ExecutionSession, String) {
    let mut session = ExecutionSession::new();
    let mut prompts = Vec::new();
    let result = run_interactive(
        &mut session,
        Cursor::new(input.as_bytes().to_vec()),
        &mut prompts,
    )
    .await;
    (result, session, String::from_utf8(prompts).unwrap())
}

#[tokio::test]
async fn first_prompt_precedes_any_input() {
    let (result, _, prompts) = drive("").await;
    assert!(result.is_ok());
    assert_eq!(prompts, "$ ");
}

#[tokio::test]
async fn each_statement_gets_a_fresh_primary_prompt() {
    let (result, session, prompts) = drive("X=1\nY=2\n").await;
    assert!(result.is_ok());
    assert_eq!(prompts, "$ $ $ ");
    assert_eq!(session.shell().var("X"), Some("1"));
    assert_eq!(session.shell().var("Y"), Some("2"));
}

#[tokio::test]
async fn open_quote_prompts_for_continuation_without_executing() {
    let (result, session, prompts) = drive("X='a\nb'\n").await;
    assert!(result.is_ok());
    assert_eq!(prompts, "$ > $ ");
    // Executed exactly once, after the quote closed.
    assert_eq!(session.shell().var("X"), Some("a\nb"));
}

#[tokio::test]
async fn eof_while_incomplete_is_a_parse_error() {
    let (result, session, prompts) = drive("X='open\n").await;
    assert!(matches!(result, Err(HostError::Parse { .. })));
    assert_eq!(prompts, "$ > ");
    assert_eq!(session.shell().var("X"), None);
}

#[tokio::test]
async fn session_state_accumulates_across_statements() {
    let (result, session, _) = drive("X=1\nY=$X\n").await;
    assert!(result.is_ok());
    assert_eq!(session.shell().var("Y"), Some("1"));
}

#[tokio::test]
async fn exit_stops_the_batch_and_the_loop() {
    let (result, session, prompts) = drive("exit 0; X=later\n").await;
    assert!(result.is_ok());
    assert!(session.exited());
    assert_eq!(prompts, "$ ");
    assert_eq!(session.shell().var("X"), None, "statements after exit must not run");
}

#[tokio::test]
async fn exit_status_becomes_the_final_outcome() {
    let (result, _, _) = drive("exit 7\n").await;
    let err = result.unwrap_err();
    assert_eq!(err.exit_status(), Some(7));
}

#[tokio::test]
async fn runtime_failure_keeps_the_loop_alive() {
    let (result, session, prompts) = drive("false\nX=2\n").await;
    assert!(result.is_ok(), "a later success supersedes the failure");
    assert_eq!(prompts, "$ $ $ ");
    assert_eq!(session.shell().var("X"), Some("2"));
}

#[tokio::test]
async fn last_statement_failure_is_the_final_outcome() {
    let (result, _, _) = drive("false\n").await;
    let err = result.unwrap_err();
    assert!(matches!(err, HostError::Exec(_)));
    assert_eq!(err.exit_status(), None);
}

#[tokio::test]
async fn syntax_error_ends_the_session() {
    let (result, _, prompts) = drive("echo | |\nX=1\n").await;
    assert!(matches!(result, Err(HostError::Parse { .. })));
    assert_eq!(prompts, "$ ");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("terminal vanished"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        Err(std::io::Error::other("terminal vanished"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[tokio::test]
async fn read_failure_is_terminal() {
    let mut session = ExecutionSession::new();
    let mut prompts = Vec::new();
    let result = run_interactive(&mut session, FailingReader, &mut prompts).await;
    assert!(matches!(result, Err(HostError::Input(_))));
    assert_eq!(String::from_utf8(prompts).unwrap(), "$ ");
}
