// SPDX-License-Identifier: MIT

//! Tests for the continuation query: which parse failures mean "feed me
//! another line" and which are hard errors.

use yare::parameterized;

use crate::parser::Parser;

#[parameterized(
    open_single_quote = { "echo 'partial" },
    open_double_quote = { "echo \"partial" },
    open_expansion = { "echo ${NAME" },
    trailing_and = { "echo a &&" },
    trailing_and_newline = { "echo a &&\n" },
    trailing_or = { "echo a ||" },
    trailing_pipe = { "echo a |" },
    quote_spanning_line = { "echo 'first\nsecond" },
)]
fn needs_continuation(input: &str) {
    let err = Parser::parse(input).unwrap_err();
    assert!(err.is_incomplete(), "{input:?} should be incomplete: {err}");
}

#[parameterized(
    leading_pipe = { "| echo" },
    doubled_pipe = { "echo | | bad" },
    background = { "echo a & echo b" },
    operator_after_statement = { "echo a b &" },
)]
fn hard_errors_never_complete(input: &str) {
    let err = Parser::parse(input).unwrap_err();
    assert!(!err.is_incomplete(), "{input:?} should be hard: {err}");
}

#[test]
fn completed_quote_parses_to_one_word() {
    let list = Parser::parse("echo 'first\nsecond'").unwrap();
    assert_eq!(list.commands.len(), 1);
    assert_eq!(list.count_simple_commands(), 1);
}
