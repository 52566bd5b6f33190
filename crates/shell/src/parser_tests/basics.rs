// SPDX-License-Identifier: MIT

//! Parser tests for statements, pipelines, and chains.

use yare::parameterized;

use super::helpers::{literal, only_command, parse};
use crate::ast::{LogicalOp, WordPart};
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

#[test]
fn empty_input_parses_to_an_empty_list() {
    assert!(parse("").is_empty());
}

#[parameterized(
    blank_lines = { "\n\n\n" },
    comment_only = { "# nothing here" },
    separators_only = { ";;\n;" },
)]
fn inputs_with_no_statements(input: &str) {
    assert!(parse(input).is_empty());
}

#[test]
fn simple_command_with_args() {
    let list = parse("echo one two");
    let cmd = only_command(&list);
    assert_eq!(literal(cmd.name.as_ref().unwrap()), "echo");
    assert_eq!(cmd.args.len(), 2);
    assert_eq!(literal(&cmd.args[0]), "one");
    assert_eq!(literal(&cmd.args[1]), "two");
}

#[test]
fn adjacent_pieces_merge_into_one_word() {
    let list = parse(r#"echo a'b'"c""#);
    let cmd = only_command(&list);
    assert_eq!(cmd.args.len(), 1);
    assert_eq!(
        cmd.args[0].parts,
        vec![
            WordPart::Literal("a".to_string()),
            WordPart::SingleQuoted("b".to_string()),
            WordPart::DoubleQuoted(vec![WordPart::Literal("c".to_string())]),
        ]
    );
}

#[test]
fn variable_argument() {
    let list = parse("echo $X");
    let cmd = only_command(&list);
    assert_eq!(
        cmd.args[0].parts,
        vec![WordPart::Variable {
            name: "X".to_string(),
            default: None
        }]
    );
}

#[parameterized(
    semicolon = { "echo a; echo b", 2 },
    newline = { "echo a\necho b", 2 },
    trailing_semicolon = { "echo a;", 1 },
    surrounding_blanks = { "\n\necho a\n\n", 1 },
)]
fn statement_counts(input: &str, expected: usize) {
    assert_eq!(parse(input).commands.len(), expected);
}

#[test]
fn pipeline_stages_in_order() {
    let list = parse("cat file | grep x | wc -l");
    assert_eq!(list.commands.len(), 1);
    let pipeline = &list.commands[0].first;
    assert_eq!(pipeline.commands.len(), 3);
    assert_eq!(literal(pipeline.commands[2].name.as_ref().unwrap()), "wc");
    assert_eq!(list.count_simple_commands(), 3);
}

#[test]
fn and_or_chain_keeps_operators() {
    let list = parse("a && b || c");
    assert_eq!(list.commands.len(), 1);
    let chain = &list.commands[0];
    assert_eq!(chain.rest.len(), 2);
    assert_eq!(chain.rest[0].0, LogicalOp::And);
    assert_eq!(chain.rest[1].0, LogicalOp::Or);
}

#[test]
fn newline_allowed_after_chain_operator() {
    let list = parse("echo a &&\necho b");
    assert_eq!(list.commands.len(), 1);
    assert_eq!(list.commands[0].rest.len(), 1);
}

#[test]
fn newline_allowed_after_pipe() {
    let list = parse("echo a |\nwc -c");
    assert_eq!(list.commands[0].first.commands.len(), 2);
}

#[test]
fn leading_pipe_is_rejected() {
    let err = Parser::parse("| echo").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Pipe,
            ..
        }
    ));
}

#[test]
fn background_operator_is_rejected() {
    let err = Parser::parse("sleep 5 &").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Ampersand,
            ..
        }
    ));
}

#[test]
fn diagnostic_renders_against_the_source() {
    let input = "echo | | bad";
    let err = Parser::parse(input).unwrap_err();
    let diag = err.diagnostic(input).unwrap();
    assert!(diag.contains("line 1"));
    assert!(diag.contains("echo | | bad"));
}

#[test]
fn spans_cover_the_source() {
    let input = "echo hello";
    let list = parse(input);
    assert_eq!(list.span.slice(input), input);
    let cmd = only_command(&list);
    assert_eq!(cmd.args[0].span.slice(input), "hello");
}
