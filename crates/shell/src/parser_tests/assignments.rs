// SPDX-License-Identifier: MIT

//! Parser tests for `NAME=VALUE` assignment handling.
//!
//! Assignments are recognized only at command-start positions; after
//! the first non-assignment word they are ordinary arguments.

use super::helpers::{literal, only_command, parse};
use crate::ast::WordPart;

#[test]
fn standalone_assignment_has_no_command_name() {
    let list = parse("VAR=value");
    let cmd = only_command(&list);
    assert!(cmd.name.is_none());
    assert!(cmd.args.is_empty());
    assert_eq!(cmd.env.len(), 1);
    assert_eq!(cmd.env[0].name, "VAR");
    assert_eq!(cmd.env[0].value.parts, vec![WordPart::literal("value")]);
}

#[test]
fn empty_assignment_value() {
    let list = parse("VAR=");
    let cmd = only_command(&list);
    assert_eq!(cmd.env[0].value.parts, vec![WordPart::literal("")]);
}

#[test]
fn assignment_prefix_before_command() {
    let list = parse("VAR=value cmd arg");
    let cmd = only_command(&list);
    assert_eq!(cmd.env.len(), 1);
    assert_eq!(literal(cmd.name.as_ref().unwrap()), "cmd");
    assert_eq!(cmd.args.len(), 1);
}

#[test]
fn multiple_prefixes() {
    let list = parse("A=1 B=2 cmd");
    let cmd = only_command(&list);
    assert_eq!(cmd.env.len(), 2);
    assert_eq!(cmd.env[0].name, "A");
    assert_eq!(cmd.env[1].name, "B");
}

#[test]
fn assignment_after_command_name_is_an_argument() {
    let list = parse("cmd VAR=value");
    let cmd = only_command(&list);
    assert!(cmd.env.is_empty());
    assert_eq!(cmd.args.len(), 1);
    assert_eq!(literal(&cmd.args[0]), "VAR=value");
}

#[test]
fn quoted_value_keeps_structure() {
    let list = parse(r#"VAR="a b""#);
    let cmd = only_command(&list);
    assert_eq!(
        cmd.env[0].value.parts,
        vec![WordPart::DoubleQuoted(vec![WordPart::Literal(
            "a b".to_string()
        )])]
    );
}

#[test]
fn value_merges_adjacent_pieces() {
    let list = parse("VAR=a'b'$C");
    let cmd = only_command(&list);
    assert_eq!(
        cmd.env[0].value.parts,
        vec![
            WordPart::Literal("a".to_string()),
            WordPart::SingleQuoted("b".to_string()),
            WordPart::Variable {
                name: "C".to_string(),
                default: None
            },
        ]
    );
}

#[test]
fn invalid_name_is_not_an_assignment() {
    let list = parse("1x=2");
    let cmd = only_command(&list);
    assert!(cmd.env.is_empty());
    assert_eq!(literal(cmd.name.as_ref().unwrap()), "1x=2");
}

#[test]
fn assignment_can_start_a_chain() {
    let list = parse("X=1 && echo ok");
    assert_eq!(list.commands.len(), 1);
    let chain = &list.commands[0];
    assert!(chain.first.commands[0].name.is_none());
    assert_eq!(chain.rest.len(), 1);
}
