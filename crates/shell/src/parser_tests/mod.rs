// SPDX-License-Identifier: MIT

mod assignments;
mod basics;
mod incomplete;

mod helpers {
    use crate::ast::{CommandList, SimpleCommand, Word};
    use crate::parser::Parser;

    pub fn parse(input: &str) -> CommandList {
        Parser::parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
    }

    /// The one simple command in a single-statement, single-stage input.
    pub fn only_command(list: &CommandList) -> &SimpleCommand {
        assert_eq!(list.commands.len(), 1, "expected one statement");
        let pipeline = &list.commands[0].first;
        assert!(list.commands[0].rest.is_empty(), "expected no chain");
        assert_eq!(pipeline.commands.len(), 1, "expected one stage");
        &pipeline.commands[0]
    }

    pub fn literal(word: &Word) -> &str {
        word.as_literal()
            .unwrap_or_else(|| panic!("not a plain literal: {word:?}"))
    }
}
