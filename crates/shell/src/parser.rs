// SPDX-License-Identifier: MIT

//! Recursive-descent parser from tokens to [`CommandList`].
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! command_list : and_or ((';' | newline) and_or)*
//! and_or       : pipeline (('&&' | '||') pipeline)*
//! pipeline     : simple ('|' simple)*
//! simple       : assignment* word word*
//! ```
//!
//! Adjacent word-like tokens (no whitespace between their spans) merge
//! into one [`Word`], so `foo"bar"$X` parses as a single argument.

use crate::ast::{
    AndOrList, CommandList, EnvAssignment, LogicalOp, Pipeline, SimpleCommand, Word, WordPart,
};
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{is_valid_variable_name, Token, TokenKind};

/// Shell parser. See [`Parser::parse`].
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    input_len: usize,
}

impl Parser {
    /// Parse `input` into a command list.
    ///
    /// Empty input (or input that is only blank lines and comments)
    /// parses to an empty list.
    pub fn parse(input: &str) -> Result<CommandList, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            input_len: input.len(),
        };
        parser.parse_command_list()
    }

    fn parse_command_list(&mut self) -> Result<CommandList, ParseError> {
        let start = self.current_span_start();
        let mut commands = Vec::new();

        self.skip_separators();
        while !self.at_end() {
            let and_or = self.parse_and_or()?;
            commands.push(and_or);
            if !self.at_end() && !self.at_separator() {
                return Err(self.unexpected_token("';' or newline"));
            }
            self.skip_separators();
        }

        let end = self.previous_span_end().max(start);
        Ok(CommandList {
            commands,
            span: Span::new(start, end),
        })
    }

    fn parse_and_or(&mut self) -> Result<AndOrList, ParseError> {
        let first = self.parse_pipeline()?;
        let start_span = first.span;
        let mut end_span = first.span;
        let mut rest = Vec::new();

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::And) => LogicalOp::And,
                Some(TokenKind::Or) => LogicalOp::Or,
                _ => break,
            };
            self.advance();
            self.skip_newlines();
            let next = self.parse_pipeline()?;
            end_span = next.span;
            rest.push((op, next));
        }

        Ok(AndOrList {
            first,
            rest,
            span: start_span.merge(end_span),
        })
    }

    fn parse_pipeline(&mut self) -> Result<Pipeline, ParseError> {
        let first = self.parse_simple_command()?;
        let start_span = first.span;
        let mut end_span = first.span;
        let mut commands = vec![first];

        while matches!(self.peek_kind(), Some(TokenKind::Pipe)) {
            self.advance();
            self.skip_newlines();
            let stage = self.parse_simple_command()?;
            end_span = stage.span;
            commands.push(stage);
        }

        Ok(Pipeline {
            commands,
            span: start_span.merge(end_span),
        })
    }

    /// Parse `assignment* word word*`.
    ///
    /// `NAME=VALUE` words at command-start positions become assignment
    /// prefixes; after the first non-assignment word they are ordinary
    /// arguments. A statement of assignments alone is a valid command
    /// with no name.
    fn parse_simple_command(&mut self) -> Result<SimpleCommand, ParseError> {
        let start_span = self
            .peek()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::empty(self.input_len));

        let mut env = Vec::new();
        while let Some(assignment) = self.parse_assignment()? {
            env.push(assignment);
        }

        match self.parse_word()? {
            Some(name) => {
                let mut args = Vec::new();
                let mut end_span = name.span;
                while let Some(word) = self.parse_word()? {
                    end_span = word.span;
                    args.push(word);
                }
                Ok(SimpleCommand {
                    env,
                    name: Some(name),
                    args,
                    span: start_span.merge(end_span),
                })
            }
            None if !env.is_empty() => {
                // Assignments without a command mutate the session.
                let end_span = self.previous_span_end();
                Ok(SimpleCommand {
                    env,
                    name: None,
                    args: Vec::new(),
                    span: start_span.merge(Span::empty(end_span)),
                })
            }
            None => Err(self.unexpected_token("command")),
        }
    }

    /// Try to parse one `NAME=VALUE` assignment, including any adjacent
    /// quoted or variable tokens in the value (`X="a b"$Y`).
    fn parse_assignment(&mut self) -> Result<Option<EnvAssignment>, ParseError> {
        let token = match self.peek() {
            Some(t) => t.clone(),
            None => return Ok(None),
        };
        let TokenKind::Word(text) = &token.kind else {
            return Ok(None);
        };
        let Some(eq) = text.find('=') else {
            return Ok(None);
        };
        let (name, value_text) = (&text[..eq], &text[eq + 1..]);
        if !is_valid_variable_name(name) {
            return Ok(None);
        }
        self.advance();

        let value_start = token.span.start + name.len() + 1;
        let mut value_end = token.span.end;
        let mut parts = Vec::new();
        if !value_text.is_empty() {
            parts.push(WordPart::literal(value_text));
        }
        self.collect_adjacent_parts(&mut value_end, &mut parts);
        if parts.is_empty() {
            parts.push(WordPart::literal(""));
        }

        Ok(Some(EnvAssignment {
            name: name.to_string(),
            value: Word {
                parts,
                span: Span::new(value_start, value_end),
            },
            span: token.span,
        }))
    }

    /// Parse one word, merging adjacent word-like tokens.
    fn parse_word(&mut self) -> Result<Option<Word>, ParseError> {
        let first = match self.peek() {
            Some(t) => t.clone(),
            None => return Ok(None),
        };
        let mut parts = match Self::token_to_parts(&first.kind) {
            Some(parts) => parts,
            None => return Ok(None),
        };
        let start = first.span.start;
        let mut end = first.span.end;
        self.advance();
        self.collect_adjacent_parts(&mut end, &mut parts);

        Ok(Some(Word {
            parts,
            span: Span::new(start, end),
        }))
    }

    /// Extend `parts` with every following token that touches `end`
    /// with no whitespace gap.
    fn collect_adjacent_parts(&mut self, end: &mut usize, parts: &mut Vec<WordPart>) {
        loop {
            let token = match self.peek() {
                Some(t) if t.span.start == *end => t.clone(),
                _ => break,
            };
            let Some(more) = Self::token_to_parts(&token.kind) else {
                break;
            };
            *end = token.span.end;
            parts.extend(more);
            self.advance();
        }
    }

    /// Word parts for a word-like token; `None` for operators.
    fn token_to_parts(kind: &TokenKind) -> Option<Vec<WordPart>> {
        match kind {
            TokenKind::Word(s) => Some(vec![WordPart::literal(s.clone())]),
            TokenKind::SingleQuoted(s) => Some(vec![WordPart::single_quoted(s.clone())]),
            TokenKind::DoubleQuoted(parts) => Some(vec![WordPart::DoubleQuoted(parts.clone())]),
            TokenKind::Variable { name, default } => Some(vec![WordPart::Variable {
                name: name.clone(),
                default: default.clone(),
            }]),
            _ => None,
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn at_separator(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Semi | TokenKind::Newline))
    }

    fn skip_separators(&mut self) {
        while self.at_separator() {
            self.advance();
        }
    }

    /// Newlines are permitted after `&&`, `||`, and `|`.
    fn skip_newlines(&mut self) {
        while matches!(self.peek_kind(), Some(TokenKind::Newline)) {
            self.advance();
        }
    }

    fn current_span_start(&self) -> usize {
        self.peek().map(|t| t.span.start).unwrap_or(0)
    }

    fn previous_span_end(&self) -> usize {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span.end
        } else {
            0
        }
    }

    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.clone(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
