// SPDX-License-Identifier: MIT

//! Hand-rolled tokenizer for the supported shell subset.
//!
//! Operates on byte offsets so every token carries an accurate [`Span`].
//! Quoting rules follow POSIX: single quotes are verbatim, double quotes
//! resolve `\"`, `\\`, `` \` ``, and `\$` escapes and keep `$NAME` /
//! `${NAME}` expansions as structured parts, backslash outside quotes
//! escapes the next character.

use crate::ast::WordPart;
use crate::error::LexerError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// The tokenizer. See [`Lexer::tokenize`].
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Tokenize `input`, or report the construct left unterminated.
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer {
            src: input,
            pos: 0,
            tokens: Vec::new(),
        };
        lexer.run()?;
        Ok(lexer.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.pos),
        });
    }

    fn run(&mut self) -> Result<(), LexerError> {
        while let Some(c) = self.peek() {
            let start = self.pos;
            match c {
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '\n' => {
                    self.bump();
                    self.push(TokenKind::Newline, start);
                }
                '#' => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                ';' => {
                    self.bump();
                    self.push(TokenKind::Semi, start);
                }
                '|' => {
                    self.bump();
                    if self.peek() == Some('|') {
                        self.bump();
                        self.push(TokenKind::Or, start);
                    } else {
                        self.push(TokenKind::Pipe, start);
                    }
                }
                '&' => {
                    self.bump();
                    if self.peek() == Some('&') {
                        self.bump();
                        self.push(TokenKind::And, start);
                    } else {
                        self.push(TokenKind::Ampersand, start);
                    }
                }
                '\'' => self.single_quoted()?,
                '"' => self.double_quoted()?,
                '$' => self.dollar()?,
                _ => self.word(),
            }
        }
        Ok(())
    }

    fn single_quoted(&mut self) -> Result<(), LexerError> {
        let start = self.pos;
        self.bump();
        let content_start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\'' {
                let content = self.src[content_start..self.pos].to_string();
                self.bump();
                self.push(TokenKind::SingleQuoted(content), start);
                return Ok(());
            }
            self.bump();
        }
        Err(LexerError::UnterminatedSingleQuote {
            span: Span::new(start, start + 1),
        })
    }

    fn double_quoted(&mut self) -> Result<(), LexerError> {
        let start = self.pos;
        self.bump();
        let mut parts = Vec::new();
        let mut lit = String::new();
        while let Some(c) = self.peek() {
            match c {
                '"' => {
                    self.bump();
                    if !lit.is_empty() {
                        parts.push(WordPart::Literal(lit));
                    }
                    self.push(TokenKind::DoubleQuoted(parts), start);
                    return Ok(());
                }
                '\\' => {
                    self.bump();
                    match self.peek() {
                        Some(esc @ ('"' | '\\' | '$' | '`')) => {
                            lit.push(esc);
                            self.bump();
                        }
                        // Backslash before anything else stays literal.
                        Some(_) | None => lit.push('\\'),
                    }
                }
                '$' => match self.expansion()? {
                    Some((name, default)) => {
                        if !lit.is_empty() {
                            parts.push(WordPart::Literal(std::mem::take(&mut lit)));
                        }
                        parts.push(WordPart::Variable { name, default });
                    }
                    None => lit.push('$'),
                },
                _ => {
                    lit.push(c);
                    self.bump();
                }
            }
        }
        Err(LexerError::UnterminatedDoubleQuote {
            span: Span::new(start, start + 1),
        })
    }

    /// Lex `$NAME`, `${NAME}`, or `${NAME:-default}` with the cursor on
    /// the `$`. Returns `None` (consuming just the `$`) when what follows
    /// cannot start an expansion.
    fn expansion(&mut self) -> Result<Option<(String, Option<String>)>, LexerError> {
        let dollar = self.pos;
        self.bump();
        match self.peek() {
            Some('{') => {
                self.bump();
                let body_start = self.pos;
                while let Some(c) = self.peek() {
                    if c == '}' {
                        let body = &self.src[body_start..self.pos];
                        let parsed = match body.split_once(":-") {
                            Some((name, default)) => {
                                (name.to_string(), Some(default.to_string()))
                            }
                            None => (body.to_string(), None),
                        };
                        self.bump();
                        return Ok(Some(parsed));
                    }
                    self.bump();
                }
                Err(LexerError::UnterminatedExpansion {
                    span: Span::new(dollar, dollar + 2),
                })
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                let name_start = self.pos;
                while self
                    .peek()
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    self.bump();
                }
                Ok(Some((self.src[name_start..self.pos].to_string(), None)))
            }
            _ => Ok(None),
        }
    }

    fn dollar(&mut self) -> Result<(), LexerError> {
        let start = self.pos;
        match self.expansion()? {
            Some((name, default)) => self.push(TokenKind::Variable { name, default }, start),
            None => self.push(TokenKind::Word("$".to_string()), start),
        }
        Ok(())
    }

    fn word(&mut self) {
        let start = self.pos;
        let mut text = String::new();
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' | ';' | '|' | '&' | '\'' | '"' | '$' => break,
                '\\' => {
                    self.bump();
                    match self.bump() {
                        Some(esc) => text.push(esc),
                        None => text.push('\\'),
                    }
                }
                _ => {
                    text.push(c);
                    self.bump();
                }
            }
        }
        self.push(TokenKind::Word(text), start);
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
