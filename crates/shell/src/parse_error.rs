// SPDX-License-Identifier: MIT

//! Parser error types.

use thiserror::Error;

use crate::error::LexerError;
use crate::span::{diagnostic_context, Span};
use crate::token::TokenKind;

/// Errors raised while parsing a script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenization failed.
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// A token that does not fit the grammar at this position.
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        /// The offending token.
        found: TokenKind,
        /// What the grammar wanted instead.
        expected: String,
        /// Location of the offending token.
        span: Span,
    },

    /// Input ended where the grammar still wanted more.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the grammar wanted.
        expected: String,
    },
}

impl ParseError {
    /// The error's source location, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    /// True when feeding more input could still produce a valid parse.
    ///
    /// This is the continuation query interactive hosts use to decide
    /// between executing what they have and prompting for another line:
    /// an open quote, an open `${` expansion, or a trailing `&&`/`||`/`|`
    /// is incomplete; a token in the wrong place never becomes valid no
    /// matter what follows.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            ParseError::Lexer(_) | ParseError::UnexpectedEof { .. }
        )
    }

    /// Render a rustc-style diagnostic against the source text, or
    /// `None` when the error carries no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}
