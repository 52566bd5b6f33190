// SPDX-License-Identifier: MIT

//! Tokens emitted by the lexer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::WordPart;
use crate::span::Span;

/// A lexed token with its source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it sits in the source.
    pub span: Span,
}

/// Token kinds for the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unquoted word text, escapes already resolved.
    Word(String),
    /// `'...'` content.
    SingleQuoted(String),
    /// `"..."` content, pre-split into literal and variable parts.
    DoubleQuoted(Vec<WordPart>),
    /// `$NAME`, `${NAME}`, or `${NAME:-default}` outside quotes.
    Variable {
        /// Variable name.
        name: String,
        /// Fallback from `${NAME:-default}`, if any.
        default: Option<String>,
    },
    /// `|`
    Pipe,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `;`
    Semi,
    /// `\n`
    Newline,
    /// `&` — lexed so the parser can reject it with a useful message.
    Ampersand,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "'{w}'"),
            TokenKind::SingleQuoted(_) | TokenKind::DoubleQuoted(_) => write!(f, "quoted string"),
            TokenKind::Variable { name, .. } => write!(f, "'${name}'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::And => write!(f, "'&&'"),
            TokenKind::Or => write!(f, "'||'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Ampersand => write!(f, "'&'"),
        }
    }
}

/// True for names matching `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
