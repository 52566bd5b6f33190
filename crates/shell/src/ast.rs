// SPDX-License-Identifier: MIT

//! AST types produced by the parser.
//!
//! The tree mirrors the grammar the executor understands:
//!
//! ```text
//! CommandList
//! └── AndOrList[]            statements, separated by ';' or newline
//!     └── Pipeline[]         joined by '&&' / '||'
//!         └── SimpleCommand[]  joined by '|'
//!             ├── env: EnvAssignment[]
//!             ├── name: Option<Word>   (None for standalone assignments)
//!             └── args: Word[]
//! ```

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A full parsed script: zero or more statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandList {
    /// Statements in source order.
    pub commands: Vec<AndOrList>,
    /// Span covering the whole list.
    pub span: Span,
}

impl CommandList {
    /// True when the script contains no statements (empty input, blank
    /// lines, or comments only).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Count every simple command in the tree.
    pub fn count_simple_commands(&self) -> usize {
        self.commands
            .iter()
            .map(|a| {
                a.pipelines()
                    .map(|p| p.commands.len())
                    .sum::<usize>()
            })
            .sum()
    }
}

/// One statement: a pipeline optionally chained with `&&` / `||`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndOrList {
    /// The leading pipeline.
    pub first: Pipeline,
    /// Chained pipelines with the operator that guards each.
    pub rest: Vec<(LogicalOp, Pipeline)>,
    /// Span covering the whole chain.
    pub span: Span,
}

impl AndOrList {
    /// Iterate over every pipeline in the chain, in order.
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, p)| p))
    }
}

/// Chain operator between pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    /// `&&` — run the next pipeline only on success.
    And,
    /// `||` — run the next pipeline only on failure.
    Or,
}

/// One or more simple commands joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Stages, left to right. A plain command is a one-stage pipeline.
    pub commands: Vec<SimpleCommand>,
    /// Span covering all stages.
    pub span: Span,
}

/// `assignment* name arg*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCommand {
    /// `NAME=VALUE` prefixes collected before the command name.
    pub env: Vec<EnvAssignment>,
    /// Command name; `None` when the statement is assignments only.
    pub name: Option<Word>,
    /// Arguments after the name.
    pub args: Vec<Word>,
    /// Span covering prefixes, name, and arguments.
    pub span: Span,
}

/// A `NAME=VALUE` prefix or standalone assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvAssignment {
    /// Variable name (validated by the parser).
    pub name: String,
    /// Value word; expansion happens at execution time.
    pub value: Word,
    /// Span of the `NAME=` head.
    pub span: Span,
}

/// One shell word, possibly built from several adjacent quoted and
/// unquoted pieces (`foo"bar"$X` is one word with three parts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The pieces, in order.
    pub parts: Vec<WordPart>,
    /// Span covering the whole word.
    pub span: Span,
}

impl Word {
    /// The literal text if the word is a single unquoted literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [WordPart::Literal(s)] => Some(s),
            _ => None,
        }
    }
}

/// A piece of a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordPart {
    /// Unquoted text; subject to glob expansion.
    Literal(String),
    /// `'...'` — taken verbatim, never expanded.
    SingleQuoted(String),
    /// `"..."` — inner parts are literals and variables only.
    DoubleQuoted(Vec<WordPart>),
    /// `$NAME`, `${NAME}`, or `${NAME:-default}`.
    Variable {
        /// Variable name.
        name: String,
        /// Fallback text from `${NAME:-default}`, if any.
        default: Option<String>,
    },
}

impl WordPart {
    /// Build an unquoted literal part.
    pub fn literal(s: impl Into<String>) -> Self {
        WordPart::Literal(s.into())
    }

    /// Build a single-quoted part.
    pub fn single_quoted(s: impl Into<String>) -> Self {
        WordPart::SingleQuoted(s.into())
    }
}
