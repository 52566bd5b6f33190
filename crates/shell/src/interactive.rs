// SPDX-License-Identifier: MIT

//! Incremental parsing for interactive input.
//!
//! A host reading a terminal cannot know whether `echo 'a` is a finished
//! statement until the closing quote arrives on a later line.
//! [`InteractiveParser`] buffers fed chunks and reparses the whole
//! buffer on each feed: a parse that fails with
//! [`ParseError::is_incomplete`] keeps the buffer and asks for more,
//! anything else either yields the parsed statements or a hard error.

use crate::ast::CommandList;
use crate::parse_error::ParseError;
use crate::parser::Parser;

/// Result of feeding one chunk of input.
#[derive(Debug)]
pub enum Feed {
    /// The buffered input parsed; the buffer was drained.
    Complete(CommandList),
    /// The buffered input needs more text before it can parse.
    Incomplete,
}

/// A parser that accumulates input across feeds until a statement
/// completes. One instance lives for the whole interactive session.
#[derive(Debug, Default)]
pub struct InteractiveParser {
    buffer: String,
}

impl InteractiveParser {
    /// Create an empty interactive parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` to the pending buffer and try to parse it.
    ///
    /// A hard parse error drains the buffer so the next feed starts
    /// clean.
    pub fn feed(&mut self, chunk: &str) -> Result<Feed, ParseError> {
        self.buffer.push_str(chunk);
        match Parser::parse(&self.buffer) {
            Ok(list) => {
                self.buffer.clear();
                Ok(Feed::Complete(list))
            }
            Err(e) if e.is_incomplete() => Ok(Feed::Incomplete),
            Err(e) => {
                self.buffer.clear();
                Err(e)
            }
        }
    }

    /// True while a previous feed is waiting for continuation input.
    pub fn incomplete(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Finish the session at end of input.
    ///
    /// Pending incomplete text is a hard parse error, exactly as if the
    /// same truncated text had been parsed non-interactively.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        match Parser::parse(&self.buffer) {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
