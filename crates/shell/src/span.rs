// SPDX-License-Identifier: MIT

//! Byte-offset source spans and error-location rendering.

use serde::{Deserialize, Serialize};

/// A half-open byte range into the source text.
///
/// Spans are byte offsets so they can slice UTF-8 source directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create a zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned text, or `""` when out of bounds or off a char boundary.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span in source: (1-indexed line, 0-indexed column, line text).
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let at = span.start.min(source.len());
    let line_start = source[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let line_num = 1 + source[..line_start].matches('\n').count();
    let col = source[line_start..at].chars().count();
    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic block for a span.
///
/// ```text
/// error: unexpected token '|'
///   --> line 1, column 8
///    |
///  1 | echo | | bad
///    |        ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line) = locate_span(source, span);
    let carets = span.len().max(1);
    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line,
        " ".repeat(col),
        "^".repeat(carets)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
