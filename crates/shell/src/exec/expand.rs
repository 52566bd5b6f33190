// SPDX-License-Identifier: MIT

//! Word expansion: variables, quote removal, and glob matching.

use std::path::Path;

use crate::ast::{Word, WordPart};

use super::Session;

/// Glob metacharacters that make an unquoted word a candidate pattern.
fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

impl Session {
    /// Resolve a variable reference against session variables, then the
    /// process environment, then the `${NAME:-default}` fallback.
    fn lookup(&self, name: &str, default: Option<&str>) -> String {
        if let Some(value) = self.vars.get(name) {
            return value.clone();
        }
        if let Ok(value) = std::env::var(name) {
            return value;
        }
        default.unwrap_or("").to_string()
    }

    /// Expand one word to its text.
    ///
    /// The second value reports whether any *unquoted* piece contained a
    /// glob metacharacter, i.e. whether the result may be matched
    /// against the filesystem. Expanded variable values are never
    /// re-split into multiple words and never glob.
    pub(crate) fn expand_word(&self, word: &Word) -> (String, bool) {
        let mut text = String::new();
        let mut globbable = false;
        for part in &word.parts {
            match part {
                WordPart::Literal(s) => {
                    globbable |= has_glob_meta(s);
                    text.push_str(s);
                }
                WordPart::SingleQuoted(s) => text.push_str(s),
                WordPart::DoubleQuoted(parts) => {
                    for inner in parts {
                        match inner {
                            WordPart::Literal(s) => text.push_str(s),
                            WordPart::Variable { name, default } => {
                                text.push_str(&self.lookup(name, default.as_deref()));
                            }
                            // The lexer only puts literals and variables
                            // inside double quotes.
                            other => text.push_str(&self.expand_part(other)),
                        }
                    }
                }
                WordPart::Variable { name, default } => {
                    text.push_str(&self.lookup(name, default.as_deref()));
                }
            }
        }
        (text, globbable)
    }

    fn expand_part(&self, part: &WordPart) -> String {
        match part {
            WordPart::Literal(s) | WordPart::SingleQuoted(s) => s.clone(),
            WordPart::Variable { name, default } => self.lookup(name, default.as_deref()),
            WordPart::DoubleQuoted(parts) => {
                parts.iter().map(|p| self.expand_part(p)).collect()
            }
        }
    }

    /// Expand argument words, applying glob expansion to unquoted
    /// patterns. A pattern that matches nothing stays literal, matching
    /// bash without `nullglob`. A word that is nothing but bare
    /// variable references and expands empty is dropped entirely, as
    /// bash drops it; quoted emptiness survives.
    pub(crate) fn expand_args(&self, words: &[Word]) -> Vec<String> {
        let mut args = Vec::new();
        for word in words {
            let (text, globbable) = self.expand_word(word);
            if text.is_empty()
                && word
                    .parts
                    .iter()
                    .all(|p| matches!(p, WordPart::Variable { .. }))
            {
                continue;
            }
            if globbable {
                match self.glob_matches(&text) {
                    Some(mut matches) if !matches.is_empty() => {
                        args.append(&mut matches);
                        continue;
                    }
                    _ => {}
                }
            }
            args.push(text);
        }
        args
    }

    /// Match `pattern` against the filesystem relative to the session's
    /// working directory. Returns `None` when the pattern is malformed.
    fn glob_matches(&self, pattern: &str) -> Option<Vec<String>> {
        let anchored;
        let full = if Path::new(pattern).is_absolute() {
            anchored = false;
            pattern.to_string()
        } else {
            anchored = true;
            self.cwd.join(pattern).to_str()?.to_string()
        };
        let paths = glob::glob(&full).ok()?;
        let mut matches: Vec<String> = paths
            .filter_map(Result::ok)
            .map(|path| {
                if anchored {
                    path.strip_prefix(&self.cwd)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| path.display().to_string())
                } else {
                    path.display().to_string()
                }
            })
            .collect();
        matches.sort();
        Some(matches)
    }
}
