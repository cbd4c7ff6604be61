// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Trivia: whitespace and comments owned by nodes and padding.
//!
//! A [`Space`] holds the whitespace that precedes the first comment, followed
//! by every comment in source order. Each [`Comment`] owns the whitespace that
//! trails it (its `suffix`), so
//!
//! ```text
//! whitespace + (open + text + close + suffix)*
//! ```
//!
//! reproduces the trivia exactly. Comment delimiters are not stored; the
//! printer of the owning dialect supplies them.

use serde::{Deserialize, Serialize};

use crate::markers::Markers;

/// A single comment inside a [`Space`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body without its delimiters.
    pub text: String,
    /// `/* ... */` when true, `// ...` when false.
    pub multiline: bool,
    /// Whitespace between the end of this comment and the next comment or token.
    pub suffix: String,
    pub markers: Markers,
}

impl Comment {
    /// A `// text` comment.
    pub fn line(text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            multiline: false,
            suffix: suffix.into(),
            markers: Markers::EMPTY,
        }
    }

    /// A `/* text */` comment.
    pub fn block(text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            multiline: true,
            suffix: suffix.into(),
            markers: Markers::EMPTY,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Leading trivia: whitespace followed by zero or more comments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Space {
    pub whitespace: String,
    pub comments: Vec<Comment>,
}

impl Space {
    pub const EMPTY: Space = Space {
        whitespace: String::new(),
        comments: Vec::new(),
    };

    /// Whitespace-only trivia.
    pub fn whitespace(whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments: Vec::new(),
        }
    }

    /// A single space character, the most common separator.
    pub fn single() -> Self {
        Self::whitespace(" ")
    }

    pub fn build(whitespace: impl Into<String>, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments,
        }
    }

    /// Split raw trivia text into whitespace and C-style comments.
    ///
    /// This is the inverse of printing a `Space` with `//` and `/* */`
    /// delimiters. An unterminated block comment absorbs the rest of the input.
    pub fn format(raw: &str) -> Self {
        let mut whitespace = String::new();
        let mut comments: Vec<Comment> = Vec::new();
        let mut rest = raw;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix("//") {
                let end = after.find('\n').unwrap_or(after.len());
                comments.push(Comment::line(&after[..end], ""));
                rest = &after[end..];
            } else if let Some(after) = rest.strip_prefix("/*") {
                let (text, remaining) = match after.find("*/") {
                    Some(end) => (&after[..end], &after[end + 2..]),
                    None => (after, ""),
                };
                comments.push(Comment::block(text, ""));
                rest = remaining;
            } else {
                let mut chars = rest.chars();
                let Some(ch) = chars.next() else { break };
                match comments.last_mut() {
                    Some(comment) => comment.suffix.push(ch),
                    None => whitespace.push(ch),
                }
                rest = chars.as_str();
            }
        }

        Self {
            whitespace,
            comments,
        }
    }

    /// True when there is neither whitespace nor a comment.
    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    /// The whitespace immediately before the next token: the last comment's
    /// suffix, or the leading whitespace when there are no comments.
    pub fn last_whitespace(&self) -> &str {
        match self.comments.last() {
            Some(comment) => &comment.suffix,
            None => &self.whitespace,
        }
    }

    /// Indentation of the token that follows this space.
    pub fn indent(&self) -> &str {
        let last = self.last_whitespace();
        match last.rfind('\n') {
            Some(newline) => &last[newline + 1..],
            None => last,
        }
    }

    pub fn with_whitespace(&self, whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments: self.comments.clone(),
        }
    }

    pub fn with_comments(&self, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: self.whitespace.clone(),
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_whitespace_only() {
        let space = Space::format("\n    ");
        assert_eq!(space.whitespace, "\n    ");
        assert!(space.comments.is_empty());
        assert_eq!(space.indent(), "    ");
    }

    #[test]
    fn format_splits_line_and_block_comments() {
        let space = Space::format(" // first\n  /* second */ ");
        assert_eq!(space.whitespace, " ");
        assert_eq!(
            space.comments,
            vec![
                Comment::line(" first", "\n  "),
                Comment::block(" second ", " "),
            ]
        );
        assert_eq!(space.last_whitespace(), " ");
    }

    #[test]
    fn format_unterminated_block_comment_takes_rest() {
        let space = Space::format("/* open");
        assert_eq!(space.comments, vec![Comment::block(" open", "")]);
    }

    #[test]
    fn empty_space() {
        assert!(Space::EMPTY.is_empty());
        assert!(Space::format("").is_empty());
        assert!(!Space::single().is_empty());
    }

    #[test]
    fn with_whitespace_keeps_comments() {
        let space = Space::format(" //c\n").with_whitespace("\t");
        assert_eq!(space.whitespace, "\t");
        assert_eq!(space.comments.len(), 1);
    }
}
