// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Printer output and the marker-printing hook.
//!
//! A printer writes into a [`PrintOutput`]. Around every node it asks a
//! [`MarkerPrinter`] for wrapper text at three points:
//!
//! 1. `before_prefix`: ahead of the node's leading trivia,
//! 2. `before_syntax`: between the trivia and the node's first token,
//! 3. `after_syntax`: after the node's last token.
//!
//! The dialect supplies a `comment_wrapper` that turns text into a comment of
//! its own syntax, so marker printers stay language-neutral.

use crate::cursor::Cursor;
use crate::markers::Marker;

/// Accumulates printed text.
#[derive(Debug, Clone, Default)]
pub struct PrintOutput {
    out: String,
}

impl PrintOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    pub fn append_char(&mut self, ch: char) -> &mut Self {
        self.out.push(ch);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl std::fmt::Display for PrintOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.out)
    }
}

/// Wraps marker text in the comment syntax of the printing dialect.
pub type CommentWrapper<'w> = &'w dyn Fn(&str) -> String;

/// Renders markers as text around the nodes that carry them.
///
/// `T` is the tree type the cursor holds. Every method defaults to printing
/// nothing.
pub trait MarkerPrinter<T> {
    fn before_prefix(&self, marker: &Marker, cursor: &Cursor<T>, wrap: CommentWrapper<'_>) -> String {
        let _ = (marker, cursor, wrap);
        String::new()
    }

    fn before_syntax(&self, marker: &Marker, cursor: &Cursor<T>, wrap: CommentWrapper<'_>) -> String {
        let _ = (marker, cursor, wrap);
        String::new()
    }

    fn after_syntax(&self, marker: &Marker, cursor: &Cursor<T>, wrap: CommentWrapper<'_>) -> String {
        let _ = (marker, cursor, wrap);
        String::new()
    }
}

/// Highlights search results as `/*~~>*/` or `/*~~(description)~~>*/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMarkerPrinter;

impl<T> MarkerPrinter<T> for DefaultMarkerPrinter {
    fn before_syntax(&self, marker: &Marker, _cursor: &Cursor<T>, wrap: CommentWrapper<'_>) -> String {
        match marker {
            Marker::SearchResult {
                description: Some(description),
            } => wrap(&format!("~~({description})~~>")),
            Marker::SearchResult { description: None } => wrap("~~>"),
            _ => String::new(),
        }
    }
}

/// Prints no marker text at all; output is exactly the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SanitizedMarkerPrinter;

impl<T> MarkerPrinter<T> for SanitizedMarkerPrinter {}

/// Fences search results with `{{` and `}}` so tests can locate them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FencedMarkerPrinter;

impl<T> MarkerPrinter<T> for FencedMarkerPrinter {
    fn before_syntax(&self, marker: &Marker, _cursor: &Cursor<T>, _wrap: CommentWrapper<'_>) -> String {
        match marker {
            Marker::SearchResult { .. } => "{{".to_string(),
            _ => String::new(),
        }
    }

    fn after_syntax(&self, marker: &Marker, _cursor: &Cursor<T>, _wrap: CommentWrapper<'_>) -> String {
        match marker {
            Marker::SearchResult { .. } => "}}".to_string(),
            _ => String::new(),
        }
    }
}
