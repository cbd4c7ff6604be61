// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Round-trip printing.
//!
//! Printing is split between two roles:
//!
//! - [`JavaPrinter`] knows how to print every host node. It never prints a
//!   child itself; it hands children back to an outer printer through
//!   [`JavaPrintCallbacks::print`].
//! - The outer printer implements [`JavaPrintCallbacks`]. `JavaPrinter` is its
//!   own outer printer when printing plain Java; a dialect printer embeds a
//!   `JavaPrinter`, prints its own nodes and forwards host nodes to it.
//!
//! Both share one [`PrintContext`], so the output and the ancestor cursor are
//! the same on either side of the dialect boundary.

mod java;
pub mod tokens;

use tugtool_lst_core::{Cursor, MarkerPrinter, Markers, PrintOutput, Result, RightPadded, Space};

use crate::tree::{Block, J};

pub use java::{java_needs_terminator, JavaPrinter};
pub use tokens::{TokenTable, JAVA_TOKENS};

/// Output and ancestry shared by every printer taking part in one print.
pub struct PrintContext<'p> {
    out: PrintOutput,
    cursor: Cursor<J>,
    marker_printer: &'p dyn MarkerPrinter<J>,
    comment_wrapper: fn(&str) -> String,
}

/// Wraps marker text in a block comment.
pub fn c_comment(text: &str) -> String {
    format!("/*{text}*/")
}

impl<'p> PrintContext<'p> {
    pub fn new(marker_printer: &'p dyn MarkerPrinter<J>) -> Self {
        Self {
            out: PrintOutput::new(),
            cursor: Cursor::new(),
            marker_printer,
            comment_wrapper: c_comment,
        }
    }

    /// Comment syntax handed to the marker printer.
    #[must_use]
    pub fn with_comment_wrapper(mut self, comment_wrapper: fn(&str) -> String) -> Self {
        self.comment_wrapper = comment_wrapper;
        self
    }

    pub fn cursor(&self) -> &Cursor<J> {
        &self.cursor
    }

    pub fn output(&self) -> &PrintOutput {
        &self.out
    }

    pub fn into_output(self) -> PrintOutput {
        self.out
    }

    pub fn add_token(&mut self, token: &str) {
        self.out.append(token);
    }

    /// Run `f` with `tree` pushed on the cursor.
    pub fn enter<R>(&mut self, tree: &J, f: impl FnOnce(&mut Self) -> R) -> R {
        self.cursor.push(tree.clone());
        let result = f(self);
        self.cursor.pop();
        result
    }

    /// Whitespace, then each comment with its delimiters and suffix.
    pub fn print_space(&mut self, space: &Space) {
        self.out.append(&space.whitespace);
        for comment in &space.comments {
            if comment.multiline {
                self.out.append("/*").append(&comment.text).append("*/");
            } else {
                self.out.append("//").append(&comment.text);
            }
            self.out.append(&comment.suffix);
        }
    }

    /// Marker text before the prefix, the prefix, marker text before the
    /// first token.
    pub fn before_syntax(&mut self, prefix: &Space, markers: &Markers) {
        for marker in markers {
            let text = self
                .marker_printer
                .before_prefix(marker, &self.cursor, &self.comment_wrapper);
            self.out.append(&text);
        }
        self.print_space(prefix);
        for marker in markers {
            let text = self
                .marker_printer
                .before_syntax(marker, &self.cursor, &self.comment_wrapper);
            self.out.append(&text);
        }
    }

    pub fn after_syntax(&mut self, markers: &Markers) {
        for marker in markers {
            let text = self
                .marker_printer
                .after_syntax(marker, &self.cursor, &self.comment_wrapper);
            self.out.append(&text);
        }
    }
}

/// What the host printer needs from the printer that drives it.
pub trait JavaPrintCallbacks {
    /// Name of the driving dialect, for diagnostics.
    fn dialect(&self) -> &'static str;

    fn tokens(&self) -> &'static TokenTable;

    /// Print any node, routing it to the printer of its family. Implementations
    /// push the node on the cursor for the duration of the call.
    fn print(&mut self, tree: &J, ctx: &mut PrintContext<'_>) -> Result<()>;

    /// Print the statements between a block's braces. The block is the
    /// cursor's current value.
    fn print_block_statements(&mut self, block: &Block, ctx: &mut PrintContext<'_>) -> Result<()> {
        print_statements(self, &block.statements, ctx)
    }

    /// Whether `statement` is followed by `;`. Consulted after every statement.
    fn needs_terminator(&self, statement: &J, ctx: &PrintContext<'_>) -> bool {
        let _ = ctx;
        java_needs_terminator(statement)
    }
}

/// Print a statement, its trailing space and its terminator.
pub fn print_statement<C: JavaPrintCallbacks + ?Sized>(
    outer: &mut C,
    statement: &RightPadded<J>,
    ctx: &mut PrintContext<'_>,
) -> Result<()> {
    outer.print(&statement.element, ctx)?;
    ctx.print_space(&statement.after);
    if outer.needs_terminator(&statement.element, ctx)
        || statement.markers.contains_kind("semicolon")
    {
        ctx.add_token(";");
    }
    Ok(())
}

pub fn print_statements<C: JavaPrintCallbacks + ?Sized>(
    outer: &mut C,
    statements: &[RightPadded<J>],
    ctx: &mut PrintContext<'_>,
) -> Result<()> {
    for statement in statements {
        print_statement(outer, statement, ctx)?;
    }
    Ok(())
}

/// Print a whole tree with `printer` driving.
pub fn print_with<C: JavaPrintCallbacks + ?Sized>(
    printer: &mut C,
    tree: &J,
    marker_printer: &dyn MarkerPrinter<J>,
) -> Result<String> {
    let mut ctx = PrintContext::new(marker_printer);
    printer.print(tree, &mut ctx)?;
    Ok(ctx.into_output().into_string())
}

/// Print a host-family tree.
pub fn print_java(tree: &J, marker_printer: &dyn MarkerPrinter<J>) -> Result<String> {
    print_with(&mut JavaPrinter, tree, marker_printer)
}
