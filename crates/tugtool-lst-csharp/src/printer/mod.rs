// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The C# printer.
//!
//! [`CSharpPrinter`] prints C# nodes itself and hands host nodes to an
//! embedded [`JavaPrinter`], staying the outer printer throughout. Host
//! nodes inside a C# tree are therefore spelled with [`CSHARP_TOKENS`] and
//! terminated by [`csharp_needs_terminator`].

pub mod tokens;

use std::sync::Arc;

use tracing::warn;
use tugtool_lst_core::{LstError, MarkerPrinter, Result, RightPadded};
use tugtool_lst_java::printer::{
    java_needs_terminator, print_statements, print_with, JavaPrintCallbacks, JavaPrinter,
    PrintContext, TokenTable,
};
use tugtool_lst_java::{Block, Identifier, J};

use crate::tree::*;

pub use tokens::CSHARP_TOKENS;

/// Statements C# ends with `;`.
///
/// Attributes do not change the answer for the statement they decorate. A
/// `using` statement takes the answer of its body, unless the body is a
/// block.
pub fn csharp_needs_terminator(statement: &J) -> bool {
    match Cs::from_j(statement) {
        Some(Cs::AnnotatedStatement(node)) => csharp_needs_terminator(&node.statement),
        Some(Cs::UsingStatement(node)) => match &node.statement {
            J::Block(_) => false,
            body => csharp_needs_terminator(body),
        },
        Some(Cs::PropertyDeclaration(node)) => {
            node.initializer.is_some() || node.expression_body.is_some()
        }
        Some(Cs::AccessorDeclaration(node)) => node.body.is_none(),
        Some(Cs::AwaitExpression(_)) => true,
        Some(_) => false,
        None => java_needs_terminator(statement),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpPrinter {
    java: JavaPrinter,
}

impl CSharpPrinter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JavaPrintCallbacks for CSharpPrinter {
    fn dialect(&self) -> &'static str {
        CSHARP
    }

    fn tokens(&self) -> &'static TokenTable {
        &CSHARP_TOKENS
    }

    fn print(&mut self, tree: &J, ctx: &mut PrintContext<'_>) -> Result<()> {
        ctx.enter(tree, |ctx| match tree {
            J::Extension(node) => match Cs::from_extension(node) {
                Some(cs) => self.print_cs(&cs, ctx),
                None => {
                    warn!(dialect = node.dialect(), kind = node.kind(), "no printer for node");
                    Err(LstError::UnsupportedDialect {
                        printer: CSHARP,
                        kind: node.kind(),
                    })
                }
            },
            host => {
                let java = self.java;
                java.print_host(self, host, ctx)
            }
        })
    }

    /// Inside an object initializer (`new T { A = 1, B = 2 }`) the block's
    /// entries are separated by commas instead of terminated by `;`.
    fn print_block_statements(&mut self, block: &Block, ctx: &mut PrintContext<'_>) -> Result<()> {
        if matches!(ctx.cursor().parent(), Some(J::NewClass(_))) {
            self.print_initializer_entries(&block.statements, ctx)
        } else {
            print_statements(self, &block.statements, ctx)
        }
    }

    fn needs_terminator(&self, statement: &J, _ctx: &PrintContext<'_>) -> bool {
        csharp_needs_terminator(statement)
    }
}

impl CSharpPrinter {
    fn print_initializer_entries(
        &mut self,
        entries: &[RightPadded<J>],
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        let last = entries.len().saturating_sub(1);
        for (index, entry) in entries.iter().enumerate() {
            self.print(&entry.element, ctx)?;
            ctx.print_space(&entry.after);
            if index < last {
                ctx.add_token(",");
            } else if let Some(suffix) = entry.markers.trailing_comma() {
                ctx.add_token(",");
                ctx.print_space(suffix);
            }
        }
        Ok(())
    }

    /// Print a C# node. The node must already be on the cursor.
    fn print_cs(&mut self, node: &Cs, ctx: &mut PrintContext<'_>) -> Result<()> {
        let java = self.java;
        ctx.before_syntax(node.prefix(), node.markers());
        match node {
            Cs::CompilationUnit(node) => {
                self.print_usings(&node.usings, ctx)?;
                print_statements(self, &node.members, ctx)?;
                ctx.print_space(&node.eof);
            }
            Cs::UsingDirective(node) => {
                if let Some(global) = &node.global {
                    ctx.add_token("global");
                    ctx.print_space(&global.after);
                }
                ctx.add_token("using");
                if let Some(statik) = &node.statik {
                    ctx.print_space(&statik.before);
                    ctx.add_token("static");
                }
                if let Some(alias) = &node.alias {
                    self.print_identifier(&alias.element, ctx)?;
                    ctx.print_space(&alias.after);
                    ctx.add_token("=");
                }
                self.print(&node.namespace_or_type, ctx)?;
            }
            Cs::NamespaceDeclaration(node) => {
                ctx.add_token("namespace");
                self.print(&node.name.element, ctx)?;
                ctx.print_space(&node.name.after);
                match node.kind {
                    NamespaceKind::BlockScoped => {
                        ctx.add_token("{");
                        self.print_usings(&node.usings, ctx)?;
                        print_statements(self, &node.members, ctx)?;
                        ctx.print_space(&node.end);
                        ctx.add_token("}");
                    }
                    NamespaceKind::FileScoped => {
                        ctx.add_token(";");
                        self.print_usings(&node.usings, ctx)?;
                        print_statements(self, &node.members, ctx)?;
                    }
                }
            }
            Cs::AnnotatedStatement(node) => {
                for attribute_list in &node.attribute_lists {
                    self.print(attribute_list, ctx)?;
                }
                self.print(&node.statement, ctx)?;
            }
            Cs::AttributeList(node) => {
                ctx.add_token("[");
                if let Some(target) = &node.target {
                    self.print_identifier(&target.element, ctx)?;
                    ctx.print_space(&target.after);
                    ctx.add_token(":");
                }
                let last = node.attributes.len().saturating_sub(1);
                for (index, attribute) in node.attributes.iter().enumerate() {
                    let separator = if index < last { "," } else { "]" };
                    java.print_right_padded(self, attribute, separator, ctx)?;
                }
                if node.attributes.is_empty() {
                    ctx.add_token("]");
                }
            }
            Cs::UsingStatement(node) => {
                ctx.add_token("using");
                self.print(&J::ControlParentheses(Arc::clone(&node.control)), ctx)?;
                self.print(&node.statement, ctx)?;
            }
            Cs::Binary(node) => {
                self.print(&node.left, ctx)?;
                ctx.print_space(&node.operator.before);
                ctx.add_token(tokens::cs_binary(node.operator.element)?);
                self.print(&node.right, ctx)?;
            }
            Cs::PropertyDeclaration(node) => {
                for modifier in &node.modifiers {
                    self.print(modifier, ctx)?;
                }
                self.print(&node.type_expression, ctx)?;
                self.print_identifier(&node.name, ctx)?;
                if let Some(accessors) = &node.accessors {
                    self.print(&J::Block(Arc::clone(accessors)), ctx)?;
                }
                if let Some(expression_body) = &node.expression_body {
                    java.print_left_padded(self, "=>", expression_body, ctx)?;
                }
                if let Some(initializer) = &node.initializer {
                    java.print_left_padded(self, "=", initializer, ctx)?;
                }
            }
            Cs::AccessorDeclaration(node) => {
                for modifier in &node.modifiers {
                    self.print(modifier, ctx)?;
                }
                ctx.print_space(&node.kind.before);
                ctx.add_token(tokens::accessor_kind(node.kind.element)?);
                if let Some(body) = &node.body {
                    self.print(&J::Block(Arc::clone(body)), ctx)?;
                }
                if let Some(expression_body) = &node.expression_body {
                    java.print_left_padded(self, "=>", expression_body, ctx)?;
                }
            }
            Cs::AwaitExpression(node) => {
                ctx.add_token("await");
                self.print(&node.expression, ctx)?;
            }
        }
        ctx.after_syntax(node.markers());
        Ok(())
    }

    /// Each using directive is followed by its trailing space and `;`.
    fn print_usings(&mut self, usings: &[RightPadded<J>], ctx: &mut PrintContext<'_>) -> Result<()> {
        let java = self.java;
        for using in usings {
            java.print_right_padded(self, using, ";", ctx)?;
        }
        Ok(())
    }

    fn print_identifier(&mut self, name: &Arc<Identifier>, ctx: &mut PrintContext<'_>) -> Result<()> {
        self.print(&J::Identifier(Arc::clone(name)), ctx)
    }
}

/// Print a C# tree.
pub fn print_csharp(tree: &J, marker_printer: &dyn MarkerPrinter<J>) -> Result<String> {
    print_with(&mut CSharpPrinter::new(), tree, marker_printer)
}
