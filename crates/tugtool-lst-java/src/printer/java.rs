// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use tugtool_lst_core::{Container, LeftPadded, LstError, Markers, Result, RightPadded, Space};

use super::{print_statement, JavaPrintCallbacks, PrintContext, TokenTable, JAVA_TOKENS};
use crate::tree::*;

/// Statements the host dialect ends with `;`.
pub fn java_needs_terminator(statement: &J) -> bool {
    match statement {
        J::Assignment(_)
        | J::AssignmentOperation(_)
        | J::Break(_)
        | J::Continue(_)
        | J::DoWhileLoop(_)
        | J::Empty(_)
        | J::MethodInvocation(_)
        | J::NewClass(_)
        | J::Return(_)
        | J::Throw(_)
        | J::Unary(_)
        | J::VariableDeclarations(_) => true,
        J::MethodDeclaration(method) => method.body.is_none(),
        _ => false,
    }
}

/// Printer for the host family.
///
/// `JavaPrinter` is stateless. Its `print_*` methods take the outer printer
/// and call back into it for every child, so the same code serves a plain
/// Java print and a dialect printer that embeds it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaPrinter;

impl JavaPrintCallbacks for JavaPrinter {
    fn dialect(&self) -> &'static str {
        "java"
    }

    fn tokens(&self) -> &'static TokenTable {
        &JAVA_TOKENS
    }

    fn print(&mut self, tree: &J, ctx: &mut PrintContext<'_>) -> Result<()> {
        let java = *self;
        ctx.enter(tree, |ctx| java.print_host(self, tree, ctx))
    }
}

impl JavaPrinter {
    /// Print a host node. The node must already be on the cursor.
    pub fn print_host<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        tree: &J,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        match tree {
            J::CompilationUnit(node) => self.print_compilation_unit(outer, node, ctx),
            J::Import(node) => self.print_import(outer, node, ctx),
            J::Block(node) => self.print_block(outer, node, ctx),
            J::ClassDeclaration(node) => self.print_class_declaration(outer, node, ctx),
            J::MethodDeclaration(node) => self.print_method_declaration(outer, node, ctx),
            J::Modifier(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token(outer.tokens().modifier(node.kind)?);
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::VariableDeclarations(node) => self.print_variable_declarations(outer, node, ctx),
            J::NamedVariable(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&J::Identifier(Arc::clone(&node.name)), ctx)?;
                if let Some(initializer) = &node.initializer {
                    self.print_left_padded(outer, "=", initializer, ctx)?;
                }
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::If(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("if");
                outer.print(&J::ControlParentheses(Arc::clone(&node.condition)), ctx)?;
                print_statement(outer, &node.then_part, ctx)?;
                if let Some(else_part) = &node.else_part {
                    outer.print(&J::Else(Arc::clone(else_part)), ctx)?;
                }
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Else(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("else");
                print_statement(outer, &node.body, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::ControlParentheses(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("(");
                self.print_right_padded(outer, &node.tree, ")", ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::WhileLoop(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("while");
                outer.print(&J::ControlParentheses(Arc::clone(&node.condition)), ctx)?;
                print_statement(outer, &node.body, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::DoWhileLoop(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("do");
                print_statement(outer, &node.body, ctx)?;
                ctx.print_space(&node.while_condition.before);
                ctx.add_token("while");
                outer.print(
                    &J::ControlParentheses(Arc::clone(&node.while_condition.element)),
                    ctx,
                )?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::ForEachLoop(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token(outer.tokens().for_each_keyword);
                outer.print(&J::ForEachControl(Arc::clone(&node.control)), ctx)?;
                print_statement(outer, &node.body, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::ForEachControl(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("(");
                let separator = outer.tokens().for_each_separator;
                self.print_right_padded(outer, &node.variable, separator, ctx)?;
                self.print_right_padded(outer, &node.iterable, ")", ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Return(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("return");
                if let Some(expression) = &node.expression {
                    outer.print(expression, ctx)?;
                }
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Throw(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("throw");
                outer.print(&node.exception, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Break(node) => {
                let label = node.label.as_ref();
                self.print_jump(outer, "break", &node.prefix, &node.markers, label, ctx)
            }
            J::Continue(node) => {
                let label = node.label.as_ref();
                self.print_jump(outer, "continue", &node.prefix, &node.markers, label, ctx)
            }
            J::Empty(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Identifier(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token(&node.simple_name);
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Literal(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token(&node.value_source);
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::FieldAccess(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.target, ctx)?;
                ctx.print_space(&node.name.before);
                ctx.add_token(".");
                outer.print(&J::Identifier(Arc::clone(&node.name.element)), ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::MethodInvocation(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                if let Some(select) = &node.select {
                    self.print_right_padded(outer, select, ".", ctx)?;
                }
                outer.print(&J::Identifier(Arc::clone(&node.name)), ctx)?;
                self.print_container(outer, &node.arguments, "(", ",", ")", ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Binary(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.left, ctx)?;
                ctx.print_space(&node.operator.before);
                ctx.add_token(outer.tokens().binary(node.operator.element)?);
                outer.print(&node.right, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Unary(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                let token = outer.tokens().unary(node.operator.element)?;
                if node.operator.element.is_postfix() {
                    outer.print(&node.expression, ctx)?;
                    ctx.print_space(&node.operator.before);
                    ctx.add_token(token);
                } else {
                    ctx.print_space(&node.operator.before);
                    ctx.add_token(token);
                    outer.print(&node.expression, ctx)?;
                }
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Assignment(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.variable, ctx)?;
                self.print_left_padded(outer, "=", &node.assignment, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::AssignmentOperation(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.variable, ctx)?;
                ctx.print_space(&node.operator.before);
                ctx.add_token(outer.tokens().assignment(node.operator.element)?);
                outer.print(&node.assignment, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Parentheses(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("(");
                self.print_right_padded(outer, &node.tree, ")", ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Ternary(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.condition, ctx)?;
                self.print_left_padded(outer, "?", &node.true_part, ctx)?;
                self.print_left_padded(outer, ":", &node.false_part, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::NewClass(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("new");
                if let Some(clazz) = &node.clazz {
                    outer.print(clazz, ctx)?;
                }
                if let Some(arguments) = &node.arguments {
                    self.print_container(outer, arguments, "(", ",", ")", ctx)?;
                }
                if let Some(body) = &node.body {
                    outer.print(&J::Block(Arc::clone(body)), ctx)?;
                }
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::TypeCast(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&J::ControlParentheses(Arc::clone(&node.clazz)), ctx)?;
                outer.print(&node.expression, ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::ArrayAccess(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                outer.print(&node.indexed, ctx)?;
                outer.print(&J::ArrayDimension(Arc::clone(&node.dimension)), ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::ArrayDimension(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token("[");
                self.print_right_padded(outer, &node.index, "]", ctx)?;
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Erroneous(node) => {
                ctx.before_syntax(&node.prefix, &node.markers);
                ctx.add_token(&node.text);
                ctx.after_syntax(&node.markers);
                Ok(())
            }
            J::Extension(node) => Err(LstError::UnsupportedDialect {
                printer: outer.dialect(),
                kind: node.kind(),
            }),
        }
    }

    fn print_compilation_unit<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &CompilationUnit,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        for import in &node.imports {
            self.print_right_padded(outer, import, ";", ctx)?;
        }
        for statement in &node.statements {
            print_statement(outer, statement, ctx)?;
        }
        ctx.print_space(&node.eof);
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    fn print_import<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &Import,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        ctx.add_token("import");
        if let Some(statik) = &node.statik {
            ctx.print_space(&statik.before);
            ctx.add_token("static");
        }
        outer.print(&node.qualid, ctx)?;
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    /// `{`, the statements as the outer printer lays them out, `}`.
    pub fn print_block<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &Block,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        ctx.add_token("{");
        outer.print_block_statements(node, ctx)?;
        ctx.print_space(&node.end);
        ctx.add_token("}");
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    fn print_class_declaration<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &ClassDeclaration,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        for modifier in &node.modifiers {
            outer.print(modifier, ctx)?;
        }
        ctx.print_space(&node.kind.before);
        ctx.add_token(outer.tokens().class_kind(node.kind.element)?);
        outer.print(&J::Identifier(Arc::clone(&node.name)), ctx)?;
        if let Some(implements) = &node.implements {
            let keyword = outer.tokens().implements_keyword;
            self.print_container(outer, implements, keyword, ",", "", ctx)?;
        }
        outer.print(&J::Block(Arc::clone(&node.body)), ctx)?;
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    fn print_method_declaration<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &MethodDeclaration,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        for modifier in &node.modifiers {
            outer.print(modifier, ctx)?;
        }
        if let Some(return_type) = &node.return_type {
            outer.print(return_type, ctx)?;
        }
        outer.print(&J::Identifier(Arc::clone(&node.name)), ctx)?;
        self.print_container(outer, &node.parameters, "(", ",", ")", ctx)?;
        if let Some(body) = &node.body {
            outer.print(&J::Block(Arc::clone(body)), ctx)?;
        }
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    fn print_variable_declarations<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        node: &VariableDeclarations,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(&node.prefix, &node.markers);
        for modifier in &node.modifiers {
            outer.print(modifier, ctx)?;
        }
        if let Some(type_expression) = &node.type_expression {
            outer.print(type_expression, ctx)?;
        }
        let last = node.variables.len().saturating_sub(1);
        for (index, variable) in node.variables.iter().enumerate() {
            let separator = if index < last { "," } else { "" };
            self.print_right_padded(outer, variable, separator, ctx)?;
        }
        ctx.after_syntax(&node.markers);
        Ok(())
    }

    fn print_jump<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        keyword: &str,
        prefix: &Space,
        markers: &Markers,
        label: Option<&Arc<Identifier>>,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.before_syntax(prefix, markers);
        ctx.add_token(keyword);
        if let Some(label) = label {
            outer.print(&J::Identifier(Arc::clone(label)), ctx)?;
        }
        ctx.after_syntax(markers);
        Ok(())
    }

    /// Element, its trailing space, then `suffix`.
    pub fn print_right_padded<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        right: &RightPadded<J>,
        suffix: &str,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        outer.print(&right.element, ctx)?;
        ctx.print_space(&right.after);
        ctx.add_token(suffix);
        Ok(())
    }

    /// Leading space, `token`, then the element.
    pub fn print_left_padded<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        token: &str,
        left: &LeftPadded<J>,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        ctx.print_space(&left.before);
        ctx.add_token(token);
        outer.print(&left.element, ctx)
    }

    /// `before`, `open`, the elements joined by `separator`, `close`.
    ///
    /// A trailing-comma marker on the last element prints one more separator
    /// followed by the marker's suffix. A container marked as omitting
    /// parentheses prints no delimiters.
    pub fn print_container<C: JavaPrintCallbacks + ?Sized>(
        self,
        outer: &mut C,
        container: &Container<J>,
        open: &str,
        separator: &str,
        close: &str,
        ctx: &mut PrintContext<'_>,
    ) -> Result<()> {
        let delimited = !container.markers.omits_parentheses();
        ctx.print_space(&container.before);
        if delimited {
            ctx.add_token(open);
        }
        let last = container.elements.len().saturating_sub(1);
        for (index, element) in container.elements.iter().enumerate() {
            outer.print(&element.element, ctx)?;
            ctx.print_space(&element.after);
            if index < last {
                ctx.add_token(separator);
            } else if let Some(suffix) = element.markers.trailing_comma() {
                ctx.add_token(separator);
                ctx.print_space(suffix);
            }
        }
        if delimited {
            ctx.add_token(close);
        }
        Ok(())
    }
}
