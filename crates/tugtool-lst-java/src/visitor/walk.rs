// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions: the default traversal of every host node.
//!
//! Each `walk_*` function is what the matching `visit_*` method does unless a
//! visitor overrides it. Overrides call the walk function to keep descending.

use std::sync::Arc;

use tracing::trace;
use tugtool_lst_core::{
    rebuild, Container, ContainerLocation, LeftPadded, LstError, Location, Markers, RefEq, Result,
    RightPadded,
};

use super::traits::{Element, JavaVisitor};
use crate::location as loc;
use crate::tree::*;

// ============================================================================
// Shared helpers
// ============================================================================

/// Route a node through a category hook. Returns from the enclosing walk
/// function when the hook removed the node or changed its kind.
macro_rules! hook {
    ($v:ident . $hook:ident, $variant:ident, $node:expr, $p:expr) => {
        match $v.$hook(J::$variant($node), $p)? {
            Some(J::$variant(node)) => node,
            other => return Ok(other),
        }
    };
}

/// Dispatch `tree` to the `visit_*` method for its kind.
pub fn dispatch<V: JavaVisitor<P> + ?Sized, P>(v: &mut V, tree: &J, p: &mut P) -> Result<Option<J>> {
    match tree {
        J::CompilationUnit(node) => v.visit_compilation_unit(node, p),
        J::Import(node) => v.visit_import(node, p),
        J::Block(node) => v.visit_block(node, p),
        J::ClassDeclaration(node) => v.visit_class_declaration(node, p),
        J::MethodDeclaration(node) => v.visit_method_declaration(node, p),
        J::Modifier(node) => v.visit_modifier(node, p),
        J::VariableDeclarations(node) => v.visit_variable_declarations(node, p),
        J::NamedVariable(node) => v.visit_named_variable(node, p),
        J::If(node) => v.visit_if_statement(node, p),
        J::Else(node) => v.visit_else_clause(node, p),
        J::ControlParentheses(node) => v.visit_control_parentheses(node, p),
        J::WhileLoop(node) => v.visit_while_loop(node, p),
        J::DoWhileLoop(node) => v.visit_do_while_loop(node, p),
        J::ForEachLoop(node) => v.visit_for_each_loop(node, p),
        J::ForEachControl(node) => v.visit_for_each_control(node, p),
        J::Return(node) => v.visit_return_statement(node, p),
        J::Throw(node) => v.visit_throw(node, p),
        J::Break(node) => v.visit_break_statement(node, p),
        J::Continue(node) => v.visit_continue_statement(node, p),
        J::Empty(node) => v.visit_empty(node, p),
        J::Identifier(node) => v.visit_identifier(node, p),
        J::Literal(node) => v.visit_literal(node, p),
        J::FieldAccess(node) => v.visit_field_access(node, p),
        J::MethodInvocation(node) => v.visit_method_invocation(node, p),
        J::Binary(node) => v.visit_binary(node, p),
        J::Unary(node) => v.visit_unary(node, p),
        J::Assignment(node) => v.visit_assignment(node, p),
        J::AssignmentOperation(node) => v.visit_assignment_operation(node, p),
        J::Parentheses(node) => v.visit_parentheses(node, p),
        J::Ternary(node) => v.visit_ternary(node, p),
        J::NewClass(node) => v.visit_new_class(node, p),
        J::TypeCast(node) => v.visit_type_cast(node, p),
        J::ArrayAccess(node) => v.visit_array_access(node, p),
        J::ArrayDimension(node) => v.visit_array_dimension(node, p),
        J::Erroneous(node) => v.visit_erroneous(node, p),
        J::Extension(node) => {
            trace!(dialect = node.dialect(), kind = node.kind(), "visiting extension node");
            v.visit_extension(node, p)
        }
    }
}

/// Visit a child and narrow the result back to the slot's type.
///
/// `Ok(None)` means the visitor removed the child.
pub fn visit_node<V, P, T>(
    v: &mut V,
    node: &T,
    parent: &'static str,
    field: &'static str,
    p: &mut P,
) -> Result<Option<T>>
where
    V: JavaVisitor<P> + ?Sized,
    T: JNode,
{
    match v.visit(&node.clone().into_j(), p)? {
        None => Ok(None),
        Some(tree) => T::from_j(tree)
            .map(Some)
            .map_err(|found| LstError::UnexpectedKind {
                parent,
                field,
                expected: T::KIND,
                found: found.kind(),
            }),
    }
}

/// Visit a child the grammar requires.
pub fn visit_required<V, P, T>(
    v: &mut V,
    node: &T,
    parent: &'static str,
    field: &'static str,
    p: &mut P,
) -> Result<T>
where
    V: JavaVisitor<P> + ?Sized,
    T: JNode,
{
    required(visit_node(v, node, parent, field, p)?, parent, field)
}

pub fn visit_optional<V, P, T>(
    v: &mut V,
    node: Option<&T>,
    parent: &'static str,
    field: &'static str,
    p: &mut P,
) -> Result<Option<T>>
where
    V: JavaVisitor<P> + ?Sized,
    T: JNode,
{
    match node {
        Some(node) => visit_node(v, node, parent, field, p),
        None => Ok(None),
    }
}

/// Visit a list of children; removed children are dropped from the list.
pub fn visit_nodes<V, P, T>(
    v: &mut V,
    nodes: &[T],
    parent: &'static str,
    field: &'static str,
    p: &mut P,
) -> Result<Vec<T>>
where
    V: JavaVisitor<P> + ?Sized,
    T: JNode,
{
    let mut visited = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(node) = visit_node(v, node, parent, field, p)? {
            visited.push(node);
        }
    }
    Ok(visited)
}

pub fn visit_right_padded_list<V, P, T>(
    v: &mut V,
    list: &[RightPadded<T>],
    loc: Location,
    p: &mut P,
) -> Result<Vec<RightPadded<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    let mut visited = Vec::with_capacity(list.len());
    for right in list {
        if let Some(right) = v.visit_right_padded(right, loc, p)? {
            visited.push(right);
        }
    }
    Ok(visited)
}

pub fn visit_optional_right_padded<V, P, T>(
    v: &mut V,
    right: Option<&RightPadded<T>>,
    loc: Location,
    p: &mut P,
) -> Result<Option<RightPadded<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    match right {
        Some(right) => v.visit_right_padded(right, loc, p),
        None => Ok(None),
    }
}

pub fn visit_optional_left_padded<V, P, T>(
    v: &mut V,
    left: Option<&LeftPadded<T>>,
    loc: Location,
    p: &mut P,
) -> Result<Option<LeftPadded<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    match left {
        Some(left) => v.visit_left_padded(left, loc, p),
        None => Ok(None),
    }
}

pub fn visit_optional_container<V, P, T>(
    v: &mut V,
    container: Option<&Container<T>>,
    loc: ContainerLocation,
    p: &mut P,
) -> Result<Option<Container<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    container
        .map(|container| v.visit_container(container, loc, p))
        .transpose()
}

/// Fail fast when a required child was removed.
pub fn required<T>(value: Option<T>, parent: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(LstError::MissingRequiredChild { parent, field })
}

pub fn walk_markers<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    markers: &Markers,
    p: &mut P,
) -> Result<Markers> {
    if markers.is_empty() {
        return Ok(Markers::EMPTY);
    }
    let mut visited = Vec::with_capacity(markers.len());
    for marker in markers {
        if let Some(marker) = v.visit_marker(marker, p)? {
            visited.push(marker);
        }
    }
    Ok(Markers::new(visited))
}

pub fn walk_right_padded<V, P, T>(
    v: &mut V,
    right: &RightPadded<T>,
    loc: Location,
    p: &mut P,
) -> Result<Option<RightPadded<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    let Some(element) = right.element.visit_element(v, loc, p)? else {
        return Ok(None);
    };
    let after = v.visit_space(&right.after, loc, p)?;
    let markers = v.visit_markers(&right.markers, p)?;
    Ok(Some(RightPadded {
        element,
        after,
        markers,
    }))
}

pub fn walk_left_padded<V, P, T>(
    v: &mut V,
    left: &LeftPadded<T>,
    loc: Location,
    p: &mut P,
) -> Result<Option<LeftPadded<T>>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    let before = v.visit_space(&left.before, loc, p)?;
    let Some(element) = left.element.visit_element(v, loc, p)? else {
        return Ok(None);
    };
    let markers = v.visit_markers(&left.markers, p)?;
    Ok(Some(LeftPadded {
        before,
        element,
        markers,
    }))
}

pub fn walk_container<V, P, T>(
    v: &mut V,
    container: &Container<T>,
    loc: ContainerLocation,
    p: &mut P,
) -> Result<Container<T>>
where
    V: JavaVisitor<P> + ?Sized,
    T: Element,
{
    let before = v.visit_space(&container.before, loc.before, p)?;
    let elements = visit_right_padded_list(v, &container.elements, loc.element, p)?;
    let markers = v.visit_markers(&container.markers, p)?;
    Ok(Container {
        before,
        elements,
        markers,
    })
}

// ============================================================================
// Structure
// ============================================================================

pub fn walk_compilation_unit<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<CompilationUnit>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::COMPILATION_UNIT_PREFIX, p)?;
    let node = rebuild!(node, CompilationUnit { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let imports = visit_right_padded_list(v, &node.imports, loc::IMPORT_SUFFIX, p)?;
    let statements = visit_right_padded_list(v, &node.statements, loc::BLOCK_STATEMENT, p)?;
    let eof = v.visit_space(&node.eof, loc::COMPILATION_UNIT_EOF, p)?;
    Ok(Some(J::CompilationUnit(rebuild!(
        &node,
        CompilationUnit {
            markers,
            imports,
            statements,
            eof
        }
    ))))
}

pub fn walk_import<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Import>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::IMPORT_PREFIX, p)?;
    let node = rebuild!(node, Import { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let statik = visit_optional_left_padded(v, node.statik.as_ref(), loc::STATIC_IMPORT, p)?;
    let qualid = visit_required(v, &node.qualid, "Import", "qualid", p)?;
    Ok(Some(J::Import(rebuild!(
        &node,
        Import {
            markers,
            statik,
            qualid
        }
    ))))
}

pub fn walk_block<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Block>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::BLOCK_PREFIX, p)?;
    let node = rebuild!(node, Block { prefix });
    let node = hook!(v.visit_statement, Block, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let statements = visit_right_padded_list(v, &node.statements, loc::BLOCK_STATEMENT, p)?;
    let end = v.visit_space(&node.end, loc::BLOCK_END, p)?;
    Ok(Some(J::Block(rebuild!(
        &node,
        Block {
            markers,
            statements,
            end
        }
    ))))
}

pub fn walk_class_declaration<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ClassDeclaration>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::CLASS_DECLARATION_PREFIX, p)?;
    let node = rebuild!(node, ClassDeclaration { prefix });
    let node = hook!(v.visit_statement, ClassDeclaration, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let modifiers = visit_nodes(v, &node.modifiers, "ClassDeclaration", "modifiers", p)?;
    let kind = v.visit_left_padded(&node.kind, loc::CLASS_KIND, p)?;
    let kind = required(kind, "ClassDeclaration", "kind")?;
    let name = visit_required(v, &node.name, "ClassDeclaration", "name", p)?;
    let implements = visit_optional_container(v, node.implements.as_ref(), loc::IMPLEMENTS, p)?;
    let body = visit_required(v, &node.body, "ClassDeclaration", "body", p)?;
    Ok(Some(J::ClassDeclaration(rebuild!(
        &node,
        ClassDeclaration {
            markers,
            modifiers,
            kind,
            name,
            implements,
            body
        }
    ))))
}

pub fn walk_method_declaration<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<MethodDeclaration>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::METHOD_DECLARATION_PREFIX, p)?;
    let node = rebuild!(node, MethodDeclaration { prefix });
    let node = hook!(v.visit_statement, MethodDeclaration, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let modifiers = visit_nodes(v, &node.modifiers, "MethodDeclaration", "modifiers", p)?;
    let return_type = visit_optional(
        v,
        node.return_type.as_ref(),
        "MethodDeclaration",
        "return_type",
        p,
    )?;
    let name = visit_required(v, &node.name, "MethodDeclaration", "name", p)?;
    let parameters = v.visit_container(&node.parameters, loc::METHOD_DECLARATION_PARAMETERS, p)?;
    let body = visit_optional(v, node.body.as_ref(), "MethodDeclaration", "body", p)?;
    Ok(Some(J::MethodDeclaration(rebuild!(
        &node,
        MethodDeclaration {
            markers,
            modifiers,
            return_type,
            name,
            parameters,
            body
        }
    ))))
}

pub fn walk_modifier<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Modifier>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::MODIFIER_PREFIX, p)?;
    let node = rebuild!(node, Modifier { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    Ok(Some(J::Modifier(rebuild!(&node, Modifier { markers }))))
}

pub fn walk_variable_declarations<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<VariableDeclarations>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::VARIABLE_DECLARATIONS_PREFIX, p)?;
    let node = rebuild!(node, VariableDeclarations { prefix });
    let node = hook!(v.visit_statement, VariableDeclarations, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let modifiers = visit_nodes(v, &node.modifiers, "VariableDeclarations", "modifiers", p)?;
    let type_expression = visit_optional(
        v,
        node.type_expression.as_ref(),
        "VariableDeclarations",
        "type_expression",
        p,
    )?;
    let variables = visit_right_padded_list(v, &node.variables, loc::VARIABLE_DECLARATOR, p)?;
    if variables.is_empty() {
        return Err(LstError::missing("VariableDeclarations", "variables"));
    }
    Ok(Some(J::VariableDeclarations(rebuild!(
        &node,
        VariableDeclarations {
            markers,
            modifiers,
            type_expression,
            variables
        }
    ))))
}

pub fn walk_named_variable<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<NamedVariable>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::NAMED_VARIABLE_PREFIX, p)?;
    let node = rebuild!(node, NamedVariable { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let name = visit_required(v, &node.name, "NamedVariable", "name", p)?;
    let initializer =
        visit_optional_left_padded(v, node.initializer.as_ref(), loc::VARIABLE_INITIALIZER, p)?;
    Ok(Some(J::NamedVariable(rebuild!(
        &node,
        NamedVariable {
            markers,
            name,
            initializer
        }
    ))))
}

// ============================================================================
// Control flow
// ============================================================================

pub fn walk_if_statement<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<If>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::IF_PREFIX, p)?;
    let node = rebuild!(node, If { prefix });
    let node = hook!(v.visit_statement, If, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let condition = visit_required(v, &node.condition, "If", "condition", p)?;
    let then_part = v.visit_right_padded(&node.then_part, loc::IF_THEN, p)?;
    let then_part = required(then_part, "If", "then_part")?;
    let else_part = visit_optional(v, node.else_part.as_ref(), "If", "else_part", p)?;
    Ok(Some(J::If(rebuild!(
        &node,
        If {
            markers,
            condition,
            then_part,
            else_part
        }
    ))))
}

pub fn walk_else_clause<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Else>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ELSE_PREFIX, p)?;
    let node = rebuild!(node, Else { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let body = v.visit_right_padded(&node.body, loc::IF_ELSE, p)?;
    let body = required(body, "Else", "body")?;
    Ok(Some(J::Else(rebuild!(&node, Else { markers, body }))))
}

pub fn walk_control_parentheses<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ControlParentheses>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::CONTROL_PARENTHESES_PREFIX, p)?;
    let node = rebuild!(node, ControlParentheses { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let tree = v.visit_right_padded(&node.tree, loc::PARENTHESES, p)?;
    let tree = required(tree, "ControlParentheses", "tree")?;
    Ok(Some(J::ControlParentheses(rebuild!(
        &node,
        ControlParentheses { markers, tree }
    ))))
}

pub fn walk_while_loop<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<WhileLoop>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::WHILE_PREFIX, p)?;
    let node = rebuild!(node, WhileLoop { prefix });
    let node = hook!(v.visit_statement, WhileLoop, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let condition = visit_required(v, &node.condition, "WhileLoop", "condition", p)?;
    let body = v.visit_right_padded(&node.body, loc::WHILE_BODY, p)?;
    let body = required(body, "WhileLoop", "body")?;
    Ok(Some(J::WhileLoop(rebuild!(
        &node,
        WhileLoop {
            markers,
            condition,
            body
        }
    ))))
}

pub fn walk_do_while_loop<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<DoWhileLoop>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::DO_WHILE_PREFIX, p)?;
    let node = rebuild!(node, DoWhileLoop { prefix });
    let node = hook!(v.visit_statement, DoWhileLoop, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let body = v.visit_right_padded(&node.body, loc::WHILE_BODY, p)?;
    let body = required(body, "DoWhileLoop", "body")?;
    let while_condition = v.visit_left_padded(&node.while_condition, loc::WHILE_CONDITION, p)?;
    let while_condition = required(while_condition, "DoWhileLoop", "while_condition")?;
    Ok(Some(J::DoWhileLoop(rebuild!(
        &node,
        DoWhileLoop {
            markers,
            body,
            while_condition
        }
    ))))
}

pub fn walk_for_each_loop<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ForEachLoop>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::FOR_EACH_LOOP_PREFIX, p)?;
    let node = rebuild!(node, ForEachLoop { prefix });
    let node = hook!(v.visit_statement, ForEachLoop, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let control = visit_required(v, &node.control, "ForEachLoop", "control", p)?;
    let body = v.visit_right_padded(&node.body, loc::FOR_BODY, p)?;
    let body = required(body, "ForEachLoop", "body")?;
    Ok(Some(J::ForEachLoop(rebuild!(
        &node,
        ForEachLoop {
            markers,
            control,
            body
        }
    ))))
}

pub fn walk_for_each_control<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ForEachControl>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::FOR_EACH_CONTROL_PREFIX, p)?;
    let node = rebuild!(node, ForEachControl { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let variable = v.visit_right_padded(&node.variable, loc::FOREACH_VARIABLE, p)?;
    let variable = required(variable, "ForEachControl", "variable")?;
    let iterable = v.visit_right_padded(&node.iterable, loc::FOREACH_ITERABLE, p)?;
    let iterable = required(iterable, "ForEachControl", "iterable")?;
    Ok(Some(J::ForEachControl(rebuild!(
        &node,
        ForEachControl {
            markers,
            variable,
            iterable
        }
    ))))
}

pub fn walk_return_statement<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Return>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::RETURN_PREFIX, p)?;
    let node = rebuild!(node, Return { prefix });
    let node = hook!(v.visit_statement, Return, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let expression = visit_optional(v, node.expression.as_ref(), "Return", "expression", p)?;
    Ok(Some(J::Return(rebuild!(
        &node,
        Return {
            markers,
            expression
        }
    ))))
}

pub fn walk_throw<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Throw>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::THROW_PREFIX, p)?;
    let node = rebuild!(node, Throw { prefix });
    let node = hook!(v.visit_statement, Throw, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let exception = visit_required(v, &node.exception, "Throw", "exception", p)?;
    Ok(Some(J::Throw(rebuild!(&node, Throw { markers, exception }))))
}

pub fn walk_break_statement<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Break>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::BREAK_PREFIX, p)?;
    let node = rebuild!(node, Break { prefix });
    let node = hook!(v.visit_statement, Break, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let label = visit_optional(v, node.label.as_ref(), "Break", "label", p)?;
    Ok(Some(J::Break(rebuild!(&node, Break { markers, label }))))
}

pub fn walk_continue_statement<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Continue>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::CONTINUE_PREFIX, p)?;
    let node = rebuild!(node, Continue { prefix });
    let node = hook!(v.visit_statement, Continue, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let label = visit_optional(v, node.label.as_ref(), "Continue", "label", p)?;
    Ok(Some(J::Continue(rebuild!(&node, Continue { markers, label }))))
}

pub fn walk_empty<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Empty>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::EMPTY_PREFIX, p)?;
    let node = rebuild!(node, Empty { prefix });
    let node = hook!(v.visit_statement, Empty, node, p);
    let node = hook!(v.visit_expression, Empty, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    Ok(Some(J::Empty(rebuild!(&node, Empty { markers }))))
}

// ============================================================================
// Expressions
// ============================================================================

pub fn walk_identifier<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Identifier>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::IDENTIFIER_PREFIX, p)?;
    let node = rebuild!(node, Identifier { prefix });
    let node = hook!(v.visit_expression, Identifier, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    Ok(Some(J::Identifier(rebuild!(&node, Identifier { markers }))))
}

pub fn walk_literal<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Literal>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::LITERAL_PREFIX, p)?;
    let node = rebuild!(node, Literal { prefix });
    let node = hook!(v.visit_expression, Literal, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    Ok(Some(J::Literal(rebuild!(&node, Literal { markers }))))
}

pub fn walk_field_access<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<FieldAccess>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::FIELD_ACCESS_PREFIX, p)?;
    let node = rebuild!(node, FieldAccess { prefix });
    let node = hook!(v.visit_expression, FieldAccess, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let target = visit_required(v, &node.target, "FieldAccess", "target", p)?;
    let name = v.visit_left_padded(&node.name, loc::FIELD_ACCESS_NAME, p)?;
    let name = required(name, "FieldAccess", "name")?;
    Ok(Some(J::FieldAccess(rebuild!(
        &node,
        FieldAccess {
            markers,
            target,
            name
        }
    ))))
}

pub fn walk_method_invocation<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<MethodInvocation>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::METHOD_INVOCATION_PREFIX, p)?;
    let node = rebuild!(node, MethodInvocation { prefix });
    let node = hook!(v.visit_statement, MethodInvocation, node, p);
    let node = hook!(v.visit_expression, MethodInvocation, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let select = visit_optional_right_padded(v, node.select.as_ref(), loc::METHOD_SELECT_SUFFIX, p)?;
    let name = visit_required(v, &node.name, "MethodInvocation", "name", p)?;
    let arguments = v.visit_container(&node.arguments, loc::METHOD_INVOCATION_ARGUMENTS, p)?;
    Ok(Some(J::MethodInvocation(rebuild!(
        &node,
        MethodInvocation {
            markers,
            select,
            name,
            arguments
        }
    ))))
}

pub fn walk_binary<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Binary>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::BINARY_PREFIX, p)?;
    let node = rebuild!(node, Binary { prefix });
    let node = hook!(v.visit_expression, Binary, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let left = visit_required(v, &node.left, "Binary", "left", p)?;
    let operator = v.visit_left_padded(&node.operator, loc::BINARY_OPERATOR, p)?;
    let operator = required(operator, "Binary", "operator")?;
    let right = visit_required(v, &node.right, "Binary", "right", p)?;
    Ok(Some(J::Binary(rebuild!(
        &node,
        Binary {
            markers,
            left,
            operator,
            right
        }
    ))))
}

pub fn walk_unary<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Unary>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::UNARY_PREFIX, p)?;
    let node = rebuild!(node, Unary { prefix });
    let node = hook!(v.visit_statement, Unary, node, p);
    let node = hook!(v.visit_expression, Unary, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    // Postfix operators follow their operand in the source.
    let (operator, expression) = if node.operator.element.is_postfix() {
        let expression = visit_required(v, &node.expression, "Unary", "expression", p)?;
        let operator = v.visit_left_padded(&node.operator, loc::UNARY_OPERATOR, p)?;
        (operator, expression)
    } else {
        let operator = v.visit_left_padded(&node.operator, loc::UNARY_OPERATOR, p)?;
        let expression = visit_required(v, &node.expression, "Unary", "expression", p)?;
        (operator, expression)
    };
    let operator = required(operator, "Unary", "operator")?;
    Ok(Some(J::Unary(rebuild!(
        &node,
        Unary {
            markers,
            operator,
            expression
        }
    ))))
}

pub fn walk_assignment<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Assignment>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ASSIGNMENT_PREFIX, p)?;
    let node = rebuild!(node, Assignment { prefix });
    let node = hook!(v.visit_statement, Assignment, node, p);
    let node = hook!(v.visit_expression, Assignment, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let variable = visit_required(v, &node.variable, "Assignment", "variable", p)?;
    let assignment = v.visit_left_padded(&node.assignment, loc::ASSIGNMENT, p)?;
    let assignment = required(assignment, "Assignment", "assignment")?;
    Ok(Some(J::Assignment(rebuild!(
        &node,
        Assignment {
            markers,
            variable,
            assignment
        }
    ))))
}

pub fn walk_assignment_operation<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<AssignmentOperation>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ASSIGNMENT_OPERATION_PREFIX, p)?;
    let node = rebuild!(node, AssignmentOperation { prefix });
    let node = hook!(v.visit_statement, AssignmentOperation, node, p);
    let node = hook!(v.visit_expression, AssignmentOperation, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let variable = visit_required(v, &node.variable, "AssignmentOperation", "variable", p)?;
    let operator = v.visit_left_padded(&node.operator, loc::ASSIGNMENT_OPERATION_OPERATOR, p)?;
    let operator = required(operator, "AssignmentOperation", "operator")?;
    let assignment = visit_required(v, &node.assignment, "AssignmentOperation", "assignment", p)?;
    Ok(Some(J::AssignmentOperation(rebuild!(
        &node,
        AssignmentOperation {
            markers,
            variable,
            operator,
            assignment
        }
    ))))
}

pub fn walk_parentheses<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Parentheses>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::PARENTHESES_PREFIX, p)?;
    let node = rebuild!(node, Parentheses { prefix });
    let node = hook!(v.visit_expression, Parentheses, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let tree = v.visit_right_padded(&node.tree, loc::PARENTHESES, p)?;
    let tree = required(tree, "Parentheses", "tree")?;
    Ok(Some(J::Parentheses(rebuild!(
        &node,
        Parentheses { markers, tree }
    ))))
}

pub fn walk_ternary<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Ternary>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::TERNARY_PREFIX, p)?;
    let node = rebuild!(node, Ternary { prefix });
    let node = hook!(v.visit_expression, Ternary, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let condition = visit_required(v, &node.condition, "Ternary", "condition", p)?;
    let true_part = v.visit_left_padded(&node.true_part, loc::TERNARY_TRUE, p)?;
    let true_part = required(true_part, "Ternary", "true_part")?;
    let false_part = v.visit_left_padded(&node.false_part, loc::TERNARY_FALSE, p)?;
    let false_part = required(false_part, "Ternary", "false_part")?;
    Ok(Some(J::Ternary(rebuild!(
        &node,
        Ternary {
            markers,
            condition,
            true_part,
            false_part
        }
    ))))
}

pub fn walk_new_class<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<NewClass>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::NEW_CLASS_PREFIX, p)?;
    let node = rebuild!(node, NewClass { prefix });
    let node = hook!(v.visit_statement, NewClass, node, p);
    let node = hook!(v.visit_expression, NewClass, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let clazz = visit_optional(v, node.clazz.as_ref(), "NewClass", "clazz", p)?;
    let arguments =
        visit_optional_container(v, node.arguments.as_ref(), loc::NEW_CLASS_ARGUMENTS, p)?;
    let body = visit_optional(v, node.body.as_ref(), "NewClass", "body", p)?;
    Ok(Some(J::NewClass(rebuild!(
        &node,
        NewClass {
            markers,
            clazz,
            arguments,
            body
        }
    ))))
}

pub fn walk_type_cast<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<TypeCast>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::TYPE_CAST_PREFIX, p)?;
    let node = rebuild!(node, TypeCast { prefix });
    let node = hook!(v.visit_expression, TypeCast, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let clazz = visit_required(v, &node.clazz, "TypeCast", "clazz", p)?;
    let expression = visit_required(v, &node.expression, "TypeCast", "expression", p)?;
    Ok(Some(J::TypeCast(rebuild!(
        &node,
        TypeCast {
            markers,
            clazz,
            expression
        }
    ))))
}

pub fn walk_array_access<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ArrayAccess>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ARRAY_ACCESS_PREFIX, p)?;
    let node = rebuild!(node, ArrayAccess { prefix });
    let node = hook!(v.visit_expression, ArrayAccess, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let indexed = visit_required(v, &node.indexed, "ArrayAccess", "indexed", p)?;
    let dimension = visit_required(v, &node.dimension, "ArrayAccess", "dimension", p)?;
    Ok(Some(J::ArrayAccess(rebuild!(
        &node,
        ArrayAccess {
            markers,
            indexed,
            dimension
        }
    ))))
}

pub fn walk_array_dimension<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<ArrayDimension>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ARRAY_DIMENSION_PREFIX, p)?;
    let node = rebuild!(node, ArrayDimension { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let index = v.visit_right_padded(&node.index, loc::DIMENSION, p)?;
    let index = required(index, "ArrayDimension", "index")?;
    Ok(Some(J::ArrayDimension(rebuild!(
        &node,
        ArrayDimension { markers, index }
    ))))
}

pub fn walk_erroneous<V: JavaVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Erroneous>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ERRONEOUS_PREFIX, p)?;
    let node = rebuild!(node, Erroneous { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    Ok(Some(J::Erroneous(rebuild!(&node, Erroneous { markers }))))
}

/// Whether a visit left `original` untouched.
pub fn unchanged(original: &J, visited: &Option<J>) -> bool {
    visited
        .as_ref()
        .is_some_and(|visited| visited.ref_eq(original))
}
