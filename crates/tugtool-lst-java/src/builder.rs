// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Hand construction of host trees.
//!
//! Parsers and tests build trees bottom-up with a [`TreeBuilder`]. Spaces are
//! given as raw source text (`" "`, `"\n    // note\n    "`) and split with
//! [`Space::format`]. Ids come from one [`NodeIdGenerator`] per builder, so a
//! builder that produces the same calls produces the same ids.

use std::cell::RefCell;
use std::sync::Arc;

use tugtool_lst_core::{
    Container, LeftPadded, Markers, NodeId, NodeIdGenerator, RightPadded, Space,
};

use crate::tree::*;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    ids: RefCell<NodeIdGenerator>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        self.ids.borrow_mut().next_id()
    }

    /// Number of ids handed out so far.
    pub fn count(&self) -> u64 {
        self.ids.borrow().count()
    }

    // ------------------------------------------------------------------
    // Padding
    // ------------------------------------------------------------------

    pub fn right(&self, element: impl Into<J>, after: &str) -> RightPadded<J> {
        RightPadded::new(element.into(), Space::format(after))
    }

    pub fn left(&self, before: &str, element: impl Into<J>) -> LeftPadded<J> {
        LeftPadded::new(Space::format(before), element.into())
    }

    /// A container from `(element, after)` pairs.
    pub fn container<E: Into<J>>(&self, before: &str, elements: Vec<(E, &str)>) -> Container<J> {
        Container::new(
            Space::format(before),
            elements
                .into_iter()
                .map(|(element, after)| self.right(element, after))
                .collect(),
        )
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    pub fn compilation_unit(
        &self,
        prefix: &str,
        imports: Vec<RightPadded<J>>,
        statements: Vec<RightPadded<J>>,
        eof: &str,
    ) -> Arc<CompilationUnit> {
        Arc::new(CompilationUnit {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            imports,
            statements,
            eof: Space::format(eof),
        })
    }

    /// `static_before` is the space before `static`, for static imports.
    pub fn import(&self, prefix: &str, static_before: Option<&str>, qualid: impl Into<J>) -> Arc<Import> {
        Arc::new(Import {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            statik: static_before.map(|before| LeftPadded::new(Space::format(before), true)),
            qualid: qualid.into(),
        })
    }

    pub fn block(&self, prefix: &str, statements: Vec<RightPadded<J>>, end: &str) -> Arc<Block> {
        Arc::new(Block {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            statements,
            end: Space::format(end),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn class_declaration(
        &self,
        prefix: &str,
        modifiers: Vec<J>,
        kind_before: &str,
        kind: ClassKind,
        name: Arc<Identifier>,
        implements: Option<Container<J>>,
        body: Arc<Block>,
    ) -> Arc<ClassDeclaration> {
        Arc::new(ClassDeclaration {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            modifiers,
            kind: LeftPadded::new(Space::format(kind_before), kind),
            name,
            implements,
            body,
        })
    }

    pub fn method_declaration(
        &self,
        prefix: &str,
        modifiers: Vec<J>,
        return_type: Option<J>,
        name: Arc<Identifier>,
        parameters: Container<J>,
        body: Option<Arc<Block>>,
    ) -> Arc<MethodDeclaration> {
        Arc::new(MethodDeclaration {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            modifiers,
            return_type,
            name,
            parameters,
            body,
        })
    }

    pub fn modifier(&self, prefix: &str, kind: ModifierKind) -> Arc<Modifier> {
        Arc::new(Modifier {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            kind,
        })
    }

    pub fn variable_declarations(
        &self,
        prefix: &str,
        modifiers: Vec<J>,
        type_expression: Option<J>,
        variables: Vec<RightPadded<J>>,
    ) -> Arc<VariableDeclarations> {
        Arc::new(VariableDeclarations {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            modifiers,
            type_expression,
            variables,
        })
    }

    pub fn named_variable(
        &self,
        prefix: &str,
        name: Arc<Identifier>,
        initializer: Option<LeftPadded<J>>,
    ) -> Arc<NamedVariable> {
        Arc::new(NamedVariable {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            name,
            initializer,
        })
    }

    // ------------------------------------------------------------------
    // Control flow
    // ------------------------------------------------------------------

    pub fn if_statement(
        &self,
        prefix: &str,
        condition: Arc<ControlParentheses>,
        then_part: RightPadded<J>,
        else_part: Option<Arc<Else>>,
    ) -> Arc<If> {
        Arc::new(If {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            condition,
            then_part,
            else_part,
        })
    }

    pub fn else_clause(&self, prefix: &str, body: RightPadded<J>) -> Arc<Else> {
        Arc::new(Else {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            body,
        })
    }

    pub fn control_parentheses(&self, prefix: &str, tree: impl Into<J>, after: &str) -> Arc<ControlParentheses> {
        Arc::new(ControlParentheses {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            tree: self.right(tree, after),
        })
    }

    pub fn while_loop(&self, prefix: &str, condition: Arc<ControlParentheses>, body: RightPadded<J>) -> Arc<WhileLoop> {
        Arc::new(WhileLoop {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            condition,
            body,
        })
    }

    pub fn do_while_loop(
        &self,
        prefix: &str,
        body: RightPadded<J>,
        while_before: &str,
        condition: Arc<ControlParentheses>,
    ) -> Arc<DoWhileLoop> {
        Arc::new(DoWhileLoop {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            body,
            while_condition: LeftPadded::new(Space::format(while_before), condition),
        })
    }

    pub fn for_each_loop(&self, prefix: &str, control: Arc<ForEachControl>, body: RightPadded<J>) -> Arc<ForEachLoop> {
        Arc::new(ForEachLoop {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            control,
            body,
        })
    }

    pub fn for_each_control(
        &self,
        prefix: &str,
        variable: RightPadded<J>,
        iterable: RightPadded<J>,
    ) -> Arc<ForEachControl> {
        Arc::new(ForEachControl {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            variable,
            iterable,
        })
    }

    pub fn return_statement(&self, prefix: &str, expression: Option<J>) -> Arc<Return> {
        Arc::new(Return {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            expression,
        })
    }

    pub fn throw(&self, prefix: &str, exception: impl Into<J>) -> Arc<Throw> {
        Arc::new(Throw {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            exception: exception.into(),
        })
    }

    pub fn break_statement(&self, prefix: &str, label: Option<Arc<Identifier>>) -> Arc<Break> {
        Arc::new(Break {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            label,
        })
    }

    pub fn continue_statement(&self, prefix: &str, label: Option<Arc<Identifier>>) -> Arc<Continue> {
        Arc::new(Continue {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            label,
        })
    }

    pub fn empty(&self, prefix: &str) -> Arc<Empty> {
        Arc::new(Empty {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
        })
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn identifier(&self, prefix: &str, name: &str) -> Arc<Identifier> {
        Arc::new(Identifier {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            simple_name: name.to_string(),
        })
    }

    pub fn literal(&self, prefix: &str, source: &str) -> Arc<Literal> {
        Arc::new(Literal {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            value_source: source.to_string(),
        })
    }

    /// `target<dot_before>.name`
    pub fn field_access(&self, prefix: &str, target: impl Into<J>, dot_before: &str, name: Arc<Identifier>) -> Arc<FieldAccess> {
        Arc::new(FieldAccess {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            target: target.into(),
            name: LeftPadded::new(Space::format(dot_before), name),
        })
    }

    /// A dotted name such as `System.Math`, built as nested field accesses.
    pub fn qualified_name(&self, prefix: &str, name: &str) -> J {
        let mut parts = name.split('.');
        let first = parts.next().unwrap_or_default();
        let mut tree: J = self.identifier(prefix, first).into();
        for part in parts {
            tree = self.field_access("", tree, "", self.identifier("", part)).into();
        }
        tree
    }

    pub fn method_invocation(
        &self,
        prefix: &str,
        select: Option<RightPadded<J>>,
        name: Arc<Identifier>,
        arguments: Container<J>,
    ) -> Arc<MethodInvocation> {
        Arc::new(MethodInvocation {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            select,
            name,
            arguments,
        })
    }

    pub fn binary(
        &self,
        prefix: &str,
        left: impl Into<J>,
        operator_before: &str,
        operator: BinaryOperator,
        right: impl Into<J>,
    ) -> Arc<Binary> {
        Arc::new(Binary {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            left: left.into(),
            operator: LeftPadded::new(Space::format(operator_before), operator),
            right: right.into(),
        })
    }

    pub fn unary(&self, prefix: &str, operator_before: &str, operator: UnaryOperator, expression: impl Into<J>) -> Arc<Unary> {
        Arc::new(Unary {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            operator: LeftPadded::new(Space::format(operator_before), operator),
            expression: expression.into(),
        })
    }

    /// `variable<equals_before>= assignment`
    pub fn assignment(&self, prefix: &str, variable: impl Into<J>, equals_before: &str, assignment: impl Into<J>) -> Arc<Assignment> {
        Arc::new(Assignment {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            variable: variable.into(),
            assignment: self.left(equals_before, assignment),
        })
    }

    pub fn assignment_operation(
        &self,
        prefix: &str,
        variable: impl Into<J>,
        operator_before: &str,
        operator: AssignmentOperator,
        assignment: impl Into<J>,
    ) -> Arc<AssignmentOperation> {
        Arc::new(AssignmentOperation {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            variable: variable.into(),
            operator: LeftPadded::new(Space::format(operator_before), operator),
            assignment: assignment.into(),
        })
    }

    pub fn parentheses(&self, prefix: &str, tree: impl Into<J>, after: &str) -> Arc<Parentheses> {
        Arc::new(Parentheses {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            tree: self.right(tree, after),
        })
    }

    pub fn ternary(&self, prefix: &str, condition: impl Into<J>, true_part: LeftPadded<J>, false_part: LeftPadded<J>) -> Arc<Ternary> {
        Arc::new(Ternary {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            condition: condition.into(),
            true_part,
            false_part,
        })
    }

    pub fn new_class(
        &self,
        prefix: &str,
        clazz: Option<J>,
        arguments: Option<Container<J>>,
        body: Option<Arc<Block>>,
    ) -> Arc<NewClass> {
        Arc::new(NewClass {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            clazz,
            arguments,
            body,
        })
    }

    pub fn type_cast(&self, prefix: &str, clazz: Arc<ControlParentheses>, expression: impl Into<J>) -> Arc<TypeCast> {
        Arc::new(TypeCast {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            clazz,
            expression: expression.into(),
        })
    }

    pub fn array_access(&self, prefix: &str, indexed: impl Into<J>, dimension: Arc<ArrayDimension>) -> Arc<ArrayAccess> {
        Arc::new(ArrayAccess {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            indexed: indexed.into(),
            dimension,
        })
    }

    pub fn array_dimension(&self, prefix: &str, index: impl Into<J>, after: &str) -> Arc<ArrayDimension> {
        Arc::new(ArrayDimension {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            index: self.right(index, after),
        })
    }

    pub fn erroneous(&self, prefix: &str, text: &str, diagnostics: Vec<String>) -> Arc<Erroneous> {
        Arc::new(Erroneous {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            text: text.to_string(),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_per_builder() {
        let b = TreeBuilder::new();
        let first = b.identifier("", "a");
        let second = b.identifier("", "b");
        assert_eq!(first.id, NodeId(0));
        assert_eq!(second.id, NodeId(1));
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn qualified_name_nests_field_accesses() {
        let b = TreeBuilder::new();
        let J::FieldAccess(outer) = b.qualified_name(" ", "System.Math") else {
            panic!("expected a field access");
        };
        assert_eq!(outer.name.element.simple_name, "Math");
        assert_eq!(outer.target.prefix(), &Space::single());
        assert_eq!(outer.target.kind(), "Identifier");
    }

    #[test]
    fn raw_trivia_is_split_into_comments() {
        let b = TreeBuilder::new();
        let name = b.identifier(" /* c */ ", "x");
        assert_eq!(name.prefix.whitespace, " ");
        assert_eq!(name.prefix.comments.len(), 1);
        assert_eq!(name.prefix.comments[0].suffix, " ");
    }
}
