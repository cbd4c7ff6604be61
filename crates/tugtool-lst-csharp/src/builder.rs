// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Hand construction of C# nodes, on top of the host [`TreeBuilder`].

use std::sync::Arc;

use tugtool_lst_core::{LeftPadded, Markers, RightPadded, Space};
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::{Block, ControlParentheses, Identifier, J};

use crate::tree::*;

/// C# node constructors. Ids come from the same generator as the host nodes
/// of the builder.
pub trait CSharpTreeBuilder {
    fn cs_compilation_unit(
        &self,
        prefix: &str,
        usings: Vec<RightPadded<J>>,
        members: Vec<RightPadded<J>>,
        eof: &str,
    ) -> Arc<CompilationUnit>;

    /// `static_before` is the space before `static`.
    fn using_directive(
        &self,
        prefix: &str,
        static_before: Option<&str>,
        namespace_or_type: J,
    ) -> Arc<UsingDirective>;

    fn namespace_declaration(
        &self,
        prefix: &str,
        name: RightPadded<J>,
        kind: NamespaceKind,
        members: Vec<RightPadded<J>>,
        end: &str,
    ) -> Arc<NamespaceDeclaration>;

    fn annotated_statement(&self, attribute_lists: Vec<J>, statement: J) -> Arc<AnnotatedStatement>;

    fn attribute_list(&self, prefix: &str, attributes: Vec<RightPadded<J>>) -> Arc<AttributeList>;

    fn using_statement(
        &self,
        prefix: &str,
        control: Arc<ControlParentheses>,
        statement: J,
    ) -> Arc<UsingStatement>;

    fn cs_binary(
        &self,
        prefix: &str,
        left: J,
        operator_before: &str,
        operator: CsBinaryOperator,
        right: J,
    ) -> Arc<Binary>;

    fn property_declaration(
        &self,
        prefix: &str,
        modifiers: Vec<J>,
        type_expression: J,
        name: Arc<Identifier>,
        accessors: Option<Arc<Block>>,
        initializer: Option<LeftPadded<J>>,
    ) -> Arc<PropertyDeclaration>;

    /// An accessor without a body (`get;`) when `body` is `None`.
    fn accessor_declaration(
        &self,
        prefix: &str,
        kind: AccessorKind,
        body: Option<Arc<Block>>,
    ) -> Arc<AccessorDeclaration>;

    fn await_expression(&self, prefix: &str, expression: J) -> Arc<AwaitExpression>;
}

impl CSharpTreeBuilder for TreeBuilder {
    fn cs_compilation_unit(
        &self,
        prefix: &str,
        usings: Vec<RightPadded<J>>,
        members: Vec<RightPadded<J>>,
        eof: &str,
    ) -> Arc<CompilationUnit> {
        Arc::new(CompilationUnit {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            usings,
            members,
            eof: Space::format(eof),
        })
    }

    fn using_directive(
        &self,
        prefix: &str,
        static_before: Option<&str>,
        namespace_or_type: J,
    ) -> Arc<UsingDirective> {
        Arc::new(UsingDirective {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            global: None,
            statik: static_before.map(|before| LeftPadded::new(Space::format(before), true)),
            alias: None,
            namespace_or_type,
        })
    }

    fn namespace_declaration(
        &self,
        prefix: &str,
        name: RightPadded<J>,
        kind: NamespaceKind,
        members: Vec<RightPadded<J>>,
        end: &str,
    ) -> Arc<NamespaceDeclaration> {
        Arc::new(NamespaceDeclaration {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            name,
            kind,
            usings: Vec::new(),
            members,
            end: Space::format(end),
        })
    }

    fn annotated_statement(&self, attribute_lists: Vec<J>, statement: J) -> Arc<AnnotatedStatement> {
        Arc::new(AnnotatedStatement {
            id: self.id(),
            prefix: Space::EMPTY,
            markers: Markers::EMPTY,
            attribute_lists,
            statement,
        })
    }

    fn attribute_list(&self, prefix: &str, attributes: Vec<RightPadded<J>>) -> Arc<AttributeList> {
        Arc::new(AttributeList {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            target: None,
            attributes,
        })
    }

    fn using_statement(
        &self,
        prefix: &str,
        control: Arc<ControlParentheses>,
        statement: J,
    ) -> Arc<UsingStatement> {
        Arc::new(UsingStatement {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            control,
            statement,
        })
    }

    fn cs_binary(
        &self,
        prefix: &str,
        left: J,
        operator_before: &str,
        operator: CsBinaryOperator,
        right: J,
    ) -> Arc<Binary> {
        Arc::new(Binary {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            left,
            operator: LeftPadded::new(Space::format(operator_before), operator),
            right,
        })
    }

    fn property_declaration(
        &self,
        prefix: &str,
        modifiers: Vec<J>,
        type_expression: J,
        name: Arc<Identifier>,
        accessors: Option<Arc<Block>>,
        initializer: Option<LeftPadded<J>>,
    ) -> Arc<PropertyDeclaration> {
        Arc::new(PropertyDeclaration {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            modifiers,
            type_expression,
            name,
            accessors,
            expression_body: None,
            initializer,
        })
    }

    fn accessor_declaration(
        &self,
        prefix: &str,
        kind: AccessorKind,
        body: Option<Arc<Block>>,
    ) -> Arc<AccessorDeclaration> {
        Arc::new(AccessorDeclaration {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            modifiers: Vec::new(),
            kind: LeftPadded::new(Space::EMPTY, kind),
            body,
            expression_body: None,
        })
    }

    fn await_expression(&self, prefix: &str, expression: J) -> Arc<AwaitExpression> {
        Arc::new(AwaitExpression {
            id: self.id(),
            prefix: Space::format(prefix),
            markers: Markers::EMPTY,
            expression,
        })
    }
}
