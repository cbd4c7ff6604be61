// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The C# visitor.
//!
//! [`CSharpVisitor`] extends [`JavaVisitor`]: host nodes inside a C# tree are
//! walked by the host walk functions, and the C# nodes get their own
//! `visit_*` methods. The host visitor only sees C# nodes as
//! `J::Extension`, so a C# visitor routes them back to itself with
//! [`csharp_visitor_bridge!`](crate::csharp_visitor_bridge):
//!
//! ```ignore
//! impl JavaVisitor<()> for DropStatic {
//!     fn cursor(&mut self) -> &mut Cursor<J> {
//!         &mut self.cursor
//!     }
//!
//!     csharp_visitor_bridge!(());
//! }
//!
//! impl CSharpVisitor<()> for DropStatic {
//!     fn visit_using_directive(&mut self, node: &Arc<UsingDirective>, p: &mut ()) -> Result<Option<J>> {
//!         let statik = None;
//!         let node = rebuild!(node, UsingDirective { statik });
//!         walk_using_directive(self, &node, p)
//!     }
//! }
//! ```

use std::sync::Arc;

use tracing::trace;
use tugtool_lst_core::{rebuild, Result};
use tugtool_lst_java::visitor::{
    required, visit_nodes, visit_optional, visit_optional_left_padded,
    visit_optional_right_padded, visit_required, visit_right_padded_list, JavaVisitor,
};
use tugtool_lst_java::{Extension, J};

use crate::location as loc;
use crate::tree::*;

/// Route a C# node through a category hook. Returns from the enclosing walk
/// function when the hook removed the node or replaced it with another kind.
macro_rules! hook {
    ($v:ident . $hook:ident, $ty:ident, $node:expr, $p:expr) => {
        match $v.$hook($node.into_j(), $p)? {
            Some(tree) => match tree.downcast_extension::<$ty>() {
                Some(node) => node,
                None => return Ok(Some(tree)),
            },
            None => return Ok(None),
        }
    };
}

macro_rules! csharp_visitor_methods {
    (
        $(
            $base_name:ident : $node_type:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a C# [`", stringify!($node_type), "`] node.")]
                fn [<visit_ $base_name>](&mut self, node: &Arc<$node_type>, p: &mut P) -> Result<Option<J>> {
                    [<walk_ $base_name>](self, node, p)
                }
            )*
        }
    };
}

/// Rewriting visitor over C# trees.
///
/// Implementors also implement [`JavaVisitor`] and expand
/// [`csharp_visitor_bridge!`](crate::csharp_visitor_bridge) inside that impl.
/// The bridge limits the visitor to C# source files and sends every
/// `J::Extension` it meets to [`visit_cs`](Self::visit_cs).
pub trait CSharpVisitor<P>: JavaVisitor<P> {
    /// Dispatch a C# node to its `visit_*` method. The node is already on the
    /// cursor.
    fn visit_cs(&mut self, node: &Cs, p: &mut P) -> Result<Option<J>> {
        match node {
            Cs::CompilationUnit(node) => self.visit_cs_compilation_unit(node, p),
            Cs::UsingDirective(node) => self.visit_using_directive(node, p),
            Cs::NamespaceDeclaration(node) => self.visit_namespace_declaration(node, p),
            Cs::AnnotatedStatement(node) => self.visit_annotated_statement(node, p),
            Cs::AttributeList(node) => self.visit_attribute_list(node, p),
            Cs::UsingStatement(node) => self.visit_using_statement(node, p),
            Cs::Binary(node) => self.visit_cs_binary(node, p),
            Cs::PropertyDeclaration(node) => self.visit_property_declaration(node, p),
            Cs::AccessorDeclaration(node) => self.visit_accessor_declaration(node, p),
            Cs::AwaitExpression(node) => self.visit_await_expression(node, p),
        }
    }

    csharp_visitor_methods! {
        cs_compilation_unit: CompilationUnit,
        using_directive: UsingDirective,
        namespace_declaration: NamespaceDeclaration,
        annotated_statement: AnnotatedStatement,
        attribute_list: AttributeList,
        using_statement: UsingStatement,
        cs_binary: Binary,
        property_declaration: PropertyDeclaration,
        accessor_declaration: AccessorDeclaration,
        await_expression: AwaitExpression,
    }
}

/// Expands to the `JavaVisitor` methods that hand C# nodes to the
/// [`CSharpVisitor`] impl of the same type. `$p` is the visitor's context
/// type.
#[macro_export]
macro_rules! csharp_visitor_bridge {
    ($p:ty) => {
        fn is_acceptable(&self, tree: &$crate::host::J, _p: &$p) -> bool {
            $crate::visitor::is_csharp_source(tree)
        }

        fn visit_extension(
            &mut self,
            node: &::std::sync::Arc<dyn $crate::host::Extension>,
            p: &mut $p,
        ) -> $crate::lst::Result<Option<$crate::host::J>> {
            $crate::visitor::visit_csharp_extension(self, node, p)
        }
    };
}

/// Whether `tree` is a C# source file.
pub fn is_csharp_source(tree: &J) -> bool {
    matches!(Cs::from_j(tree), Some(Cs::CompilationUnit(_)))
}

/// Send a C# node to `v`; other dialects' nodes pass through untouched.
pub fn visit_csharp_extension<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<dyn Extension>,
    p: &mut P,
) -> Result<Option<J>> {
    match Cs::from_extension(node) {
        Some(cs) => v.visit_cs(&cs, p),
        None => {
            trace!(dialect = node.dialect(), kind = node.kind(), "passing foreign node through");
            Ok(Some(J::Extension(Arc::clone(node))))
        }
    }
}

pub fn walk_cs_compilation_unit<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<CompilationUnit>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::CS_COMPILATION_UNIT_PREFIX, p)?;
    let node = rebuild!(node, CompilationUnit { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let usings = visit_right_padded_list(v, &node.usings, loc::USING_DIRECTIVE_SUFFIX, p)?;
    let members = visit_right_padded_list(v, &node.members, loc::COMPILATION_UNIT_MEMBER, p)?;
    let eof = v.visit_space(&node.eof, loc::CS_COMPILATION_UNIT_EOF, p)?;
    Ok(Some(
        rebuild!(
            &node,
            CompilationUnit {
                markers,
                usings,
                members,
                eof
            }
        )
        .into_j(),
    ))
}

pub fn walk_using_directive<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<UsingDirective>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::USING_DIRECTIVE_PREFIX, p)?;
    let node = rebuild!(node, UsingDirective { prefix });
    let node = hook!(v.visit_statement, UsingDirective, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let global = visit_optional_right_padded(v, node.global.as_ref(), loc::USING_DIRECTIVE_GLOBAL, p)?;
    let statik = visit_optional_left_padded(v, node.statik.as_ref(), loc::USING_DIRECTIVE_STATIC, p)?;
    let alias = visit_optional_right_padded(v, node.alias.as_ref(), loc::USING_DIRECTIVE_ALIAS, p)?;
    let namespace_or_type = visit_required(
        v,
        &node.namespace_or_type,
        "UsingDirective",
        "namespace_or_type",
        p,
    )?;
    Ok(Some(
        rebuild!(
            &node,
            UsingDirective {
                markers,
                global,
                statik,
                alias,
                namespace_or_type
            }
        )
        .into_j(),
    ))
}

pub fn walk_namespace_declaration<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<NamespaceDeclaration>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::NAMESPACE_DECLARATION_PREFIX, p)?;
    let node = rebuild!(node, NamespaceDeclaration { prefix });
    let node = hook!(v.visit_statement, NamespaceDeclaration, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let name = v.visit_right_padded(&node.name, loc::NAMESPACE_NAME, p)?;
    let name = required(name, "NamespaceDeclaration", "name")?;
    let usings = visit_right_padded_list(v, &node.usings, loc::USING_DIRECTIVE_SUFFIX, p)?;
    let members = visit_right_padded_list(v, &node.members, loc::NAMESPACE_MEMBER, p)?;
    let end = v.visit_space(&node.end, loc::NAMESPACE_END, p)?;
    Ok(Some(
        rebuild!(
            &node,
            NamespaceDeclaration {
                markers,
                name,
                usings,
                members,
                end
            }
        )
        .into_j(),
    ))
}

pub fn walk_annotated_statement<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<AnnotatedStatement>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ANNOTATED_STATEMENT_PREFIX, p)?;
    let node = rebuild!(node, AnnotatedStatement { prefix });
    let node = hook!(v.visit_statement, AnnotatedStatement, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let attribute_lists = visit_nodes(
        v,
        &node.attribute_lists,
        "AnnotatedStatement",
        "attribute_lists",
        p,
    )?;
    let statement = visit_required(v, &node.statement, "AnnotatedStatement", "statement", p)?;
    Ok(Some(
        rebuild!(
            &node,
            AnnotatedStatement {
                markers,
                attribute_lists,
                statement
            }
        )
        .into_j(),
    ))
}

pub fn walk_attribute_list<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<AttributeList>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ATTRIBUTE_LIST_PREFIX, p)?;
    let node = rebuild!(node, AttributeList { prefix });
    let markers = v.visit_markers(&node.markers, p)?;
    let target = visit_optional_right_padded(v, node.target.as_ref(), loc::ATTRIBUTE_TARGET, p)?;
    let attributes = visit_right_padded_list(v, &node.attributes, loc::ATTRIBUTE, p)?;
    Ok(Some(
        rebuild!(
            &node,
            AttributeList {
                markers,
                target,
                attributes
            }
        )
        .into_j(),
    ))
}

pub fn walk_using_statement<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<UsingStatement>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::USING_STATEMENT_PREFIX, p)?;
    let node = rebuild!(node, UsingStatement { prefix });
    let node = hook!(v.visit_statement, UsingStatement, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let control = visit_required(v, &node.control, "UsingStatement", "control", p)?;
    let statement = visit_required(v, &node.statement, "UsingStatement", "statement", p)?;
    Ok(Some(
        rebuild!(
            &node,
            UsingStatement {
                markers,
                control,
                statement
            }
        )
        .into_j(),
    ))
}

pub fn walk_cs_binary<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<Binary>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::CS_BINARY_PREFIX, p)?;
    let node = rebuild!(node, Binary { prefix });
    let node = hook!(v.visit_expression, Binary, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let left = visit_required(v, &node.left, "Binary", "left", p)?;
    let operator = v.visit_left_padded(&node.operator, loc::CS_BINARY_OPERATOR, p)?;
    let operator = required(operator, "Binary", "operator")?;
    let right = visit_required(v, &node.right, "Binary", "right", p)?;
    Ok(Some(
        rebuild!(
            &node,
            Binary {
                markers,
                left,
                operator,
                right
            }
        )
        .into_j(),
    ))
}

pub fn walk_property_declaration<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<PropertyDeclaration>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::PROPERTY_DECLARATION_PREFIX, p)?;
    let node = rebuild!(node, PropertyDeclaration { prefix });
    let node = hook!(v.visit_statement, PropertyDeclaration, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let modifiers = visit_nodes(v, &node.modifiers, "PropertyDeclaration", "modifiers", p)?;
    let type_expression = visit_required(
        v,
        &node.type_expression,
        "PropertyDeclaration",
        "type_expression",
        p,
    )?;
    let name = visit_required(v, &node.name, "PropertyDeclaration", "name", p)?;
    let accessors = visit_optional(v, node.accessors.as_ref(), "PropertyDeclaration", "accessors", p)?;
    let expression_body = visit_optional_left_padded(
        v,
        node.expression_body.as_ref(),
        loc::PROPERTY_EXPRESSION_BODY,
        p,
    )?;
    let initializer =
        visit_optional_left_padded(v, node.initializer.as_ref(), loc::PROPERTY_INITIALIZER, p)?;
    Ok(Some(
        rebuild!(
            &node,
            PropertyDeclaration {
                markers,
                modifiers,
                type_expression,
                name,
                accessors,
                expression_body,
                initializer
            }
        )
        .into_j(),
    ))
}

pub fn walk_accessor_declaration<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<AccessorDeclaration>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::ACCESSOR_DECLARATION_PREFIX, p)?;
    let node = rebuild!(node, AccessorDeclaration { prefix });
    let node = hook!(v.visit_statement, AccessorDeclaration, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let modifiers = visit_nodes(v, &node.modifiers, "AccessorDeclaration", "modifiers", p)?;
    let kind = v.visit_left_padded(&node.kind, loc::ACCESSOR_KIND, p)?;
    let kind = required(kind, "AccessorDeclaration", "kind")?;
    let body = visit_optional(v, node.body.as_ref(), "AccessorDeclaration", "body", p)?;
    let expression_body = visit_optional_left_padded(
        v,
        node.expression_body.as_ref(),
        loc::ACCESSOR_EXPRESSION_BODY,
        p,
    )?;
    Ok(Some(
        rebuild!(
            &node,
            AccessorDeclaration {
                markers,
                modifiers,
                kind,
                body,
                expression_body
            }
        )
        .into_j(),
    ))
}

pub fn walk_await_expression<V: CSharpVisitor<P> + ?Sized, P>(
    v: &mut V,
    node: &Arc<AwaitExpression>,
    p: &mut P,
) -> Result<Option<J>> {
    let prefix = v.visit_space(&node.prefix, loc::AWAIT_EXPRESSION_PREFIX, p)?;
    let node = rebuild!(node, AwaitExpression { prefix });
    let node = hook!(v.visit_statement, AwaitExpression, node, p);
    let node = hook!(v.visit_expression, AwaitExpression, node, p);
    let markers = v.visit_markers(&node.markers, p)?;
    let expression = visit_required(v, &node.expression, "AwaitExpression", "expression", p)?;
    Ok(Some(
        rebuild!(&node, AwaitExpression { markers, expression }).into_j(),
    ))
}
