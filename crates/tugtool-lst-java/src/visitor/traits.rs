// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The host visitor trait.

use std::sync::Arc;

use tracing::debug;
use tugtool_lst_core::{
    Container, ContainerLocation, Cursor, LeftPadded, Location, Marker, Markers, RefEq, Result,
    RightPadded, Space,
};

use super::walk::*;
use crate::tree::*;

/// A value that can sit inside a padding wrapper or a container.
///
/// Tree elements are revisited; leaf values (flags, operator enums) are
/// returned as they are. `loc` names the wrapper, for diagnostics.
pub trait Element: Clone + RefEq {
    fn visit_element<V, P>(&self, v: &mut V, loc: Location, p: &mut P) -> Result<Option<Self>>
    where
        V: JavaVisitor<P> + ?Sized;
}

macro_rules! node_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn visit_element<V, P>(&self, v: &mut V, loc: Location, p: &mut P) -> Result<Option<Self>>
                where
                    V: JavaVisitor<P> + ?Sized,
                {
                    visit_node(v, self, loc.name(), "element", p)
                }
            }
        )*
    };
}

node_elements!(
    J,
    Arc<Block>,
    Arc<Identifier>,
    Arc<ControlParentheses>,
    Arc<NamedVariable>,
    Arc<ArrayDimension>,
);

/// Implements [`Element`] for values that are carried through unchanged.
#[macro_export]
macro_rules! leaf_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::visitor::Element for $ty {
                fn visit_element<V, P>(
                    &self,
                    _v: &mut V,
                    _loc: ::tugtool_lst_core::Location,
                    _p: &mut P,
                ) -> ::tugtool_lst_core::Result<Option<Self>>
                where
                    V: $crate::visitor::JavaVisitor<P> + ?Sized,
                {
                    Ok(Some(self.clone()))
                }
            }
        )*
    };
}

leaf_elements!(
    bool,
    BinaryOperator,
    UnaryOperator,
    AssignmentOperator,
    ModifierKind,
    ClassKind,
);

macro_rules! visitor_methods {
    (
        $(
            $base_name:ident : $node_type:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = concat!("Defaults to `walk_", stringify!($base_name), "`, which visits every child in source order.")]
                fn [<visit_ $base_name>](&mut self, node: &Arc<$node_type>, p: &mut P) -> Result<Option<J>> {
                    [<walk_ $base_name>](self, node, p)
                }
            )*
        }
    };
}

/// Rewriting visitor over the host family.
///
/// Every method returns the (possibly new) value for the position it was
/// called on. Returning `Ok(None)` removes the node where the parent allows
/// it (list and padding elements, optional children) and is an error where
/// the parent requires a child. A visitor that changes nothing returns the
/// same `Arc`s it was given.
///
/// # Traversal Order
///
/// For each node the default `visit_*` method:
///
/// 1. visits the prefix space,
/// 2. passes the node through `visit_statement` and/or `visit_expression`,
///    and stops there if the hook removed it or replaced it with another kind,
/// 3. visits the markers,
/// 4. visits the children in source order,
/// 5. rebuilds the node if anything changed.
///
/// # Example
///
/// ```ignore
/// struct Renamer {
///     cursor: Cursor<J>,
/// }
///
/// impl JavaVisitor<()> for Renamer {
///     fn cursor(&mut self) -> &mut Cursor<J> {
///         &mut self.cursor
///     }
///
///     fn visit_identifier(&mut self, node: &Arc<Identifier>, p: &mut ()) -> Result<Option<J>> {
///         if node.simple_name == "old" {
///             let renamed = Identifier { simple_name: "new".to_string(), ..(**node).clone() };
///             return Ok(Some(J::from(Arc::new(renamed))));
///         }
///         walk_identifier(self, node, p)
///     }
/// }
/// ```
pub trait JavaVisitor<P> {
    /// The ancestor stack maintained by [`visit`](Self::visit).
    fn cursor(&mut self) -> &mut Cursor<J>;

    /// Whether this visitor applies to the source file `tree`.
    fn is_acceptable(&self, tree: &J, p: &P) -> bool {
        let _ = (tree, p);
        true
    }

    /// Entry point for a whole source file. A visitor that does not accept the
    /// file returns it untouched.
    fn visit_source(&mut self, tree: &J, p: &mut P) -> Result<Option<J>> {
        if !self.is_acceptable(tree, p) {
            debug!(
                kind = tree.kind(),
                dialect = tree.dialect(),
                "visitor does not accept source file"
            );
            return Ok(Some(tree.clone()));
        }
        self.visit(tree, p)
    }

    /// Visit any node: push it on the cursor, dispatch by kind, pop.
    fn visit(&mut self, tree: &J, p: &mut P) -> Result<Option<J>> {
        self.cursor().push(tree.clone());
        let result = dispatch(self, tree, p);
        self.cursor().pop();
        result
    }

    fn visit_space(&mut self, space: &Space, loc: Location, p: &mut P) -> Result<Space> {
        let _ = (loc, p);
        Ok(space.clone())
    }

    fn visit_markers(&mut self, markers: &Markers, p: &mut P) -> Result<Markers> {
        walk_markers(self, markers, p)
    }

    /// Returning `None` drops the marker.
    fn visit_marker(&mut self, marker: &Marker, p: &mut P) -> Result<Option<Marker>> {
        let _ = p;
        Ok(Some(marker.clone()))
    }

    /// Category hook for statement-shaped nodes, called after the prefix.
    fn visit_statement(&mut self, statement: J, p: &mut P) -> Result<Option<J>> {
        let _ = p;
        Ok(Some(statement))
    }

    /// Category hook for expression-shaped nodes, called after `visit_statement`.
    fn visit_expression(&mut self, expression: J, p: &mut P) -> Result<Option<J>> {
        let _ = p;
        Ok(Some(expression))
    }

    /// Dialect nodes. The host cannot descend into them, so by default they
    /// are returned as they are.
    fn visit_extension(&mut self, node: &Arc<dyn Extension>, p: &mut P) -> Result<Option<J>> {
        let _ = p;
        Ok(Some(J::Extension(Arc::clone(node))))
    }

    fn visit_right_padded<T: Element>(
        &mut self,
        right: &RightPadded<T>,
        loc: Location,
        p: &mut P,
    ) -> Result<Option<RightPadded<T>>> {
        walk_right_padded(self, right, loc, p)
    }

    fn visit_left_padded<T: Element>(
        &mut self,
        left: &LeftPadded<T>,
        loc: Location,
        p: &mut P,
    ) -> Result<Option<LeftPadded<T>>> {
        walk_left_padded(self, left, loc, p)
    }

    fn visit_container<T: Element>(
        &mut self,
        container: &Container<T>,
        loc: ContainerLocation,
        p: &mut P,
    ) -> Result<Container<T>> {
        walk_container(self, container, loc, p)
    }

    visitor_methods! {
        compilation_unit: CompilationUnit,
        import: Import,
        block: Block,
        class_declaration: ClassDeclaration,
        method_declaration: MethodDeclaration,
        modifier: Modifier,
        variable_declarations: VariableDeclarations,
        named_variable: NamedVariable,
        if_statement: If,
        else_clause: Else,
        control_parentheses: ControlParentheses,
        while_loop: WhileLoop,
        do_while_loop: DoWhileLoop,
        for_each_loop: ForEachLoop,
        for_each_control: ForEachControl,
        return_statement: Return,
        throw: Throw,
        break_statement: Break,
        continue_statement: Continue,
        empty: Empty,
        identifier: Identifier,
        literal: Literal,
        field_access: FieldAccess,
        method_invocation: MethodInvocation,
        binary: Binary,
        unary: Unary,
        assignment: Assignment,
        assignment_operation: AssignmentOperation,
        parentheses: Parentheses,
        ternary: Ternary,
        new_class: NewClass,
        type_cast: TypeCast,
        array_access: ArrayAccess,
        array_dimension: ArrayDimension,
        erroneous: Erroneous,
    }
}
