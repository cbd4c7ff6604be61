// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! C# nodes.
//!
//! C# trees are host trees with C#-only constructs mixed in. Every node here
//! implements [`Extension`] and sits in the tree as `J::Extension`; [`Cs`]
//! is the closed view used to dispatch over them.

use std::any::Any;
use std::sync::Arc;

use tugtool_lst_core::{rebuild, ref_eq_by_value, LeftPadded, Markers, NodeId, RightPadded, Space};
use tugtool_lst_java::{leaf_elements, Block, ControlParentheses, Extension, Identifier, J};

/// Dialect name reported by every C# node.
pub const CSHARP: &str = "csharp";

/// C#-only infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsBinaryOperator {
    As,
    Is,
    NullCoalescing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
    Add,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    /// `namespace N { ... }`
    BlockScoped,
    /// `namespace N;`
    FileScoped,
}

ref_eq_by_value!(CsBinaryOperator, AccessorKind, NamespaceKind);
leaf_elements!(CsBinaryOperator, AccessorKind);

/// A C# source file.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// [`UsingDirective`]s; each `after` is the space before its `;`.
    pub usings: Vec<RightPadded<J>>,
    pub members: Vec<RightPadded<J>>,
    pub eof: Space,
}

/// `[global] using [static] [alias =] name`
#[derive(Debug, Clone)]
pub struct UsingDirective {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` is the space between `global` and `using`.
    pub global: Option<RightPadded<bool>>,
    /// `before` is the space before `static`.
    pub statik: Option<LeftPadded<bool>>,
    /// `after` is the space before `=`.
    pub alias: Option<RightPadded<Arc<Identifier>>>,
    pub namespace_or_type: J,
}

#[derive(Debug, Clone)]
pub struct NamespaceDeclaration {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` is the space before `{` or `;`.
    pub name: RightPadded<J>,
    pub kind: NamespaceKind,
    pub usings: Vec<RightPadded<J>>,
    pub members: Vec<RightPadded<J>>,
    /// Space before the closing `}` of a block-scoped namespace.
    pub end: Space,
}

/// A statement preceded by attribute lists.
#[derive(Debug, Clone)]
pub struct AnnotatedStatement {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// [`AttributeList`]s.
    pub attribute_lists: Vec<J>,
    pub statement: J,
}

/// `[target: A, B(1)]`
#[derive(Debug, Clone)]
pub struct AttributeList {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` is the space before `:`.
    pub target: Option<RightPadded<Arc<Identifier>>>,
    /// The last `after` is the space before `]`.
    pub attributes: Vec<RightPadded<J>>,
}

/// `using (resource) statement`
#[derive(Debug, Clone)]
pub struct UsingStatement {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub control: Arc<ControlParentheses>,
    pub statement: J,
}

/// `left as T`, `left is T`, `left ?? right`
#[derive(Debug, Clone)]
pub struct Binary {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub left: J,
    pub operator: LeftPadded<CsBinaryOperator>,
    pub right: J,
}

/// `int X { get; set; } = 1`, or `int X => 1`
#[derive(Debug, Clone)]
pub struct PropertyDeclaration {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<J>,
    pub type_expression: J,
    pub name: Arc<Identifier>,
    /// A block of [`AccessorDeclaration`]s.
    pub accessors: Option<Arc<Block>>,
    /// `before` is the space before `=>`.
    pub expression_body: Option<LeftPadded<J>>,
    /// `before` is the space before `=`.
    pub initializer: Option<LeftPadded<J>>,
}

/// `get;`, `set { ... }`, `init => x`
#[derive(Debug, Clone)]
pub struct AccessorDeclaration {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<J>,
    /// `before` is the space before the accessor keyword.
    pub kind: LeftPadded<AccessorKind>,
    pub body: Option<Arc<Block>>,
    pub expression_body: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone)]
pub struct AwaitExpression {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub expression: J,
}

macro_rules! cs_tree {
    ($($name:ident { statement: $statement:literal, expression: $expression:literal }),* $(,)?) => {
        /// The C# nodes, as a closed set.
        #[derive(Debug, Clone)]
        pub enum Cs {
            $($name(Arc<$name>),)*
        }

        impl Cs {
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Cs::$name(_) => stringify!($name),)*
                }
            }

            pub fn id(&self) -> NodeId {
                match self {
                    $(Cs::$name(node) => node.id,)*
                }
            }

            pub fn prefix(&self) -> &Space {
                match self {
                    $(Cs::$name(node) => &node.prefix,)*
                }
            }

            pub fn markers(&self) -> &Markers {
                match self {
                    $(Cs::$name(node) => &node.markers,)*
                }
            }

            /// The dialect node inside `J::Extension`, when it is a C# node.
            pub fn from_extension(node: &Arc<dyn Extension>) -> Option<Cs> {
                if node.dialect() != CSHARP {
                    return None;
                }
                let any = Arc::clone(node).into_any();
                $(
                    let any = match any.downcast::<$name>() {
                        Ok(node) => return Some(Cs::$name(node)),
                        Err(any) => any,
                    };
                )*
                drop(any);
                None
            }

            pub fn from_j(tree: &J) -> Option<Cs> {
                match tree {
                    J::Extension(node) => Cs::from_extension(node),
                    _ => None,
                }
            }
        }

        impl From<Cs> for J {
            fn from(node: Cs) -> J {
                match node {
                    $(Cs::$name(node) => J::Extension(node),)*
                }
            }
        }

        $(
            impl From<Arc<$name>> for Cs {
                fn from(node: Arc<$name>) -> Cs {
                    Cs::$name(node)
                }
            }

            impl $name {
                /// This node as a host tree.
                pub fn into_j(self: Arc<Self>) -> J {
                    J::Extension(self)
                }
            }

            impl Extension for $name {
                fn dialect(&self) -> &'static str {
                    CSHARP
                }

                fn kind(&self) -> &'static str {
                    stringify!($name)
                }

                fn id(&self) -> NodeId {
                    self.id
                }

                fn prefix(&self) -> &Space {
                    &self.prefix
                }

                fn markers(&self) -> &Markers {
                    &self.markers
                }

                fn with_prefix(self: Arc<Self>, prefix: Space) -> Arc<dyn Extension> {
                    let node: Arc<$name> = rebuild!(&self, $name { prefix });
                    node
                }

                fn with_markers(self: Arc<Self>, markers: Markers) -> Arc<dyn Extension> {
                    let node: Arc<$name> = rebuild!(&self, $name { markers });
                    node
                }

                fn is_statement(&self) -> bool {
                    $statement
                }

                fn is_expression(&self) -> bool {
                    $expression
                }

                fn is_source_file(&self) -> bool {
                    stringify!($name) == "CompilationUnit"
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
                    self
                }
            }
        )*
    };
}

cs_tree!(
    CompilationUnit { statement: false, expression: false },
    UsingDirective { statement: true, expression: false },
    NamespaceDeclaration { statement: true, expression: false },
    AnnotatedStatement { statement: true, expression: false },
    AttributeList { statement: false, expression: false },
    UsingStatement { statement: true, expression: false },
    Binary { statement: false, expression: true },
    PropertyDeclaration { statement: true, expression: false },
    AccessorDeclaration { statement: true, expression: false },
    AwaitExpression { statement: true, expression: true },
);
