// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The host node family.
//!
//! [`J`] is the closed set of C-family constructs shared by every dialect
//! built on this crate. Each variant holds its node behind an `Arc`, so
//! cloning a `J` is cheap and unchanged subtrees are shared between tree
//! snapshots.
//!
//! Dialects that extend the family (C#, ...) store their own nodes in
//! [`J::Extension`]; they implement [`Extension`] so the host can read the
//! fields every node has (id, prefix, markers) without knowing the dialect.
//!
//! Every node carries, in this order:
//!
//! - `id`: stable identity across functional updates,
//! - `prefix`: the trivia before the node's first token,
//! - `markers`: side-channel metadata,
//!
//! followed by its children in the order they appear in source. That order is
//! the contract the visitor and the printer traverse.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tugtool_lst_core::{
    rebuild, ref_eq_by_value, Container, LeftPadded, Markers, NodeId, RefEq, RightPadded, Space,
};

// ============================================================================
// Operator and keyword enums
// ============================================================================

/// Infix operators of [`Binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Or,
    And,
}

/// Prefix and postfix operators of [`Unary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Positive,
    Negative,
    Complement,
    Not,
}

impl UnaryOperator {
    /// Postfix operators print after their operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, Self::PostIncrement | Self::PostDecrement)
    }
}

/// Compound assignment operators of [`AssignmentOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    /// `??=`, only meaningful in dialects with null coalescing.
    Coalesce,
}

/// Declaration modifiers across the C family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Public,
    Protected,
    Private,
    Internal,
    Static,
    Final,
    Abstract,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
    Sealed,
    NonSealed,
    Readonly,
    Virtual,
    Override,
    Async,
    Unsafe,
    Partial,
    Const,
    Extern,
    New,
    Ref,
    Out,
    In,
    Params,
}

/// The keyword that introduces a [`ClassDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Record,
    Struct,
    Annotation,
}

ref_eq_by_value!(
    BinaryOperator,
    UnaryOperator,
    AssignmentOperator,
    ModifierKind,
    ClassKind
);

// ============================================================================
// Dialect extension point
// ============================================================================

/// A node of a dialect that extends the host family.
///
/// The host visitor and printer treat extension nodes as opaque: they can read
/// the shared fields but only the owning dialect can descend into them.
pub trait Extension: fmt::Debug + Send + Sync + 'static {
    /// Name of the owning dialect, e.g. `"csharp"`.
    fn dialect(&self) -> &'static str;
    /// Name of the concrete node kind.
    fn kind(&self) -> &'static str;
    fn id(&self) -> NodeId;
    fn prefix(&self) -> &Space;
    fn markers(&self) -> &Markers;
    /// Same node with a new prefix; returns `self` when the prefix is unchanged.
    fn with_prefix(self: Arc<Self>, prefix: Space) -> Arc<dyn Extension>;
    /// Same node with new markers; returns `self` when they are unchanged.
    fn with_markers(self: Arc<Self>, markers: Markers) -> Arc<dyn Extension>;
    fn is_statement(&self) -> bool;
    fn is_expression(&self) -> bool;
    /// Whether this node is the root of a source file.
    fn is_source_file(&self) -> bool {
        false
    }
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

// ============================================================================
// Nodes
// ============================================================================

/// A source file of the host dialect.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Each import's `after` is the space before its `;`.
    pub imports: Vec<RightPadded<J>>,
    pub statements: Vec<RightPadded<J>>,
    /// Trivia between the last token and the end of the file.
    pub eof: Space,
}

/// `import [static] a.b.C`
#[derive(Debug, Clone)]
pub struct Import {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Present when the import is static; `before` is the space before `static`.
    pub statik: Option<LeftPadded<bool>>,
    pub qualid: J,
}

/// `{ statements }`
#[derive(Debug, Clone)]
pub struct Block {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub statements: Vec<RightPadded<J>>,
    /// Space before the closing `}`.
    pub end: Space,
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<J>,
    /// `before` is the space before the class keyword.
    pub kind: LeftPadded<ClassKind>,
    pub name: Arc<Identifier>,
    /// Supertypes; `before` is the space before the introducing token.
    pub implements: Option<Container<J>>,
    pub body: Arc<Block>,
}

#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<J>,
    /// Absent for constructors.
    pub return_type: Option<J>,
    pub name: Arc<Identifier>,
    pub parameters: Container<J>,
    /// Absent for abstract and interface methods, which end in `;`.
    pub body: Option<Arc<Block>>,
}

#[derive(Debug, Clone)]
pub struct Modifier {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub kind: ModifierKind,
}

/// `int a = 1, b`
#[derive(Debug, Clone)]
pub struct VariableDeclarations {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<J>,
    pub type_expression: Option<J>,
    /// [`NamedVariable`]s; each `after` is the space before the next `,`.
    pub variables: Vec<RightPadded<J>>,
}

#[derive(Debug, Clone)]
pub struct NamedVariable {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Arc<Identifier>,
    /// `before` is the space before `=`.
    pub initializer: Option<LeftPadded<J>>,
}

#[derive(Debug, Clone)]
pub struct If {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub condition: Arc<ControlParentheses>,
    pub then_part: RightPadded<J>,
    pub else_part: Option<Arc<Else>>,
}

#[derive(Debug, Clone)]
pub struct Else {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub body: RightPadded<J>,
}

/// `( tree )` around a condition or a cast type.
#[derive(Debug, Clone)]
pub struct ControlParentheses {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub tree: RightPadded<J>,
}

#[derive(Debug, Clone)]
pub struct WhileLoop {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub condition: Arc<ControlParentheses>,
    pub body: RightPadded<J>,
}

#[derive(Debug, Clone)]
pub struct DoWhileLoop {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub body: RightPadded<J>,
    /// `before` is the space before `while`.
    pub while_condition: LeftPadded<Arc<ControlParentheses>>,
}

#[derive(Debug, Clone)]
pub struct ForEachLoop {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub control: Arc<ForEachControl>,
    pub body: RightPadded<J>,
}

/// `( variable : iterable )`, with `in` in place of `:` where the dialect says so.
#[derive(Debug, Clone)]
pub struct ForEachControl {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub variable: RightPadded<J>,
    pub iterable: RightPadded<J>,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub expression: Option<J>,
}

#[derive(Debug, Clone)]
pub struct Throw {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub exception: J,
}

#[derive(Debug, Clone)]
pub struct Break {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub label: Option<Arc<Identifier>>,
}

#[derive(Debug, Clone)]
pub struct Continue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub label: Option<Arc<Identifier>>,
}

/// Prints nothing but its prefix. Stands for an empty statement or an empty
/// slot inside delimiters, such as `( )`.
#[derive(Debug, Clone)]
pub struct Empty {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub simple_name: String,
}

/// A literal kept exactly as written.
#[derive(Debug, Clone)]
pub struct Literal {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub value_source: String,
}

/// `target.name`
#[derive(Debug, Clone)]
pub struct FieldAccess {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub target: J,
    /// `before` is the space before `.`.
    pub name: LeftPadded<Arc<Identifier>>,
}

/// `select.name(arguments)`
#[derive(Debug, Clone)]
pub struct MethodInvocation {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` is the space before `.`.
    pub select: Option<RightPadded<J>>,
    pub name: Arc<Identifier>,
    pub arguments: Container<J>,
}

#[derive(Debug, Clone)]
pub struct Binary {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub left: J,
    pub operator: LeftPadded<BinaryOperator>,
    pub right: J,
}

#[derive(Debug, Clone)]
pub struct Unary {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    /// For postfix operators `before` is the space between operand and operator.
    pub operator: LeftPadded<UnaryOperator>,
    pub expression: J,
}

/// `variable = assignment`
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub variable: J,
    pub assignment: LeftPadded<J>,
}

/// `variable op= assignment`
#[derive(Debug, Clone)]
pub struct AssignmentOperation {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub variable: J,
    pub operator: LeftPadded<AssignmentOperator>,
    pub assignment: J,
}

#[derive(Debug, Clone)]
pub struct Parentheses {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub tree: RightPadded<J>,
}

/// `condition ? true_part : false_part`
#[derive(Debug, Clone)]
pub struct Ternary {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub condition: J,
    pub true_part: LeftPadded<J>,
    pub false_part: LeftPadded<J>,
}

/// `new clazz(arguments) body`
///
/// In dialects with object initializers the body holds the initializer
/// entries rather than class members.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub clazz: Option<J>,
    /// Absent when the source has no argument list at all.
    pub arguments: Option<Container<J>>,
    pub body: Option<Arc<Block>>,
}

/// `(clazz) expression`
#[derive(Debug, Clone)]
pub struct TypeCast {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub clazz: Arc<ControlParentheses>,
    pub expression: J,
}

#[derive(Debug, Clone)]
pub struct ArrayAccess {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub indexed: J,
    pub dimension: Arc<ArrayDimension>,
}

/// `[ index ]`
#[derive(Debug, Clone)]
pub struct ArrayDimension {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub index: RightPadded<J>,
}

/// Source the parser could not make sense of, kept verbatim.
#[derive(Debug, Clone)]
pub struct Erroneous {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub text: String,
    pub diagnostics: Vec<String>,
}

// ============================================================================
// The tree enum
// ============================================================================

/// Conversion between a typed child slot and the [`J`] enum.
///
/// Typed slots (`Arc<Identifier>`, `Arc<Block>`, ...) narrow the result of a
/// visit back with [`from_j`](JNode::from_j); a node of another kind comes
/// back as `Err` so the caller can report it.
pub trait JNode: Clone + RefEq {
    /// Kind name used in diagnostics.
    const KIND: &'static str;
    fn into_j(self) -> J;
    fn from_j(tree: J) -> Result<Self, J>;
}

impl JNode for J {
    const KIND: &'static str = "J";

    fn into_j(self) -> J {
        self
    }

    fn from_j(tree: J) -> Result<Self, J> {
        Ok(tree)
    }
}

macro_rules! j_tree {
    ($($name:ident),* $(,)?) => {
        /// A node of the host family, or a dialect node in [`J::Extension`].
        #[derive(Debug, Clone)]
        pub enum J {
            $($name(Arc<$name>),)*
            Extension(Arc<dyn Extension>),
        }

        impl J {
            /// Name of the concrete node kind.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(J::$name(_) => stringify!($name),)*
                    J::Extension(node) => node.kind(),
                }
            }

            pub fn id(&self) -> NodeId {
                match self {
                    $(J::$name(node) => node.id,)*
                    J::Extension(node) => node.id(),
                }
            }

            pub fn prefix(&self) -> &Space {
                match self {
                    $(J::$name(node) => &node.prefix,)*
                    J::Extension(node) => node.prefix(),
                }
            }

            pub fn markers(&self) -> &Markers {
                match self {
                    $(J::$name(node) => &node.markers,)*
                    J::Extension(node) => node.markers(),
                }
            }

            /// Same node with a new prefix. Unchanged prefixes keep identity.
            #[must_use]
            pub fn with_prefix(&self, prefix: Space) -> J {
                match self {
                    $(J::$name(node) => J::$name(rebuild!(node, $name { prefix })),)*
                    J::Extension(node) => J::Extension(Arc::clone(node).with_prefix(prefix)),
                }
            }

            /// Same node with new markers. Unchanged markers keep identity.
            #[must_use]
            pub fn with_markers(&self, markers: Markers) -> J {
                match self {
                    $(J::$name(node) => J::$name(rebuild!(node, $name { markers })),)*
                    J::Extension(node) => J::Extension(Arc::clone(node).with_markers(markers)),
                }
            }
        }

        impl RefEq for J {
            fn ref_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((J::$name(a), J::$name(b)) => Arc::ptr_eq(a, b),)*
                    (J::Extension(a), J::Extension(b)) => Arc::ptr_eq(a, b),
                    _ => false,
                }
            }
        }

        $(
            impl From<Arc<$name>> for J {
                fn from(node: Arc<$name>) -> Self {
                    J::$name(node)
                }
            }

            impl JNode for Arc<$name> {
                const KIND: &'static str = stringify!($name);

                fn into_j(self) -> J {
                    J::$name(self)
                }

                fn from_j(tree: J) -> Result<Self, J> {
                    match tree {
                        J::$name(node) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

j_tree!(
    CompilationUnit,
    Import,
    Block,
    ClassDeclaration,
    MethodDeclaration,
    Modifier,
    VariableDeclarations,
    NamedVariable,
    If,
    Else,
    ControlParentheses,
    WhileLoop,
    DoWhileLoop,
    ForEachLoop,
    ForEachControl,
    Return,
    Throw,
    Break,
    Continue,
    Empty,
    Identifier,
    Literal,
    FieldAccess,
    MethodInvocation,
    Binary,
    Unary,
    Assignment,
    AssignmentOperation,
    Parentheses,
    Ternary,
    NewClass,
    TypeCast,
    ArrayAccess,
    ArrayDimension,
    Erroneous,
);

impl From<Arc<dyn Extension>> for J {
    fn from(node: Arc<dyn Extension>) -> Self {
        J::Extension(node)
    }
}

impl J {
    /// Statement-shaped variants, routed through `visit_statement`.
    pub fn is_statement(&self) -> bool {
        match self {
            J::Block(_)
            | J::ClassDeclaration(_)
            | J::MethodDeclaration(_)
            | J::VariableDeclarations(_)
            | J::If(_)
            | J::WhileLoop(_)
            | J::DoWhileLoop(_)
            | J::ForEachLoop(_)
            | J::Return(_)
            | J::Throw(_)
            | J::Break(_)
            | J::Continue(_)
            | J::Empty(_)
            | J::MethodInvocation(_)
            | J::Unary(_)
            | J::Assignment(_)
            | J::AssignmentOperation(_)
            | J::NewClass(_) => true,
            J::Extension(node) => node.is_statement(),
            _ => false,
        }
    }

    /// Expression-shaped variants, routed through `visit_expression`.
    pub fn is_expression(&self) -> bool {
        match self {
            J::Identifier(_)
            | J::Literal(_)
            | J::FieldAccess(_)
            | J::MethodInvocation(_)
            | J::Binary(_)
            | J::Unary(_)
            | J::Assignment(_)
            | J::AssignmentOperation(_)
            | J::Parentheses(_)
            | J::Ternary(_)
            | J::NewClass(_)
            | J::TypeCast(_)
            | J::ArrayAccess(_)
            | J::Empty(_) => true,
            J::Extension(node) => node.is_expression(),
            _ => false,
        }
    }

    /// Name of the dialect that owns this node.
    pub fn dialect(&self) -> &'static str {
        match self {
            J::Extension(node) => node.dialect(),
            _ => "java",
        }
    }

    /// Whether this node is the root of a source file.
    pub fn is_source_file(&self) -> bool {
        match self {
            J::CompilationUnit(_) => true,
            J::Extension(node) => node.is_source_file(),
            _ => false,
        }
    }

    /// The dialect node inside [`J::Extension`], downcast to `T`.
    pub fn downcast_extension<T: Extension>(&self) -> Option<Arc<T>> {
        match self {
            J::Extension(node) if node.as_any().is::<T>() => {
                Arc::clone(node).into_any().downcast::<T>().ok()
            }
            _ => None,
        }
    }
}
