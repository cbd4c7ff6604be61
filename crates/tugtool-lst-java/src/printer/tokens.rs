// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Surface tokens for operator and keyword enums.
//!
//! Each dialect owns a [`TokenTable`]. A value missing from the printing
//! dialect's table is an [`LstError::UnmappedToken`]: the tree holds
//! something that dialect cannot spell, and the print is aborted.

use std::fmt::Debug;

use tracing::warn;
use tugtool_lst_core::{LstError, Result};

use crate::tree::{AssignmentOperator, BinaryOperator, ClassKind, ModifierKind, UnaryOperator};

/// Per-dialect mapping from enums to the text the printer emits.
#[derive(Debug)]
pub struct TokenTable {
    pub dialect: &'static str,
    pub binary: &'static [(BinaryOperator, &'static str)],
    pub unary: &'static [(UnaryOperator, &'static str)],
    pub assignment: &'static [(AssignmentOperator, &'static str)],
    pub modifiers: &'static [(ModifierKind, &'static str)],
    pub class_kinds: &'static [(ClassKind, &'static str)],
    /// Introduces a class's supertype list.
    pub implements_keyword: &'static str,
    pub for_each_keyword: &'static str,
    /// Between the variable and the iterable of a for-each loop.
    pub for_each_separator: &'static str,
}

impl TokenTable {
    pub fn binary(&self, op: BinaryOperator) -> Result<&'static str> {
        lookup(self.dialect, "BinaryOperator", self.binary, op)
    }

    pub fn unary(&self, op: UnaryOperator) -> Result<&'static str> {
        lookup(self.dialect, "UnaryOperator", self.unary, op)
    }

    pub fn assignment(&self, op: AssignmentOperator) -> Result<&'static str> {
        lookup(self.dialect, "AssignmentOperator", self.assignment, op)
    }

    pub fn modifier(&self, kind: ModifierKind) -> Result<&'static str> {
        lookup(self.dialect, "ModifierKind", self.modifiers, kind)
    }

    pub fn class_kind(&self, kind: ClassKind) -> Result<&'static str> {
        lookup(self.dialect, "ClassKind", self.class_kinds, kind)
    }
}

/// Find `value` in a token table.
pub fn lookup<T: Copy + PartialEq + Debug>(
    dialect: &'static str,
    kind: &'static str,
    table: &[(T, &'static str)],
    value: T,
) -> Result<&'static str> {
    match table.iter().find(|(key, _)| *key == value) {
        Some((_, token)) => Ok(*token),
        None => {
            warn!(dialect, kind, value = ?value, "no surface token");
            Err(LstError::unmapped(dialect, kind, value))
        }
    }
}

/// Infix operators spelled the same way across the C family.
pub const C_FAMILY_BINARY: &[(BinaryOperator, &str)] = &[
    (BinaryOperator::Addition, "+"),
    (BinaryOperator::Subtraction, "-"),
    (BinaryOperator::Multiplication, "*"),
    (BinaryOperator::Division, "/"),
    (BinaryOperator::Modulo, "%"),
    (BinaryOperator::LessThan, "<"),
    (BinaryOperator::GreaterThan, ">"),
    (BinaryOperator::LessThanOrEqual, "<="),
    (BinaryOperator::GreaterThanOrEqual, ">="),
    (BinaryOperator::Equal, "=="),
    (BinaryOperator::NotEqual, "!="),
    (BinaryOperator::BitAnd, "&"),
    (BinaryOperator::BitOr, "|"),
    (BinaryOperator::BitXor, "^"),
    (BinaryOperator::LeftShift, "<<"),
    (BinaryOperator::RightShift, ">>"),
    (BinaryOperator::UnsignedRightShift, ">>>"),
    (BinaryOperator::Or, "||"),
    (BinaryOperator::And, "&&"),
];

pub const C_FAMILY_UNARY: &[(UnaryOperator, &str)] = &[
    (UnaryOperator::PreIncrement, "++"),
    (UnaryOperator::PreDecrement, "--"),
    (UnaryOperator::PostIncrement, "++"),
    (UnaryOperator::PostDecrement, "--"),
    (UnaryOperator::Positive, "+"),
    (UnaryOperator::Negative, "-"),
    (UnaryOperator::Complement, "~"),
    (UnaryOperator::Not, "!"),
];

const JAVA_ASSIGNMENT: &[(AssignmentOperator, &str)] = &[
    (AssignmentOperator::Addition, "+="),
    (AssignmentOperator::Subtraction, "-="),
    (AssignmentOperator::Multiplication, "*="),
    (AssignmentOperator::Division, "/="),
    (AssignmentOperator::Modulo, "%="),
    (AssignmentOperator::BitAnd, "&="),
    (AssignmentOperator::BitOr, "|="),
    (AssignmentOperator::BitXor, "^="),
    (AssignmentOperator::LeftShift, "<<="),
    (AssignmentOperator::RightShift, ">>="),
    (AssignmentOperator::UnsignedRightShift, ">>>="),
];

const JAVA_MODIFIERS: &[(ModifierKind, &str)] = &[
    (ModifierKind::Public, "public"),
    (ModifierKind::Protected, "protected"),
    (ModifierKind::Private, "private"),
    (ModifierKind::Static, "static"),
    (ModifierKind::Final, "final"),
    (ModifierKind::Abstract, "abstract"),
    (ModifierKind::Native, "native"),
    (ModifierKind::Synchronized, "synchronized"),
    (ModifierKind::Transient, "transient"),
    (ModifierKind::Volatile, "volatile"),
    (ModifierKind::Strictfp, "strictfp"),
    (ModifierKind::Default, "default"),
    (ModifierKind::Sealed, "sealed"),
    (ModifierKind::NonSealed, "non-sealed"),
];

const JAVA_CLASS_KINDS: &[(ClassKind, &str)] = &[
    (ClassKind::Class, "class"),
    (ClassKind::Interface, "interface"),
    (ClassKind::Enum, "enum"),
    (ClassKind::Record, "record"),
    (ClassKind::Annotation, "@interface"),
];

pub static JAVA_TOKENS: TokenTable = TokenTable {
    dialect: "java",
    binary: C_FAMILY_BINARY,
    unary: C_FAMILY_UNARY,
    assignment: JAVA_ASSIGNMENT,
    modifiers: JAVA_MODIFIERS,
    class_kinds: JAVA_CLASS_KINDS,
    implements_keyword: "implements",
    for_each_keyword: "for",
    for_each_separator: ":",
};
