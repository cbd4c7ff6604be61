// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use tugtool_lst_core::Result;
use tugtool_lst_java::printer::tokens::{lookup, C_FAMILY_BINARY, C_FAMILY_UNARY};
use tugtool_lst_java::printer::TokenTable;
use tugtool_lst_java::{AssignmentOperator, ClassKind, ModifierKind};

use crate::tree::{AccessorKind, CsBinaryOperator, CSHARP};

const CSHARP_ASSIGNMENT: &[(AssignmentOperator, &str)] = &[
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
    (AssignmentOperator::Coalesce, "??="),
];

const CSHARP_MODIFIERS: &[(ModifierKind, &str)] = &[
    (ModifierKind::Public, "public"),
    (ModifierKind::Protected, "protected"),
    (ModifierKind::Private, "private"),
    (ModifierKind::Internal, "internal"),
    (ModifierKind::Static, "static"),
    (ModifierKind::Abstract, "abstract"),
    (ModifierKind::Sealed, "sealed"),
    (ModifierKind::Readonly, "readonly"),
    (ModifierKind::Volatile, "volatile"),
    (ModifierKind::Virtual, "virtual"),
    (ModifierKind::Override, "override"),
    (ModifierKind::Async, "async"),
    (ModifierKind::Unsafe, "unsafe"),
    (ModifierKind::Partial, "partial"),
    (ModifierKind::Const, "const"),
    (ModifierKind::Extern, "extern"),
    (ModifierKind::New, "new"),
    (ModifierKind::Ref, "ref"),
    (ModifierKind::Out, "out"),
    (ModifierKind::In, "in"),
    (ModifierKind::Params, "params"),
];

const CSHARP_CLASS_KINDS: &[(ClassKind, &str)] = &[
    (ClassKind::Class, "class"),
    (ClassKind::Interface, "interface"),
    (ClassKind::Enum, "enum"),
    (ClassKind::Record, "record"),
    (ClassKind::Struct, "struct"),
];

/// Host tokens as C# spells them.
pub static CSHARP_TOKENS: TokenTable = TokenTable {
    dialect: CSHARP,
    binary: C_FAMILY_BINARY,
    unary: C_FAMILY_UNARY,
    assignment: CSHARP_ASSIGNMENT,
    modifiers: CSHARP_MODIFIERS,
    class_kinds: CSHARP_CLASS_KINDS,
    implements_keyword: ":",
    for_each_keyword: "foreach",
    for_each_separator: "in",
};

const CS_BINARY: &[(CsBinaryOperator, &str)] = &[
    (CsBinaryOperator::As, "as"),
    (CsBinaryOperator::Is, "is"),
    (CsBinaryOperator::NullCoalescing, "??"),
];

const ACCESSOR_KINDS: &[(AccessorKind, &str)] = &[
    (AccessorKind::Get, "get"),
    (AccessorKind::Set, "set"),
    (AccessorKind::Init, "init"),
    (AccessorKind::Add, "add"),
    (AccessorKind::Remove, "remove"),
];

pub fn cs_binary(op: CsBinaryOperator) -> Result<&'static str> {
    lookup(CSHARP, "CsBinaryOperator", CS_BINARY, op)
}

pub fn accessor_kind(kind: AccessorKind) -> Result<&'static str> {
    lookup(CSHARP, "AccessorKind", ACCESSOR_KINDS, kind)
}
