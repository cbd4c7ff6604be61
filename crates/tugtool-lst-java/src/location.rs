// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Space locations of the host family.
//!
//! Prefix locations are named `<NODE>_PREFIX`. Padding locations name the
//! token the space sits next to.

use tugtool_lst_core::{ContainerLocation, Location};

macro_rules! locations {
    ($($name:ident),* $(,)?) => {
        $(pub const $name: Location = Location::new(stringify!($name));)*
    };
}

locations!(
    // prefixes
    COMPILATION_UNIT_PREFIX,
    IMPORT_PREFIX,
    BLOCK_PREFIX,
    CLASS_DECLARATION_PREFIX,
    METHOD_DECLARATION_PREFIX,
    MODIFIER_PREFIX,
    VARIABLE_DECLARATIONS_PREFIX,
    NAMED_VARIABLE_PREFIX,
    IF_PREFIX,
    ELSE_PREFIX,
    CONTROL_PARENTHESES_PREFIX,
    WHILE_PREFIX,
    DO_WHILE_PREFIX,
    FOR_EACH_LOOP_PREFIX,
    FOR_EACH_CONTROL_PREFIX,
    RETURN_PREFIX,
    THROW_PREFIX,
    BREAK_PREFIX,
    CONTINUE_PREFIX,
    EMPTY_PREFIX,
    IDENTIFIER_PREFIX,
    LITERAL_PREFIX,
    FIELD_ACCESS_PREFIX,
    METHOD_INVOCATION_PREFIX,
    BINARY_PREFIX,
    UNARY_PREFIX,
    ASSIGNMENT_PREFIX,
    ASSIGNMENT_OPERATION_PREFIX,
    PARENTHESES_PREFIX,
    TERNARY_PREFIX,
    NEW_CLASS_PREFIX,
    TYPE_CAST_PREFIX,
    ARRAY_ACCESS_PREFIX,
    ARRAY_DIMENSION_PREFIX,
    ERRONEOUS_PREFIX,
    // padding
    COMPILATION_UNIT_EOF,
    IMPORT_SUFFIX,
    STATIC_IMPORT,
    BLOCK_STATEMENT,
    BLOCK_END,
    CLASS_KIND,
    VARIABLE_DECLARATOR,
    VARIABLE_INITIALIZER,
    IF_THEN,
    IF_ELSE,
    PARENTHESES,
    WHILE_BODY,
    WHILE_CONDITION,
    FOR_BODY,
    FOREACH_VARIABLE,
    FOREACH_ITERABLE,
    FIELD_ACCESS_NAME,
    METHOD_SELECT_SUFFIX,
    BINARY_OPERATOR,
    UNARY_OPERATOR,
    ASSIGNMENT,
    ASSIGNMENT_OPERATION_OPERATOR,
    TERNARY_TRUE,
    TERNARY_FALSE,
    DIMENSION,
);

pub const IMPLEMENTS: ContainerLocation = ContainerLocation::new("IMPLEMENTS", "IMPLEMENTS_SUFFIX");
pub const METHOD_DECLARATION_PARAMETERS: ContainerLocation =
    ContainerLocation::new("METHOD_DECLARATION_PARAMETERS", "METHOD_DECLARATION_PARAMETER");
pub const METHOD_INVOCATION_ARGUMENTS: ContainerLocation =
    ContainerLocation::new("METHOD_INVOCATION_ARGUMENTS", "METHOD_INVOCATION_ARGUMENT");
pub const NEW_CLASS_ARGUMENTS: ContainerLocation =
    ContainerLocation::new("NEW_CLASS_ARGUMENTS", "NEW_CLASS_ARGUMENTS_SUFFIX");
