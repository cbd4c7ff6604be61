// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Space locations of the C# nodes.

use tugtool_lst_core::Location;

macro_rules! locations {
    ($($name:ident),* $(,)?) => {
        $(pub const $name: Location = Location::new(stringify!($name));)*
    };
}

locations!(
    // prefixes
    CS_COMPILATION_UNIT_PREFIX,
    USING_DIRECTIVE_PREFIX,
    NAMESPACE_DECLARATION_PREFIX,
    ANNOTATED_STATEMENT_PREFIX,
    ATTRIBUTE_LIST_PREFIX,
    USING_STATEMENT_PREFIX,
    CS_BINARY_PREFIX,
    PROPERTY_DECLARATION_PREFIX,
    ACCESSOR_DECLARATION_PREFIX,
    AWAIT_EXPRESSION_PREFIX,
    // padding
    CS_COMPILATION_UNIT_EOF,
    USING_DIRECTIVE_SUFFIX,
    USING_DIRECTIVE_GLOBAL,
    USING_DIRECTIVE_STATIC,
    USING_DIRECTIVE_ALIAS,
    NAMESPACE_NAME,
    NAMESPACE_MEMBER,
    NAMESPACE_END,
    COMPILATION_UNIT_MEMBER,
    ATTRIBUTE_TARGET,
    ATTRIBUTE,
    CS_BINARY_OPERATOR,
    PROPERTY_EXPRESSION_BODY,
    PROPERTY_INITIALIZER,
    ACCESSOR_KIND,
    ACCESSOR_EXPRESSION_BODY,
);
