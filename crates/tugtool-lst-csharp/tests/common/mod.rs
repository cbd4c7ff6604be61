// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Shared fixtures for the C# integration tests.

#![allow(dead_code)]

use difference::assert_diff;
use itertools::Itertools;
use tugtool_lst_core::{Container, RightPadded, SanitizedMarkerPrinter};
use tugtool_lst_csharp::builder::CSharpTreeBuilder;
use tugtool_lst_csharp::printer::print_csharp;
use tugtool_lst_csharp::*;
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::{AssignmentOperator, ClassKind, ModifierKind, J};

/// Helper to visualize whitespace differences in test output
pub fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

/// Print `tree` as C# without marker text and compare against `expected`.
pub fn assert_prints(tree: &J, expected: &str) {
    let printed = match print_csharp(tree, &SanitizedMarkerPrinter) {
        Ok(printed) => printed,
        Err(e) => panic!("print failed: {e}"),
    };
    if printed != expected {
        let got = visualize(&printed);
        let expected = visualize(expected);
        assert_diff!(expected.as_ref(), got.as_ref(), "", 0);
    }
}

pub const DEMO_SOURCE: &str = r#"using static System.Math;
using System;

namespace Demo
{
    [Serializable]
    public class Point : IShape
    {
        public int X { get; set; } = 5;

        public async void Run()
        {
            var p = new Point { A = 1, B = 2, C = 3 };
            using (reader) Use(reader);
            await task;
            total ??= max;
        }
    }
}
"#;

/// The entries `A = 1`, `B = 2`, `C = 3`, each with a leading space.
pub fn initializer_entries(b: &TreeBuilder) -> Vec<RightPadded<J>> {
    ["A", "B", "C"]
        .iter()
        .zip(["1", "2", "3"])
        .map(|(name, value)| {
            b.right(
                b.assignment(" ", b.identifier("", name), " ", b.literal(" ", value)),
                "",
            )
        })
        .collect()
}

/// The tree a parser would produce for [`DEMO_SOURCE`].
pub fn demo_tree(b: &TreeBuilder) -> J {
    let usings = vec![
        b.right(
            b.using_directive("", Some(" "), b.qualified_name(" ", "System.Math"))
                .into_j(),
            "",
        ),
        b.right(
            b.using_directive("\n", None, b.qualified_name(" ", "System"))
                .into_j(),
            "",
        ),
    ];

    let property = b.property_declaration(
        "\n        ",
        vec![b.modifier("", ModifierKind::Public).into()],
        b.identifier(" ", "int").into(),
        b.identifier(" ", "X"),
        Some(b.block(
            " ",
            vec![
                b.right(b.accessor_declaration(" ", AccessorKind::Get, None).into_j(), ""),
                b.right(b.accessor_declaration(" ", AccessorKind::Set, None).into_j(), ""),
            ],
            " ",
        )),
        Some(b.left(" ", b.literal(" ", "5"))),
    );

    let point = b.variable_declarations(
        "\n            ",
        vec![],
        Some(b.identifier("", "var").into()),
        vec![b.right(
            b.named_variable(
                " ",
                b.identifier("", "p"),
                Some(b.left(
                    " ",
                    b.new_class(
                        " ",
                        Some(b.identifier(" ", "Point").into()),
                        None,
                        Some(b.block(" ", initializer_entries(b), " ")),
                    ),
                )),
            ),
            "",
        )],
    );

    let using = b.using_statement(
        "\n            ",
        b.control_parentheses(" ", b.identifier("", "reader"), ""),
        b.method_invocation(
            " ",
            None,
            b.identifier("", "Use"),
            b.container("", vec![(b.identifier("", "reader"), "")]),
        )
        .into(),
    );

    let run = b.method_declaration(
        "\n\n        ",
        vec![
            b.modifier("", ModifierKind::Public).into(),
            b.modifier(" ", ModifierKind::Async).into(),
        ],
        Some(b.identifier(" ", "void").into()),
        b.identifier(" ", "Run"),
        Container::empty(),
        Some(b.block(
            "\n        ",
            vec![
                b.right(point, ""),
                b.right(using.into_j(), ""),
                b.right(
                    b.await_expression("\n            ", b.identifier(" ", "task").into())
                        .into_j(),
                    "",
                ),
                b.right(
                    b.assignment_operation(
                        "\n            ",
                        b.identifier("", "total"),
                        " ",
                        AssignmentOperator::Coalesce,
                        b.identifier(" ", "max"),
                    ),
                    "",
                ),
            ],
            "\n        ",
        )),
    );

    let class = b.class_declaration(
        "\n    ",
        vec![b.modifier("", ModifierKind::Public).into()],
        " ",
        ClassKind::Class,
        b.identifier(" ", "Point"),
        Some(b.container(" ", vec![(b.identifier(" ", "IShape"), "")])),
        b.block(
            "\n    ",
            vec![b.right(property.into_j(), ""), b.right(run, "")],
            "\n    ",
        ),
    );

    let annotated = b.annotated_statement(
        vec![b
            .attribute_list("\n    ", vec![b.right(b.identifier("", "Serializable"), "")])
            .into_j()],
        class.into(),
    );

    let namespace = b.namespace_declaration(
        "\n\n",
        b.right(b.identifier(" ", "Demo"), "\n"),
        NamespaceKind::BlockScoped,
        vec![b.right(annotated.into_j(), "")],
        "\n",
    );

    b.cs_compilation_unit("", usings, vec![b.right(namespace.into_j(), "")], "\n")
        .into_j()
}
