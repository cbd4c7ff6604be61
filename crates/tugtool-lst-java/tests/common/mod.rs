// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Shared fixtures for the host family integration tests.

#![allow(dead_code)]

use difference::assert_diff;
use itertools::Itertools;
use tugtool_lst_core::{Container, SanitizedMarkerPrinter};
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::printer::print_java;
use tugtool_lst_java::*;

/// Helper to visualize whitespace differences in test output
pub fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

/// Print `tree` without marker text and compare against `expected`.
pub fn assert_prints(tree: &J, expected: &str) {
    let printed = match print_java(tree, &SanitizedMarkerPrinter) {
        Ok(printed) => printed,
        Err(e) => panic!("print failed: {e}"),
    };
    if printed != expected {
        let got = visualize(&printed);
        let expected = visualize(expected);
        assert_diff!(expected.as_ref(), got.as_ref(), "", 0);
    }
}

pub const DEMO_SOURCE: &str = r#"import static java.lang.Math.max;
// Demo
public class Demo implements Runnable, Cloneable {
    private int count = 0, total;

    public void run() {
        if (count > 0) {
            count += max(1, total);
        } else return;
        for (String s : names) total++;
        do { count--; } while (count != 0);
        Object o = (Object) items[0];
        label = count == 0 ? "none" : new Foo();
        while (true) break;
        throw new Error("x");
    }

    abstract void stop();
}
"#;

/// The tree a parser would produce for [`DEMO_SOURCE`].
pub fn demo_tree(b: &TreeBuilder) -> J {
    let fields = b.variable_declarations(
        "\n    ",
        vec![b.modifier("", ModifierKind::Private).into()],
        Some(b.identifier(" ", "int").into()),
        vec![
            b.right(
                b.named_variable(
                    " ",
                    b.identifier("", "count"),
                    Some(b.left(" ", b.literal(" ", "0"))),
                ),
                "",
            ),
            b.right(b.named_variable(" ", b.identifier("", "total"), None), ""),
        ],
    );

    let if_statement = b.if_statement(
        "\n        ",
        b.control_parentheses(
            " ",
            b.binary(
                "",
                b.identifier("", "count"),
                " ",
                BinaryOperator::GreaterThan,
                b.literal(" ", "0"),
            ),
            "",
        ),
        b.right(
            b.block(
                " ",
                vec![b.right(
                    b.assignment_operation(
                        "\n            ",
                        b.identifier("", "count"),
                        " ",
                        AssignmentOperator::Addition,
                        b.method_invocation(
                            " ",
                            None,
                            b.identifier("", "max"),
                            b.container(
                                "",
                                vec![
                                    (J::from(b.literal("", "1")), ""),
                                    (J::from(b.identifier(" ", "total")), ""),
                                ],
                            ),
                        ),
                    ),
                    "",
                )],
                "\n        ",
            ),
            "",
        ),
        Some(b.else_clause(" ", b.right(b.return_statement(" ", None), ""))),
    );

    let for_each = b.for_each_loop(
        "\n        ",
        b.for_each_control(
            " ",
            b.right(
                b.variable_declarations(
                    "",
                    vec![],
                    Some(b.identifier("", "String").into()),
                    vec![b.right(b.named_variable(" ", b.identifier("", "s"), None), "")],
                ),
                " ",
            ),
            b.right(b.identifier(" ", "names"), ""),
        ),
        b.right(
            b.unary(" ", "", UnaryOperator::PostIncrement, b.identifier("", "total")),
            "",
        ),
    );

    let do_while = b.do_while_loop(
        "\n        ",
        b.right(
            b.block(
                " ",
                vec![b.right(
                    b.unary(" ", "", UnaryOperator::PostDecrement, b.identifier("", "count")),
                    "",
                )],
                " ",
            ),
            "",
        ),
        " ",
        b.control_parentheses(
            " ",
            b.binary(
                "",
                b.identifier("", "count"),
                " ",
                BinaryOperator::NotEqual,
                b.literal(" ", "0"),
            ),
            "",
        ),
    );

    let cast = b.variable_declarations(
        "\n        ",
        vec![],
        Some(b.identifier("", "Object").into()),
        vec![b.right(
            b.named_variable(
                " ",
                b.identifier("", "o"),
                Some(b.left(
                    " ",
                    b.type_cast(
                        " ",
                        b.control_parentheses("", b.identifier("", "Object"), ""),
                        b.array_access(
                            " ",
                            b.identifier("", "items"),
                            b.array_dimension("", b.literal("", "0"), ""),
                        ),
                    ),
                )),
            ),
            "",
        )],
    );

    let ternary = b.assignment(
        "\n        ",
        b.identifier("", "label"),
        " ",
        b.ternary(
            " ",
            b.binary(
                "",
                b.identifier("", "count"),
                " ",
                BinaryOperator::Equal,
                b.literal(" ", "0"),
            ),
            b.left(" ", b.literal(" ", "\"none\"")),
            b.left(
                " ",
                b.new_class(
                    " ",
                    Some(b.identifier(" ", "Foo").into()),
                    Some(Container::empty()),
                    None,
                ),
            ),
        ),
    );

    let while_loop = b.while_loop(
        "\n        ",
        b.control_parentheses(" ", b.literal("", "true"), ""),
        b.right(b.break_statement(" ", None), ""),
    );

    let throw = b.throw(
        "\n        ",
        b.new_class(
            " ",
            Some(b.identifier(" ", "Error").into()),
            Some(b.container("", vec![(b.literal("", "\"x\""), "")])),
            None,
        ),
    );

    let run = b.method_declaration(
        "\n\n    ",
        vec![b.modifier("", ModifierKind::Public).into()],
        Some(b.identifier(" ", "void").into()),
        b.identifier(" ", "run"),
        Container::empty(),
        Some(b.block(
            " ",
            vec![
                b.right(if_statement, ""),
                b.right(for_each, ""),
                b.right(do_while, ""),
                b.right(cast, ""),
                b.right(ternary, ""),
                b.right(while_loop, ""),
                b.right(throw, ""),
            ],
            "\n    ",
        )),
    );

    let stop = b.method_declaration(
        "\n\n    ",
        vec![b.modifier("", ModifierKind::Abstract).into()],
        Some(b.identifier(" ", "void").into()),
        b.identifier(" ", "stop"),
        Container::empty(),
        None,
    );

    let class = b.class_declaration(
        "\n// Demo\n",
        vec![b.modifier("", ModifierKind::Public).into()],
        " ",
        ClassKind::Class,
        b.identifier(" ", "Demo"),
        Some(b.container(
            " ",
            vec![
                (b.identifier(" ", "Runnable"), ""),
                (b.identifier(" ", "Cloneable"), ""),
            ],
        )),
        b.block(
            " ",
            vec![b.right(fields, ""), b.right(run, ""), b.right(stop, "")],
            "\n",
        ),
    );

    let import = b.import("", Some(" "), b.qualified_name(" ", "java.lang.Math.max"));

    b.compilation_unit("", vec![b.right(import, "")], vec![b.right(class, "")], "\n").into()
}

/// `a.b(1,  2)`
pub fn call_tree(b: &TreeBuilder) -> J {
    b.method_invocation(
        "",
        Some(b.right(b.identifier("", "a"), "")),
        b.identifier("", "b"),
        b.container("", vec![(b.literal("", "1"), ""), (b.literal("  ", "2"), "")]),
    )
    .into()
}
