// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Shared fixtures for the facade integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use difference::assert_diff;
use itertools::Itertools;
use tugtool_lst::csharp::builder::CSharpTreeBuilder;
use tugtool_lst::csharp::visitor::{walk_using_directive, CSharpVisitor};
use tugtool_lst::csharp::{csharp_visitor_bridge, NamespaceKind, UsingDirective};
use tugtool_lst::java::builder::TreeBuilder;
use tugtool_lst::java::visitor::JavaVisitor;
use tugtool_lst::java::{ClassKind, MethodInvocation};
use tugtool_lst::lst::{rebuild, Container, Cursor, RightPadded};
use tugtool_lst::{print_with, MarkerPrinting, PrintOptions, Result, J};

/// Helper to visualize whitespace differences in test output
pub fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

/// Print `tree` without marker text and compare against `expected`.
pub fn assert_prints(tree: &J, expected: &str) {
    let options = PrintOptions::new().with_marker_printing(MarkerPrinting::Sanitized);
    let printed = match print_with(tree, &options) {
        Ok(printed) => printed,
        Err(e) => panic!("print failed: {e}"),
    };
    if printed != expected {
        let got = visualize(&printed);
        let expected = visualize(expected);
        assert_diff!(expected.as_ref(), got.as_ref(), "", 0);
    }
}

pub const SCENARIO_SOURCE: &str = r#"using static System.Math;

namespace Demo
{
    class Point
    {
        void Run()
        {
            var p = new Point { A(), B(), C() };
            A(); B(); C();
        }
    }
}
"#;

/// `A()`, `B()`, `C()` with the given leading spaces.
pub fn calls(b: &TreeBuilder, prefixes: [&str; 3]) -> Vec<RightPadded<J>> {
    ["A", "B", "C"]
        .iter()
        .zip(prefixes)
        .map(|(name, prefix)| b.right(call(b, prefix, name), ""))
        .collect()
}

pub fn call(b: &TreeBuilder, prefix: &str, name: &str) -> Arc<MethodInvocation> {
    b.method_invocation(prefix, None, b.identifier("", name), Container::empty())
}

/// The tree a parser would produce for [`SCENARIO_SOURCE`].
pub fn scenario_tree(b: &TreeBuilder) -> J {
    let using = b.using_directive("", Some(" "), b.qualified_name(" ", "System.Math"));

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
                        Some(b.block(" ", calls(b, [" ", " ", " "]), " ")),
                    ),
                )),
            ),
            "",
        )],
    );

    let mut statements = vec![b.right(point, "")];
    statements.extend(calls(b, ["\n            ", " ", " "]));

    let run = b.method_declaration(
        "\n        ",
        vec![],
        Some(b.identifier("", "void").into()),
        b.identifier(" ", "Run"),
        Container::empty(),
        Some(b.block("\n        ", statements, "\n        ")),
    );

    let class = b.class_declaration(
        "\n    ",
        vec![],
        "",
        ClassKind::Class,
        b.identifier(" ", "Point"),
        None,
        b.block("\n    ", vec![b.right(run, "")], "\n    "),
    );

    let namespace = b.namespace_declaration(
        "\n\n",
        b.right(b.identifier(" ", "Demo"), "\n"),
        NamespaceKind::BlockScoped,
        vec![b.right(class, "")],
        "\n",
    );

    b.cs_compilation_unit(
        "",
        vec![b.right(using.into_j(), "")],
        vec![b.right(namespace.into_j(), "")],
        "\n",
    )
    .into_j()
}

/// Visits everything and changes nothing.
#[derive(Default)]
pub struct NoOp {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for NoOp {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());
}

impl CSharpVisitor<()> for NoOp {}

/// Turns `using static X;` into `using X;`.
#[derive(Default)]
pub struct DropStaticUsings {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for DropStaticUsings {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());
}

impl CSharpVisitor<()> for DropStaticUsings {
    fn visit_using_directive(&mut self, node: &Arc<UsingDirective>, p: &mut ()) -> Result<Option<J>> {
        let statik = None;
        let node = rebuild!(node, UsingDirective { statik });
        walk_using_directive(self, &node, p)
    }
}
