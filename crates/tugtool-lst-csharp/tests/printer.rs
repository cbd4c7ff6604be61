// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! C# printing: round trips, host nodes spelled the C# way, object
//! initializers and the C# terminator policy.

mod common;

use std::sync::Arc;

use common::{assert_prints, demo_tree, initializer_entries, DEMO_SOURCE};
use tugtool_lst_core::{
    LstError, Marker, Markers, NodeId, RightPadded, SanitizedMarkerPrinter, Space,
};
use tugtool_lst_csharp::builder::CSharpTreeBuilder;
use tugtool_lst_csharp::printer::{csharp_needs_terminator, print_csharp};
use tugtool_lst_csharp::*;
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::printer::print_java;
use tugtool_lst_java::{ClassKind, Extension, ModifierKind, J};

#[test]
fn demo_round_trips() {
    let b = TreeBuilder::new();
    assert_prints(&demo_tree(&b), DEMO_SOURCE);
}

#[test]
fn initializer_entries_are_comma_separated() {
    let b = TreeBuilder::new();
    let new_point = b.new_class(
        "",
        Some(b.identifier(" ", "Point").into()),
        None,
        Some(b.block(" ", initializer_entries(&b), " ")),
    );
    assert_prints(&new_point.into(), "new Point { A = 1, B = 2, C = 3 }");
}

#[test]
fn block_entries_are_terminated() {
    let b = TreeBuilder::new();
    let block = b.block("", initializer_entries(&b), " ");
    assert_prints(&block.into(), "{ A = 1; B = 2; C = 3; }");
}

#[test]
fn initializer_keeps_a_trailing_comma() {
    let b = TreeBuilder::new();
    let mut entries = initializer_entries(&b);
    let last = entries.pop().expect("three entries");
    entries.push(last.with_markers(Markers::new(vec![Marker::TrailingComma {
        suffix: Space::single(),
    }])));
    let new_point = b.new_class(
        "",
        Some(b.identifier(" ", "Point").into()),
        None,
        Some(b.block(" ", entries, "")),
    );
    assert_prints(&new_point.into(), "new Point { A = 1, B = 2, C = 3, }");
}

#[test]
fn for_each_uses_csharp_keywords() {
    let b = TreeBuilder::new();
    let variable = b.variable_declarations(
        "",
        vec![],
        Some(b.identifier("", "var").into()),
        vec![b.right(b.named_variable(" ", b.identifier("", "x"), None), "")],
    );
    let body = b.method_invocation(
        " ",
        None,
        b.identifier("", "Use"),
        b.container("", vec![(b.identifier("", "x"), "")]),
    );
    let tree: J = b
        .for_each_loop(
            "",
            b.for_each_control(
                " ",
                b.right(variable, " "),
                b.right(b.identifier(" ", "xs"), ""),
            ),
            b.right(body, ""),
        )
        .into();

    assert_prints(&tree, "foreach (var x in xs) Use(x);");
    let java = print_java(&tree, &SanitizedMarkerPrinter).expect("java print");
    assert_eq!(java, "for (var x : xs) Use(x);");
}

#[test]
fn struct_with_base_list() {
    let b = TreeBuilder::new();
    let tree = b.class_declaration(
        "",
        vec![b.modifier("", ModifierKind::Internal).into()],
        " ",
        ClassKind::Struct,
        b.identifier(" ", "S"),
        Some(b.container(" ", vec![(b.identifier(" ", "I"), "")])),
        b.block(" ", vec![], ""),
    );
    assert_prints(&tree.into(), "internal struct S : I {}");
}

#[test]
fn java_only_modifier_is_unmapped() {
    let b = TreeBuilder::new();
    let tree = b.class_declaration(
        "",
        vec![b.modifier("", ModifierKind::Final).into()],
        " ",
        ClassKind::Class,
        b.identifier(" ", "A"),
        None,
        b.block(" ", vec![], ""),
    );
    let err = print_csharp(&tree.into(), &SanitizedMarkerPrinter).expect_err("final");
    assert_eq!(
        err,
        LstError::UnmappedToken {
            dialect: "csharp",
            kind: "ModifierKind",
            value: "Final".to_string(),
        }
    );
}

#[test]
fn java_printer_rejects_csharp_trees() {
    let b = TreeBuilder::new();
    let err = print_java(&demo_tree(&b), &SanitizedMarkerPrinter).expect_err("csharp tree");
    assert_eq!(
        err,
        LstError::UnsupportedDialect {
            printer: "java",
            kind: "CompilationUnit",
        }
    );
}

#[test]
fn file_scoped_namespace() {
    let b = TreeBuilder::new();
    let class = b.class_declaration(
        "\n\n",
        vec![],
        "",
        ClassKind::Class,
        b.identifier(" ", "A"),
        None,
        b.block(" ", vec![], ""),
    );
    let namespace = b.namespace_declaration(
        "",
        b.right(b.qualified_name(" ", "Demo.Core"), ""),
        NamespaceKind::FileScoped,
        vec![b.right(class, "")],
        "",
    );
    let unit = b.cs_compilation_unit("", vec![], vec![b.right(namespace.into_j(), "")], "\n");
    assert_prints(&unit.into_j(), "namespace Demo.Core;\n\nclass A {}\n");
}

#[test]
fn global_aliased_using() {
    let b = TreeBuilder::new();
    let using = Arc::new(UsingDirective {
        id: b.id(),
        prefix: Space::EMPTY,
        markers: Markers::EMPTY,
        global: Some(RightPadded::new(true, Space::single())),
        statik: None,
        alias: Some(RightPadded::new(b.identifier(" ", "Json"), Space::single())),
        namespace_or_type: b.qualified_name(" ", "System.Text.Json"),
    });
    let unit = b.cs_compilation_unit("", vec![b.right(using.into_j(), "")], vec![], "");
    assert_prints(&unit.into_j(), "global using Json = System.Text.Json;");
}

#[test]
fn csharp_binary_operators() {
    let b = TreeBuilder::new();
    let cast = b.cs_binary(
        "",
        b.identifier("", "x").into(),
        " ",
        CsBinaryOperator::As,
        b.identifier(" ", "string").into(),
    );
    let tree = b.cs_binary(
        "",
        cast.into_j(),
        " ",
        CsBinaryOperator::NullCoalescing,
        b.literal(" ", "\"\"").into(),
    );
    assert_prints(&tree.into_j(), "x as string ?? \"\"");
}

#[test]
fn attributes_do_not_change_the_terminator() {
    let b = TreeBuilder::new();
    let call = b.method_invocation(" ", None, b.identifier("", "M"), b.container("", Vec::<(J, &str)>::new()));
    let annotated = b.annotated_statement(
        vec![b
            .attribute_list("", vec![b.right(b.identifier("", "Obsolete"), "")])
            .into_j()],
        call.into(),
    );
    let block = b.block("", vec![b.right(annotated.into_j(), "")], "");
    assert_prints(&block.into(), "{[Obsolete] M();}");
}

#[test]
fn using_statement_with_block_body_is_not_terminated() {
    let b = TreeBuilder::new();
    let using = b.using_statement(
        "",
        b.control_parentheses(" ", b.identifier("", "r"), ""),
        b.block(" ", vec![], " ").into(),
    );
    let block = b.block("", vec![b.right(using.into_j(), "")], "");
    assert_prints(&block.into(), "{using (r) { }}");
}

#[test]
fn property_forms() {
    let b = TreeBuilder::new();
    let getter_body = b.block(
        " ",
        vec![b.right(b.return_statement(" ", Some(b.identifier(" ", "x").into())), "")],
        " ",
    );
    let with_body = b.property_declaration(
        "",
        vec![b.modifier("", ModifierKind::Public).into()],
        b.identifier(" ", "int").into(),
        b.identifier(" ", "X"),
        Some(b.block(
            " ",
            vec![b.right(
                b.accessor_declaration(" ", AccessorKind::Get, Some(getter_body)).into_j(),
                "",
            )],
            " ",
        )),
        None,
    );
    let bare = b.property_declaration(
        "\n",
        vec![b.modifier("", ModifierKind::Public).into()],
        b.identifier(" ", "int").into(),
        b.identifier(" ", "Y"),
        None,
        None,
    );
    let expression_bodied = Arc::new(PropertyDeclaration {
        expression_body: Some(b.left(" ", b.literal(" ", "1"))),
        ..(*bare).clone()
    });

    let class_body = b.block(
        "",
        vec![
            b.right(with_body.into_j(), ""),
            b.right(expression_bodied.into_j(), ""),
        ],
        "\n",
    );
    assert_prints(
        &class_body.into(),
        "{public int X { get { return x; } }\npublic int Y => 1;\n}",
    );
}

#[test]
fn terminator_policy() {
    let b = TreeBuilder::new();
    let get = b.accessor_declaration("", AccessorKind::Get, None).into_j();
    let get_with_body = b
        .accessor_declaration("", AccessorKind::Get, Some(b.block("", vec![], "")))
        .into_j();
    let property = b
        .property_declaration(
            "",
            vec![],
            b.identifier("", "int").into(),
            b.identifier(" ", "X"),
            None,
            None,
        )
        .into_j();
    let await_task = b.await_expression("", b.identifier(" ", "t").into()).into_j();
    let nested_using = b
        .using_statement(
            "",
            b.control_parentheses("", b.identifier("", "r"), ""),
            await_task.clone(),
        )
        .into_j();

    assert!(csharp_needs_terminator(&get));
    assert!(!csharp_needs_terminator(&get_with_body));
    assert!(!csharp_needs_terminator(&property));
    assert!(csharp_needs_terminator(&await_task));
    assert!(csharp_needs_terminator(&nested_using));
    assert!(csharp_needs_terminator(&b.return_statement("", None).into()));
    assert!(!csharp_needs_terminator(&b.block("", vec![], "").into()));
}

#[derive(Debug)]
struct Foreign {
    id: NodeId,
    prefix: Space,
    markers: Markers,
}

impl Extension for Foreign {
    fn dialect(&self) -> &'static str {
        "foreign"
    }
    fn kind(&self) -> &'static str {
        "Foreign"
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
    fn with_prefix(self: Arc<Self>, _prefix: Space) -> Arc<dyn Extension> {
        self
    }
    fn with_markers(self: Arc<Self>, _markers: Markers) -> Arc<dyn Extension> {
        self
    }
    fn is_statement(&self) -> bool {
        true
    }
    fn is_expression(&self) -> bool {
        false
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn into_any(self: Arc<Self>) -> Arc<dyn std::any::Any + Send + Sync> {
        self
    }
}

#[test]
fn csharp_printer_rejects_other_dialects() {
    let b = TreeBuilder::new();
    let foreign: Arc<dyn Extension> = Arc::new(Foreign {
        id: NodeId::fresh(),
        prefix: Space::EMPTY,
        markers: Markers::EMPTY,
    });
    let unit = b.cs_compilation_unit("", vec![], vec![b.right(foreign, "")], "");
    let err = print_csharp(&unit.into_j(), &SanitizedMarkerPrinter).expect_err("foreign node");
    assert_eq!(
        err,
        LstError::UnsupportedDialect {
            printer: "csharp",
            kind: "Foreign",
        }
    );
}
