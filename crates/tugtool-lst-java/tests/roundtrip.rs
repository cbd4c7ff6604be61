// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Round-trip tests for the Java printer.
//!
//! Each test builds the tree a parser would produce for a snippet and checks
//! that printing it reproduces the snippet byte for byte.

mod common;

use std::sync::Arc;

use common::{assert_prints, call_tree, demo_tree, DEMO_SOURCE};
use tugtool_lst_core::{
    Container, DefaultMarkerPrinter, FencedMarkerPrinter, LstError, Marker, Markers, NodeId,
    SanitizedMarkerPrinter, Space,
};
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::printer::print_java;
use tugtool_lst_java::*;

#[test]
fn roundtrip_demo_class() {
    let b = TreeBuilder::new();
    assert_prints(&demo_tree(&b), DEMO_SOURCE);
}

#[test]
fn roundtrip_method_invocation_keeps_argument_spacing() {
    let b = TreeBuilder::new();
    assert_prints(&call_tree(&b), "a.b(1,  2)");
}

#[test]
fn roundtrip_empty_argument_list() {
    let b = TreeBuilder::new();
    let call = b.method_invocation("", None, b.identifier("", "m"), Container::empty());
    assert_prints(&call.into(), "m()");
}

#[test]
fn roundtrip_empty_element_keeps_inner_space() {
    let b = TreeBuilder::new();
    let call = b.method_invocation(
        "",
        None,
        b.identifier("", "m"),
        b.container("", vec![(b.empty(" "), "")]),
    );
    assert_prints(&call.into(), "m( )");
}

#[test]
fn roundtrip_trailing_comma() {
    let b = TreeBuilder::new();
    let mut arguments = b.container("", vec![(b.identifier("", "a"), ""), (b.identifier(" ", "b"), "")]);
    let last = arguments.elements.len() - 1;
    arguments.elements[last].markers = Markers::new(vec![Marker::TrailingComma {
        suffix: Space::single(),
    }]);
    let call = b.method_invocation("", None, b.identifier("", "m"), arguments);
    assert_prints(&call.into(), "m(a, b, )");
}

#[test]
fn roundtrip_comments_in_padding() {
    let b = TreeBuilder::new();
    let call = b.method_invocation(
        "",
        Some(b.right(b.identifier("", "list"), " /* recv */ ")),
        b.identifier("", "add"),
        b.container(
            "",
            vec![(b.literal("", "1"), " // one\n"), (b.literal("    ", "2"), "")],
        ),
    );
    assert_prints(&call.into(), "list /* recv */ .add(1 // one\n,    2)");
}

#[test]
fn roundtrip_prefix_and_postfix_unary() {
    let b = TreeBuilder::new();
    let statements = vec![
        b.right(b.unary("", "", UnaryOperator::PreIncrement, b.identifier("", "i")), ""),
        b.right(b.unary(" ", "", UnaryOperator::PostDecrement, b.identifier("", "j")), ""),
        b.right(
            b.assignment(" ", b.identifier("", "ok"), " ", b.unary(" ", "", UnaryOperator::Not, b.identifier("", "done"))),
            "",
        ),
    ];
    assert_prints(&b.block("", statements, " ").into(), "{++i; j--; ok = !done; }");
}

#[test]
fn roundtrip_parentheses_and_field_access() {
    let b = TreeBuilder::new();
    let tree = b.binary(
        "",
        b.parentheses("", b.binary("", b.identifier("", "a"), " ", BinaryOperator::Addition, b.identifier(" ", "b")), ""),
        " ",
        BinaryOperator::Multiplication,
        b.field_access(" ", b.identifier("", "this"), "\n    ", b.identifier("", "scale")),
    );
    assert_prints(&tree.into(), "(a + b) * this\n    .scale");
}

#[test]
fn roundtrip_erroneous_is_verbatim() {
    let b = TreeBuilder::new();
    let block = b.block(
        "",
        vec![b.right(b.erroneous("\n    ", "int = = ;", vec!["unexpected `=`".to_string()]), "")],
        "\n",
    );
    assert_prints(&block.into(), "{\n    int = = ;\n}");
}

#[test]
fn roundtrip_labelled_jumps_and_continue() {
    let b = TreeBuilder::new();
    let block = b.block(
        "",
        vec![
            b.right(b.continue_statement(" ", Some(b.identifier(" ", "outer"))), ""),
            b.right(b.break_statement(" ", None), " "),
        ],
        " ",
    );
    assert_prints(&block.into(), "{ continue outer; break ; }");
}

#[test]
fn semicolon_marker_terminates_any_statement() {
    let b = TreeBuilder::new();
    let class = b.class_declaration(
        "",
        vec![],
        "",
        ClassKind::Interface,
        b.identifier(" ", "I"),
        None,
        b.block(" ", vec![], ""),
    );
    let mut statement = b.right(class, "");
    statement.markers = Markers::new(vec![Marker::Semicolon]);
    let unit = b.compilation_unit("", vec![], vec![statement], "");
    assert_prints(&unit.into(), "interface I {};");
}

#[test]
fn search_result_markers_print_as_comments() {
    let b = TreeBuilder::new();
    let name = J::from(b.identifier(" ", "x"))
        .with_markers(Markers::new(vec![Marker::search_result(Some("found"))]));
    let tree = b.binary("", b.literal("", "1"), " ", BinaryOperator::Addition, name);
    let tree = J::from(tree);

    assert_eq!(
        print_java(&tree, &DefaultMarkerPrinter).expect("print"),
        "1 + /*~~(found)~~>*/x"
    );
    assert_eq!(print_java(&tree, &FencedMarkerPrinter).expect("print"), "1 + {{x}}");
    assert_eq!(print_java(&tree, &SanitizedMarkerPrinter).expect("print"), "1 + x");
}

#[test]
fn unmapped_operator_aborts_the_print() {
    let b = TreeBuilder::new();
    let tree = b.assignment_operation(
        "",
        b.identifier("", "a"),
        " ",
        AssignmentOperator::Coalesce,
        b.identifier(" ", "b"),
    );
    let err = print_java(&tree.into(), &SanitizedMarkerPrinter).expect_err("java has no ??=");
    assert_eq!(
        err,
        LstError::UnmappedToken {
            dialect: "java",
            kind: "AssignmentOperator",
            value: "Coalesce".to_string(),
        }
    );
}

#[test]
fn unmapped_class_kind_aborts_the_print() {
    let b = TreeBuilder::new();
    let tree = b.class_declaration(
        "",
        vec![],
        "",
        ClassKind::Struct,
        b.identifier(" ", "Point"),
        None,
        b.block(" ", vec![], ""),
    );
    let err = print_java(&tree.into(), &SanitizedMarkerPrinter).expect_err("java has no struct");
    assert!(matches!(err, LstError::UnmappedToken { kind: "ClassKind", .. }));
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
    fn with_prefix(self: Arc<Self>, prefix: Space) -> Arc<dyn Extension> {
        if prefix == self.prefix {
            return self;
        }
        Arc::new(Foreign { id: self.id, prefix, markers: self.markers.clone() })
    }
    fn with_markers(self: Arc<Self>, markers: Markers) -> Arc<dyn Extension> {
        if markers == self.markers {
            return self;
        }
        Arc::new(Foreign { id: self.id, prefix: self.prefix.clone(), markers })
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
fn java_printer_rejects_dialect_nodes() {
    let b = TreeBuilder::new();
    let foreign: Arc<dyn Extension> = Arc::new(Foreign {
        id: NodeId::fresh(),
        prefix: Space::EMPTY,
        markers: Markers::EMPTY,
    });
    let block = b.block("", vec![b.right(foreign, "")], "");
    let err = print_java(&block.into(), &SanitizedMarkerPrinter).expect_err("foreign node");
    assert_eq!(
        err,
        LstError::UnsupportedDialect {
            printer: "java",
            kind: "Foreign",
        }
    );
}

#[test]
fn extension_nodes_downcast_to_their_type() {
    let foreign: Arc<dyn Extension> = Arc::new(Foreign {
        id: NodeId::fresh(),
        prefix: Space::EMPTY,
        markers: Markers::EMPTY,
    });
    let tree = J::from(foreign);
    assert_eq!(tree.dialect(), "foreign");
    assert!(tree.is_statement());
    assert!(tree.downcast_extension::<Foreign>().is_some());

    let moved = tree.with_prefix(Space::single());
    assert_eq!(moved.prefix(), &Space::single());
    assert_eq!(moved.id(), tree.id());
}
