// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Dialect selection, print options, round-trip verification and pipeline
//! bookkeeping.

mod common;

use common::*;
use tugtool_lst::java::builder::TreeBuilder;
use tugtool_lst::java::BinaryOperator;
use tugtool_lst::lst::{Marker, Markers};
use tugtool_lst::pipeline::{PassStatus, PipelineOptions};
use tugtool_lst::{
    print, print_parsed, print_with, verify_round_trip, Dialect, LstError, MarkerPrinting, Pipeline,
    PrintOptions, RunContext, J,
};

#[test]
fn root_dialect_picks_the_printer() {
    let b = TreeBuilder::new();
    let tree = scenario_tree(&b);
    assert_eq!(Dialect::of(&tree), Dialect::CSharp);
    assert_eq!(print(&tree).expect("print"), SCENARIO_SOURCE);

    let java: J = call(&b, "", "M").into();
    assert_eq!(Dialect::of(&java), Dialect::Java);
}

#[test]
fn forcing_java_on_a_csharp_tree_fails() {
    let b = TreeBuilder::new();
    let options = PrintOptions::new().with_dialect(Dialect::Java);
    let err = print_with(&scenario_tree(&b), &options).expect_err("java printer");
    assert_eq!(
        err,
        LstError::UnsupportedDialect {
            printer: "java",
            kind: "CompilationUnit",
        }
    );
}

fn marked_sum(b: &TreeBuilder) -> J {
    let name = J::from(b.identifier(" ", "x"))
        .with_markers(Markers::new(vec![Marker::search_result(Some("found"))]));
    b.binary("", b.literal("", "1"), " ", BinaryOperator::Addition, name)
        .into()
}

#[test]
fn marker_printing_modes() {
    let b = TreeBuilder::new();
    let tree = marked_sum(&b);
    let printed = |mode| {
        print_with(&tree, &PrintOptions::new().with_marker_printing(mode)).expect("print")
    };
    assert_eq!(printed(MarkerPrinting::Default), "1 + /*~~(found)~~>*/x");
    assert_eq!(printed(MarkerPrinting::Sanitized), "1 + x");
    assert_eq!(printed(MarkerPrinting::Fenced), "1 + {{x}}");
    assert_eq!(print(&tree).expect("print"), printed(MarkerPrinting::Default));
}

#[test]
fn verification_ignores_marker_text() {
    let b = TreeBuilder::new();
    let tree = marked_sum(&b);
    verify_round_trip("1 + x", &tree).expect("markers are not source");

    let options = PrintOptions::new().with_round_trip_verification(true);
    assert_eq!(
        print_parsed("1 + x", &tree, &options).expect("print"),
        "1 + /*~~(found)~~>*/x"
    );
}

#[test]
fn verification_reports_the_first_difference() {
    let b = TreeBuilder::new();
    let tree = scenario_tree(&b);
    let source = SCENARIO_SOURCE.replace("A(); B();", "A();  B();");

    let err = verify_round_trip(&source, &tree).expect_err("spacing differs");
    let offset = SCENARIO_SOURCE.find("A(); B();").expect("block calls") + "A();".len();
    assert_eq!(
        err,
        LstError::RoundTripMismatch {
            offset: offset + 1,
            expected: " B(); C();\n     ".to_string(),
            actual: "B(); C();\n      ".to_string(),
        }
    );

    let options = PrintOptions::new().with_round_trip_verification(true);
    assert!(matches!(
        print_parsed(&source, &tree, &options),
        Err(LstError::RoundTripMismatch { .. })
    ));
    let unchecked = PrintOptions::new();
    assert_eq!(print_parsed(&source, &tree, &unchecked).expect("print"), SCENARIO_SOURCE);
}

#[test]
fn trailing_newline_is_part_of_the_round_trip() {
    let b = TreeBuilder::new();
    let tree = scenario_tree(&b);
    let trimmed = SCENARIO_SOURCE.trim_end();
    let err = verify_round_trip(trimmed, &tree).expect_err("missing newline");
    assert_eq!(
        err,
        LstError::RoundTripMismatch {
            offset: trimmed.len(),
            expected: String::new(),
            actual: "\n".to_string(),
        }
    );
}

#[test]
fn options_load_from_json() {
    let options: PrintOptions = serde_json::from_str(
        r#"{ "marker_printing": "fenced", "verify_round_trip": true, "dialect": "java" }"#,
    )
    .expect("valid options");
    assert_eq!(
        options,
        PrintOptions::new()
            .with_marker_printing(MarkerPrinting::Fenced)
            .with_round_trip_verification(true)
            .with_dialect(Dialect::Java)
    );

    let empty: PrintOptions = serde_json::from_str("{}").expect("defaults");
    assert_eq!(empty, PrintOptions::default());

    let pipeline: PipelineOptions = serde_json::from_str("{}").expect("defaults");
    assert!(pipeline.stop_on_error);
}

#[test]
fn run_context_snapshot() {
    let b = TreeBuilder::new();
    let tree = scenario_tree(&b);
    let mut pipeline = Pipeline::new()
        .with_visitor("noop", NoOp::default())
        .with_visitor("drop-static", DropStaticUsings::default())
        .with_visitor("drop-static-again", DropStaticUsings::default());
    assert_eq!(pipeline.len(), 3);

    let mut ctx = RunContext::new();
    let visited = pipeline.run(&tree, &mut ctx).expect("run").expect("tree kept");
    assert!(print(&visited).expect("print").starts_with("using System.Math;\n"));
    assert!(ctx.changed());
    assert_eq!(
        serde_json::to_value(&ctx).expect("serializable"),
        serde_json::json!({
            "outcomes": [
                {"pass": "noop", "status": "unchanged"},
                {"pass": "drop-static", "status": "changed"},
                {"pass": "drop-static-again", "status": "unchanged"},
            ]
        })
    );
    assert_eq!(ctx.outcomes()[1].status, PassStatus::Changed);
}
