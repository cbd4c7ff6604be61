// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! C# visitor tests: bridging from the host visitor, source gating, hooks
//! over C# nodes and rewrites that cross the dialect boundary.

mod common;

use std::sync::Arc;

use common::{assert_prints, demo_tree, DEMO_SOURCE};
use tugtool_lst_core::{rebuild, Cursor, LstError, RefEq, Result};
use tugtool_lst_csharp::builder::CSharpTreeBuilder;
use tugtool_lst_csharp::csharp_visitor_bridge;
use tugtool_lst_csharp::visitor::*;
use tugtool_lst_csharp::*;
use tugtool_lst_java::builder::TreeBuilder;
use tugtool_lst_java::visitor::{walk_identifier, JavaVisitor};
use tugtool_lst_java::{Identifier, J};

#[derive(Default)]
struct NoOp {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for NoOp {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());
}

impl CSharpVisitor<()> for NoOp {}

#[test]
fn noop_visitor_returns_the_same_tree() {
    let b = TreeBuilder::new();
    let tree = demo_tree(&b);
    let visited = NoOp::default().visit_source(&tree, &mut ()).expect("visit");
    assert!(visited.expect("tree kept").ref_eq(&tree));
}

/// Turns `using static X;` into `using X;`.
#[derive(Default)]
struct DropStaticUsings {
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

#[test]
fn static_using_becomes_plain_using() {
    let b = TreeBuilder::new();
    let using = b.using_directive("", Some(" "), b.qualified_name(" ", "System.Math"));
    let other = b.using_directive("\n", None, b.qualified_name(" ", "System"));
    let tree = b
        .cs_compilation_unit(
            "",
            vec![b.right(using.into_j(), ""), b.right(Arc::clone(&other).into_j(), "")],
            vec![],
            "\n",
        )
        .into_j();
    assert_prints(&tree, "using static System.Math;\nusing System;\n");

    let visited = DropStaticUsings::default()
        .visit_source(&tree, &mut ())
        .expect("visit")
        .expect("tree kept");
    assert_prints(&visited, "using System.Math;\nusing System;\n");

    let Some(Cs::CompilationUnit(unit)) = Cs::from_j(&visited) else {
        panic!("expected a C# compilation unit");
    };
    let kept = unit.usings[1].element.downcast_extension::<UsingDirective>();
    assert!(Arc::ptr_eq(&kept.expect("using directive"), &other));
}

#[test]
fn csharp_visitor_skips_host_sources() {
    let b = TreeBuilder::new();
    let unit: J = b
        .compilation_unit(
            "",
            vec![b.right(b.import("", Some(" "), b.qualified_name(" ", "a.B")), "")],
            vec![],
            "",
        )
        .into();
    let visited = DropStaticUsings::default()
        .visit_source(&unit, &mut ())
        .expect("visit")
        .expect("tree kept");
    assert!(visited.ref_eq(&unit));
}

/// A host-only visitor never descends into C# nodes.
#[derive(Default)]
struct HostRenamer {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for HostRenamer {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    fn visit_identifier(&mut self, node: &Arc<Identifier>, p: &mut ()) -> Result<Option<J>> {
        if node.simple_name == "reader" {
            let renamed = Identifier {
                simple_name: "stream".to_string(),
                ..(**node).clone()
            };
            return Ok(Some(J::from(Arc::new(renamed))));
        }
        walk_identifier(self, node, p)
    }
}

#[test]
fn host_visitor_passes_csharp_nodes_through() {
    let b = TreeBuilder::new();
    let tree = demo_tree(&b);
    let visited = HostRenamer::default()
        .visit_source(&tree, &mut ())
        .expect("visit")
        .expect("tree kept");
    assert!(visited.ref_eq(&tree));
}

/// The same rename, bridged: host nodes inside C# nodes are reached.
#[derive(Default)]
struct CsRenamer {
    cursor: Cursor<J>,
    ancestors: Vec<Vec<&'static str>>,
}

impl JavaVisitor<()> for CsRenamer {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());

    fn visit_identifier(&mut self, node: &Arc<Identifier>, p: &mut ()) -> Result<Option<J>> {
        if node.simple_name == "reader" {
            let kinds = self.cursor.ancestors().take(3).map(J::kind).collect();
            self.ancestors.push(kinds);
            let renamed = Identifier {
                simple_name: "stream".to_string(),
                ..(**node).clone()
            };
            return Ok(Some(J::from(Arc::new(renamed))));
        }
        walk_identifier(self, node, p)
    }
}

impl CSharpVisitor<()> for CsRenamer {}

#[test]
fn csharp_visitor_reaches_host_nodes_inside_csharp_nodes() {
    let b = TreeBuilder::new();
    let tree = demo_tree(&b);
    let mut renamer = CsRenamer::default();
    let visited = renamer
        .visit_source(&tree, &mut ())
        .expect("visit")
        .expect("tree kept");

    let expected = DEMO_SOURCE.replace("reader", "stream");
    assert_prints(&visited, &expected);
    assert_eq!(
        renamer.ancestors,
        vec![
            vec!["ControlParentheses", "UsingStatement", "Block"],
            vec!["MethodInvocation", "UsingStatement", "Block"],
        ]
    );
    assert!(renamer.cursor.is_empty());
}

/// Records the statements and expressions the category hooks see.
#[derive(Default)]
struct HookLog {
    cursor: Cursor<J>,
    statements: Vec<&'static str>,
    expressions: Vec<&'static str>,
}

impl JavaVisitor<()> for HookLog {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());

    fn visit_statement(&mut self, statement: J, _p: &mut ()) -> Result<Option<J>> {
        if statement.dialect() == CSHARP {
            self.statements.push(statement.kind());
        }
        Ok(Some(statement))
    }

    fn visit_expression(&mut self, expression: J, _p: &mut ()) -> Result<Option<J>> {
        if expression.dialect() == CSHARP {
            self.expressions.push(expression.kind());
        }
        Ok(Some(expression))
    }
}

impl CSharpVisitor<()> for HookLog {}

#[test]
fn category_hooks_see_csharp_nodes() {
    let b = TreeBuilder::new();
    let tree = demo_tree(&b);
    let mut log = HookLog::default();
    let visited = log.visit_source(&tree, &mut ()).expect("visit").expect("tree kept");
    assert!(visited.ref_eq(&tree));
    assert_eq!(
        log.statements,
        vec![
            "UsingDirective",
            "UsingDirective",
            "NamespaceDeclaration",
            "AnnotatedStatement",
            "PropertyDeclaration",
            "AccessorDeclaration",
            "AccessorDeclaration",
            "UsingStatement",
            "AwaitExpression",
        ]
    );
    assert_eq!(log.expressions, vec!["AwaitExpression"]);
}

/// Removes every identifier named `task`.
#[derive(Default)]
struct DropTask {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for DropTask {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());

    fn visit_identifier(&mut self, node: &Arc<Identifier>, p: &mut ()) -> Result<Option<J>> {
        if node.simple_name == "task" {
            return Ok(None);
        }
        walk_identifier(self, node, p)
    }
}

impl CSharpVisitor<()> for DropTask {}

#[test]
fn removing_a_required_csharp_child_is_an_error() {
    let b = TreeBuilder::new();
    let err = DropTask::default()
        .visit_source(&demo_tree(&b), &mut ())
        .expect_err("await needs an expression");
    assert_eq!(
        err,
        LstError::MissingRequiredChild {
            parent: "AwaitExpression",
            field: "expression",
        }
    );
}

/// Deletes await statements through the statement hook.
#[derive(Default)]
struct DropAwaits {
    cursor: Cursor<J>,
}

impl JavaVisitor<()> for DropAwaits {
    fn cursor(&mut self) -> &mut Cursor<J> {
        &mut self.cursor
    }

    csharp_visitor_bridge!(());
}

impl CSharpVisitor<()> for DropAwaits {
    fn visit_await_expression(&mut self, _node: &Arc<AwaitExpression>, _p: &mut ()) -> Result<Option<J>> {
        Ok(None)
    }
}

#[test]
fn removing_a_csharp_statement_drops_it_from_the_block() {
    let b = TreeBuilder::new();
    let visited = DropAwaits::default()
        .visit_source(&demo_tree(&b), &mut ())
        .expect("visit")
        .expect("tree kept");
    let expected = DEMO_SOURCE.replace("\n            await task;", "");
    assert_prints(&visited, &expected);
}
