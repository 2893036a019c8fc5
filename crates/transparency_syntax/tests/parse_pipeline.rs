//! End-to-end checks over the public API: parse a realistic program, verify
//! round-trip fidelity and structure, then run incremental edits against it.

use transparency_core::lang::productions::NodeKind;
use transparency_syntax::cst::{Element, NodeId, Tree};
use transparency_syntax::diagnostics::DiagnosticKind;
use transparency_syntax::incremental::{self, Edit};
use transparency_syntax::parser;

const PROGRAM: &str = r#"# echo "build"

constant width = 16;

class counter : common widget {
    method! count: int;
    counter::ctor <> : count(0) { }
    method <int> bump <int step> {
        count = count + step;
        return count;
    }
}

entry <> main <> {
    var c: counter;
    for (var i = 0; i < width; ++i) {
        c->bump(1);
    }
}
"#;

fn collect(tree: &Tree, id: NodeId, out: &mut Vec<NodeKind>) {
    out.push(tree.node(id).kind);
    for &child in &tree.node(id).children {
        if let Element::Node(n) = child {
            collect(tree, n, out);
        }
    }
}

fn kinds(tree: &Tree) -> Vec<NodeKind> {
    let mut out = Vec::new();
    collect(tree, tree.root(), &mut out);
    out
}

fn errors(tree: &Tree) -> Vec<String> {
    tree.diagnostics()
        .iter()
        .filter(|d| d.kind != DiagnosticKind::Note)
        .map(|d| d.message.clone())
        .collect()
}

#[test]
fn program_parses_clean() {
    let tree = parser::parse(PROGRAM);
    assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));

    let kinds = kinds(&tree);
    for want in [
        NodeKind::Pragma,
        NodeKind::ConstantDefinition,
        NodeKind::ClassDefinition,
        NodeKind::BaseSpecifier,
        NodeKind::MethodDefinition,
        NodeKind::CtorDefinition,
        NodeKind::CtorInit,
        NodeKind::FunctionDefinition,
        NodeKind::VariableDefinition,
        NodeKind::ForStatement,
        NodeKind::MethodExpression,
        NodeKind::CallExpression,
        NodeKind::ReturnStatement,
    ] {
        assert!(kinds.contains(&want), "missing {want:?}");
    }
}

#[test]
fn tree_round_trips_the_source() {
    let tree = parser::parse(PROGRAM);
    let root = tree.node(tree.root()).span;
    assert_eq!(tree.text(root), PROGRAM);
    assert_eq!(tree.source().as_ref(), PROGRAM);
}

#[test]
fn parsing_identical_bytes_twice_is_identical() {
    let a = parser::parse(PROGRAM);
    let b = parser::parse(PROGRAM);
    assert_eq!(a.dump(), b.dump());
    assert_eq!(a.tokens(), b.tokens());
    assert_eq!(a.diagnostics().len(), b.diagnostics().len());
}

#[test]
fn incremental_edit_matches_a_fresh_parse() {
    let old = parser::parse(PROGRAM);
    let at = PROGRAM.find("16").unwrap();
    let new_source = PROGRAM.replace("16", "32");
    let edit = Edit { start: at, old_end: at + 2, new_end: at + 2 };

    let tree = incremental::edit(&old, &edit, &new_source);
    let fresh = parser::parse(&new_source);
    assert_eq!(tree.dump(), fresh.dump());
    assert_eq!(tree.source().as_ref(), new_source.as_str());
}

#[test]
fn broken_input_still_yields_a_full_tree() {
    // Drop the closing brace of the class; the parse must stay total.
    let broken = PROGRAM.replacen("}\n\nentry", "\n\nentry", 1);
    let tree = parser::parse(&broken);
    assert!(!errors(&tree).is_empty());

    let root = tree.node(tree.root()).span;
    assert_eq!(tree.text(root), broken);
}
