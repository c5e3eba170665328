//! Tests for reachability and ordering.
mod common;
use common::*;
use promptgraph::compiler::traversal::{reachable, traverse};
use promptgraph::compiler::OrderStrategy;
use promptgraph::graph::*;

fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn test_reachable_is_breadth_first_and_excludes_sink() {
    let graph = graph(
        vec![
            custom("far", "far"),
            custom("near", "near"),
            custom("side", "side"),
            output("out"),
        ],
        &[("far", "near"), ("near", "out"), ("side", "out")],
    );
    assert_eq!(ids(&reachable(&graph, "out")), vec!["near", "side", "far"]);
    assert!(reachable(&graph, "missing").is_empty());
}

#[test]
fn test_diamond_emits_each_node_once() {
    let graph = graph(
        vec![
            custom("root", "root"),
            custom("left", "left"),
            custom("right", "right"),
            custom("join", "join"),
            output("out"),
        ],
        &[
            ("root", "left"),
            ("root", "right"),
            ("left", "join"),
            ("right", "join"),
            ("join", "out"),
        ],
    );
    let traversal = traverse(&graph, "out", OrderStrategy::Topological);

    assert_eq!(
        ids(&traversal.ordered),
        vec!["root", "left", "right", "join"]
    );
    assert!(traversal.cyclic.is_empty());
}

#[test]
fn test_cycle_behind_valid_chain() {
    let graph = graph(
        vec![
            custom("x", "x"),
            custom("y", "y"),
            custom("fed", "fed by cycle"),
            custom("ok", "ok"),
            output("out"),
        ],
        &[
            ("x", "y"),
            ("y", "x"),
            ("y", "fed"),
            ("fed", "out"),
            ("ok", "out"),
        ],
    );
    let traversal = traverse(&graph, "out", OrderStrategy::Topological);

    assert_eq!(ids(&traversal.ordered), vec!["ok"]);
    assert_eq!(ids(&traversal.cyclic), vec!["fed", "y", "x"]);
    assert_eq!(traversal.reachable.len(), 4);
}

#[test]
fn test_kind_priority_is_stable_within_a_kind() {
    let graph = graph(
        vec![
            custom("c2", "second custom"),
            node("scene", NodeKind::Scene),
            custom("c1", "first custom"),
            output("out"),
        ],
        &[("c1", "out"), ("scene", "out"), ("c2", "out")],
    );
    let traversal = traverse(&graph, "out", OrderStrategy::KindPriority);

    // Insertion order, not edge order, breaks ties.
    assert_eq!(ids(&traversal.ordered), vec!["scene", "c2", "c1"]);
}
