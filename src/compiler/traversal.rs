//! Backward reachability from the sink and the linear order segments are emitted in.

use crate::graph::{Graph, Node};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How the reachable nodes are linearized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStrategy {
    /// Chain starts first, nodes closest to the sink last (Kahn's algorithm).
    #[default]
    Topological,
    /// Insertion order, stably sorted by [`NodeKind::priority`](crate::graph::NodeKind::priority).
    KindPriority,
}

/// The upstream ancestry of a sink node.
#[derive(Debug, Clone)]
pub struct Traversal<'g> {
    /// Every node that can reach the sink, in breadth-first discovery order.
    pub reachable: Vec<&'g Node>,
    /// The emission order.
    pub ordered: Vec<&'g Node>,
    /// Reachable nodes left out of `ordered` because they sit on or behind a cycle.
    pub cyclic: Vec<&'g Node>,
}

/// Collects the upstream ancestors of `sink_id` and orders them with `strategy`.
pub fn traverse<'g>(graph: &'g Graph, sink_id: &str, strategy: OrderStrategy) -> Traversal<'g> {
    let index = graph.index();
    let discovered = discover(graph, &index, sink_id);

    let ordered_ids = match strategy {
        OrderStrategy::Topological => kahn(graph, &discovered),
        OrderStrategy::KindPriority => by_priority(graph, &discovered),
    };

    let emitted: AHashSet<&str> = ordered_ids.iter().copied().collect();
    let resolve = |id: &&str| index.get(id).copied();

    Traversal {
        reachable: discovered.iter().filter_map(resolve).collect(),
        ordered: ordered_ids.iter().filter_map(resolve).collect(),
        cyclic: discovered
            .iter()
            .filter(|id| !emitted.contains(*id))
            .filter_map(resolve)
            .collect(),
    }
}

/// Upstream ancestors of `sink_id` in discovery order, without running the ordering pass.
pub fn reachable<'g>(graph: &'g Graph, sink_id: &str) -> Vec<&'g Node> {
    let index = graph.index();
    discover(graph, &index, sink_id)
        .iter()
        .filter_map(|id| index.get(id).copied())
        .collect()
}

/// Breadth-first search from the sink along edges in reverse. Edges with an endpoint that
/// does not resolve to a node are skipped. The sink itself is never part of the result.
fn discover<'g>(graph: &'g Graph, index: &AHashMap<&str, &'g Node>, sink_id: &str) -> Vec<&'g str> {
    let mut incoming: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &graph.edges {
        let (Some(source), Some(target)) = (
            index.get(edge.source.as_str()).copied(),
            index.get(edge.target.as_str()).copied(),
        ) else {
            continue;
        };
        incoming
            .entry(target.id.as_str())
            .or_default()
            .push(source.id.as_str());
    }

    let Some(sink) = index.get(sink_id).copied() else {
        return Vec::new();
    };

    let mut visited: AHashSet<&str> = AHashSet::new();
    visited.insert(sink.id.as_str());
    let mut queue = VecDeque::from([sink.id.as_str()]);
    let mut discovered = Vec::new();

    while let Some(current) = queue.pop_front() {
        let Some(sources) = incoming.get(current) else {
            continue;
        };
        for &source in sources {
            if visited.insert(source) {
                discovered.push(source);
                queue.push_back(source);
            }
        }
    }
    discovered
}

/// Kahn's algorithm restricted to edges inside the discovered set. Zero in-degree nodes are
/// seeded in discovery order, so unrelated chains keep a stable relative order.
fn kahn<'g>(graph: &'g Graph, discovered: &[&'g str]) -> Vec<&'g str> {
    let mut in_degree: AHashMap<&str, usize> = discovered.iter().map(|id| (*id, 0)).collect();
    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();

    for edge in &graph.edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if !in_degree.contains_key(source) || !in_degree.contains_key(target) {
            continue;
        }
        successors.entry(source).or_default().push(target);
        if let Some(degree) = in_degree.get_mut(target) {
            *degree += 1;
        }
    }

    let mut queue: VecDeque<&str> = discovered
        .iter()
        .copied()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();
    let mut ordered = Vec::with_capacity(discovered.len());

    while let Some(id) = queue.pop_front() {
        ordered.push(id);
        let Some(next) = successors.get(id) else {
            continue;
        };
        for &target in next {
            if let Some(degree) = in_degree.get_mut(target) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(target);
                }
            }
        }
    }
    ordered
}

fn by_priority<'g>(graph: &'g Graph, discovered: &[&'g str]) -> Vec<&'g str> {
    let members: AHashSet<&str> = discovered.iter().copied().collect();
    let mut nodes: Vec<&Node> = graph
        .nodes
        .iter()
        .filter(|n| members.contains(n.id.as_str()))
        .collect();
    nodes.sort_by_key(|n| n.kind.priority());

    let mut seen = AHashSet::new();
    nodes
        .into_iter()
        .map(|n| n.id.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}
