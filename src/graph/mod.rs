//! The prompt graph as the editor stores it: an arena of nodes keyed by id and a
//! separate list of directed edges between them.

use crate::error::GraphError;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

mod kind;
pub mod payload;

pub use kind::NodeKind;
pub use payload::*;

/// Canvas position of a node. Ignored by the compiler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single typed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    /// Creates a node whose declared kind matches its payload.
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            kind: data.kind(),
            data,
            position: Position::default(),
        }
    }
}

/// A directed connection from `source` into `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, rename = "targetHandle", skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e-{}-{}", source, target),
            source,
            target,
            source_handle: None,
            target_handle: None,
        }
    }
}

/// Nodes in insertion order plus edges in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parses an exported canvas and checks the invariants the compiler relies on.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let graph: Graph =
            serde_json::from_str(json).map_err(|e| GraphError::JsonParseError(e.to_string()))?;
        graph.validate()?;
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::JsonParseError(e.to_string()))
    }

    /// Checks that every node's declared kind matches its payload and that ids are unique.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
            let payload = node.data.kind();
            if node.kind != payload {
                return Err(GraphError::KindMismatch {
                    node_id: node.id.clone(),
                    declared: node.kind,
                    payload,
                });
            }
        }
        Ok(())
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn connect(&mut self, source: &str, target: &str) -> &mut Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// All nodes of type `output`, in insertion order.
    pub fn output_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Output)
    }

    /// Id lookup table over the node arena. The first node wins on duplicate ids.
    pub(crate) fn index(&self) -> AHashMap<&str, &Node> {
        let mut index = AHashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }
        index
    }
}
