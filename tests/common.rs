//! Common test utilities for building prompt graphs.
use promptgraph::graph::*;

pub const TSHIRT_PROMPT: &str = "cotton t-shirt with realistic fabric texture and natural draping";

/// A node carrying the editor's default payload for `kind`.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> Node {
    Node::new(id, NodeData::default_for(kind))
}

#[allow(dead_code)]
pub fn custom(id: &str, text: &str) -> Node {
    Node::new(
        id,
        NodeData::Custom(CustomData {
            prompt_text: text.to_string(),
        }),
    )
}

#[allow(dead_code)]
pub fn product(id: &str, category: &str, name: &str) -> Node {
    Node::new(
        id,
        NodeData::Product(ProductData {
            category: category.to_string(),
            product: name.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn variation(id: &str, options: &[&str]) -> Node {
    Node::new(
        id,
        NodeData::Variation(VariationData {
            variations: options.iter().map(|o| o.to_string()).collect(),
        }),
    )
}

#[allow(dead_code)]
pub fn image(id: &str, urls: &[&str]) -> Node {
    Node::new(
        id,
        NodeData::Image(ImageData {
            images: urls
                .iter()
                .map(|url| UploadedImage {
                    preview_url: format!("blob:{}", url),
                    hosted_url: Some(url.to_string()),
                    is_uploading: false,
                })
                .collect(),
        }),
    )
}

#[allow(dead_code)]
pub fn output(id: &str) -> Node {
    node(id, NodeKind::Output)
}

/// Builds a graph from nodes and `(source, target)` pairs, both in the given order.
#[allow(dead_code)]
pub fn graph(nodes: Vec<Node>, edges: &[(&str, &str)]) -> Graph {
    let edges = edges.iter().map(|(s, t)| Edge::new(*s, *t)).collect();
    Graph::new(nodes, edges)
}

/// The smallest useful graph: a T-shirt product feeding the output.
///
/// Logic: `Apparel & Bags / T-Shirt` -> output
#[allow(dead_code)]
pub fn minimal_product_graph() -> Graph {
    graph(
        vec![product("p1", "Apparel & Bags", "T-Shirt"), output("out")],
        &[("p1", "out")],
    )
}

/// Contents of every segment, in order.
#[allow(dead_code)]
pub fn contents(compiled: &promptgraph::compiler::CompiledPrompt) -> Vec<&str> {
    compiled
        .segments
        .iter()
        .map(|s| s.content.as_str())
        .collect()
}
