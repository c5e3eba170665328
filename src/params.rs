//! Generation parameters read off the graph, alongside the compiled prompt.

use crate::compiler::traversal;
use crate::graph::{AspectRatio, Graph, Node, NodeData, QualityTier, Resolution};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Model used when no quality node picks one.
pub const DEFAULT_MODEL: &str = "seedream/4.5-text-to-image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub aspect_ratio: AspectRatio,
    pub quality: QualityTier,
    /// Models to generate with, never empty.
    pub models: Vec<String>,
    pub resolution: Resolution,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::Square,
            quality: QualityTier::Basic,
            models: vec![DEFAULT_MODEL.to_string()],
            resolution: Resolution::OneK,
        }
    }
}

impl GenerationSettings {
    /// The primary model.
    pub fn model(&self) -> &str {
        self.models.first().map(String::as_str).unwrap_or(DEFAULT_MODEL)
    }
}

/// Settings from the first quality node, in insertion order, that feeds the output node.
/// Falls back to the defaults when there is no output or no such quality node.
pub fn generation_settings(graph: &Graph) -> GenerationSettings {
    let quality = connected(graph).find_map(|n| match &n.data {
        NodeData::Quality(data) => Some(data),
        _ => None,
    });
    let Some(quality) = quality else {
        return GenerationSettings::default();
    };

    let mut models: Vec<String> = quality
        .models
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    if models.is_empty() {
        let model = quality.model.trim();
        models.push(if model.is_empty() { DEFAULT_MODEL } else { model }.to_string());
    }

    GenerationSettings {
        aspect_ratio: quality.aspect_ratio,
        quality: quality.quality,
        models,
        resolution: quality.resolution.unwrap_or_default(),
    }
}

/// Hosted URLs of every image node feeding the output, in node insertion order.
/// Slots still uploading are skipped.
pub fn uploaded_image_urls(graph: &Graph) -> Vec<String> {
    connected(graph)
        .filter_map(|n| match &n.data {
            NodeData::Image(data) => Some(data),
            _ => None,
        })
        .flat_map(|data| data.hosted_urls())
        .map(str::to_string)
        .collect()
}

/// Upstream nodes of the first output node, in insertion order.
fn connected(graph: &Graph) -> impl Iterator<Item = &Node> {
    let members: AHashSet<&str> = graph
        .output_nodes()
        .next()
        .map(|sink| {
            traversal::reachable(graph, &sink.id)
                .into_iter()
                .map(|n| n.id.as_str())
                .collect()
        })
        .unwrap_or_default();
    graph
        .nodes
        .iter()
        .filter(move |n| members.contains(n.id.as_str()))
}
