use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node tags a prompt graph may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Product,
    Scene,
    Style,
    Branding,
    Lighting,
    Camera,
    Quality,
    Output,
    Refine,
    Custom,
    Image,
    Human,
    Clothing,
    Variation,
    Plant,
    Texture,
    Pose,
    Background,
    Photography,
    Batch,
}

impl NodeKind {
    pub const ALL: [NodeKind; 20] = [
        NodeKind::Product,
        NodeKind::Scene,
        NodeKind::Style,
        NodeKind::Branding,
        NodeKind::Lighting,
        NodeKind::Camera,
        NodeKind::Quality,
        NodeKind::Output,
        NodeKind::Refine,
        NodeKind::Custom,
        NodeKind::Image,
        NodeKind::Human,
        NodeKind::Clothing,
        NodeKind::Variation,
        NodeKind::Plant,
        NodeKind::Texture,
        NodeKind::Pose,
        NodeKind::Background,
        NodeKind::Photography,
        NodeKind::Batch,
    ];

    /// The tag as it appears in serialized graphs.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Product => "product",
            NodeKind::Scene => "scene",
            NodeKind::Style => "style",
            NodeKind::Branding => "branding",
            NodeKind::Lighting => "lighting",
            NodeKind::Camera => "camera",
            NodeKind::Quality => "quality",
            NodeKind::Output => "output",
            NodeKind::Refine => "refine",
            NodeKind::Custom => "custom",
            NodeKind::Image => "image",
            NodeKind::Human => "human",
            NodeKind::Clothing => "clothing",
            NodeKind::Variation => "variation",
            NodeKind::Plant => "plant",
            NodeKind::Texture => "texture",
            NodeKind::Pose => "pose",
            NodeKind::Background => "background",
            NodeKind::Photography => "photography",
            NodeKind::Batch => "batch",
        }
    }

    /// Rank used by the kind-priority ordering strategy. Lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            NodeKind::Product => 10,
            NodeKind::Human => 12,
            NodeKind::Clothing => 14,
            NodeKind::Branding => 20,
            NodeKind::Scene => 30,
            NodeKind::Plant => 35,
            NodeKind::Texture => 37,
            NodeKind::Style => 40,
            NodeKind::Lighting => 50,
            NodeKind::Camera => 60,
            NodeKind::Custom => 70,
            NodeKind::Variation => 75,
            NodeKind::Image => 80,
            NodeKind::Quality => 90,
            _ => 99,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
