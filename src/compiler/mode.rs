//! Selects the boilerplate wrapper placed around the synthesized segments.

use super::CompileOptions;
use crate::graph::{Node, NodeData, NodeKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The intent a graph expresses, which decides its quality wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Commercial product mockups.
    Product,
    /// General photography, refined by a [`PhotographyPreset`].
    Photography,
    /// Raw image edits. Never wrapped.
    Alteration,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenerationMode::Product => "product",
            GenerationMode::Photography => "photography",
            GenerationMode::Alteration => "alteration",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotographyPreset {
    #[default]
    None,
    Portrait,
    Landscape,
    Macro,
    Street,
    Fashion,
    Food,
    Architecture,
    Wildlife,
}

impl PhotographyPreset {
    pub fn from_id(id: &str) -> Option<Self> {
        let preset = match id.trim().to_ascii_lowercase().as_str() {
            "none" => PhotographyPreset::None,
            "portrait" => PhotographyPreset::Portrait,
            "landscape" => PhotographyPreset::Landscape,
            "macro" => PhotographyPreset::Macro,
            "street" => PhotographyPreset::Street,
            "fashion" => PhotographyPreset::Fashion,
            "food" => PhotographyPreset::Food,
            "architecture" => PhotographyPreset::Architecture,
            "wildlife" => PhotographyPreset::Wildlife,
            _ => return None,
        };
        Some(preset)
    }
}

/// Phrases placed before and after the node segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptPreset {
    pub prefix: &'static [&'static str],
    pub suffix: &'static [&'static str],
}

impl PromptPreset {
    pub const EMPTY: PromptPreset = PromptPreset {
        prefix: &[],
        suffix: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// The prefix as one comma-joined unit, if there is one.
    pub fn prefix_phrase(&self) -> Option<String> {
        joined(self.prefix)
    }

    pub fn suffix_phrase(&self) -> Option<String> {
        joined(self.suffix)
    }

    /// The fixed wrapper table.
    pub fn for_mode(mode: GenerationMode, preset: PhotographyPreset) -> PromptPreset {
        match mode {
            GenerationMode::Product => PRODUCT,
            GenerationMode::Photography => photography(preset),
            GenerationMode::Alteration => PromptPreset::EMPTY,
        }
    }
}

fn joined(phrases: &[&str]) -> Option<String> {
    if phrases.is_empty() {
        None
    } else {
        Some(phrases.join(", "))
    }
}

const PRODUCT: PromptPreset = PromptPreset {
    prefix: &[
        "Professional product photography",
        "High resolution commercial mockup",
        "8K quality",
    ],
    suffix: &[
        "realistic shadows and lighting",
        "photorealistic materials and textures",
        "professional studio quality",
    ],
};

fn photography(preset: PhotographyPreset) -> PromptPreset {
    match preset {
        PhotographyPreset::None => PromptPreset {
            prefix: &["Professional photography", "high quality"],
            suffix: &["sharp focus", "natural colors"],
        },
        PhotographyPreset::Portrait => PromptPreset {
            prefix: &["Professional portrait photography", "high quality"],
            suffix: &[
                "natural skin tones",
                "beautiful lighting",
                "sharp focus on subject",
                "pleasing bokeh",
            ],
        },
        PhotographyPreset::Landscape => PromptPreset {
            prefix: &["Stunning landscape photography", "high resolution"],
            suffix: &[
                "dramatic natural lighting",
                "vivid colors",
                "sharp detail throughout",
                "professional composition",
            ],
        },
        PhotographyPreset::Macro => PromptPreset {
            prefix: &["Professional macro photography", "extreme close-up"],
            suffix: &[
                "incredible detail",
                "shallow depth of field",
                "sharp focus on subject",
                "soft background blur",
            ],
        },
        PhotographyPreset::Street => PromptPreset {
            prefix: &["Candid street photography", "documentary style"],
            suffix: &[
                "authentic atmosphere",
                "natural lighting",
                "compelling composition",
                "decisive moment",
            ],
        },
        PhotographyPreset::Fashion => PromptPreset {
            prefix: &["High-end fashion photography", "editorial style"],
            suffix: &["professional lighting", "stylish composition"],
        },
        PhotographyPreset::Food => PromptPreset {
            prefix: &["Professional food photography", "appetizing presentation"],
            suffix: &[
                "mouth-watering detail",
                "perfect lighting",
                "fresh appearance",
                "styled to perfection",
            ],
        },
        PhotographyPreset::Architecture => PromptPreset {
            prefix: &["Professional architectural photography", "high resolution"],
            suffix: &[
                "perfect perspective",
                "balanced exposure",
                "sharp detail",
                "dramatic lighting",
            ],
        },
        PhotographyPreset::Wildlife => PromptPreset {
            prefix: &["Professional wildlife photography", "nature documentary quality"],
            suffix: &[
                "natural behavior captured",
                "sharp focus",
                "beautiful natural lighting",
                "authentic environment",
            ],
        },
    }
}

/// The outcome of mode detection for one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMode {
    pub mode: GenerationMode,
    pub photography_preset: Option<PhotographyPreset>,
    /// `false` when the wrapper was switched off, whatever the mode's table entry says.
    pub auto_enhance: bool,
    pub wrapper: PromptPreset,
}

/// Picks the mode for a reachable node set. First match wins:
///
/// 1. a batch node forces alteration with the wrapper disabled, ignoring every override;
/// 2. a photography node without any product node selects photography;
/// 3. a product node selects product;
/// 4. otherwise alteration.
///
/// An explicit `options.mode` replaces steps 2-4, and a disabled auto-enhance flag on the
/// call or on the deciding node empties the wrapper.
pub fn resolve(nodes: &[&Node], options: &CompileOptions) -> ResolvedMode {
    if nodes.iter().any(|n| n.kind == NodeKind::Batch) {
        return ResolvedMode {
            mode: GenerationMode::Alteration,
            photography_preset: None,
            auto_enhance: false,
            wrapper: PromptPreset::EMPTY,
        };
    }

    let photography = nodes.iter().find_map(|n| match &n.data {
        NodeData::Photography(data) => Some(data),
        _ => None,
    });
    let products: Vec<_> = nodes
        .iter()
        .filter_map(|n| match &n.data {
            NodeData::Product(data) => Some(data),
            _ => None,
        })
        .collect();

    let mode = options.mode.unwrap_or(if photography.is_some() && products.is_empty() {
        GenerationMode::Photography
    } else if !products.is_empty() {
        GenerationMode::Product
    } else {
        GenerationMode::Alteration
    });

    let (photography_preset, node_enhance) = match mode {
        GenerationMode::Photography => {
            let preset = options
                .photography_preset
                .or_else(|| photography.and_then(|p| PhotographyPreset::from_id(&p.preset)))
                .unwrap_or_default();
            (Some(preset), photography.is_none_or(|p| p.auto_enhance))
        }
        GenerationMode::Product => (
            None,
            products.iter().all(|p| p.auto_enhance != Some(false)),
        ),
        GenerationMode::Alteration => (None, true),
    };

    let auto_enhance = options.auto_enhance && node_enhance;
    let wrapper = if auto_enhance {
        PromptPreset::for_mode(mode, photography_preset.unwrap_or_default())
    } else {
        PromptPreset::EMPTY
    };

    ResolvedMode {
        mode,
        photography_preset,
        auto_enhance,
        wrapper,
    }
}
