//! Typed node payloads.
//!
//! Every node carries exactly one of these structures, selected by its `type` tag. Field
//! names follow the editor's camelCase JSON; fields the editor may omit default to empty.

use super::NodeKind;
use crate::params::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// The payload of a node, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeData {
    Product(ProductData),
    Scene(SceneData),
    Style(StyleData),
    Branding(BrandingData),
    Lighting(LightingData),
    Camera(CameraData),
    Quality(QualityData),
    Output(OutputData),
    Refine(RefineData),
    Custom(CustomData),
    Image(ImageData),
    Human(HumanData),
    Clothing(ClothingData),
    Variation(VariationData),
    Plant(PlantData),
    Texture(TextureData),
    Pose(PoseData),
    Background(BackgroundData),
    Photography(PhotographyData),
    Batch(BatchData),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Product(_) => NodeKind::Product,
            NodeData::Scene(_) => NodeKind::Scene,
            NodeData::Style(_) => NodeKind::Style,
            NodeData::Branding(_) => NodeKind::Branding,
            NodeData::Lighting(_) => NodeKind::Lighting,
            NodeData::Camera(_) => NodeKind::Camera,
            NodeData::Quality(_) => NodeKind::Quality,
            NodeData::Output(_) => NodeKind::Output,
            NodeData::Refine(_) => NodeKind::Refine,
            NodeData::Custom(_) => NodeKind::Custom,
            NodeData::Image(_) => NodeKind::Image,
            NodeData::Human(_) => NodeKind::Human,
            NodeData::Clothing(_) => NodeKind::Clothing,
            NodeData::Variation(_) => NodeKind::Variation,
            NodeData::Plant(_) => NodeKind::Plant,
            NodeData::Texture(_) => NodeKind::Texture,
            NodeData::Pose(_) => NodeKind::Pose,
            NodeData::Background(_) => NodeKind::Background,
            NodeData::Photography(_) => NodeKind::Photography,
            NodeData::Batch(_) => NodeKind::Batch,
        }
    }

    /// The payload a freshly dropped node of `kind` starts with in the editor.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Product => NodeData::Product(ProductData {
                category: "Apparel & Bags".to_string(),
                product: "T-Shirt".to_string(),
                ..Default::default()
            }),
            NodeKind::Scene => NodeData::Scene(SceneData {
                environment: "studio".to_string(),
                setting: "white background".to_string(),
                custom_setting: None,
            }),
            NodeKind::Style => NodeData::Style(StyleData {
                style: "Minimalist".to_string(),
                palette: "neutral".to_string(),
                design_movement: None,
            }),
            NodeKind::Branding => NodeData::Branding(BrandingData::default()),
            NodeKind::Lighting => NodeData::Lighting(LightingData {
                light_type: "studio".to_string(),
                setting: "soft box".to_string(),
            }),
            NodeKind::Camera => NodeData::Camera(CameraData {
                angle: "front".to_string(),
                distance: "medium".to_string(),
                depth_of_field: "medium".to_string(),
            }),
            NodeKind::Quality => NodeData::Quality(QualityData {
                model: DEFAULT_MODEL.to_string(),
                models: vec![DEFAULT_MODEL.to_string()],
                ..Default::default()
            }),
            NodeKind::Output => NodeData::Output(OutputData::default()),
            NodeKind::Refine => NodeData::Refine(RefineData::default()),
            NodeKind::Custom => NodeData::Custom(CustomData::default()),
            NodeKind::Image => NodeData::Image(ImageData::default()),
            NodeKind::Human => NodeData::Human(HumanData {
                gender: Gender::Female,
                ethnicity: "Caucasian".to_string(),
                age_range: "Young Adult (20-29)".to_string(),
                body_type: "Average".to_string(),
                pose: "Standing".to_string(),
                expression: "Neutral".to_string(),
                hair_style: "Long".to_string(),
                hair_color: "Brown".to_string(),
                skin_tone: "medium".to_string(),
                skin_imperfections: "None".to_string(),
                custom_prompt: String::new(),
            }),
            NodeKind::Clothing => NodeData::Clothing(ClothingData {
                clothing_type: "T-Shirt".to_string(),
                style: "Casual".to_string(),
                color: "White".to_string(),
            }),
            NodeKind::Variation => NodeData::Variation(VariationData {
                variations: vec!["option 1".to_string(), "option 2".to_string()],
            }),
            NodeKind::Plant => NodeData::Plant(PlantData {
                plant_type: "monstera".to_string(),
                custom_plant: None,
            }),
            NodeKind::Texture => NodeData::Texture(TextureData {
                texture_type: "wood".to_string(),
                custom_texture: None,
            }),
            NodeKind::Pose => NodeData::Pose(PoseData {
                style_mood: "confident".to_string(),
                body_pose: "standing".to_string(),
                custom_pose: None,
            }),
            NodeKind::Background => NodeData::Background(BackgroundData {
                style: "clean".to_string(),
                solid_color: Some(WHITE.to_string()),
                ..Default::default()
            }),
            NodeKind::Photography => NodeData::Photography(PhotographyData::default()),
            NodeKind::Batch => NodeData::Batch(BatchData::default()),
        }
    }
}

/// The background colour the editor starts with; it never counts as a solid-colour choice.
pub const WHITE: &str = "#FFFFFF";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductData {
    pub category: String,
    pub product: String,
    pub custom_specs: Option<String>,
    pub auto_enhance: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneData {
    pub environment: String,
    pub setting: String,
    pub custom_setting: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleData {
    pub style: String,
    pub palette: String,
    pub design_movement: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Center,
    Corner,
    FullCoverage,
    Custom,
    /// Any placement the editor sends that is not listed above. Omitted from the prompt.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Bold,
    Minimal,
    Decorative,
    #[default]
    Modern,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandingData {
    pub text: String,
    pub placement: Placement,
    pub font_style: FontStyle,
    pub custom_placement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightingData {
    pub light_type: String,
    pub setting: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraData {
    pub angle: String,
    pub distance: String,
    pub depth_of_field: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "2:3")]
    Photo,
    #[serde(rename = "3:2")]
    Landscape,
    #[serde(rename = "21:9")]
    Ultrawide,
    #[serde(rename = "4:5")]
    SocialPortrait,
    #[serde(rename = "5:4")]
    SocialLandscape,
    #[serde(rename = "auto")]
    Auto,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Photo => "2:3",
            AspectRatio::Landscape => "3:2",
            AspectRatio::Ultrawide => "21:9",
            AspectRatio::SocialPortrait => "4:5",
            AspectRatio::SocialLandscape => "5:4",
            AspectRatio::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Basic,
    High,
}

impl QualityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Basic => "basic",
            QualityTier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::OneK => "1K",
            Resolution::TwoK => "2K",
            Resolution::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityData {
    pub model: String,
    pub models: Vec<String>,
    pub aspect_ratio: AspectRatio,
    pub quality: QualityTier,
    pub resolution: Option<Resolution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputData {
    pub is_generating: bool,
    pub batch_count: u32,
    pub last_prompt: Option<String>,
    pub last_task_id: Option<String>,
}

impl Default for OutputData {
    fn default() -> Self {
        Self {
            is_generating: false,
            batch_count: 1,
            last_prompt: None,
            last_task_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefineData {
    pub original_image_url: String,
    pub instructions: String,
    pub is_refining: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomData {
    pub prompt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadedImage {
    pub preview_url: String,
    pub hosted_url: Option<String>,
    pub is_uploading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub images: Vec<UploadedImage>,
}

impl ImageData {
    /// Hosted URLs of the slots that finished uploading, in slot order.
    pub fn hosted_urls(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .filter_map(|img| img.hosted_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    /// Anything other than `male` reads as `female`.
    #[default]
    #[serde(other)]
    Female,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HumanData {
    pub gender: Gender,
    pub ethnicity: String,
    pub age_range: String,
    pub body_type: String,
    pub pose: String,
    pub expression: String,
    pub hair_style: String,
    pub hair_color: String,
    pub skin_tone: String,
    pub skin_imperfections: String,
    pub custom_prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClothingData {
    pub clothing_type: String,
    pub style: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationData {
    pub variations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlantData {
    pub plant_type: String,
    pub custom_plant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureData {
    pub texture_type: String,
    pub custom_texture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoseData {
    pub style_mood: String,
    pub body_pose: String,
    pub custom_pose: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundData {
    pub style: String,
    pub solid_color: Option<String>,
    pub gradient_colors: Option<Vec<String>>,
    pub environment: Option<String>,
    pub time_of_day: Option<String>,
    pub mood: Option<String>,
    /// Blur intensity in the range 0..=100.
    pub blur: Option<f64>,
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotographyData {
    pub preset: String,
    pub auto_enhance: bool,
    pub custom_prompt: Option<String>,
}

impl Default for PhotographyData {
    fn default() -> Self {
        Self {
            preset: "none".to_string(),
            auto_enhance: true,
            custom_prompt: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchImageStatus {
    #[default]
    Pending,
    Uploading,
    Processing,
    Complete,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchImage {
    pub preview_url: String,
    pub hosted_url: Option<String>,
    pub status: BatchImageStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchData {
    pub images: Vec<BatchImage>,
    pub prompt: Option<String>,
}
