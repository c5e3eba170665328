//! Per-kind text synthesis. Each function is pure, never fails, and returns an empty string
//! when the node has nothing to contribute.

use crate::catalog::PresetCatalog;
use crate::graph::payload::*;
use crate::graph::NodeData;
use itertools::Itertools;

/// Dispatches a payload to the synthesizer for its kind.
pub fn synthesize(data: &NodeData, catalog: &PresetCatalog) -> String {
    match data {
        NodeData::Product(d) => product(d, catalog),
        NodeData::Scene(d) => scene(d, catalog),
        NodeData::Style(d) => style(d, catalog),
        NodeData::Branding(d) => branding(d),
        NodeData::Lighting(d) => lighting(d, catalog),
        NodeData::Camera(d) => camera(d, catalog),
        NodeData::Custom(d) => d.prompt_text.trim().to_string(),
        NodeData::Image(d) => image(d),
        NodeData::Human(d) => human(d),
        NodeData::Clothing(d) => clothing(d),
        NodeData::Variation(d) => variation(d),
        NodeData::Plant(d) => {
            custom_or_preset(&d.custom_plant, &d.plant_type, catalog.plant(&d.plant_type))
        }
        NodeData::Texture(d) => {
            custom_or_preset(&d.custom_texture, &d.texture_type, catalog.texture(&d.texture_type))
        }
        NodeData::Pose(d) => pose(d),
        NodeData::Background(d) => background(d),
        NodeData::Photography(d) => non_blank(&d.custom_prompt).unwrap_or_default().to_string(),
        NodeData::Refine(d) => d.instructions.trim().to_string(),
        NodeData::Batch(d) => non_blank(&d.prompt).unwrap_or_default().to_string(),
        // Generation parameters only.
        NodeData::Quality(_) | NodeData::Output(_) => String::new(),
    }
}

pub fn product(data: &ProductData, catalog: &PresetCatalog) -> String {
    let base = match catalog.product(&data.category, &data.product) {
        Some(prompt) => prompt.to_string(),
        None => match (data.product.trim(), data.category.trim()) {
            ("", category) => category.to_string(),
            (product, "") => product.to_string(),
            (product, category) => format!("{} from {}", product, category),
        },
    };
    commas([Some(base.as_str()), non_blank(&data.custom_specs)])
}

pub fn scene(data: &SceneData, catalog: &PresetCatalog) -> String {
    if let Some(prompt) = catalog.scene(&data.environment, &data.setting) {
        return prompt.to_string();
    }
    match non_blank(&data.custom_setting) {
        Some(custom) => custom.to_string(),
        None => format!("{} setting", data.environment.trim()),
    }
}

pub fn style(data: &StyleData, catalog: &PresetCatalog) -> String {
    commas([
        catalog.style(&data.style),
        catalog.palette(&data.palette),
        data.design_movement
            .as_deref()
            .and_then(|m| catalog.design_movement(m)),
    ])
}

pub fn branding(data: &BrandingData) -> String {
    let text = data.text.trim();
    if text.is_empty() {
        return String::new();
    }

    let placement = match data.placement {
        Placement::Center => Some("centered on the product"),
        Placement::Corner => Some("placed in the corner"),
        Placement::FullCoverage => Some("covering the full surface"),
        Placement::Custom => non_blank(&data.custom_placement),
        Placement::Unknown => None,
    };
    let font = match data.font_style {
        FontStyle::Bold => Some("with bold typography"),
        FontStyle::Minimal => Some("with minimal clean typography"),
        FontStyle::Decorative => Some("with decorative stylized font"),
        FontStyle::Modern => Some("with modern contemporary font"),
        FontStyle::Unknown => None,
    };

    let directive = format!("displaying \"{}\"", text);
    commas([Some(directive.as_str()), placement, font])
}

pub fn lighting(data: &LightingData, catalog: &PresetCatalog) -> String {
    match catalog.lighting(&data.light_type, &data.setting) {
        Some(prompt) => prompt.to_string(),
        None => format!("{} lighting", data.light_type.trim()),
    }
}

pub fn camera(data: &CameraData, catalog: &PresetCatalog) -> String {
    commas([
        catalog.camera_angle(&data.angle),
        catalog.camera_distance(&data.distance),
        catalog.depth_of_field(&data.depth_of_field),
    ])
}

pub fn image(data: &ImageData) -> String {
    match data.hosted_urls().count() {
        0 => String::new(),
        1 => "with 1 reference image".to_string(),
        n => format!("with {} reference images", n),
    }
}

/// Describes a person, leaving out attributes that sit at their editor default.
pub fn human(data: &HumanData) -> String {
    let mut parts: Vec<String> = Vec::new();

    // "Young Adult (20-29)" -> "young adult"
    let age = data.age_range.split('(').next().unwrap_or_default().trim();
    if !age.is_empty() {
        parts.push(age.to_lowercase());
    }
    if !data.ethnicity.trim().is_empty() {
        parts.push(data.ethnicity.trim().to_lowercase());
    }
    parts.push(
        match data.gender {
            Gender::Male => "male",
            Gender::Female => "female",
        }
        .to_string(),
    );
    if let Some(body) = unless_default(&data.body_type, "average") {
        parts.push(body.to_lowercase());
    }
    parts.push("person".to_string());

    if let Some(style) = unless_default(&data.hair_style, "none") {
        let hair = words([data.hair_color.as_str(), style]).to_lowercase();
        parts.push(format!("with {} hair", hair));
    }
    if !data.skin_tone.trim().is_empty() {
        parts.push(format!("{} skin tone", data.skin_tone.trim()));
    }
    if let Some(marks) = unless_default(&data.skin_imperfections, "none") {
        parts.push(format!("with {}", marks.to_lowercase()));
    }
    if let Some(expression) = unless_default(&data.expression, "neutral") {
        parts.push(format!("{} expression", expression.to_lowercase()));
    }
    if let Some(pose) = unless_default(&data.pose, "standing") {
        parts.push(format!("in {} pose", pose.to_lowercase()));
    }
    if !data.custom_prompt.trim().is_empty() {
        parts.push(data.custom_prompt.trim().to_string());
    }

    parts.join(", ")
}

pub fn clothing(data: &ClothingData) -> String {
    let outfit = words([
        data.color.as_str(),
        data.style.as_str(),
        data.clothing_type.as_str(),
    ]);
    if outfit.is_empty() {
        String::new()
    } else {
        format!("wearing {}", outfit)
    }
}

/// Two or more alternatives become a `{a|b|...}` block that is expanded per batch item
/// later on. The block must reach the final prompt untouched.
pub fn variation(data: &VariationData) -> String {
    let alternatives: Vec<String> = data
        .variations
        .iter()
        .map(|v| block_safe(v))
        .filter(|v| !v.is_empty())
        .collect();
    match alternatives.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        many => format!("{{{}}}", many.join("|")),
    }
}

/// Braces are dropped and `|` becomes `/` so one alternative stays one alternative.
fn block_safe(alternative: &str) -> String {
    alternative
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| if c == '|' { '/' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn pose(data: &PoseData) -> String {
    if let Some(custom) = non_blank(&data.custom_pose) {
        return custom.to_string();
    }
    let mood = data.style_mood.trim();
    let body = data.body_pose.trim();
    let mood = (!mood.is_empty()).then(|| format!("{} body language", mood));
    let body = (!body.is_empty()).then(|| format!("{} pose", body));
    commas([mood.as_deref(), body.as_deref()])
}

pub fn background(data: &BackgroundData) -> String {
    let solid = non_blank(&data.solid_color).filter(|c| !is_white(c));
    let gradient: Vec<&str> = data
        .gradient_colors
        .iter()
        .flatten()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    let source = if let Some(color) = solid {
        Some(format!("solid {} background", color))
    } else if gradient.len() >= 2 {
        Some(format!("gradient background from {}", gradient.join(" to ")))
    } else if let Some(environment) = non_blank(&data.environment) {
        Some(format!("{} background", environment))
    } else if !data.style.trim().is_empty() {
        Some(format!("{} background", data.style.trim()))
    } else {
        None
    };

    let time_of_day = non_blank(&data.time_of_day).map(|t| format!("at {}", t));
    let mood = non_blank(&data.mood).map(|m| format!("{} atmosphere", m));
    let blur = data.blur.filter(|b| *b > 0.0).map(|b| {
        if b > 70.0 {
            "heavily blurred background"
        } else if b > 40.0 {
            "moderately blurred background"
        } else {
            "subtly blurred background"
        }
    });

    commas([
        source.as_deref(),
        time_of_day.as_deref(),
        mood.as_deref(),
        blur,
        non_blank(&data.custom_prompt),
    ])
}

fn custom_or_preset(custom: &Option<String>, id: &str, preset: Option<&str>) -> String {
    non_blank(custom)
        .or(preset)
        .unwrap_or(id.trim())
        .to_string()
}

fn is_white(color: &str) -> bool {
    ["#ffffff", "#fff", "white"]
        .iter()
        .any(|w| color.eq_ignore_ascii_case(w))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// The trimmed value, unless it is blank or equals `default` ignoring case.
fn unless_default<'a>(value: &'a str, default: &str) -> Option<&'a str> {
    let value = value.trim();
    (!value.is_empty() && !value.eq_ignore_ascii_case(default)).then_some(value)
}

fn commas<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .join(", ")
}

fn words<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .join(" ")
}
