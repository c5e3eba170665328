//! Tests for per-kind segment synthesis.
use promptgraph::catalog::PresetCatalog;
use promptgraph::compiler::segments::{self, synthesize};
use promptgraph::graph::*;
use promptgraph::variation::expand_variations;

fn empty() -> PresetCatalog {
    PresetCatalog::default()
}

#[test]
fn test_product_from_catalog_with_specs() {
    let data = ProductData {
        category: "Apparel & Bags".to_string(),
        product: "T-Shirt".to_string(),
        custom_specs: Some("  oversized fit ".to_string()),
        auto_enhance: None,
    };
    assert_eq!(
        segments::product(&data, PresetCatalog::builtin()),
        "cotton t-shirt with realistic fabric texture and natural draping, oversized fit"
    );
}

#[test]
fn test_product_fallback_without_catalog() {
    let data = ProductData {
        category: "Gadgets".to_string(),
        product: "Widget".to_string(),
        ..Default::default()
    };
    assert_eq!(segments::product(&data, &empty()), "Widget from Gadgets");
}

#[test]
fn test_scene_lookup_and_fallbacks() {
    let builtin = PresetCatalog::builtin();
    let mut data = SceneData {
        environment: "studio".to_string(),
        setting: "White Background".to_string(),
        custom_setting: Some("on a marble plinth".to_string()),
    };
    assert_eq!(
        segments::scene(&data, builtin),
        "clean white studio background, seamless backdrop"
    );

    data.setting = "moon base".to_string();
    assert_eq!(segments::scene(&data, builtin), "on a marble plinth");

    data.custom_setting = None;
    assert_eq!(segments::scene(&data, builtin), "studio setting");
}

#[test]
fn test_style_joins_resolved_parts_only() {
    let data = StyleData {
        style: "minimalist".to_string(),
        palette: "unknown".to_string(),
        design_movement: Some("Bauhaus".to_string()),
    };
    assert_eq!(
        segments::style(&data, PresetCatalog::builtin()),
        "minimalist aesthetic, clean and simple, less is more, \
         Bauhaus design influence, geometric and functional"
    );
    assert_eq!(segments::style(&data, &empty()), "");
}

#[test]
fn test_branding_phrases() {
    let mut data = BrandingData {
        text: "ACME".to_string(),
        placement: Placement::Corner,
        font_style: FontStyle::Minimal,
        custom_placement: None,
    };
    assert_eq!(
        segments::branding(&data),
        "displaying \"ACME\", placed in the corner, with minimal clean typography"
    );

    data.placement = Placement::Custom;
    data.custom_placement = Some("on the left sleeve".to_string());
    data.font_style = FontStyle::Decorative;
    assert_eq!(
        segments::branding(&data),
        "displaying \"ACME\", on the left sleeve, with decorative stylized font"
    );

    data.text = "   ".to_string();
    assert_eq!(segments::branding(&data), "");
}

#[test]
fn test_lighting_and_camera() {
    let builtin = PresetCatalog::builtin();
    let lighting = LightingData {
        light_type: "natural".to_string(),
        setting: "golden-hour".to_string(),
    };
    assert_eq!(
        segments::lighting(&lighting, builtin),
        "golden hour lighting, warm sunset glow"
    );
    assert_eq!(segments::lighting(&lighting, &empty()), "natural lighting");

    let camera = CameraData {
        angle: "front".to_string(),
        distance: "nowhere".to_string(),
        depth_of_field: "shallow".to_string(),
    };
    assert_eq!(
        segments::camera(&camera, builtin),
        "front view, straight-on perspective, \
         shallow depth of field, blurred background, bokeh effect"
    );
}

#[test]
fn test_image_reference_count() {
    let slot = |hosted: Option<&str>| UploadedImage {
        preview_url: "blob:x".to_string(),
        hosted_url: hosted.map(str::to_string),
        is_uploading: hosted.is_none(),
    };

    let mut data = ImageData {
        images: vec![slot(None)],
    };
    assert_eq!(segments::image(&data), "");

    data.images.push(slot(Some("https://cdn/1.png")));
    assert_eq!(segments::image(&data), "with 1 reference image");

    data.images.push(slot(Some("https://cdn/2.png")));
    assert_eq!(segments::image(&data), "with 2 reference images");
}

#[test]
fn test_human_non_default_attributes() {
    let data = HumanData {
        gender: Gender::Male,
        ethnicity: "Japanese".to_string(),
        age_range: "Middle Aged (40-55)".to_string(),
        body_type: "Athletic".to_string(),
        pose: "Sitting".to_string(),
        expression: "Smiling".to_string(),
        hair_style: "Short".to_string(),
        hair_color: "Black".to_string(),
        skin_tone: "light".to_string(),
        skin_imperfections: "Freckles".to_string(),
        custom_prompt: "wearing glasses".to_string(),
    };
    assert_eq!(
        segments::human(&data),
        "middle aged, japanese, male, athletic, person, with black short hair, \
         light skin tone, with freckles, smiling expression, in sitting pose, wearing glasses"
    );
}

#[test]
fn test_human_defaults_ignore_case() {
    let data = HumanData {
        body_type: "AVERAGE".to_string(),
        hair_style: "None".to_string(),
        skin_imperfections: "none".to_string(),
        expression: "neutral".to_string(),
        pose: "STANDING".to_string(),
        ..Default::default()
    };
    assert_eq!(segments::human(&data), "female, person");
}

#[test]
fn test_clothing_collapses_blank_fields() {
    let data = ClothingData {
        clothing_type: "Hoodie".to_string(),
        style: "".to_string(),
        color: "Navy".to_string(),
    };
    assert_eq!(segments::clothing(&data), "wearing Navy Hoodie");
    assert_eq!(segments::clothing(&ClothingData::default()), "");
}

#[test]
fn test_variation_block() {
    let data = |options: &[&str]| VariationData {
        variations: options.iter().map(|o| o.to_string()).collect(),
    };
    assert_eq!(segments::variation(&data(&[])), "");
    assert_eq!(segments::variation(&data(&["", "  "])), "");
    assert_eq!(segments::variation(&data(&["solo", " "])), "solo");
    assert_eq!(segments::variation(&data(&["a", "", "b"])), "{a|b}");
}

#[test]
fn test_variation_alternatives_cannot_break_the_block() {
    let data = |options: &[&str]| VariationData {
        variations: options.iter().map(|o| o.to_string()).collect(),
    };

    let piped = segments::variation(&data(&["red|crimson", "blue"]));
    assert_eq!(piped, "{red/crimson|blue}");
    assert_eq!(expand_variations(&piped, 2), vec!["red/crimson", "blue"]);

    let braced = segments::variation(&data(&["a {b} c", "d"]));
    assert_eq!(braced, "{a b c|d}");
    assert_eq!(expand_variations(&braced, 2), vec!["a b c", "d"]);

    assert_eq!(segments::variation(&data(&["{}", "|", "ok"])), "{/|ok}");
}

#[test]
fn test_plant_and_texture_precedence() {
    let builtin = PresetCatalog::builtin();
    let plant = NodeData::Plant(PlantData {
        plant_type: "fern".to_string(),
        custom_plant: None,
    });
    assert_eq!(synthesize(&plant, builtin), "lush green fern plant");
    assert_eq!(synthesize(&plant, &empty()), "fern");

    let texture = NodeData::Texture(TextureData {
        texture_type: "marble".to_string(),
        custom_texture: Some("cracked terracotta".to_string()),
    });
    assert_eq!(synthesize(&texture, builtin), "cracked terracotta");
}

#[test]
fn test_pose_parts() {
    let mut data = PoseData {
        style_mood: "relaxed".to_string(),
        body_pose: "".to_string(),
        custom_pose: None,
    };
    assert_eq!(segments::pose(&data), "relaxed body language");

    data.body_pose = "leaning".to_string();
    assert_eq!(segments::pose(&data), "relaxed body language, leaning pose");

    data.custom_pose = Some("mid-jump".to_string());
    assert_eq!(segments::pose(&data), "mid-jump");
}

#[test]
fn test_background_source_precedence() {
    let mut data = BackgroundData {
        style: "clean".to_string(),
        solid_color: Some("#1E90FF".to_string()),
        gradient_colors: Some(vec!["#000000".to_string(), "#FFFFFF".to_string()]),
        environment: Some("forest".to_string()),
        ..Default::default()
    };
    assert_eq!(segments::background(&data), "solid #1E90FF background");

    data.solid_color = Some(WHITE.to_string());
    assert_eq!(
        segments::background(&data),
        "gradient background from #000000 to #FFFFFF"
    );

    data.gradient_colors = Some(vec!["#000000".to_string()]);
    assert_eq!(segments::background(&data), "forest background");

    data.environment = None;
    assert_eq!(segments::background(&data), "clean background");
}

#[test]
fn test_background_modifiers() {
    let data = BackgroundData {
        environment: Some("city street".to_string()),
        time_of_day: Some("dusk".to_string()),
        mood: Some("moody".to_string()),
        blur: Some(55.0),
        custom_prompt: Some("wet pavement".to_string()),
        ..Default::default()
    };
    assert_eq!(
        segments::background(&data),
        "city street background, at dusk, moody atmosphere, \
         moderately blurred background, wet pavement"
    );

    let heavy = BackgroundData {
        blur: Some(90.0),
        ..Default::default()
    };
    assert_eq!(segments::background(&heavy), "heavily blurred background");

    let none = BackgroundData {
        blur: Some(0.0),
        ..Default::default()
    };
    assert_eq!(segments::background(&none), "");
}

#[test]
fn test_background_blur_boundaries() {
    let blurred = |blur: f64| {
        segments::background(&BackgroundData {
            blur: Some(blur),
            ..Default::default()
        })
    };
    assert_eq!(blurred(70.5), "heavily blurred background");
    assert_eq!(blurred(70.0), "moderately blurred background");
    assert_eq!(blurred(40.5), "moderately blurred background");
    assert_eq!(blurred(40.0), "subtly blurred background");
    assert_eq!(blurred(10.0), "subtly blurred background");
    assert_eq!(blurred(-5.0), "");
}

#[test]
fn test_parameter_only_kinds_are_silent() {
    let catalog = PresetCatalog::builtin();
    assert_eq!(
        synthesize(&NodeData::default_for(NodeKind::Quality), catalog),
        ""
    );
    assert_eq!(
        synthesize(&NodeData::default_for(NodeKind::Output), catalog),
        ""
    );
}

#[test]
fn test_editor_defaults_synthesize() {
    let catalog = PresetCatalog::builtin();
    for kind in NodeKind::ALL {
        let text = synthesize(&NodeData::default_for(kind), catalog);
        assert_eq!(text, text.trim(), "untrimmed segment for {}", kind);
    }
    assert_eq!(
        synthesize(&NodeData::default_for(NodeKind::Lighting), catalog),
        "soft box studio lighting, even and diffused"
    );
}
