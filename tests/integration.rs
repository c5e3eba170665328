//! Integration tests for promptgraph
//!
//! End-to-end tests that load an exported canvas, compile it and turn the result into
//! generation requests.
//!
mod common;
use common::*;
use promptgraph::prelude::*;

const CANVAS_JSON: &str = r##"{
  "nodes": [
    {
      "id": "product-1",
      "type": "product",
      "position": { "x": 0, "y": 0 },
      "data": { "type": "product", "category": "Apparel & Bags", "product": "T-Shirt" }
    },
    {
      "id": "branding-1",
      "type": "branding",
      "position": { "x": 0, "y": 120 },
      "data": { "type": "branding", "text": "SUMMER", "placement": "full-coverage", "fontStyle": "bold" }
    },
    {
      "id": "variation-1",
      "type": "variation",
      "position": { "x": 0, "y": 240 },
      "data": { "type": "variation", "variations": ["red", "green"] }
    },
    {
      "id": "images-1",
      "type": "image",
      "position": { "x": 0, "y": 360 },
      "data": {
        "type": "image",
        "images": [
          { "previewUrl": "blob:a", "hostedUrl": "https://img.example/a.png" },
          { "previewUrl": "blob:b", "isUploading": true }
        ]
      }
    },
    {
      "id": "quality-1",
      "type": "quality",
      "position": { "x": 300, "y": 0 },
      "data": {
        "type": "quality",
        "model": "nano-banana-pro",
        "models": ["nano-banana-pro", "seedream/4.5-text-to-image"],
        "aspectRatio": "4:5",
        "quality": "high",
        "resolution": "2K"
      }
    },
    {
      "id": "output-1",
      "type": "output",
      "position": { "x": 600, "y": 0 },
      "data": { "type": "output", "batchCount": 2 }
    },
    {
      "id": "stray",
      "type": "custom",
      "position": { "x": 900, "y": 900 },
      "data": { "type": "custom", "promptText": "never used" }
    }
  ],
  "edges": [
    { "id": "e1", "source": "product-1", "target": "branding-1" },
    { "id": "e2", "source": "branding-1", "target": "variation-1" },
    { "id": "e3", "source": "variation-1", "target": "output-1" },
    { "id": "e4", "source": "images-1", "target": "output-1", "sourceHandle": "out", "targetHandle": "in" },
    { "id": "e5", "source": "quality-1", "target": "output-1" }
  ]
}"##;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use promptgraph::graph::{AspectRatio, QualityTier, Resolution};
    use promptgraph::variation::{missing_protected_phrases, variation_blocks};

    #[test]
    fn test_canvas_compilation() {
        let graph = Graph::from_json(CANVAS_JSON).expect("Failed to load canvas");
        let compiled = compile(&graph, &CompileOptions::default());

        let kinds: Vec<NodeKind> = compiled.segments.iter().map(|s| s.node_type).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Image,
                NodeKind::Product,
                NodeKind::Branding,
                NodeKind::Variation
            ]
        );
        assert!(compiled.prompt.contains(
            "displaying \"SUMMER\", covering the full surface, with bold typography"
        ));
        assert!(compiled.prompt.contains("with 1 reference image"));
        assert!(compiled.prompt.contains("{red|green}"));
        assert!(!compiled.prompt.contains("never used"));
        assert!(compiled.warnings.is_empty(), "{:?}", compiled.warnings);
    }

    #[test]
    fn test_graph_json_roundtrip_keeps_result() {
        let graph = Graph::from_json(CANVAS_JSON).expect("Failed to load canvas");
        let reloaded = Graph::from_json(&graph.to_json().expect("Failed to export"))
            .expect("Failed to reload canvas");

        assert_eq!(graph, reloaded);
        assert_eq!(
            compile(&graph, &CompileOptions::default()),
            compile(&reloaded, &CompileOptions::default())
        );
    }

    #[test]
    fn test_graph_json_errors() {
        let mismatch = r#"{"nodes":[{"id":"a","type":"scene","data":{"type":"product"}}],"edges":[]}"#;
        assert!(matches!(
            Graph::from_json(mismatch),
            Err(GraphError::KindMismatch { .. })
        ));

        let duplicate = r#"{"nodes":[
            {"id":"a","type":"custom","data":{"type":"custom"}},
            {"id":"a","type":"output","data":{"type":"output"}}
        ]}"#;
        assert!(matches!(
            Graph::from_json(duplicate),
            Err(GraphError::DuplicateNodeId(id)) if id == "a"
        ));

        let unknown = r#"{"nodes":[{"id":"a","type":"hologram","data":{"type":"hologram"}}]}"#;
        assert!(matches!(
            Graph::from_json(unknown),
            Err(GraphError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_unrecognised_choices_degrade() {
        let canvas = r#"{"nodes":[
            {"id":"b","type":"branding","data":{"type":"branding","text":"SALE","placement":"diagonal","fontStyle":"graffiti"}},
            {"id":"h","type":"human","data":{"type":"human","gender":"nonbinary"}},
            {"id":"out","type":"output","data":{"type":"output"}}
        ],"edges":[
            {"id":"e1","source":"b","target":"out"},
            {"id":"e2","source":"h","target":"out"}
        ]}"#;
        let graph = Graph::from_json(canvas).expect("Failed to load canvas");
        let compiled = compile(&graph, &CompileOptions::default());

        let segment = |kind: NodeKind| {
            compiled
                .segments
                .iter()
                .find(|s| s.node_type == kind)
                .map(|s| s.content.clone())
                .expect("Failed to find segment")
        };
        assert_eq!(segment(NodeKind::Branding), "displaying \"SALE\"");
        assert!(segment(NodeKind::Human).contains("female"));
    }

    #[test]
    fn test_generation_settings_from_canvas() {
        let graph = Graph::from_json(CANVAS_JSON).expect("Failed to load canvas");
        let settings = generation_settings(&graph);

        assert_eq!(settings.aspect_ratio, AspectRatio::SocialPortrait);
        assert_eq!(settings.quality, QualityTier::High);
        assert_eq!(settings.resolution, Resolution::TwoK);
        assert_eq!(
            settings.models,
            vec!["nano-banana-pro", "seedream/4.5-text-to-image"]
        );
        assert_eq!(settings.model(), "nano-banana-pro");
        assert_eq!(
            uploaded_image_urls(&graph),
            vec!["https://img.example/a.png".to_string()]
        );
    }

    #[test]
    fn test_generation_settings_defaults() {
        let unconnected = graph(
            vec![node("q", NodeKind::Quality), output("out")],
            &[],
        );
        assert_eq!(
            generation_settings(&unconnected),
            GenerationSettings::default()
        );
        assert_eq!(generation_settings(&Graph::default()).model(), "seedream/4.5-text-to-image");
        assert!(uploaded_image_urls(&Graph::default()).is_empty());
    }

    #[test]
    fn test_image_urls_follow_node_order() {
        let graph = graph(
            vec![
                image("img-b", &["https://x/b1", "https://x/b2"]),
                image("img-a", &["https://x/a1"]),
                output("out"),
            ],
            &[("img-a", "out"), ("img-b", "out")],
        );
        assert_eq!(
            uploaded_image_urls(&graph),
            vec!["https://x/b1", "https://x/b2", "https://x/a1"]
        );
    }

    #[test]
    fn test_requests_for_canvas() {
        let graph = Graph::from_json(CANVAS_JSON).expect("Failed to load canvas");
        let compiled = compile(&graph, &CompileOptions::default());
        let settings = generation_settings(&graph);
        let images = uploaded_image_urls(&graph);

        let prompts = expand_variations(&compiled.prompt, 2);
        assert!(prompts[0].contains("red") && !prompts[0].contains("{"));
        assert!(prompts[1].contains("green"));

        // 4:5 is only valid for nano-banana-pro.
        let nano = GenerationRequest::build("nano-banana-pro", &prompts[0], &settings, &images)
            .expect("Failed to build request");
        assert_eq!(nano.input["resolution"], "2K");
        assert_eq!(nano.input["image_input"][0], "https://img.example/a.png");
        assert!(!nano.input.contains_key("quality"));

        let err = GenerationRequest::build_all(&prompts[0], &settings, &images)
            .expect_err("Seedream should reject 4:5");
        assert_eq!(
            err,
            RequestError::InvalidAspectRatio {
                model: "seedream/4.5-text-to-image".to_string(),
                aspect_ratio: "4:5".to_string(),
            }
        );
    }

    #[test]
    fn test_request_validation() {
        let settings = GenerationSettings::default();

        assert_eq!(
            GenerationRequest::build("z-image", "  ", &settings, &[]),
            Err(RequestError::EmptyPrompt)
        );
        assert!(matches!(
            GenerationRequest::build("z-image", &"x".repeat(1001), &settings, &[]),
            Err(RequestError::PromptTooLong { limit: 1000, actual: 1001, .. })
        ));
        assert_eq!(
            GenerationRequest::build("seedream/4.5-edit", "edit this", &settings, &[]),
            Err(RequestError::MissingImages("seedream/4.5-edit".to_string()))
        );

        let flux_settings = GenerationSettings {
            aspect_ratio: promptgraph::graph::AspectRatio::Ultrawide,
            ..GenerationSettings::default()
        };
        assert!(matches!(
            GenerationRequest::build("flux-2/pro-text-to-image", "a cat", &flux_settings, &[]),
            Err(RequestError::InvalidAspectRatio { .. })
        ));
    }

    #[test]
    fn test_request_payload_shape() {
        let settings = GenerationSettings::default();
        let request = GenerationRequest::build("no-such-model", "a cat", &settings, &[])
            .expect("Failed to build request");

        assert_eq!(request.model, "seedream/4.5-text-to-image");
        assert_eq!(
            request.to_json(),
            serde_json::json!({
                "model": "seedream/4.5-text-to-image",
                "input": { "prompt": "a cat", "aspect_ratio": "1:1", "quality": "basic" }
            })
        );

        let edit = GenerationRequest::build(
            "flux-2/pro-image-to-image",
            "make it blue",
            &settings,
            &["https://x/1.png".to_string()],
        )
        .expect("Failed to build request");
        assert_eq!(edit.input["input_urls"], serde_json::json!(["https://x/1.png"]));
        assert_eq!(edit.input["resolution"], "1K");
    }

    #[test]
    fn test_expand_variations_lockstep() {
        let prompts = expand_variations("a {red|blue} {cat|dog|fox}", 4);
        assert_eq!(
            prompts,
            vec!["a red cat", "a blue dog", "a red fox", "a blue cat"]
        );
    }

    #[test]
    fn test_expand_variations_edges() {
        assert_eq!(expand_variations("plain prompt", 3), vec!["plain prompt"; 3]);
        assert!(expand_variations("a {x|y}", 0).is_empty());
        assert_eq!(expand_variations("a { | } b", 2), vec!["a  b", "a  b"]);
        assert_eq!(expand_variations("a {solo} b", 1), vec!["a solo b"]);
    }

    #[test]
    fn test_variation_blocks_need_alternatives() {
        assert_eq!(
            variation_blocks("{red|blue} car {single} and {a|b|c}"),
            vec!["{red|blue}", "{a|b|c}"]
        );
    }

    #[test]
    fn test_restore_protected_phrases() {
        let original = "a {red|blue} car, with 2 reference images";

        assert_eq!(
            restore_protected_phrases(original, "a sleek sports car"),
            "a sleek sports car, {red|blue}, with 2 reference images"
        );
        assert_eq!(
            restore_protected_phrases(original, "a {red|blue} car With 2 Reference Images"),
            "a {red|blue} car With 2 Reference Images"
        );
        assert_eq!(
            missing_protected_phrases(original, "{red|blue}"),
            vec!["with 2 reference images"]
        );
    }

    #[test]
    fn test_builtin_catalog_lookups() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(
            catalog.product("Apparel & Bags", "T-Shirt"),
            Some(TSHIRT_PROMPT)
        );
        assert_eq!(catalog.product("Apparel & Bags", "t-shirt"), None);
        assert_eq!(
            catalog.scene("studio", "white-bg"),
            catalog.scene("studio", "WHITE BACKGROUND")
        );
        assert_eq!(catalog.palette(""), None);
        assert!(catalog.lighting("nonexistent", "soft-box").is_none());
    }

    #[test]
    fn test_catalog_json_errors() {
        assert!(PresetCatalog::from_json("{}")
            .expect("Failed to parse empty catalog")
            .styles
            .is_empty());
        assert!(matches!(
            PresetCatalog::from_json("[1, 2"),
            Err(CatalogError::JsonParseError(_))
        ));
    }
}
