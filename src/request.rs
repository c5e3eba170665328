//! Turns a compiled prompt and its generation settings into the job payload the image
//! generation API expects. Pure: nothing here talks to the network.

use crate::error::RequestError;
use crate::params::{DEFAULT_MODEL, GenerationSettings};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

const SEEDREAM_RATIOS: &[&str] = &["1:1", "4:3", "3:4", "16:9", "9:16", "2:3", "3:2", "21:9"];
const FLUX_RATIOS: &[&str] = &["1:1", "4:3", "3:4", "16:9", "9:16", "3:2", "2:3", "auto"];

/// What a model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelProfile {
    pub name: &'static str,
    pub max_prompt_length: usize,
    pub valid_ratios: &'static [&'static str],
    pub supports_quality: bool,
    pub supports_resolution: bool,
    pub supports_images: bool,
    pub requires_images: bool,
    /// Input field the reference image URLs go into.
    pub image_url_field: &'static str,
}

pub const MODELS: &[ModelProfile] = &[
    ModelProfile {
        name: DEFAULT_MODEL,
        max_prompt_length: 3000,
        valid_ratios: SEEDREAM_RATIOS,
        supports_quality: true,
        supports_resolution: false,
        supports_images: false,
        requires_images: false,
        image_url_field: "image_urls",
    },
    ModelProfile {
        name: "seedream/4.5-edit",
        max_prompt_length: 3000,
        valid_ratios: SEEDREAM_RATIOS,
        supports_quality: true,
        supports_resolution: false,
        supports_images: true,
        requires_images: true,
        image_url_field: "image_urls",
    },
    ModelProfile {
        name: "z-image",
        max_prompt_length: 1000,
        valid_ratios: &["1:1", "4:3", "3:4", "16:9", "9:16"],
        supports_quality: false,
        supports_resolution: false,
        supports_images: false,
        requires_images: false,
        image_url_field: "image_urls",
    },
    ModelProfile {
        name: "flux-2/pro-text-to-image",
        max_prompt_length: 5000,
        valid_ratios: FLUX_RATIOS,
        supports_quality: false,
        supports_resolution: true,
        supports_images: false,
        requires_images: false,
        image_url_field: "input_urls",
    },
    ModelProfile {
        name: "flux-2/pro-image-to-image",
        max_prompt_length: 5000,
        valid_ratios: FLUX_RATIOS,
        supports_quality: false,
        supports_resolution: true,
        supports_images: true,
        requires_images: true,
        image_url_field: "input_urls",
    },
    ModelProfile {
        name: "flux-2/flex-text-to-image",
        max_prompt_length: 5000,
        valid_ratios: FLUX_RATIOS,
        supports_quality: false,
        supports_resolution: true,
        supports_images: false,
        requires_images: false,
        image_url_field: "input_urls",
    },
    ModelProfile {
        name: "flux-2/flex-image-to-image",
        max_prompt_length: 5000,
        valid_ratios: FLUX_RATIOS,
        supports_quality: false,
        supports_resolution: true,
        supports_images: true,
        requires_images: true,
        image_url_field: "input_urls",
    },
    ModelProfile {
        name: "nano-banana-pro",
        max_prompt_length: 10000,
        valid_ratios: &[
            "1:1", "4:3", "3:4", "16:9", "9:16", "3:2", "2:3", "21:9", "4:5", "5:4", "auto",
        ],
        supports_quality: false,
        supports_resolution: true,
        supports_images: true,
        requires_images: false,
        image_url_field: "image_input",
    },
];

impl ModelProfile {
    /// The profile for `name`, or the default model's profile when the name is unknown.
    pub fn lookup(name: &str) -> &'static ModelProfile {
        MODELS
            .iter()
            .find(|m| m.name == name)
            .unwrap_or(&MODELS[0])
    }
}

/// A generation job: `{ "model": ..., "input": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub input: Map<String, Value>,
}

impl GenerationRequest {
    /// Validates `prompt` against the model's limits and assembles the job input.
    ///
    /// Quality is only sent to models that understand it, likewise resolution and image
    /// URLs. Images are optional unless the model requires them.
    pub fn build(
        model: &str,
        prompt: &str,
        settings: &GenerationSettings,
        image_urls: &[String],
    ) -> Result<Self, RequestError> {
        let profile = ModelProfile::lookup(model);
        if profile.name != model {
            debug!(requested = model, using = profile.name, "unknown model, using default");
        }

        if prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        let length = prompt.chars().count();
        if length > profile.max_prompt_length {
            return Err(RequestError::PromptTooLong {
                model: profile.name.to_string(),
                limit: profile.max_prompt_length,
                actual: length,
            });
        }
        let ratio = settings.aspect_ratio.as_str();
        if !profile.valid_ratios.contains(&ratio) {
            return Err(RequestError::InvalidAspectRatio {
                model: profile.name.to_string(),
                aspect_ratio: ratio.to_string(),
            });
        }

        let mut input = Map::new();
        input.insert("prompt".to_string(), Value::from(prompt));
        input.insert("aspect_ratio".to_string(), Value::from(ratio));
        if profile.supports_quality {
            input.insert("quality".to_string(), Value::from(settings.quality.as_str()));
        }
        if profile.supports_resolution {
            input.insert(
                "resolution".to_string(),
                Value::from(settings.resolution.as_str()),
            );
        }
        if profile.supports_images {
            if !image_urls.is_empty() {
                input.insert(profile.image_url_field.to_string(), Value::from(image_urls.to_vec()));
            } else if profile.requires_images {
                return Err(RequestError::MissingImages(profile.name.to_string()));
            }
        }

        Ok(Self {
            model: profile.name.to_string(),
            input,
        })
    }

    /// One request per model in `settings.models`. Stops at the first invalid one.
    pub fn build_all(
        prompt: &str,
        settings: &GenerationSettings,
        image_urls: &[String],
    ) -> Result<Vec<Self>, RequestError> {
        settings
            .models
            .iter()
            .map(|model| Self::build(model, prompt, settings, image_urls))
            .collect()
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "model": self.model,
            "input": self.input,
        })
    }
}
