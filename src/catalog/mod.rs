//! Lookup tables that turn editor choices into descriptive prompt fragments.
//!
//! The compiler never reaches for these tables through global state: a `PresetCatalog`
//! is handed to it explicitly, so deployments can ship their own JSON catalog and tests
//! can run against an empty one.

use crate::error::CatalogError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

mod builtin;

/// A selectable option with the text it contributes to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    pub id: String,
    pub label: String,
    pub prompt: String,
}

impl PresetEntry {
    pub fn new(id: &str, label: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            prompt: prompt.to_string(),
        }
    }

    /// Editors store either the option id or its display label.
    fn matches(&self, key: &str) -> bool {
        self.id == key || self.label.eq_ignore_ascii_case(key)
    }
}

/// A named group of options, e.g. the "studio" scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetGroup {
    pub id: String,
    pub label: String,
    pub options: Vec<PresetEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub default_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetCatalog {
    pub products: Vec<ProductCategory>,
    pub scenes: Vec<PresetGroup>,
    pub styles: Vec<PresetEntry>,
    pub palettes: Vec<PresetEntry>,
    pub design_movements: Vec<PresetEntry>,
    pub lighting: Vec<PresetGroup>,
    pub camera_angles: Vec<PresetEntry>,
    pub camera_distances: Vec<PresetEntry>,
    pub depths_of_field: Vec<PresetEntry>,
    pub plants: Vec<PresetEntry>,
    pub textures: Vec<PresetEntry>,
}

static BUILTIN: Lazy<PresetCatalog> = Lazy::new(builtin::catalog);

impl PresetCatalog {
    /// The catalog the editor ships with.
    pub fn builtin() -> &'static PresetCatalog {
        &BUILTIN
    }

    /// Loads a catalog from JSON. Tables missing from the document are left empty.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    pub fn product(&self, category: &str, product: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|c| c.name == category)?
            .products
            .iter()
            .find(|p| p.name == product)
            .map(|p| p.default_prompt.as_str())
    }

    pub fn scene(&self, environment: &str, setting: &str) -> Option<&str> {
        grouped(&self.scenes, environment, setting)
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        find(&self.styles, key)
    }

    pub fn palette(&self, key: &str) -> Option<&str> {
        find(&self.palettes, key)
    }

    pub fn design_movement(&self, key: &str) -> Option<&str> {
        find(&self.design_movements, key)
    }

    pub fn lighting(&self, light_type: &str, setting: &str) -> Option<&str> {
        grouped(&self.lighting, light_type, setting)
    }

    pub fn camera_angle(&self, key: &str) -> Option<&str> {
        find(&self.camera_angles, key)
    }

    pub fn camera_distance(&self, key: &str) -> Option<&str> {
        find(&self.camera_distances, key)
    }

    pub fn depth_of_field(&self, key: &str) -> Option<&str> {
        find(&self.depths_of_field, key)
    }

    pub fn plant(&self, key: &str) -> Option<&str> {
        find(&self.plants, key)
    }

    pub fn texture(&self, key: &str) -> Option<&str> {
        find(&self.textures, key)
    }
}

fn find<'a>(entries: &'a [PresetEntry], key: &str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|e| e.matches(key))
        .map(|e| e.prompt.as_str())
}

fn grouped<'a>(groups: &'a [PresetGroup], group: &str, key: &str) -> Option<&'a str> {
    let group = groups.iter().find(|g| g.id == group)?;
    find(&group.options, key)
}
