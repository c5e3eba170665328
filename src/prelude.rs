//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load, compile and submit a prompt graph.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptgraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph_json = std::fs::read_to_string("path/to/canvas.json")?;
//! let graph = Graph::from_json(&graph_json)?;
//!
//! let compiled = compile(&graph, &CompileOptions::default());
//! println!("{} ({} tokens)", compiled.prompt, compiled.estimated_tokens());
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{
    CompileOptions, CompiledPrompt, Compiler, GenerationMode, OrderStrategy, PhotographyPreset,
    Segment, compile,
};

// Graph model
pub use crate::graph::{Edge, Graph, Node, NodeData, NodeKind};

// Presets
pub use crate::catalog::PresetCatalog;

// Generation
pub use crate::params::{GenerationSettings, generation_settings, uploaded_image_urls};
pub use crate::request::GenerationRequest;
pub use crate::variation::{expand_variations, restore_protected_phrases};

// Error types
pub use crate::error::{CatalogError, GraphError, RequestError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
