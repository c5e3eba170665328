//! # promptgraph - Prompt Graph Compiler
//!
//! **promptgraph** turns a node-based prompt graph, as drawn in a visual canvas editor,
//! into a single natural-language prompt for an image generation model. Each node
//! contributes one fragment of text (a product, a scene, a lighting setup, a person, ...)
//! and the compiler stitches those fragments together in dependency order, wrapped in
//! boilerplate chosen by the graph's generation mode.
//!
//! ## Core Workflow
//!
//! 1.  **Load a graph**: Parse the editor's JSON export with [`Graph::from_json`](graph::Graph::from_json),
//!     or build one in code from typed [`NodeData`](graph::NodeData) payloads.
//! 2.  **Compile**: Use [`Compiler::builder`](compiler::Compiler::builder) (or the
//!     [`compile`](compiler::compile) shortcut) to walk everything upstream of the output node
//!     and produce a [`CompiledPrompt`](compiler::CompiledPrompt) with per-node segments and warnings.
//! 3.  **Prepare generation**: Read the aspect ratio, models and reference images off the graph
//!     with [`params`], expand `{a|b}` variation blocks per batch item with [`variation`], and
//!     validate the final job payload with [`request::GenerationRequest`].
//!
//! Compilation is pure and infallible. The same graph and catalog always produce the same
//! prompt, and a graph without an output node simply yields an empty prompt plus a warning.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptgraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = Graph::default();
//!     graph
//!         .add_node(Node::new("product", NodeData::default_for(NodeKind::Product)))
//!         .add_node(Node::new("scene", NodeData::default_for(NodeKind::Scene)))
//!         .add_node(Node::new("out", NodeData::default_for(NodeKind::Output)))
//!         .connect("product", "scene")
//!         .connect("scene", "out");
//!
//!     let compiled = Compiler::builder(&graph).build().compile();
//!     println!("{}", compiled.prompt);
//!     for warning in &compiled.warnings {
//!         println!("warning: {}", warning);
//!     }
//!
//!     let settings = generation_settings(&graph);
//!     let images = uploaded_image_urls(&graph);
//!     for prompt in expand_variations(&compiled.prompt, 2) {
//!         let request = GenerationRequest::build(settings.model(), &prompt, &settings, &images)?;
//!         println!("{}", request.to_json());
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod params;
pub mod prelude;
pub mod request;
pub mod variation;
