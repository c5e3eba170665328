use crate::graph::NodeKind;
use thiserror::Error;

/// Errors that can occur while loading or validating a prompt graph.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' is declared as '{declared}' but carries a '{payload}' payload")]
    KindMismatch {
        node_id: String,
        declared: NodeKind,
        payload: NodeKind,
    },

    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNodeId(String),
}

/// Errors that can occur while loading a preset catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse preset catalog JSON: {0}")]
    JsonParseError(String),
}

/// Errors raised when a compiled prompt cannot be turned into a generation request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Prompt is required")]
    EmptyPrompt,

    #[error("Prompt exceeds {limit} character limit for {model} ({actual} characters)")]
    PromptTooLong {
        model: String,
        limit: usize,
        actual: usize,
    },

    #[error("Invalid aspect ratio '{aspect_ratio}' for {model}")]
    InvalidAspectRatio { model: String, aspect_ratio: String },

    #[error("{0} requires at least one image URL")]
    MissingImages(String),
}
