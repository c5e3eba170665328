use crate::catalog::PresetCatalog;
use crate::graph::{Graph, NodeKind};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub mod mode;
pub mod segments;
pub mod traversal;

pub use mode::{GenerationMode, PhotographyPreset, PromptPreset, ResolvedMode};
pub use traversal::{OrderStrategy, Traversal};

/// Prompts longer than this are flagged, never truncated.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 3000;

pub const NO_OUTPUT_WARNING: &str = "No output node found";

/// Caller-side knobs for a compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Replaces the detected mode. Cannot re-enable the wrapper a batch node disabled.
    pub mode: Option<GenerationMode>,
    /// Replaces the preset read from the photography node.
    pub photography_preset: Option<PhotographyPreset>,
    /// `false` drops the prefix and suffix phrases whatever the mode.
    pub auto_enhance: bool,
    pub order: OrderStrategy,
    pub max_prompt_chars: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            mode: None,
            photography_preset: None,
            auto_enhance: true,
            order: OrderStrategy::default(),
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

/// One node's contribution to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub node_type: NodeKind,
    pub content: String,
}

/// The result of compiling a graph. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPrompt {
    pub prompt: String,
    pub segments: Vec<Segment>,
    pub character_count: usize,
    pub warnings: Vec<String>,
    /// `None` when the graph has no output node.
    pub mode: Option<ResolvedMode>,
}

impl CompiledPrompt {
    fn no_output() -> Self {
        Self {
            prompt: String::new(),
            segments: Vec::new(),
            character_count: 0,
            warnings: vec![NO_OUTPUT_WARNING.to_string()],
            mode: None,
        }
    }

    /// Rough token estimate at four characters per token.
    pub fn estimated_tokens(&self) -> usize {
        self.character_count.div_ceil(4)
    }
}

/// Linearizes a prompt graph into a single prompt.
///
/// The compiler only borrows its inputs and holds no state between calls, so the same
/// graph always compiles to the same result.
pub struct Compiler<'a> {
    graph: &'a Graph,
    catalog: &'a PresetCatalog,
    options: CompileOptions,
}

pub struct CompilerBuilder<'a> {
    graph: &'a Graph,
    catalog: &'a PresetCatalog,
    options: CompileOptions,
}

impl<'a> CompilerBuilder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            catalog: PresetCatalog::builtin(),
            options: CompileOptions::default(),
        }
    }
    pub fn with_catalog(mut self, catalog: &'a PresetCatalog) -> Self {
        self.catalog = catalog;
        self
    }
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.options.mode = Some(mode);
        self
    }
    pub fn with_auto_enhance(mut self, enabled: bool) -> Self {
        self.options.auto_enhance = enabled;
        self
    }
    pub fn with_order(mut self, order: OrderStrategy) -> Self {
        self.options.order = order;
        self
    }
    pub fn build(self) -> Compiler<'a> {
        Compiler {
            graph: self.graph,
            catalog: self.catalog,
            options: self.options,
        }
    }
}

impl<'a> Compiler<'a> {
    pub fn builder(graph: &'a Graph) -> CompilerBuilder<'a> {
        CompilerBuilder::new(graph)
    }

    pub fn compile(&self) -> CompiledPrompt {
        let mut outputs = self.graph.output_nodes();
        let Some(sink) = outputs.next() else {
            debug!("no output node, nothing to compile");
            return CompiledPrompt::no_output();
        };

        let mut warnings = Vec::new();
        let extra_outputs = outputs.count();
        if extra_outputs > 0 {
            warn!(sink = %sink.id, extra = extra_outputs, "graph has several output nodes");
            warnings.push(format!(
                "Found {} output nodes; compiling from '{}'",
                extra_outputs + 1,
                sink.id
            ));
        }

        let traversal = traversal::traverse(self.graph, &sink.id, self.options.order);
        debug!(
            sink = %sink.id,
            reachable = traversal.reachable.len(),
            ordered = traversal.ordered.len(),
            "compiling prompt graph"
        );

        if !traversal.cyclic.is_empty() {
            let ids = traversal.cyclic.iter().map(|n| n.id.as_str()).join(", ");
            warn!(nodes = %ids, "dropping nodes caught in a cycle");
            warnings.push(format!(
                "{} node(s) skipped because they are part of a cycle: {}",
                traversal.cyclic.len(),
                ids
            ));
        }

        let segments: Vec<Segment> = traversal
            .ordered
            .iter()
            .filter_map(|node| {
                let content = segments::synthesize(&node.data, self.catalog);
                let content = content.trim();
                if content.is_empty() {
                    return None;
                }
                trace!(node = %node.id, kind = %node.kind, "segment");
                Some(Segment {
                    node_type: node.kind,
                    content: content.to_string(),
                })
            })
            .collect();

        let resolved = mode::resolve(&traversal.reachable, &self.options);
        let prompt = resolved
            .wrapper
            .prefix_phrase()
            .into_iter()
            .chain(segments.iter().map(|s| s.content.clone()))
            .chain(resolved.wrapper.suffix_phrase())
            .join(". ");

        let character_count = prompt.chars().count();
        if character_count > self.options.max_prompt_chars {
            warnings.push(format!(
                "Prompt exceeds {} characters ({}). Consider simplifying.",
                self.options.max_prompt_chars, character_count
            ));
        }

        if resolved.mode == GenerationMode::Product
            && !traversal.reachable.iter().any(|n| n.kind == NodeKind::Product)
        {
            warnings.push(
                "No product node connected. Consider adding one for better results.".to_string(),
            );
        }

        debug!(
            mode = %resolved.mode,
            segments = segments.len(),
            characters = character_count,
            "prompt compiled"
        );

        CompiledPrompt {
            prompt,
            segments,
            character_count,
            warnings,
            mode: Some(resolved),
        }
    }
}

/// Compiles `graph` against the built-in preset catalog.
pub fn compile(graph: &Graph, options: &CompileOptions) -> CompiledPrompt {
    Compiler::builder(graph)
        .with_options(options.clone())
        .build()
        .compile()
}
