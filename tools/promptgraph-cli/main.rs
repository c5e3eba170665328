use clap::{Parser, ValueEnum};
use promptgraph::prelude::*;
use std::fs;
use std::time::Instant;
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Product,
    Photography,
    Alteration,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderCli {
    Topological,
    Priority,
}

/// Compiles an exported prompt graph into an image-generation prompt
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the canvas graph JSON file
    graph_path: String,
    /// Optional path to a preset catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Force a generation mode instead of detecting it from the graph
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,
    /// Photography preset id, e.g. "portrait"
    #[arg(short, long)]
    preset: Option<String>,
    /// Leave out the mode's prefix and suffix phrases
    #[arg(long)]
    no_enhance: bool,
    /// How reachable nodes are ordered
    #[arg(short, long, value_enum, default_value = "topological")]
    order: OrderCli,

    /// Print the compiled result and generation requests as JSON
    #[arg(long)]
    json: bool,
    /// Expand variation blocks into this many prompts and build one request per prompt
    #[arg(short, long)]
    batch: Option<usize>,
    /// Log compiler internals to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();

    // --- 1. Loading ---
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let graph = Graph::from_json(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)));

    let custom_catalog = cli.catalog.as_ref().map(|path| {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
        });
        PresetCatalog::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
    });
    let catalog = custom_catalog
        .as_ref()
        .unwrap_or_else(|| PresetCatalog::builtin());

    // --- 2. Compilation ---
    let options = CompileOptions {
        mode: cli.mode.map(|m| match m {
            ModeCli::Product => GenerationMode::Product,
            ModeCli::Photography => GenerationMode::Photography,
            ModeCli::Alteration => GenerationMode::Alteration,
        }),
        photography_preset: cli.preset.as_deref().map(|id| {
            PhotographyPreset::from_id(id)
                .unwrap_or_else(|| exit_with_error(&format!("Unknown photography preset '{}'", id)))
        }),
        auto_enhance: !cli.no_enhance,
        order: match cli.order {
            OrderCli::Topological => OrderStrategy::Topological,
            OrderCli::Priority => OrderStrategy::KindPriority,
        },
        ..CompileOptions::default()
    };

    let compiled = Compiler::builder(&graph)
        .with_catalog(catalog)
        .with_options(options)
        .build()
        .compile();
    let compile_duration = start.elapsed();

    // --- 3. Generation requests ---
    let settings = generation_settings(&graph);
    let images = uploaded_image_urls(&graph);
    let prompts = match cli.batch {
        Some(count) => expand_variations(&compiled.prompt, count),
        None => vec![compiled.prompt.clone()],
    };
    let requests: Vec<_> = prompts
        .iter()
        .flat_map(|prompt| match GenerationRequest::build_all(prompt, &settings, &images) {
            Ok(requests) => requests.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        })
        .collect();

    // --- 4. Output ---
    if cli.json {
        let report = serde_json::json!({
            "compiled": compiled,
            "settings": settings,
            "requests": requests
                .iter()
                .map(|r| match r {
                    Ok(request) => request.to_json(),
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                })
                .collect::<Vec<_>>(),
        });
        let pretty = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
        println!("{}", pretty);
        return;
    }

    println!("{}", compiled.prompt);
    println!("\n--- Segments ---");
    for segment in &compiled.segments {
        println!("  [{}] {}", segment.node_type, segment.content);
    }
    if !compiled.warnings.is_empty() {
        println!("\n--- Warnings ---");
        for warning in &compiled.warnings {
            println!("  ! {}", warning);
        }
    }

    println!("\n--- Summary ---");
    if let Some(mode) = &compiled.mode {
        println!("Mode:            {}", mode.mode);
        println!("Auto-enhance:    {}", mode.auto_enhance);
    }
    println!("Characters:      {}", compiled.character_count);
    println!("Est. tokens:     {}", compiled.estimated_tokens());
    println!("Aspect ratio:    {}", settings.aspect_ratio.as_str());
    println!("Models:          {}", settings.models.join(", "));
    println!("Reference images: {}", images.len());
    println!("Compile time:    {:?}", compile_duration);

    let failures: Vec<_> = requests.iter().filter_map(|r| r.as_ref().err()).collect();
    println!(
        "Requests:        {} ready, {} rejected",
        requests.len() - failures.len(),
        failures.len()
    );
    for failure in failures {
        println!("  ! {}", failure);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
