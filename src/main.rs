//! Grid Composer CLI
//!
//! Usage:
//!   grid-composer [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --style <FILE>     Default style preference (TOML format)
//!   -f, --format <FORMAT>  Output format: json or html
//!   -a, --add <KIND>       Append a component at root level (repeatable)
//!       --fragment         Emit only the canvas markup
//!       --compact          Emit HTML on a single line
//!       --gutter <PX>      Gap between nodes in the preview [default: 10]
//!   -d, --debug            Print the tree outline to stderr
//!   -h, --help             Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use grid_composer::{
    export, render_html, ComponentKind, ComponentTree, ComposerError, NoGeometry, NodeRef,
    PreviewConfig, Session, StylePreference,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Normalized tree JSON
    Json,
    /// Standalone HTML preview
    Html,
}

#[derive(Parser)]
#[command(name = "grid-composer")]
#[command(about = "Inspect, normalize and preview nested grid layouts")]
struct Cli {
    /// Layout JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Default style preference file (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Append a component at root level, styled with the default style
    /// (div, title, text, input or select)
    #[arg(short, long)]
    add: Vec<ComponentKind>,

    /// Emit only the canvas markup instead of a full HTML document
    #[arg(long)]
    fragment: bool,

    /// Emit HTML on a single line
    #[arg(long)]
    compact: bool,

    /// Gap between neighbouring nodes in the HTML preview, in pixels
    #[arg(long, default_value_t = 10)]
    gutter: u32,

    /// Debug mode: print the tree outline to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ComposerError> {
    let preference = match &cli.style {
        Some(path) => StylePreference::load(path)?,
        None => StylePreference::default(),
    };

    let tree = match &cli.input {
        Some(path) => export::from_file(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            export::from_json(&buffer)?
        }
    };
    tracing::info!(
        roots = tree.len(),
        nodes = tree.node_count(),
        depth = tree.depth(),
        "loaded layout"
    );

    let mut session = Session::with_tree(preference, tree);
    for kind in &cli.add {
        if let Some(id) = session.drop_component(*kind, None, f64::INFINITY, &NoGeometry) {
            tracing::debug!(id = %id, "appended component");
        }
    }

    if cli.debug {
        print_outline(session.tree());
    }

    match cli.format {
        Format::Json => println!("{}", export::to_json(session.tree())?),
        Format::Html => {
            let config = PreviewConfig::new()
                .with_gutter(cli.gutter)
                .with_standalone(!cli.fragment)
                .with_pretty_print(!cli.compact);
            print!("{}", render_html(session.tree(), &config));
        }
    }
    Ok(())
}

fn print_outline(tree: &ComponentTree) {
    fn print_node(node: &NodeRef, depth: usize) {
        let indent = "  ".repeat(depth);
        eprintln!(
            "{}[{}] {} cols={} height={}",
            indent,
            node.id,
            node.kind.name(),
            node.config.cols,
            node.config.height
        );
        for child in &node.children {
            print_node(child, depth + 1);
        }
    }
    eprintln!("=== Layout Outline ===");
    for root in tree.roots() {
        print_node(root, 0);
    }
    eprintln!("======================");
}

fn print_intro() {
    println!(
        r#"Grid Composer - nested 12-column grid layouts

USAGE:
    grid-composer [OPTIONS] [FILE]
    cat layout.json | grid-composer

OPTIONS:
    -s, --style <FILE>     Default style preference (TOML file)
    -f, --format <FORMAT>  Output format: json or html [default: html]
    -a, --add <KIND>       Append a div, title, text, input or select (repeatable)
        --fragment         Emit only the canvas markup
        --compact          Emit HTML on a single line
        --gutter <PX>      Gap between nodes in the preview [default: 10]
    -d, --debug            Print the tree outline to stderr
    -h, --help             Print help

LAYOUT JSON:
    [{{"id": "div-1", "config": {{"cols": 12}}, "children": [
        {{"id": "title-1", "kind": "title", "config": {{"content": "Hello"}}}}
    ]}}]"#
    );
}
