//! Foil Flow command line tools.
//!
//! Provides the `foilflow` binary: an interactive terminal walk through the
//! decision wizard, SVG export of the layered map, corpus validation, node
//! inspection, and corpus export. Every subcommand reads the built-in corpus
//! unless `--content` names another file.
//!
//! Machine-readable results (validation, inspection, export) are printed as
//! JSON to stdout; diagnostics go to stderr.

mod walk;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use foilflow_core::{corpus, validate, FlowGraph, NodeId};
use foilflow_layout::{compute_layout, inspect, render_svg, LayoutConfig, RenderOptions};

/// Foil Flow decision guide tools.
#[derive(Parser)]
#[command(name = "foilflow", about = "Foil Flow decision guide tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Corpus selection shared by every subcommand.
#[derive(Args)]
struct ContentArgs {
    /// Path to an alternate corpus JSON file (default: built-in corpus).
    #[arg(short, long)]
    content: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Walk the wizard interactively in the terminal.
    Walk {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Render the layered map to an SVG file.
    Map {
        #[command(flatten)]
        content: ContentArgs,

        /// Output file.
        #[arg(short, long)]
        out: PathBuf,

        /// Viewport width.
        #[arg(long, default_value_t = 1200.0)]
        width: f64,

        /// Viewport height.
        #[arg(long, default_value_t = 800.0)]
        height: f64,

        /// Node to highlight and centre (default: root).
        #[arg(long)]
        current: Option<String>,
    },

    /// Check the corpus for dangling links, dead ends and unreachable nodes.
    Validate {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Print the inspector view of one node.
    Inspect {
        #[command(flatten)]
        content: ContentArgs,

        /// Node id.
        id: String,
    },

    /// Print the corpus as canonical JSON.
    Export {
        #[command(flatten)]
        content: ContentArgs,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Walk { content } => run_walk(content.content.as_deref()),
        Commands::Map {
            content,
            out,
            width,
            height,
            current,
        } => run_map(content.content.as_deref(), &out, width, height, current),
        Commands::Validate { content } => run_validate(content.content.as_deref()),
        Commands::Inspect { content, id } => run_inspect(content.content.as_deref(), &id),
        Commands::Export { content, out } => run_export(content.content.as_deref(), out.as_deref()),
    };
    process::exit(exit_code);
}

/// Loads the corpus, printing the failure to stderr.
fn load_graph(path: Option<&Path>) -> Result<FlowGraph, i32> {
    corpus::load(path).map_err(|e| {
        match path {
            Some(p) => eprintln!("Error: failed to load '{}': {}", p.display(), e),
            None => eprintln!("Error: built-in corpus is invalid: {}", e),
        }
        3
    })
}

/// Execute the walk subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O error.
fn run_walk(path: Option<&Path>) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match walk::run(&graph, stdin.lock(), &mut stdout) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            3
        }
    }
}

/// Execute the map subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid layout options, 3 = I/O error.
fn run_map(
    path: Option<&Path>,
    out: &Path,
    width: f64,
    height: f64,
    current: Option<String>,
) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let svg = match map_svg(&graph, width, height, current.as_deref()) {
        Ok(svg) => svg,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    match fs::write(out, svg) {
        Ok(()) => {
            eprintln!("Wrote {}", out.display());
            0
        }
        Err(e) => {
            eprintln!("I/O error: failed to write '{}': {}", out.display(), e);
            3
        }
    }
}

/// Lays out and renders `graph`, highlighting `current` (root by default).
fn map_svg(
    graph: &FlowGraph,
    width: f64,
    height: f64,
    current: Option<&str>,
) -> Result<String, String> {
    let current = current.unwrap_or(foilflow_core::ROOT_ID);
    if !graph.contains(current) {
        return Err(format!("node not found: '{}'", current));
    }
    let config = LayoutConfig::with_viewport(width, height).map_err(|e| e.to_string())?;
    let layout = compute_layout(graph, &config).map_err(|e| e.to_string())?;
    let opts = RenderOptions {
        current: Some(current),
        transform: None,
    };
    render_svg(&layout, &opts).map_err(|e| e.to_string())
}

/// Execute the validate subcommand.
///
/// Prints the report as JSON. Returns exit code: 0 = clean, 1 = findings
/// that make the corpus unusable (dangling links, dead ends), 3 = I/O error.
fn run_validate(path: Option<&Path>) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let report = validate(&graph);
    print_json(&report);
    for message in report.messages() {
        eprintln!("  - {}", message);
    }
    if report.is_clean() {
        0
    } else {
        1
    }
}

/// Execute the inspect subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown node, 3 = I/O error.
fn run_inspect(path: Option<&Path>, id: &str) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(code) => return code,
    };

    match inspect(&graph, id, &NodeId::root()) {
        Ok(view) => {
            print_json(&view);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Execute the export subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O error.
fn run_export(path: Option<&Path>, out: Option<&Path>) -> i32 {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(code) => return code,
    };

    let json = match graph.to_json_pretty() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 3;
        }
    };

    match out {
        Some(out) => match fs::write(out, json) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("I/O error: failed to write '{}': {}", out.display(), e);
                3
            }
        },
        None => {
            println!("{}", json);
            0
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {}\"}}", e));
    println!("{}", json);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> FlowGraph {
        corpus::builtin().unwrap()
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["foilflow", "map", "--out", "map.svg", "--width", "1600"])
            .unwrap();
        match cli.command {
            Commands::Map { out, width, height, .. } => {
                assert_eq!(out, PathBuf::from("map.svg"));
                assert_eq!(width, 1600.0);
                assert_eq!(height, 800.0);
            }
            _ => panic!("expected map"),
        }

        let cli = Cli::try_parse_from(["foilflow", "inspect", "--content", "c.json", "root"])
            .unwrap();
        match cli.command {
            Commands::Inspect { content, id } => {
                assert_eq!(content.content, Some(PathBuf::from("c.json")));
                assert_eq!(id, "root");
            }
            _ => panic!("expected inspect"),
        }

        assert!(Cli::try_parse_from(["foilflow", "map"]).is_err());
    }

    #[test]
    fn map_svg_highlights_current() {
        let svg = map_svg(&builtin(), 1200.0, 800.0, Some("q_wind_surfer")).unwrap();
        assert!(svg.contains(r#"class="node active" data-node-id="q_wind_surfer""#));
    }

    #[test]
    fn map_svg_rejects_unknown_node_and_bad_viewport() {
        assert!(map_svg(&builtin(), 1200.0, 800.0, Some("nope")).is_err());
        assert!(map_svg(&builtin(), 0.0, 800.0, None).is_err());
    }

    #[test]
    fn map_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("map.svg");
        assert_eq!(run_map(None, &out, 1200.0, 800.0, None), 0);
        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn export_round_trips_through_content_flag() {
        let dir = tempfile::tempdir().unwrap();
        let exported = dir.path().join("flow.json");
        assert_eq!(run_export(None, Some(&exported)), 0);

        let reloaded = load_graph(Some(&exported)).unwrap();
        assert_eq!(reloaded.fingerprint(), builtin().fingerprint());
        assert_eq!(run_validate(Some(&exported)), 0);
    }

    #[test]
    fn validate_fails_on_dangling_links() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(
            &path,
            r#"{ "root": { "id": "root", "type": "question", "title": "Start", "content": "",
                 "options": [ { "label": "Go", "nextId": "missing" } ] } }"#,
        )
        .unwrap();
        assert_eq!(run_validate(Some(&path)), 1);
        assert_eq!(run_inspect(Some(&path), "root"), 0);
        assert_eq!(run_inspect(Some(&path), "missing"), 1);
    }

    #[test]
    fn missing_content_file_is_io_error() {
        assert_eq!(run_validate(Some(Path::new("/nonexistent/flow.json"))), 3);
    }
}
