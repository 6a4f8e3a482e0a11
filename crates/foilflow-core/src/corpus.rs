//! Content corpus loading.
//!
//! The built-in foiling progression corpus is compiled into the crate; an
//! alternate corpus with the same JSON shape can be loaded from disk.

use std::path::Path;

use crate::error::CoreError;
use crate::graph::FlowGraph;

/// The built-in corpus as shipped.
pub const BUILTIN_CORPUS: &str = include_str!("../data/flow.json");

/// Parses the built-in corpus.
pub fn builtin() -> Result<FlowGraph, CoreError> {
    FlowGraph::from_json(BUILTIN_CORPUS)
}

/// Loads a corpus from a JSON file.
pub fn load_file(path: &Path) -> Result<FlowGraph, std::io::Error> {
    let text = std::fs::read_to_string(path)?;
    FlowGraph::from_json(&text)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Loads `path` when given, the built-in corpus otherwise.
pub fn load(path: Option<&Path>) -> Result<FlowGraph, std::io::Error> {
    match path {
        Some(p) => load_file(p),
        None => builtin().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
    }
}
