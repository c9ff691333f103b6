//! Export of graphs to node-link JSON files.

pub mod json;

use crate::error::Result;
use crate::graph::Graph;
use crate::node_link::{self, NodeLinkDocument};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub use json::Layout;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "graph.json";

/// What an export produced.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub content: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Convert, render and persist a graph in one step.
///
/// The returned `content` is exactly the bytes written to `path`.
pub fn export_graph(graph: &Graph, layout: Layout, path: &Path) -> Result<ExportOutcome> {
    let document = node_link::to_document(graph);
    tracing::debug!(
        nodes = document.nodes.len(),
        links = document.links.len(),
        "Converted graph to node-link form"
    );

    let content = json::render(&document, layout)?;
    write_document(path, &content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote node-link document");

    Ok(ExportOutcome {
        path: path.to_path_buf(),
        content,
        node_count: document.nodes.len(),
        edge_count: document.links.len(),
    })
}

/// Write `text` to `path`, truncating any existing content.
///
/// The file handle is dropped on every return path.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Read and parse a node-link document file.
pub fn read_document(path: &Path) -> Result<NodeLinkDocument> {
    let text = fs::read_to_string(path)?;
    json::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::types::Attributes;
    use tempfile::TempDir;

    fn small_graph() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_node(1, Attributes::new().with("shape", "circle"))
            .unwrap();
        graph.add_node(2, Attributes::new()).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph
    }

    #[test]
    fn test_export_writes_exact_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        let outcome = export_graph(&small_graph(), Layout::Indented(4), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), outcome.content);
        assert_eq!(outcome.node_count, 2);
        assert_eq!(outcome.edge_count, 1);
        assert_eq!(outcome.path, path);
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_document(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_document_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        let graph = small_graph();

        export_graph(&graph, Layout::Compact, &path).unwrap();
        let doc = read_document(&path).unwrap();

        assert_eq!(doc, node_link::to_document(&graph));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("graph.json");

        let err = export_graph(&small_graph(), Layout::Compact, &path).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
