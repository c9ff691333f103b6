//! Check command - read a node-link file back and verify it
//!
//! Parses the document, rebuilds the graph, and reports whether the topology
//! is the fixed six-node graph and which attribute keys the nodes carry.

use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use glink_core::exporter;
use glink_core::fixture;
use glink_core::node_link;
use glink_core::{Graph, NodeLinkDocument};
use serde::Serialize;
use std::path::Path;

/// Result of checking a node-link file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
    /// Whether the file is directed and its nodes and edges equal the fixed graph's
    pub matches_fixture: bool,
    /// Attribute keys seen on any node, in first-seen order
    pub attribute_keys: Vec<String>,
}

impl CheckReport {
    fn new(path: &Path, document: &NodeLinkDocument, graph: &Graph) -> Self {
        let mut attribute_keys: Vec<String> = Vec::new();
        for node in graph.nodes() {
            for key in node.attributes.keys() {
                if !attribute_keys.iter().any(|k| k == key) {
                    attribute_keys.push(key.to_string());
                }
            }
        }

        Self {
            path: path.display().to_string(),
            directed: document.directed,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            matches_fixture: document.directed && fixture::matches_topology(graph),
            attribute_keys,
        }
    }
}

impl TableDisplay for CheckReport {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        if self.matches_fixture {
            lines.push(format!("{}", "Graph: matches fixed topology".green().bold()));
        } else {
            lines.push(format!("{}", "Graph: differs from fixed topology".yellow().bold()));
        }
        lines.push(format!("  {}: {}", "File".cyan(), self.path));
        lines.push(format!(
            "  {}: {}",
            "Directed".cyan(),
            if self.directed { "yes" } else { "no" }
        ));
        lines.push(format!("  {}: {}", "Nodes".cyan(), self.node_count));
        lines.push(format!("  {}: {}", "Edges".cyan(), self.edge_count));

        let keys = if self.attribute_keys.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            self.attribute_keys.join(", ")
        };
        lines.push(format!("  {}: {}", "Attributes".cyan(), keys));

        lines.join("\n")
    }
}

/// Load `path` and rebuild the graph it describes.
pub fn load(path: &Path) -> Result<CheckReport> {
    let document = exporter::read_document(path)
        .with_context(|| format!("Failed to read node-link document {}", path.display()))?;
    let graph = node_link::from_document(&document)
        .with_context(|| format!("Invalid graph in {}", path.display()))?;
    Ok(CheckReport::new(path, &document, &graph))
}

/// Run the check command.
pub fn run(path: &str, format: OutputFormat) -> Result<()> {
    let report = load(Path::new(path))?;
    tracing::debug!(
        nodes = report.node_count,
        edges = report.edge_count,
        matches = report.matches_fixture,
        "Checked node-link document"
    );
    Output::new(report, format).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glink_core::exporter::Layout;
    use glink_core::fixture::Variant;
    use tempfile::TempDir;

    fn export_variant(dir: &TempDir, variant: Variant) -> std::path::PathBuf {
        let path = dir.path().join("graph.json");
        let graph = fixture::build(variant).unwrap();
        exporter::export_graph(&graph, variant.profile().layout, &path).unwrap();
        path
    }

    #[test]
    fn test_check_annotated_export() {
        let dir = TempDir::new().unwrap();
        let path = export_variant(&dir, Variant::Annotated);

        let report = load(&path).unwrap();
        assert!(report.matches_fixture);
        assert_eq!(report.node_count, 6);
        assert_eq!(report.edge_count, 5);
        assert_eq!(report.attribute_keys, vec!["color", "shape", "hover_text"]);
    }

    #[test]
    fn test_check_plain_export_has_no_keys() {
        let dir = TempDir::new().unwrap();
        let path = export_variant(&dir, Variant::Plain);

        let report = load(&path).unwrap();
        assert!(report.matches_fixture);
        assert!(report.attribute_keys.is_empty());
    }

    #[test]
    fn test_check_different_topology() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.json");
        let mut graph = Graph::new();
        graph.add_node(1, Default::default()).unwrap();
        exporter::export_graph(&graph, Layout::Compact, &path).unwrap();

        let report = load(&path).unwrap();
        assert!(!report.matches_fixture);
        assert_eq!(report.node_count, 1);
    }

    #[test]
    fn test_check_dangling_link_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"directed":true,"multigraph":false,"graph":{},"nodes":[{"id":1}],"links":[{"source":1,"target":2}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid graph"));
    }

    #[test]
    fn test_check_undirected_file_does_not_match() {
        let dir = TempDir::new().unwrap();
        let path = export_variant(&dir, Variant::Plain);
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, text.replace("\"directed\":true", "\"directed\":false")).unwrap();

        let report = load(&path).unwrap();
        assert!(!report.directed);
        assert_eq!(report.node_count, 6);
        assert_eq!(report.edge_count, 5);
        assert!(!report.matches_fixture);
    }

    #[test]
    fn test_check_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("graph.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_table_lists_keys() {
        let dir = TempDir::new().unwrap();
        let path = export_variant(&dir, Variant::Styled);
        colored::control::set_override(false);
        let table = load(&path).unwrap().to_table();
        assert!(table.contains("matches fixed topology"));
        assert!(table.contains("color, shape"));
    }
}
