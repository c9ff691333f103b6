//! JSON format exporter.

use crate::error::{GraphError, Result};
use crate::node_link::NodeLinkDocument;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Whitespace layout of rendered JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No whitespace between tokens.
    Compact,
    /// One value per line, nested values indented by this many spaces.
    Indented(usize),
}

impl Layout {
    pub fn describe(&self) -> String {
        match self {
            Layout::Compact => "compact".to_string(),
            Layout::Indented(width) => format!("indent={}", width),
        }
    }
}

/// Render any serializable value with the given layout.
pub fn render<T: Serialize + ?Sized>(value: &T, layout: Layout) -> Result<String> {
    match layout {
        Layout::Compact => Ok(serde_json::to_string(value)?),
        Layout::Indented(width) => {
            let indent = vec![b' '; width];
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
            value.serialize(&mut ser)?;
            String::from_utf8(buf).map_err(|e| {
                GraphError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })
        }
    }
}

/// Parse a node-link document from JSON text.
pub fn parse(text: &str) -> Result<NodeLinkDocument> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::node_link::to_document;
    use crate::types::Attributes;

    fn sample_document() -> NodeLinkDocument {
        let mut graph = Graph::new();
        graph
            .add_node(1, Attributes::new().with("color", "red"))
            .unwrap();
        graph.add_node(2, Attributes::new()).unwrap();
        graph.add_edge(1, 2).unwrap();
        to_document(&graph)
    }

    #[test]
    fn test_render_compact_has_no_whitespace() {
        let output = render(&sample_document(), Layout::Compact).unwrap();
        assert!(!output.contains(' '));
        assert!(!output.contains('\n'));
        assert!(output.starts_with(r#"{"directed":true,"#));
    }

    #[test]
    fn test_render_four_space_indent() {
        let output = render(&sample_document(), Layout::Indented(4)).unwrap();
        let expected = r#"{
    "directed": true,
    "multigraph": false,
    "graph": {},
    "nodes": [
        {
            "color": "red",
            "id": 1
        },
        {
            "id": 2
        }
    ],
    "links": [
        {
            "source": 1,
            "target": 2
        }
    ]
}"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_keeps_non_ascii_text() {
        let mut graph = Graph::new();
        graph
            .add_node(1, Attributes::new().with("hover_text", "Nœud 1 → ü"))
            .unwrap();
        let doc = to_document(&graph);

        let output = render(&doc, Layout::Indented(4)).unwrap();
        assert!(output.contains("\"hover_text\": \"Nœud 1 → ü\""));
        assert!(!output.contains('\u{FFFD}'));
        assert_eq!(parse(&output).unwrap(), doc);
    }

    #[test]
    fn test_layouts_parse_to_same_document() {
        let doc = sample_document();
        let compact = parse(&render(&doc, Layout::Compact).unwrap()).unwrap();
        let indented = parse(&render(&doc, Layout::Indented(4)).unwrap()).unwrap();
        assert_eq!(compact, doc);
        assert_eq!(indented, doc);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(parse("{\"directed\": true").is_err());
        assert!(parse("[]").is_err());
    }

    #[test]
    fn test_layout_describe() {
        assert_eq!(Layout::Compact.describe(), "compact");
        assert_eq!(Layout::Indented(4).describe(), "indent=4");
    }
}
