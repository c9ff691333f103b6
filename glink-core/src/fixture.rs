//! The fixed demonstration graph and its export variants.
//!
//! Topology (six nodes, five edges):
//!
//! ```text
//!        1
//!       / \
//!      2   3
//!      |  / \
//!      4 5   6
//! ```
//!
//! All data is literal. Variants differ only in which node attributes are
//! attached, how the JSON is laid out, and whether the document is echoed.

use crate::error::Result;
use crate::exporter::Layout;
use crate::graph::Graph;
use crate::types::{Attributes, NodeId};
use std::fmt;
use std::str::FromStr;

/// Node ids in insertion order.
pub const NODES: [NodeId; 6] = [1, 2, 3, 4, 5, 6];

/// Directed edges `(source, target)` in insertion order.
pub const EDGES: [(NodeId, NodeId); 5] = [(1, 2), (1, 3), (2, 4), (3, 5), (3, 6)];

/// Per-node display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub id: NodeId,
    pub color: &'static str,
    pub shape: &'static str,
    pub hover_text: &'static str,
}

pub const STYLES: [NodeStyle; 6] = [
    NodeStyle { id: 1, color: "red", shape: "circle", hover_text: "Node 1" },
    NodeStyle { id: 2, color: "blue", shape: "square", hover_text: "Node 2" },
    NodeStyle { id: 3, color: "green", shape: "triangle", hover_text: "Node 3" },
    NodeStyle { id: 4, color: "yellow", shape: "diamond", hover_text: "Node 4" },
    NodeStyle { id: 5, color: "purple", shape: "hexagon", hover_text: "Node 5" },
    NodeStyle { id: 6, color: "orange", shape: "star", hover_text: "Node 6" },
];

/// Which attribute keys a variant attaches to every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSet {
    None,
    /// `color`, `shape`
    Display,
    /// `color`, `shape`, `hover_text`
    DisplayWithHover,
}

impl AttributeSet {
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            AttributeSet::None => &[],
            AttributeSet::Display => &["color", "shape"],
            AttributeSet::DisplayWithHover => &["color", "shape", "hover_text"],
        }
    }

    fn attributes_for(&self, id: NodeId) -> Attributes {
        let Some(style) = STYLES.iter().find(|s| s.id == id) else {
            return Attributes::new();
        };
        let mut attrs = Attributes::new();
        if *self != AttributeSet::None {
            attrs.insert("color", style.color);
            attrs.insert("shape", style.shape);
        }
        if *self == AttributeSet::DisplayWithHover {
            attrs.insert("hover_text", style.hover_text);
        }
        attrs
    }
}

/// How one variant builds and emits the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProfile {
    pub attributes: AttributeSet,
    pub layout: Layout,
    /// Print the rendered document to stdout after writing it.
    pub echo: bool,
}

/// The three export variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Topology only, compact JSON, file only.
    Plain,
    /// Color and shape, 4-space indent, echoed.
    Styled,
    /// Color, shape and hover text, 4-space indent, echoed.
    #[default]
    Annotated,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Plain, Variant::Styled, Variant::Annotated];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Styled => "styled",
            Variant::Annotated => "annotated",
        }
    }

    pub fn profile(&self) -> ExportProfile {
        match self {
            Variant::Plain => ExportProfile {
                attributes: AttributeSet::None,
                layout: Layout::Compact,
                echo: false,
            },
            Variant::Styled => ExportProfile {
                attributes: AttributeSet::Display,
                layout: Layout::Indented(4),
                echo: true,
            },
            Variant::Annotated => ExportProfile {
                attributes: AttributeSet::DisplayWithHover,
                layout: Layout::Indented(4),
                echo: true,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Variant::Plain),
            "styled" => Ok(Variant::Styled),
            "annotated" => Ok(Variant::Annotated),
            _ => Err(format!(
                "Unknown variant: '{}' (expected plain, styled or annotated)",
                s
            )),
        }
    }
}

/// Build the fixed graph with the attributes `variant` calls for.
pub fn build(variant: Variant) -> Result<Graph> {
    let attribute_set = variant.profile().attributes;
    let mut graph = Graph::new();

    for id in NODES {
        graph.add_node(id, attribute_set.attributes_for(id))?;
    }
    for (source, target) in EDGES {
        graph.add_edge(source, target)?;
    }

    tracing::debug!(
        variant = %variant,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built fixture graph"
    );
    Ok(graph)
}

/// Check whether `graph` has exactly the fixture's nodes and edges.
///
/// Attributes are ignored.
pub fn matches_topology(graph: &Graph) -> bool {
    graph.node_count() == NODES.len()
        && graph.edge_count() == EDGES.len()
        && NODES.iter().all(|&id| graph.has_node(id))
        && EDGES.iter().all(|&(s, t)| graph.has_edge(s, t))
}
