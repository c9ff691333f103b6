//! Node-link document conversion.
//!
//! The node-link convention represents a graph as two parallel lists:
//!
//! ```text
//! {"directed": true, "multigraph": false, "graph": {},
//!  "nodes": [{..attrs, "id": 1}, ...],
//!  "links": [{..attrs, "source": 1, "target": 2}, ...]}
//! ```
//!
//! Record attributes come first, followed by the identifying fields.

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Attributes, NodeId};
use serde::{Deserialize, Serialize};

/// A node entry: its attributes followed by the node id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(flatten)]
    pub attributes: Attributes,
    pub id: NodeId,
}

/// An edge entry: its attributes followed by source and target ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(flatten)]
    pub attributes: Attributes,
    pub source: NodeId,
    pub target: NodeId,
}

/// Read-only snapshot of a graph in node-link form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkDocument {
    pub directed: bool,
    pub multigraph: bool,
    #[serde(default)]
    pub graph: Attributes,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

impl NodeLinkDocument {
    /// Ids of all node records, in document order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// `(source, target)` pairs of all link records, in document order.
    pub fn link_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.links.iter().map(|l| (l.source, l.target)).collect()
    }
}

/// Convert a graph into a node-link document.
///
/// Nodes and links follow the graph's insertion order.
pub fn to_document(graph: &Graph) -> NodeLinkDocument {
    NodeLinkDocument {
        directed: graph.is_directed(),
        multigraph: false,
        graph: graph.attributes().clone(),
        nodes: graph
            .nodes()
            .map(|node| NodeRecord {
                attributes: node.attributes.clone(),
                id: node.id,
            })
            .collect(),
        links: graph
            .edges()
            .map(|edge| LinkRecord {
                attributes: edge.attributes.clone(),
                source: edge.source,
                target: edge.target,
            })
            .collect(),
    }
}

/// Rebuild a graph from a node-link document.
///
/// Fails on zero or duplicate node ids and on links naming ids absent from
/// `nodes`.
pub fn from_document(document: &NodeLinkDocument) -> Result<Graph> {
    if !document.directed {
        tracing::warn!("Loading undirected node-link document as a directed graph");
    }

    let mut graph = Graph::new();
    graph.set_attributes(document.graph.clone());

    for node in &document.nodes {
        graph.add_node(node.id, node.attributes.clone())?;
    }
    for link in &document.links {
        graph.add_edge_with(link.source, link.target, link.attributes.clone())?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Rebuilt graph from node-link document"
    );
    Ok(graph)
}
