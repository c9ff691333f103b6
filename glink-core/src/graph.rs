//! Directed attributed graph powered by petgraph.
//!
//! Wraps a petgraph `DiGraph` with an id-to-index map so callers address
//! nodes by their integer id. Nodes and edges are never removed, which keeps
//! petgraph's index order equal to insertion order. Export relies on that.

use crate::error::{GraphError, Result};
use crate::types::{Attributes, NodeId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Node weight: the public id plus its attribute mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
    pub id: NodeId,
    pub attributes: Attributes,
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeData<'a> {
    pub source: NodeId,
    pub target: NodeId,
    pub attributes: &'a Attributes,
}

/// In-memory directed graph with per-node and per-edge attributes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    graph: DiGraph<NodeData, Attributes>,
    node_map: HashMap<NodeId, NodeIndex>,
    attributes: Attributes,
}

impl Graph {
    /// Create an empty directed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given attributes.
    ///
    /// Fails with [`GraphError::InvalidNodeId`] for id `0` and with
    /// [`GraphError::DuplicateNode`] if the id is already present.
    pub fn add_node(&mut self, id: NodeId, attributes: Attributes) -> Result<()> {
        if id == 0 {
            return Err(GraphError::InvalidNodeId { id });
        }
        if self.node_map.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        let idx = self.graph.add_node(NodeData { id, attributes });
        self.node_map.insert(id, idx);
        Ok(())
    }

    /// Add an edge without attributes.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<()> {
        self.add_edge_with(source, target, Attributes::new())
    }

    /// Add an edge carrying attributes.
    ///
    /// Both endpoints must already exist; otherwise fails with
    /// [`GraphError::UnknownNode`] naming the first missing id.
    pub fn add_edge_with(
        &mut self,
        source: NodeId,
        target: NodeId,
        attributes: Attributes,
    ) -> Result<()> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        self.graph.add_edge(s, t, attributes);
        Ok(())
    }

    fn index_of(&self, id: NodeId) -> Result<NodeIndex> {
        self.node_map
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownNode { id })
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeData<'_>> + '_ {
        self.graph.edge_references().map(move |edge| EdgeData {
            source: self.graph[edge.source()].id,
            target: self.graph[edge.target()].id,
            attributes: edge.weight(),
        })
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.node_map.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Check if a node exists in the graph.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_map.contains_key(&id)
    }

    /// Check if a directed edge `source -> target` exists.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        match (self.node_map.get(&source), self.node_map.get(&target)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    /// Always true; the graph type is directed.
    pub fn is_directed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph {
        // a(1) -> b(2) -> c(3), a(1) -> c(3)
        let mut graph = Graph::new();
        graph.add_node(1, Attributes::new()).unwrap();
        graph
            .add_node(2, Attributes::new().with("color", "blue"))
            .unwrap();
        graph.add_node(3, Attributes::new()).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph
    }

    #[test]
    fn test_counts() {
        let graph = create_test_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_node_insertion_order() {
        let mut graph = Graph::new();
        for id in [5, 1, 3] {
            graph.add_node(id, Attributes::new()).unwrap();
        }
        let ids: Vec<_> = graph.nodes().map(|n| n.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_edge_insertion_order() {
        let graph = create_test_graph();
        let pairs: Vec<_> = graph.edges().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (1, 3)]);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut graph = create_test_graph();
        let err = graph.add_node(2, Attributes::new()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { id: 2 }));
        // First insertion wins.
        assert_eq!(graph.node(2).unwrap().attributes.get("color"), Some("blue"));
    }

    #[test]
    fn test_zero_node_id_rejected() {
        let mut graph = Graph::new();
        let err = graph.add_node(0, Attributes::new()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidNodeId { id: 0 }));
        assert_eq!(graph.node_count(), 0);
        assert!(!graph.has_node(0));
    }

    #[test]
    fn test_edge_to_unknown_node_rejected() {
        let mut graph = create_test_graph();
        let err = graph.add_edge(1, 99).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { id: 99 }));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_has_edge_is_directed() {
        let graph = create_test_graph();
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert!(!graph.has_edge(1, 42));
    }

    #[test]
    fn test_has_node() {
        let graph = create_test_graph();
        assert!(graph.has_node(1));
        assert!(!graph.has_node(7));
    }

    #[test]
    fn test_edge_attributes() {
        let mut graph = create_test_graph();
        graph
            .add_edge_with(3, 1, Attributes::new().with("kind", "back"))
            .unwrap();
        let last = graph.edges().last().unwrap();
        assert_eq!((last.source, last.target), (3, 1));
        assert_eq!(last.attributes.get("kind"), Some("back"));
    }
}
