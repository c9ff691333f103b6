//! glink core - fixed graph construction and node-link JSON export.
//!
//! Builds a small directed graph from literal data, converts it to the
//! node-link convention (`nodes` and `links` lists), renders it as JSON and
//! writes it to a file. Written documents can be read back into a graph.
//!
//! # Features
//!
//! - **petgraph storage**: nodes addressed by integer id, insertion order kept
//! - **Ordered attributes**: per-node and per-edge string mappings
//! - **Layouts**: compact or space-indented JSON
//! - **Round-trip**: parse a document back into a graph
//!
//! # Usage
//!
//! ```no_run
//! use glink_core::{exporter, fixture};
//! use std::path::Path;
//!
//! let variant = fixture::Variant::Styled;
//! let graph = fixture::build(variant)?;
//! let outcome = exporter::export_graph(&graph, variant.profile().layout, Path::new("graph.json"))?;
//! print!("{}", outcome.content);
//! # Ok::<(), glink_core::GraphError>(())
//! ```

pub mod error;
pub mod exporter;
pub mod fixture;
pub mod graph;
pub mod node_link;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::Graph;
pub use node_link::NodeLinkDocument;
pub use types::{Attributes, NodeId};

/// Get the version of glink-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
