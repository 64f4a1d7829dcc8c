//! Keygraph
//!
//! A generic, in-memory, mutable graph container: a set of keyed vertices
//! (`key -> content`) and a set of edges between vertex keys. Edges are
//! either directional or bidirectional, and their equality follows their
//! directionality rather than the order their endpoints were given in.
//!
//! The graph never stores an edge whose endpoints are not both vertices:
//! - Edge insertion silently skips edges with a missing endpoint
//! - Removing a vertex removes every edge touching it
//!
//! ## Example Usage
//!
//! ```rust
//! use keygraph::{Edge, Graph, Vertex};
//!
//! let mut graph: Graph<u32, &str> = Graph::new();
//! graph.add_vertices([Vertex::of("Alice", 1), Vertex::of("Bob", 2)]);
//!
//! assert!(graph.add_edge(Edge::bidirectional(1, 2)));
//! assert!(!graph.add_edge(Edge::directional(1, 3)));
//!
//! // Bidirectional edges answer to either orientation
//! assert_eq!(graph.get_edge(&2, &1), Some(&Edge::bidirectional(2, 1)));
//!
//! let bob = graph.remove_vertex(&2).unwrap();
//! assert_eq!(bob.content(), &"Bob");
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, Graph, GraphConfig, GraphError, GraphResult, Vertex};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
