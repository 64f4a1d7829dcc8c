//! Core graph implementation
//!
//! This module implements the keyed graph data model with:
//! - Vertices stored as `key -> content` entries
//! - Directional and bidirectional edges between vertex keys
//! - Referential integrity between the edge set and the vertex set

pub mod config;
pub mod edge;
pub mod store;
pub mod vertex;

// Re-export main types
pub use config::GraphConfig;
pub use edge::Edge;
pub use store::{Graph, GraphError, GraphResult};
pub use vertex::Vertex;
