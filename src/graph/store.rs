//! In-memory graph storage implementation
//!
//! Vertices live in an insertion-ordered `key -> content` map and edges in
//! an ordered vector. Every stored edge has both endpoints present in the
//! vertex map:
//! - `add_edge`, `add_edges` and `set_edges` silently drop edges with a
//!   missing endpoint
//! - `remove_vertex` drops every edge touching the removed key
//!
//! Read-only edge scans run on the rayon pool once the edge vector reaches
//! [`GraphConfig::parallel_threshold`]. Mutations of the edge vector are
//! always applied afterwards by the single `&mut self` writer.

use super::config::GraphConfig;
use super::edge::Edge;
use super::vertex::Vertex;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {0} not found")]
    VertexNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A mutable graph of keyed vertices and (bi)directional edges
#[derive(Debug, Clone)]
pub struct Graph<K, T> {
    /// Vertex storage: key -> content, in insertion order
    vertices: IndexMap<K, T>,

    /// Edge storage, in insertion order
    edges: Vec<Edge<K>>,

    config: GraphConfig,
}

impl<K, T> Graph<K, T> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with explicit configuration
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            vertices: IndexMap::new(),
            edges: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// All vertices as `key -> content`
    pub fn vertices(&self) -> &IndexMap<K, T> {
        &self.vertices
    }

    /// All edges, in insertion order
    pub fn all_edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}

impl<K, T> Graph<K, T>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + Sync,
{
    /// Create a graph pre-seeded with `key -> content` pairs
    pub fn with_vertices(vertices: impl IntoIterator<Item = (K, T)>) -> Self {
        let mut graph = Self::new();
        graph.vertices.extend(vertices);
        graph
    }

    /// Insert vertices; a later vertex with an existing key overwrites its content
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex<K, T>>) {
        self.vertices
            .extend(vertices.into_iter().map(Vertex::into_parts));
    }

    /// Get the content stored under `key`
    pub fn get_vertex(&self, key: &K) -> Option<&T> {
        self.vertices.get(key)
    }

    pub fn has_vertex(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Insert an edge if both of its endpoints are vertices of this graph
    ///
    /// Returns whether the edge was inserted. A missing endpoint is not an
    /// error; the edge is just ignored.
    pub fn add_edge(&mut self, edge: Edge<K>) -> bool {
        if !self.has_endpoints(&edge) {
            debug!(?edge, "Rejected edge with missing endpoint");
            return false;
        }
        trace!(?edge, "Added edge");
        self.edges.push(edge);
        true
    }

    /// Insert every edge whose endpoints are vertices of this graph
    ///
    /// Returns the number of edges inserted.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge<K>>) -> usize
    where
        T: Sync,
    {
        let accepted = self.filter_valid(edges.into_iter().collect());
        let added = accepted.len();
        self.edges.extend(accepted);
        debug!(added, total = self.edges.len(), "Added edges");
        added
    }

    /// Replace all edges with those in `edges` whose endpoints are vertices
    ///
    /// Returns the number of edges kept.
    pub fn set_edges(&mut self, edges: impl IntoIterator<Item = Edge<K>>) -> usize
    where
        T: Sync,
    {
        self.edges = self.filter_valid(edges.into_iter().collect());
        debug!(kept = self.edges.len(), "Replaced edges");
        self.edges.len()
    }

    /// Get all edges touching `key` in either role
    pub fn get_edges(&self, key: &K) -> Vec<&Edge<K>> {
        self.scan(|edge| edge.touches(key))
    }

    /// Get all edges touching `vertex`, if it matches the stored vertex
    ///
    /// Returns nothing when the stored content for the key differs from
    /// `vertex.content()`, or when the key is not in the graph.
    pub fn get_edges_for_vertex(&self, vertex: &Vertex<K, T>) -> Vec<&Edge<K>>
    where
        T: PartialEq,
    {
        match self.get_vertex(vertex.key()) {
            Some(content) if content == vertex.content() => self.get_edges(vertex.key()),
            _ => Vec::new(),
        }
    }

    /// Get any one edge that can be walked from `tail` to `head`
    ///
    /// When several edges qualify, which one is returned is unspecified.
    pub fn get_edge(&self, tail: &K, head: &K) -> Option<&Edge<K>> {
        if self.config.use_parallel(self.edges.len()) {
            self.edges.par_iter().find_any(|edge| edge.matches(tail, head))
        } else {
            self.edges.iter().find(|edge| edge.matches(tail, head))
        }
    }

    /// Get every edge that can be walked from `tail` to `head`
    pub fn get_edges_between(&self, tail: &K, head: &K) -> Vec<&Edge<K>> {
        self.scan(|edge| edge.matches(tail, head))
    }

    /// Check if an edge equal to `edge` is stored
    pub fn has_edge(&self, edge: &Edge<K>) -> bool {
        self.position_of(edge).is_some()
    }

    /// Remove a vertex along with every edge touching it
    pub fn remove_vertex(&mut self, key: &K) -> GraphResult<Vertex<K, T>> {
        let (key, content) = self
            .vertices
            .shift_remove_entry(key)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", key)))?;

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(&key));
        debug!(?key, removed_edges = before - self.edges.len(), "Removed vertex");

        Ok(Vertex::of(content, key))
    }

    /// Remove one edge equal to `tail <-> head`
    ///
    /// A directional edge between the same keys is left in place.
    pub fn remove_edge(&mut self, tail: &K, head: &K) -> Option<Edge<K>> {
        self.remove_edge_of(tail, head, true)
    }

    /// Remove one edge equal to `Edge::of(tail, head, bidirectional)`
    pub fn remove_edge_of(&mut self, tail: &K, head: &K, bidirectional: bool) -> Option<Edge<K>> {
        let probe = Edge::of(tail.clone(), head.clone(), bidirectional);
        let idx = self.position_of(&probe)?;
        trace!(edge = ?probe, "Removed edge");
        Some(self.edges.remove(idx))
    }

    /// Swap one stored edge equal to `old` for `new`, keeping its position
    ///
    /// Returns `false` without changing anything if `old` is not stored or
    /// `new` has an endpoint that is not a vertex.
    pub fn replace_edge(&mut self, old: &Edge<K>, new: Edge<K>) -> bool {
        if !self.has_endpoints(&new) {
            debug!(edge = ?new, "Rejected replacement edge with missing endpoint");
            return false;
        }
        match self.position_of(old) {
            Some(idx) => {
                self.edges[idx] = new;
                true
            }
            None => false,
        }
    }

    fn has_endpoints(&self, edge: &Edge<K>) -> bool {
        self.vertices.contains_key(edge.tail()) && self.vertices.contains_key(edge.head())
    }

    fn position_of(&self, edge: &Edge<K>) -> Option<usize> {
        self.edges.iter().position(|stored| stored == edge)
    }

    /// Filter edges by `predicate`, in storage order
    fn scan<F>(&self, predicate: F) -> Vec<&Edge<K>>
    where
        F: Fn(&Edge<K>) -> bool + Sync + Send,
    {
        if self.config.use_parallel(self.edges.len()) {
            self.edges.par_iter().filter(|edge| predicate(edge)).collect()
        } else {
            self.edges.iter().filter(|edge| predicate(edge)).collect()
        }
    }

    /// Keep the edges whose endpoints are vertices, in input order
    fn filter_valid(&self, edges: Vec<Edge<K>>) -> Vec<Edge<K>>
    where
        T: Sync,
    {
        let total = edges.len();
        let valid: Vec<Edge<K>> = if self.config.use_parallel(total) {
            edges
                .into_par_iter()
                .filter(|edge| self.has_endpoints(edge))
                .collect()
        } else {
            edges
                .into_iter()
                .filter(|edge| self.has_endpoints(edge))
                .collect()
        };
        if valid.len() < total {
            debug!(dropped = total - valid.len(), "Dropped edges with missing endpoints");
        }
        valid
    }
}

impl<K, T> Default for Graph<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> FromIterator<Vertex<K, T>> for Graph<K, T>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + Sync,
{
    fn from_iter<I: IntoIterator<Item = Vertex<K, T>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_vertices(iter);
        graph
    }
}

impl<K: fmt::Display, T> fmt::Display for Graph<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph: {{\n  V: [")?;
        for (i, key) in self.vertices.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]\n  E: ")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, "\n     ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "\n}}")
    }
}
