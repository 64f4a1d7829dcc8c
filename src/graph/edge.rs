//! Edge implementation for the keyed graph
//!
//! An edge joins two vertex keys. Its directionality decides which endpoint
//! answers to "tail" and which to "head":
//! - Bidirectional edges match either key in either role
//! - Directional edges match `tail` only as tail and `head` only as head
//!
//! Equality and hashing follow the same rules, so `A <-> B` and `B <-> A`
//! are the same edge while `A -> B`, `B -> A` and `A <-> B` are all distinct.

use super::store::{GraphError, GraphResult};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An edge between two vertex keys
///
/// Endpoints and directionality are fixed at construction. To change an
/// edge that is already stored in a graph, build a new one (see
/// [`Edge::reversed`], [`Edge::with_bidirectional`]) and swap it in with
/// `Graph::replace_edge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<K> {
    tail: K,
    head: K,
    bidirectional: bool,
}

impl<K> Edge<K> {
    /// Create an edge with an explicit directionality flag
    pub fn of(tail: K, head: K, bidirectional: bool) -> Self {
        Edge {
            tail,
            head,
            bidirectional,
        }
    }

    /// Create an edge whose endpoints are interchangeable
    pub fn bidirectional(tail: K, head: K) -> Self {
        Self::of(tail, head, true)
    }

    /// Create an edge going from `tail` to `head`
    pub fn directional(tail: K, head: K) -> Self {
        Self::of(tail, head, false)
    }

    /// Create an edge from endpoints that may be absent
    ///
    /// Fails with [`GraphError::InvalidArgument`] if either endpoint is `None`.
    pub fn try_of(tail: Option<K>, head: Option<K>, bidirectional: bool) -> GraphResult<Self> {
        let tail = tail.ok_or_else(|| GraphError::InvalidArgument("edge tail is required".into()))?;
        let head = head.ok_or_else(|| GraphError::InvalidArgument("edge head is required".into()))?;
        Ok(Self::of(tail, head, bidirectional))
    }

    pub fn tail(&self) -> &K {
        &self.tail
    }

    pub fn head(&self) -> &K {
        &self.head
    }

    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Both endpoints as `(tail, head)`
    pub fn endpoints(&self) -> (&K, &K) {
        (&self.tail, &self.head)
    }

    /// The same edge with tail and head swapped
    pub fn reversed(self) -> Self {
        Self::of(self.head, self.tail, self.bidirectional)
    }

    /// The same endpoints with a different directionality
    pub fn with_bidirectional(self, bidirectional: bool) -> Self {
        Self::of(self.tail, self.head, bidirectional)
    }
}

impl<K: PartialEq> Edge<K> {
    /// Check if `key` can act as the tail of this edge
    ///
    /// True for the tail key, and also for the head key when the edge is
    /// bidirectional.
    pub fn has_tail(&self, key: &K) -> bool {
        self.tail == *key || (self.bidirectional && self.head == *key)
    }

    /// Check if `key` can act as the head of this edge
    pub fn has_head(&self, key: &K) -> bool {
        self.head == *key || (self.bidirectional && self.tail == *key)
    }

    /// Check if `key` is either endpoint, regardless of direction
    pub fn touches(&self, key: &K) -> bool {
        self.has_tail(key) || self.has_head(key)
    }

    /// Check if this edge joins two keys in either orientation, ignoring direction
    pub fn connects(&self, a: &K, b: &K) -> bool {
        (self.tail == *a && self.head == *b) || (self.tail == *b && self.head == *a)
    }

    /// Check if this edge can be walked from `tail` to `head`
    pub fn matches(&self, tail: &K, head: &K) -> bool {
        self.has_tail(tail) && self.has_head(head)
    }

    /// One-sided match of `other`'s endpoints under this edge's directionality
    fn accepts(&self, other: &Self) -> bool {
        self.bidirectional == other.bidirectional
            && self.has_tail(&other.tail)
            && self.has_head(&other.head)
    }
}

impl<K: PartialEq> PartialEq for Edge<K> {
    fn eq(&self, other: &Self) -> bool {
        // Checked both ways so a self-loop never equals a non-loop edge
        self.accepts(other) && other.accepts(self)
    }
}

impl<K: Eq> Eq for Edge<K> {}

impl<K: Hash> Hash for Edge<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative in the endpoints so swapped bidirectional edges collide
        let tail = endpoint_hash(&self.tail);
        let head = endpoint_hash(&self.head);
        state.write_u64(tail.wrapping_add(head).wrapping_mul(31));
    }
}

fn endpoint_hash<K: Hash>(key: &K) -> u64 {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

impl<K: fmt::Display> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.bidirectional { "<->" } else { "->" };
        write!(f, "{} {} {}", self.tail, arrow, self.head)
    }
}
