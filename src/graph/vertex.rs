//! Vertex value object
//!
//! The graph stores vertices as `key -> content` entries. `Vertex` is only
//! the transfer form used for bulk insertion, content-checked queries and
//! the value returned when a vertex is removed.

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// A key paired with its content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex<K, T> {
    content: T,
    key: K,
}

impl<K, T> Vertex<K, T> {
    /// Create a vertex. Note the argument order: content first, then key.
    pub fn of(content: T, key: K) -> Self {
        Vertex { content, key }
    }

    /// Create a vertex from parts that may be absent
    pub fn try_of(content: Option<T>, key: Option<K>) -> GraphResult<Self> {
        let content = content.ok_or_else(|| GraphError::InvalidArgument("vertex content is required".into()))?;
        let key = key.ok_or_else(|| GraphError::InvalidArgument("vertex key is required".into()))?;
        Ok(Self::of(content, key))
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    /// Consume the vertex, returning `(key, content)`
    pub fn into_parts(self) -> (K, T) {
        (self.key, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_vertex() {
        let vertex = Vertex::of("A", 10);
        assert_eq!(vertex.key(), &10);
        assert_eq!(vertex.content(), &"A");
        assert_eq!(vertex.into_parts(), (10, "A"));
    }

    #[test]
    fn test_equality_covers_key_and_content() {
        assert_eq!(Vertex::of("A", 1), Vertex::of("A", 1));
        assert_ne!(Vertex::of("A", 1), Vertex::of("B", 1));
        assert_ne!(Vertex::of("A", 1), Vertex::of("A", 2));
    }

    #[test]
    fn test_try_of() {
        let missing_key = Vertex::<u32, &str>::try_of(Some("A"), None);
        assert!(matches!(missing_key, Err(GraphError::InvalidArgument(_))));

        let missing_content = Vertex::<u32, &str>::try_of(None, Some(1));
        assert!(matches!(missing_content, Err(GraphError::InvalidArgument(_))));

        assert_eq!(Vertex::try_of(Some("A"), Some(1)).unwrap(), Vertex::of("A", 1));
    }
}
