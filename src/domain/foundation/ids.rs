//! Strongly-typed identifier value objects.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a decision graph node.
///
/// Node ids come from the content source and are stable across rebuilds.
/// The CMS delivers them as JSON numbers or strings; both forms deserialize
/// into the same canonical value, which always serializes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a NodeId from an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeIdVisitor;

        impl<'de> Visitor<'de> for NodeIdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer node id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
                Ok(NodeId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<NodeId, E> {
                Ok(NodeId::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
                Ok(NodeId::new(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
                Ok(NodeId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(NodeIdVisitor)
    }
}

/// Stable identifier for an edge within its owning node.
///
/// Assigned at generation time from declaration order, so two edges sharing
/// the same display text stay distinguishable during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Creates an EdgeId from its position in the owning node's edge list.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EdgeId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_deserializes_from_string() {
        let id: NodeId = serde_json::from_str(r#""n1""#).unwrap();
        assert_eq!(id, NodeId::new("n1"));
    }

    #[test]
    fn node_id_deserializes_from_integer() {
        let id: NodeId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NodeId::new("42"));
    }

    #[test]
    fn node_id_serializes_as_string() {
        let json = serde_json::to_string(&NodeId::from(7i64)).unwrap();
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn node_id_display_matches_inner_value() {
        assert_eq!(NodeId::new("n1").to_string(), "n1");
    }

    #[test]
    fn integer_and_string_forms_are_equal() {
        let from_int: NodeId = serde_json::from_str("42").unwrap();
        let from_str: NodeId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(from_int, from_str);
    }

    #[test]
    fn edge_id_round_trips_through_json() {
        let id = EdgeId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let back: EdgeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn edge_ids_compare_by_index() {
        assert_eq!(EdgeId::new(0), EdgeId::from(0));
        assert_ne!(EdgeId::new(0), EdgeId::new(1));
    }
}
