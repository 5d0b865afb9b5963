//! Node and edge data model.
//!
//! These are the plain-data building blocks of a decision graph, exactly as
//! they appear in the generated artifact. Traversal never mutates them; all
//! per-session state lives in the traversal engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EdgeId, NodeId};

/// One selectable answer on a node, pointing at the next node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Stable identifier within the owning node, assigned at generation time.
    pub id: EdgeId,

    /// The answer-option label shown to the user.
    pub text: String,

    /// Identifier of the node this edge leads to.
    pub target_node_id: NodeId,
}

impl Edge {
    /// Creates an edge.
    pub fn new(id: EdgeId, text: impl Into<String>, target_node_id: NodeId) -> Self {
        Self {
            id,
            text: text.into(),
            target_node_id,
        }
    }
}

/// One question or recommendation point in the decision graph.
///
/// A node is terminal iff its edge list is empty; `is_task_node` is an
/// informational flag for presentation and has no traversal semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Opaque unique identifier, stable across rebuilds.
    pub id: NodeId,

    /// Whether this node is eligible as a traversal entry point.
    pub is_start: bool,

    /// Display position among start nodes; no effect on traversal.
    #[serde(default)]
    pub order: i32,

    /// Marks terminal "recommendation" nodes, informational only.
    pub is_task_node: bool,

    /// Rendered rich-text content (HTML) describing the question.
    pub text: String,

    /// Answer options in declaration order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Node {
    /// Returns true if this node has no outgoing edges.
    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }

    /// Looks up an edge of this node by its stable identifier.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }
}
