//! Traversal-specific error types.

use thiserror::Error;

use crate::domain::foundation::{EdgeId, NodeId};

/// Errors raised by the traversal engine.
///
/// Every failure is returned to the caller; the engine never logs and
/// swallows, and a failed operation leaves the walk unadvanced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// An edge's target id resolved to no node in the graph.
    ///
    /// This is a data-integrity defect that slipped past artifact
    /// validation, not a normal runtime condition.
    #[error("edge target references missing node '{target_id}'")]
    DanglingReference { target_id: NodeId },

    /// `initialize` was called with a node that is not a start node of the
    /// graph. A caller contract violation, not a recoverable condition.
    #[error("node '{node_id}' is not a start node of this graph")]
    InvalidStartNode { node_id: NodeId },

    /// An operation that requires an active walk was called before
    /// `initialize`.
    #[error("traversal has not been initialized with a start node")]
    NotInitialized,

    /// The selected edge does not belong to the current node.
    #[error("edge {edge_id} does not belong to current node '{node_id}'")]
    UnknownEdge { node_id: NodeId, edge_id: EdgeId },
}
