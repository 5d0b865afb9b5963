//! Decision graph aggregate.
//!
//! A validated, queryable set of nodes. The graph is immutable after
//! construction; traversal state lives in the engine, never here.
//!
//! # Invariants
//!
//! - every edge target references an existing node
//! - a usable graph has at least one start node
//! - node ids are unique
//!
//! Construction never fails on invalid data. `validate` reports every
//! violation in one pass so a publishing pipeline can list all problems
//! instead of stopping at the first.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::foundation::{EdgeId, NodeId};
use crate::domain::graph::Node;

/// A single data-integrity finding reported by [`DecisionGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// An edge references a node id that does not exist in the graph.
    #[error("edge {edge_id} of node '{node_id}' targets missing node '{target_id}'")]
    DanglingEdgeTarget {
        node_id: NodeId,
        edge_id: EdgeId,
        target_id: NodeId,
    },

    /// The graph has no node flagged as a start node.
    #[error("graph has no start nodes")]
    NoStartNodes,

    /// A node id appears more than once.
    #[error("node id '{0}' is declared more than once")]
    DuplicateNodeId(NodeId),
}

/// The decision graph: a set of nodes unique by id.
///
/// Nodes keep their artifact declaration order; lookups go through an
/// id-to-position index built at construction time.
#[derive(Debug, Clone)]
pub struct DecisionGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl DecisionGraph {
    /// Builds a graph from the deserialized artifact node sequence.
    ///
    /// Invalid data is accepted here; run [`DecisionGraph::validate`] to get
    /// the findings. When an id is duplicated, lookups resolve to its first
    /// occurrence.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            index.entry(node.id.clone()).or_insert(position);
        }
        Self { nodes, index }
    }

    /// Returns all nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
        self.position(id).map(|position| &self.nodes[position])
    }

    /// Returns the position of a node in the declaration order.
    pub(crate) fn position(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the start nodes sorted ascending by `order`.
    ///
    /// Nodes with equal `order` keep their declaration order.
    pub fn start_nodes(&self) -> Vec<&Node> {
        let mut starts: Vec<&Node> = self.nodes.iter().filter(|node| node.is_start).collect();
        starts.sort_by_key(|node| node.order);
        starts
    }

    /// Checks the graph invariants and returns every violation found.
    ///
    /// An empty result means the graph is safe to publish. Findings are
    /// reported in node declaration order; a duplicated id is reported once.
    pub fn validate(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        let mut counts: HashMap<&NodeId, usize> = HashMap::new();
        for node in &self.nodes {
            *counts.entry(&node.id).or_insert(0) += 1;
        }
        let mut reported = HashSet::new();
        for node in &self.nodes {
            if counts[&node.id] > 1 && reported.insert(&node.id) {
                violations.push(IntegrityViolation::DuplicateNodeId(node.id.clone()));
            }
        }

        for node in &self.nodes {
            for edge in &node.edges {
                if !self.index.contains_key(&edge.target_node_id) {
                    violations.push(IntegrityViolation::DanglingEdgeTarget {
                        node_id: node.id.clone(),
                        edge_id: edge.id,
                        target_id: edge.target_node_id.clone(),
                    });
                }
            }
        }

        if !self.nodes.iter().any(|node| node.is_start) {
            violations.push(IntegrityViolation::NoStartNodes);
        }

        violations
    }
}
