//! Traversal engine - the stateful walk through a decision graph.
//!
//! The engine is the single source of truth for "where the user currently
//! is". It owns the path from the chosen start node to the displayed node,
//! the selection state per visited node, and the undo/reset history. One
//! engine instance serves exactly one user interaction stream; hosts with
//! multiple concurrent sessions create one engine each.
//!
//! Edge selection is derived state: the engine records the chosen edge per
//! step and computes each edge's tri-state on demand, so the shared graph is
//! never mutated.

use std::sync::Arc;

use crate::domain::foundation::{EdgeId, NodeId};
use crate::domain::graph::{DecisionGraph, Node};
use crate::domain::traversal::TraversalError;

/// Stateful walker over a [`DecisionGraph`].
///
/// # State machine
///
/// - `Uninitialized` - no steps; only `initialize` and `reset` do anything.
/// - `AtNode` - `steps` is non-empty, `steps[0]` is the chosen start node.
///
/// `initialize` is re-entrant from any state. A node with no edges is
/// terminal for display purposes only; `undo` and `reset` stay legal.
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    graph: Arc<DecisionGraph>,
    /// Positions of the visited nodes in the graph's declaration order.
    steps: Vec<usize>,
    /// Chosen edge per step index, parallel to `steps`. The entry for the
    /// last step is the pending selection (set when an advance fails on a
    /// dangling reference, cleared on undo).
    chosen: Vec<Option<EdgeId>>,
    started: bool,
}

impl TraversalEngine {
    /// Creates an uninitialized engine over the given graph.
    pub fn new(graph: Arc<DecisionGraph>) -> Self {
        Self {
            graph,
            steps: Vec::new(),
            chosen: Vec::new(),
            started: false,
        }
    }

    /// Starts (or restarts) a walk at the given start node.
    ///
    /// Clears any prior state and sets the path to the single start node.
    ///
    /// # Errors
    ///
    /// - `InvalidStartNode` if the node is missing from the graph or not
    ///   flagged as a start node
    pub fn initialize(&mut self, start_node_id: &NodeId) -> Result<(), TraversalError> {
        let position = self
            .graph
            .position(start_node_id)
            .filter(|&position| self.graph.nodes()[position].is_start)
            .ok_or_else(|| TraversalError::InvalidStartNode {
                node_id: start_node_id.clone(),
            })?;

        self.steps.clear();
        self.chosen.clear();
        self.steps.push(position);
        self.chosen.push(None);
        self.started = false;
        Ok(())
    }

    /// Selects an answer on the current node and advances to its target.
    ///
    /// The selection mark is applied before the target id is resolved, so a
    /// dangling reference leaves the user's choice visible while the walk
    /// stays unadvanced.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` if no walk is active
    /// - `UnknownEdge` if the edge does not belong to the current node
    /// - `DanglingReference` if the edge's target id is not in the graph;
    ///   `steps` and `started` are left unchanged
    pub fn select_edge(&mut self, edge_id: EdgeId) -> Result<&Node, TraversalError> {
        let &current_position = self.steps.last().ok_or(TraversalError::NotInitialized)?;
        let current = &self.graph.nodes()[current_position];

        let target_id = current
            .edge(edge_id)
            .map(|edge| edge.target_node_id.clone())
            .ok_or_else(|| TraversalError::UnknownEdge {
                node_id: current.id.clone(),
                edge_id,
            })?;

        let last = self.chosen.len() - 1;
        self.chosen[last] = Some(edge_id);

        let Some(target_position) = self.graph.position(&target_id) else {
            return Err(TraversalError::DanglingReference { target_id });
        };

        self.steps.push(target_position);
        self.chosen.push(None);
        self.started = true;
        Ok(&self.graph.nodes()[target_position])
    }

    /// Removes the last step, clearing the selection on the node returned to
    /// so the user can re-choose.
    ///
    /// Undoing from the start node alone is a no-op, not an error.
    pub fn undo(&mut self) {
        if self.steps.len() <= 1 {
            return;
        }
        self.steps.pop();
        self.chosen.pop();
        if let Some(slot) = self.chosen.last_mut() {
            *slot = None;
        }
        self.started = self.steps.len() > 1;
    }

    /// Clears the walk entirely. Idempotent, valid from any state.
    pub fn reset(&mut self) {
        self.steps.clear();
        self.chosen.clear();
        self.started = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read access for the presentation layer
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current path from the start node to the displayed node.
    pub fn steps(&self) -> Vec<&Node> {
        self.steps
            .iter()
            .map(|&position| &self.graph.nodes()[position])
            .collect()
    }

    /// Returns the node currently on top of the path, if any.
    pub fn current_node(&self) -> Option<&Node> {
        self.steps
            .last()
            .map(|&position| &self.graph.nodes()[position])
    }

    /// True once the user has confirmed at least one edge selection.
    pub fn started(&self) -> bool {
        self.started
    }

    /// True once a walk has been initialized and not reset.
    pub fn is_initialized(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of nodes in the current path.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// The edge chosen at the given step index, if any.
    pub fn chosen_edge(&self, step_index: usize) -> Option<EdgeId> {
        self.chosen.get(step_index).copied().flatten()
    }

    /// Tri-state selection of an edge at a step: `None` while no edge of
    /// that step has been chosen, `Some(true)` for the chosen edge,
    /// `Some(false)` for its siblings.
    pub fn edge_state(&self, step_index: usize, edge_id: EdgeId) -> Option<bool> {
        self.chosen_edge(step_index).map(|chosen| chosen == edge_id)
    }

    /// The graph this engine walks.
    pub fn graph(&self) -> &DecisionGraph {
        &self.graph
    }
}
