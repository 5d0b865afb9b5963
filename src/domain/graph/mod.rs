//! Graph model - validated, queryable representation of nodes and edges.
//!
//! Pure data plus validation; nothing here mutates during traversal.

mod aggregate;
mod node;

pub use aggregate::{DecisionGraph, IntegrityViolation};
pub use node::{Edge, Node};
