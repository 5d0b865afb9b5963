//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier value objects that form the vocabulary of the
//! decision graph domain.

mod ids;

pub use ids::{EdgeId, NodeId};
