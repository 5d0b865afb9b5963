//! ContentSource port - the fetch contract against the CMS.
//!
//! The generator consumes raw content records through this port without
//! knowing the transport. Whether drafts/unpublished records are included is
//! a fetch-time decision made by the adapter's configuration, never by the
//! generator.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::NodeId;

/// Reference to another node inside a path entry, as the CMS nests it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentNodeRef {
    pub id: NodeId,
}

/// One answer option on a raw content record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentPathEntry {
    /// The answer-option label.
    pub text: String,
    /// The nested node reference this entry leads to.
    pub target: ContentNodeRef,
}

/// A raw decision-graph record as delivered by the content source.
///
/// `text` is unrendered markup; the generator turns it into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentRecord {
    pub id: NodeId,
    #[serde(default)]
    pub start: bool,
    #[serde(default)]
    pub tasknode: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub path: Vec<ContentPathEntry>,
}

/// Errors raised while fetching content records.
///
/// All of these are fatal to a generation run; the generator has no retry
/// loop of its own.
#[derive(Debug, Error)]
pub enum ContentSourceError {
    /// The content source could not be reached.
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    /// The content source answered with a non-success status.
    #[error("content source returned status {0}")]
    Status(u16),

    /// The response body could not be decoded into content records.
    #[error("content payload could not be decoded: {0}")]
    Malformed(String),
}

/// Port for fetching the full list of raw decision-graph records.
///
/// Implementations must return the complete collection in one call; the
/// generator performs a single bulk transform, never incremental fetches.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches all decision-graph content records.
    async fn fetch_nodes(&self) -> Result<Vec<ContentRecord>, ContentSourceError>;
}
