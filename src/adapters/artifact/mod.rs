//! Artifact adapter - the decision graph file on disk.
//!
//! The generator writes the node sequence as pretty-printed UTF-8 JSON,
//! fully overwriting any prior artifact. Hosts load the same file back at
//! session start; the traversal engine itself never touches the filesystem.

use std::path::Path;

use thiserror::Error;
use tokio::fs;

use crate::domain::graph::Node;

/// Errors raised while reading or writing the artifact file.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Writes the node sequence to the artifact path, overwriting any prior
/// file. Parent directories are created as needed.
pub async fn write_nodes(path: &Path, nodes: &[Node]) -> Result<(), ArtifactError> {
    let json = serde_json::to_string_pretty(nodes)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, json).await?;
    Ok(())
}

/// Reads the node sequence back from an artifact file.
pub async fn read_nodes(path: &Path) -> Result<Vec<Node>, ArtifactError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
