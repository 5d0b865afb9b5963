//! GenerateGraphHandler - the build-time graph generation pipeline.
//!
//! Fetches the full list of raw content records, renders each free-text
//! field to HTML, flattens path entries to edges, and writes the resulting
//! node sequence as the JSON artifact. Runs once per build, out-of-band from
//! user interaction.
//!
//! Generation is all-or-nothing: the single artifact write happens only
//! after the full fetch and transform succeeded, so a failed run leaves the
//! previous artifact in place untouched. Re-running the generator is the
//! only recovery path.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::adapters::artifact::{self, ArtifactError};
use crate::application::markdown;
use crate::domain::foundation::EdgeId;
use crate::domain::graph::{Edge, Node};
use crate::ports::{ContentRecord, ContentSource, ContentSourceError};

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// No content source is configured; nothing was produced. Deliberate
    /// no-op for environments where the feature is disabled.
    Skipped,

    /// The artifact was written.
    Generated { nodes: usize, path: PathBuf },
}

/// Errors that make a generation run fail.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("content fetch failed: {0}")]
    ContentFetch(#[from] ContentSourceError),

    #[error("artifact write failed: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Handler for generating the decision graph artifact.
pub struct GenerateGraphHandler {
    source: Option<Arc<dyn ContentSource>>,
    output_path: PathBuf,
}

impl GenerateGraphHandler {
    /// Creates a handler. Passing `None` as the source disables generation;
    /// [`GenerateGraphHandler::generate`] then reports `Skipped`.
    pub fn new(source: Option<Arc<dyn ContentSource>>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_path: output_path.into(),
        }
    }

    /// Runs one generation pass.
    ///
    /// # Errors
    ///
    /// Fetch and write failures are fatal to the run; nothing is written and
    /// any previous artifact stays intact.
    pub async fn generate(&self) -> Result<GenerationOutcome, GeneratorError> {
        let Some(source) = &self.source else {
            tracing::info!("No content source configured, skipping decision graph generation");
            return Ok(GenerationOutcome::Skipped);
        };

        let records = source.fetch_nodes().await?;
        let nodes: Vec<Node> = records.into_iter().map(map_record).collect();

        artifact::write_nodes(&self.output_path, &nodes).await?;

        tracing::info!(
            nodes = nodes.len(),
            path = %self.output_path.display(),
            "Decision graph artifact written"
        );

        Ok(GenerationOutcome::Generated {
            nodes: nodes.len(),
            path: self.output_path.clone(),
        })
    }
}

/// Maps a raw content record to an artifact node: renders the text field and
/// flattens each path entry to an edge with a stable id from declaration
/// order.
fn map_record(record: ContentRecord) -> Node {
    let edges = record
        .path
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Edge::new(EdgeId::new(index as u32), entry.text, entry.target.id))
        .collect();

    Node {
        id: record.id,
        is_start: record.start,
        order: record.order,
        is_task_node: record.tasknode,
        text: markdown::render(&record.text),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NodeId;
    use crate::ports::{ContentNodeRef, ContentPathEntry};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct StaticSource {
        records: Vec<ContentRecord>,
    }

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch_nodes(&self) -> Result<Vec<ContentRecord>, ContentSourceError> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn fetch_nodes(&self) -> Result<Vec<ContentRecord>, ContentSourceError> {
            Err(ContentSourceError::Unavailable("connection refused".into()))
        }
    }

    fn sample_records() -> Vec<ContentRecord> {
        vec![
            ContentRecord {
                id: NodeId::new("n1"),
                start: true,
                tasknode: false,
                order: 1,
                text: "**hi**".to_string(),
                path: vec![ContentPathEntry {
                    text: "yes".to_string(),
                    target: ContentNodeRef {
                        id: NodeId::new("n2"),
                    },
                }],
            },
            ContentRecord {
                id: NodeId::new("n2"),
                start: false,
                tasknode: true,
                order: 0,
                text: "done".to_string(),
                path: vec![],
            },
        ]
    }

    #[tokio::test]
    async fn no_source_skips_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uxdg-data.json");
        let handler = GenerateGraphHandler::new(None, &path);

        let outcome = handler.generate().await.unwrap();

        assert_eq!(outcome, GenerationOutcome::Skipped);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn generates_artifact_from_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uxdg-data.json");
        let source = Arc::new(StaticSource {
            records: sample_records(),
        });
        let handler = GenerateGraphHandler::new(Some(source), &path);

        let outcome = handler.generate().await.unwrap();

        assert_eq!(
            outcome,
            GenerationOutcome::Generated {
                nodes: 2,
                path: path.clone(),
            }
        );

        let nodes = artifact::read_nodes(&path).await.unwrap();
        assert_eq!(nodes.len(), 2);

        let first = &nodes[0];
        assert_eq!(first.id, NodeId::new("n1"));
        assert!(first.is_start);
        assert!(first.text.contains("<strong>hi</strong>"));
        assert_eq!(first.edges.len(), 1);
        assert_eq!(first.edges[0].id, EdgeId::new(0));
        assert_eq!(first.edges[0].text, "yes");
        assert_eq!(first.edges[0].target_node_id, NodeId::new("n2"));

        let second = &nodes[1];
        assert!(second.is_task_node);
        assert!(second.edges.is_empty());
    }

    #[tokio::test]
    async fn edge_ids_follow_declaration_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uxdg-data.json");
        let mut records = sample_records();
        records[0].path.push(ContentPathEntry {
            text: "no".to_string(),
            target: ContentNodeRef {
                id: NodeId::new("n2"),
            },
        });
        let handler =
            GenerateGraphHandler::new(Some(Arc::new(StaticSource { records })), &path);

        handler.generate().await.unwrap();

        let nodes = artifact::read_nodes(&path).await.unwrap();
        let ids: Vec<u32> = nodes[0].edges.iter().map(|edge| edge.id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_previous_artifact_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uxdg-data.json");

        // Seed a previous artifact.
        let seeded = GenerateGraphHandler::new(
            Some(Arc::new(StaticSource {
                records: sample_records(),
            })),
            &path,
        );
        seeded.generate().await.unwrap();

        let failing = GenerateGraphHandler::new(Some(Arc::new(FailingSource)), &path);
        let result = failing.generate().await;

        assert!(matches!(
            result,
            Err(GeneratorError::ContentFetch(ContentSourceError::Unavailable(_)))
        ));
        let nodes = artifact::read_nodes(&path).await.unwrap();
        assert_eq!(nodes.len(), 2);
    }

    #[tokio::test]
    async fn rerun_overwrites_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uxdg-data.json");

        let first = GenerateGraphHandler::new(
            Some(Arc::new(StaticSource {
                records: sample_records(),
            })),
            &path,
        );
        first.generate().await.unwrap();

        let second = GenerateGraphHandler::new(
            Some(Arc::new(StaticSource {
                records: sample_records()[..1].to_vec(),
            })),
            &path,
        );
        second.generate().await.unwrap();

        let nodes = artifact::read_nodes(&path).await.unwrap();
        assert_eq!(nodes.len(), 1);
    }
}
