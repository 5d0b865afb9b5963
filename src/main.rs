//! Wayfinder generator binary.
//!
//! Runs one decision-graph generation pass: load configuration, fetch the
//! CMS content, write the artifact, then re-load the artifact and report any
//! data-integrity findings. Intended to run once per build as part of the
//! publishing pipeline; exits non-zero when the run fails.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wayfinder::adapters::artifact;
use wayfinder::adapters::{StrapiConfig, StrapiContentSource};
use wayfinder::application::{GenerateGraphHandler, GenerationOutcome};
use wayfinder::config::AppConfig;
use wayfinder::domain::graph::DecisionGraph;
use wayfinder::ports::ContentSource;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let source: Option<Arc<dyn ContentSource>> =
        config.generator.content_endpoint.as_ref().map(|endpoint| {
            let strapi_config = StrapiConfig::new(endpoint)
                .with_drafts(config.generator.include_drafts)
                .with_timeout(Duration::from_secs(config.generator.fetch_timeout_secs));
            Arc::new(StrapiContentSource::new(strapi_config)) as Arc<dyn ContentSource>
        });

    let handler = GenerateGraphHandler::new(source, config.generator.output_path.clone());

    match handler.generate().await {
        Ok(GenerationOutcome::Skipped) => ExitCode::SUCCESS,
        Ok(GenerationOutcome::Generated { nodes, path }) => {
            tracing::info!(nodes, path = %path.display(), "Generation complete");

            // Publish-gate check: report integrity findings without failing
            // the run; the pipeline decides whether to release the artifact.
            match artifact::read_nodes(&path).await {
                Ok(loaded) => {
                    let graph = DecisionGraph::from_nodes(loaded);
                    for violation in graph.validate() {
                        tracing::warn!("Integrity finding: {}", violation);
                    }
                }
                Err(e) => tracing::warn!("Could not re-read artifact for validation: {}", e),
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
