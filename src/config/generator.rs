//! Generator configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Graph generator configuration
///
/// With no `content_endpoint` configured the generator is disabled and a
/// generation run completes as a deliberate no-op.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the CMS content source; absent disables generation
    pub content_endpoint: Option<String>,

    /// Where the graph artifact is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Whether draft/unpublished records are fetched
    #[serde(default = "default_include_drafts")]
    pub include_drafts: bool,

    /// Content fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl GeneratorConfig {
    /// Check if a content source is configured
    pub fn is_enabled(&self) -> bool {
        self.content_endpoint.is_some()
    }

    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = &self.content_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidContentEndpoint);
            }
        }
        if self.fetch_timeout_secs == 0 || self.fetch_timeout_secs > 300 {
            return Err(ValidationError::InvalidFetchTimeout);
        }
        if self.output_path.file_name().is_none() {
            return Err(ValidationError::InvalidOutputPath);
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            content_endpoint: None,
            output_path: default_output_path(),
            include_drafts: default_include_drafts(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dist/uxdg-data.json")
}

fn default_include_drafts() -> bool {
    true
}

fn default_fetch_timeout() -> u64 {
    10
}
