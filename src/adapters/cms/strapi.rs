//! Strapi adapter for the `ContentSource` port.
//!
//! Fetches the full decision-graph collection from a Strapi endpoint in one
//! request. Draft/unpublished inclusion is part of this adapter's
//! configuration: with `include_drafts` the fetch asks for the preview
//! publication state, so the generated graph matches what editors see.
//!
//! Transport failures, non-success statuses, and undecodable bodies all map
//! to `ContentSourceError` and are fatal to the generation run; there is no
//! retry here.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{ContentRecord, ContentSource, ContentSourceError};

/// Collection path of the decision graph records in Strapi.
const COLLECTION: &str = "uxd-nodes";

/// Default HTTP timeout for the content fetch.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Strapi content source.
#[derive(Debug, Clone)]
pub struct StrapiConfig {
    /// Base URL of the Strapi instance (e.g., "https://cms.example.com").
    pub endpoint: String,

    /// Whether draft/unpublished records are included in the fetch.
    pub include_drafts: bool,

    /// Request timeout; defaults to 10 seconds.
    pub timeout: Option<Duration>,
}

impl StrapiConfig {
    /// Creates a configuration for the given endpoint, including drafts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            include_drafts: true,
            timeout: None,
        }
    }

    /// Sets whether drafts are included.
    pub fn with_drafts(mut self, include_drafts: bool) -> Self {
        self.include_drafts = include_drafts;
        self
    }

    /// Sets a custom request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL of the decision-graph collection.
    fn collection_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), COLLECTION)
    }
}

/// Strapi-backed content source.
///
/// This is the production implementation of `ContentSource`.
pub struct StrapiContentSource {
    config: StrapiConfig,
    http_client: reqwest::Client,
}

impl StrapiContentSource {
    /// Creates a new Strapi content source.
    pub fn new(config: StrapiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl ContentSource for StrapiContentSource {
    async fn fetch_nodes(&self) -> Result<Vec<ContentRecord>, ContentSourceError> {
        let url = self.config.collection_url();

        tracing::debug!("Fetching decision graph content from {}", url);

        let mut request = self.http_client.get(&url).query(&[("_limit", "-1")]);
        if self.config.include_drafts {
            request = request.query(&[("_publicationState", "preview")]);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Content fetch failed: {}", e);
            ContentSourceError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Content source returned {}", status);
            return Err(ContentSourceError::Status(status.as_u16()));
        }

        let records: Vec<ContentRecord> = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode content records: {}", e);
            ContentSourceError::Malformed(e.to_string())
        })?;

        tracing::debug!("Fetched {} decision graph records", records.len());

        Ok(records)
    }
}
