//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Content endpoint must be an http(s) URL")]
    InvalidContentEndpoint,

    #[error("Invalid fetch timeout")]
    InvalidFetchTimeout,

    #[error("Output path must name a file")]
    InvalidOutputPath,
}
