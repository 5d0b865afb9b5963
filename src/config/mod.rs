//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `WAYFINDER` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use wayfinder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod generator;

pub use error::{ConfigError, ValidationError};
pub use generator::GeneratorConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Graph generator configuration (content source, artifact path)
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `WAYFINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WAYFINDER__GENERATOR__CONTENT_ENDPOINT=https://...`
    ///   -> `generator.content_endpoint = https://...`
    /// - `WAYFINDER__GENERATOR__OUTPUT_PATH=dist/uxdg-data.json`
    ///   -> `generator.output_path = dist/uxdg-data.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WAYFINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.generator.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,wayfinder=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("WAYFINDER__GENERATOR__CONTENT_ENDPOINT");
        env::remove_var("WAYFINDER__GENERATOR__OUTPUT_PATH");
        env::remove_var("WAYFINDER__GENERATOR__INCLUDE_DRAFTS");
        env::remove_var("WAYFINDER__LOG_LEVEL");
    }

    #[test]
    fn load_with_no_env_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(!config.generator.is_enabled());
        assert_eq!(
            config.generator.output_path,
            PathBuf::from("dist/uxdg-data.json")
        );
        assert_eq!(config.log_level, "info,wayfinder=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_generator_endpoint() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "WAYFINDER__GENERATOR__CONTENT_ENDPOINT",
            "https://cms.example.com",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.generator.content_endpoint.as_deref(),
            Some("https://cms.example.com")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_custom_output_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WAYFINDER__GENERATOR__OUTPUT_PATH", "out/graph.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.generator.output_path, PathBuf::from("out/graph.json"));
    }

    #[test]
    fn load_reads_log_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WAYFINDER__LOG_LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.log_level, "debug");
    }
}
