//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRODUCT_DISCOVERY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use product_discovery::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod logging;
mod report;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use report::ReportConfig;

use serde::Deserialize;

/// Plain variable accepted for the API key when the prefixed one is unset.
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with an empty environment.
/// Call [`AppConfig::validate()`] before talking to the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// OpenRouter configuration (key, model, limits)
    #[serde(default)]
    pub ai: AiConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses `OPENROUTER_API_KEY` as the default API key
    /// 3. Reads environment variables with `PRODUCT_DISCOVERY` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRODUCT_DISCOVERY__AI__MODEL=openai/gpt-4o` -> `ai.model = openai/gpt-4o`
    /// - `PRODUCT_DISCOVERY__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(OPENROUTER_API_KEY_VAR) {
            builder = builder.set_default("ai.openrouter_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("PRODUCT_DISCOVERY").separator("__"),
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
        self.ai.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
