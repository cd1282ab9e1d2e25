//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ROB2` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rob2_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Domain 2 effect: {}", config.battery.deviations_effect);
//! ```

mod battery;
mod error;
mod telemetry;

pub use battery::BatteryConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root engine configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Assessment battery (Domain 2 variant)
    #[serde(default)]
    pub battery: BatteryConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ROB2` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ROB2__BATTERY__DEVIATIONS_EFFECT=adhering` -> `battery.deviations_effect = adhering`
    /// - `ROB2__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("ROB2").separator("__"))
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
        self.telemetry.validate()?;
        Ok(())
    }

    /// Loads and validates in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::DeviationsEffect;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ROB2__BATTERY__DEVIATIONS_EFFECT");
        env::remove_var("ROB2__TELEMETRY__LOG_LEVEL");
        env::remove_var("ROB2__TELEMETRY__FORMAT");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.battery.deviations_effect, DeviationsEffect::Assignment);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ROB2__BATTERY__DEVIATIONS_EFFECT", "adhering");
        env::set_var("ROB2__TELEMETRY__LOG_LEVEL", "debug");
        env::set_var("ROB2__TELEMETRY__FORMAT", "json");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.battery.deviations_effect, DeviationsEffect::Adhering);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_effect_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ROB2__BATTERY__DEVIATIONS_EFFECT", "per_protocol");
        let result = EngineConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_validated_rejects_empty_filter() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ROB2__TELEMETRY__LOG_LEVEL", " ");
        let result = EngineConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::EmptyLogFilter))
        ));
    }
}
