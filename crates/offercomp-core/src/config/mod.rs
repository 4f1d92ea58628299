//! Configuration system for OfferComp.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod calculator_config;
pub mod defaults;
pub mod observability_config;

pub use calculator_config::CalculatorConfig;
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OFFERCOMP_*`)
/// 2. Config file passed to [`OfferCompConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferCompConfig {
    pub calculator: CalculatorConfig,
    pub observability: ObservabilityConfig,
}

impl OfferCompConfig {
    /// Load configuration from a TOML file, apply env overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: OfferCompConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded offercomp config");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let calc = &self.calculator;
        if !calc.vesting_tolerance.is_finite() || calc.vesting_tolerance <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "calculator.vesting_tolerance".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if !calc.default_exchange_rate.is_finite() || calc.default_exchange_rate <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "calculator.default_exchange_rate".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if !calc.default_employer_pf_percentage.is_finite()
            || calc.default_employer_pf_percentage < 0.0
        {
            return Err(ConfigError::ValidationFailed {
                field: "calculator.default_employer_pf_percentage".to_string(),
                message: "must be zero or greater".to_string(),
            });
        }
        if calc.max_vesting_years == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "calculator.max_vesting_years".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut OfferCompConfig) {
        if let Ok(val) = std::env::var("OFFERCOMP_VESTING_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.calculator.vesting_tolerance = v;
            }
        }
        if let Ok(val) = std::env::var("OFFERCOMP_EXCHANGE_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.calculator.default_exchange_rate = v;
            }
        }
        if let Ok(val) = std::env::var("OFFERCOMP_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
