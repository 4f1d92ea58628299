//! Scenario input: one offer plus the baseline it is compared against.
//!
//! Lets batch scripts and test harnesses feed the calculator from
//! JSON or TOML files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::compensation::{CurrentCompensation, OfferSpec};
use crate::config::CalculatorConfig;
use crate::errors::ScenarioError;

/// An offer and the current compensation it is compared against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scenario {
    pub offer: OfferSpec,
    pub current: CurrentCompensation,
}

impl Scenario {
    pub fn new(offer: OfferSpec, current: CurrentCompensation) -> Self {
        Self { offer, current }
    }

    /// Parse a JSON scenario and validate it.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json).map_err(|e| ScenarioError::Parse {
            format: "json",
            message: e.to_string(),
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Parse a TOML scenario and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(toml_str).map_err(|e| ScenarioError::Parse {
            format: "toml",
            message: e.to_string(),
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ScenarioError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => {
                return Err(ScenarioError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let scenario = parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            vesting_years = scenario.offer.vesting_years,
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Validate both the offer and the baseline against the default limits.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.validate_with(&CalculatorConfig::default())
    }

    /// Validate both the offer and the baseline against `config`.
    pub fn validate_with(&self, config: &CalculatorConfig) -> Result<(), ScenarioError> {
        self.offer.validate_with(config)?;
        self.current.validate()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        serde_json::to_string_pretty(self).map_err(|e| ScenarioError::Parse {
            format: "json",
            message: e.to_string(),
        })
    }
}
