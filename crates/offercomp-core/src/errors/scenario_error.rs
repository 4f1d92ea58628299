//! Scenario loading errors.

use super::error_code::{self, OfferCompErrorCode};
use super::OfferError;

/// Errors raised while reading a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse {format} scenario: {message}")]
    Parse { format: &'static str, message: String },

    #[error("unsupported scenario format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: String },

    #[error("scenario contains an invalid offer: {0}")]
    Invalid(#[from] OfferError),
}

impl OfferCompErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid(e) => e.error_code(),
            _ => error_code::SCENARIO_ERROR,
        }
    }
}
