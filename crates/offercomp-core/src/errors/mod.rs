//! Error handling for OfferComp.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod offer_error;
pub mod scenario_error;

pub use config_error::ConfigError;
pub use error_code::OfferCompErrorCode;
pub use offer_error::OfferError;
pub use scenario_error::ScenarioError;

/// Umbrella error aggregating every concern via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum OfferCompError {
    #[error("Invalid offer: {0}")]
    Offer(#[from] OfferError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),
}

impl OfferCompErrorCode for OfferCompError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Offer(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Scenario(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type OfferResult<T> = Result<T, OfferCompError>;
