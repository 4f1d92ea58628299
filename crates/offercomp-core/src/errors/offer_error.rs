//! Offer input errors.

use super::error_code::{self, OfferCompErrorCode};

/// Malformed offer or current-compensation input.
///
/// The projection itself never produces these; they come from opt-in
/// validation and from vesting schedule construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OfferError {
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("exchange rate must be a finite, positive number (got {value})")]
    InvalidExchangeRate { value: f64 },

    #[error("vesting period of {years} years exceeds the maximum of {max}")]
    VestingYearsOutOfRange { years: u32, max: u32 },

    #[error("vesting year {year} is out of range; years are 1-indexed")]
    InvalidVestingYear { year: u32 },

    #[error("vesting year {year} appears more than once in the schedule")]
    DuplicateVestingYear { year: u32 },

    #[error("vesting percentage for year {year} must be finite and non-negative (got {value})")]
    InvalidVestingPercentage { year: u32, value: f64 },
}

impl OfferCompErrorCode for OfferError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_OFFER
    }
}
