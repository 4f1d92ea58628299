use crate::compensation::{CompensationProjection, CurrentCompensation, OfferSpec};
use crate::errors::OfferResult;

/// Offer projection.
pub trait IOfferCalculator: Send + Sync {
    /// Validate the inputs, then project the offer year by year
    /// against the current compensation.
    fn calculate(
        &self,
        offer: &OfferSpec,
        current: &CurrentCompensation,
    ) -> OfferResult<CompensationProjection>;
}
