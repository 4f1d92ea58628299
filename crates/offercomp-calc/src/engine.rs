use offercomp_core::config::{defaults, CalculatorConfig};
use offercomp_core::errors::OfferResult;
use offercomp_core::traits::IOfferCalculator;
use offercomp_core::{CompensationProjection, CurrentCompensation, OfferSpec, Scenario};
use offercomp_observability::{projection_span, scenario_span};

use crate::formula;

/// Offer calculator. Stateless apart from the vesting tolerance and the
/// validated vesting limit, so one instance can serve every caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferCalculator {
    /// Allowed distance of the vesting total from 100% (default 0.01).
    vesting_tolerance: f64,
    /// Longest vesting period the checked paths accept (default 6).
    max_vesting_years: u32,
}

impl OfferCalculator {
    /// Create a calculator with the default vesting tolerance.
    pub fn new() -> Self {
        Self::with_tolerance(defaults::DEFAULT_VESTING_TOLERANCE)
    }

    /// Create with a custom vesting tolerance.
    pub fn with_tolerance(vesting_tolerance: f64) -> Self {
        Self {
            vesting_tolerance,
            max_vesting_years: defaults::DEFAULT_MAX_VESTING_YEARS,
        }
    }

    /// Create from the `[calculator]` config section.
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            vesting_tolerance: config.vesting_tolerance,
            max_vesting_years: config.max_vesting_years,
        }
    }

    pub fn vesting_tolerance(&self) -> f64 {
        self.vesting_tolerance
    }

    pub fn max_vesting_years(&self) -> u32 {
        self.max_vesting_years
    }

    /// Project the offer without validating it.
    ///
    /// Total over well-formed input. Negative or non-finite amounts are the
    /// caller's responsibility; the result for them is unspecified.
    pub fn project(
        &self,
        offer: &OfferSpec,
        current: &CurrentCompensation,
    ) -> CompensationProjection {
        let span = projection_span!(offer.vesting_years, offer.pf_included_in_base);
        let _guard = span.enter();

        let projection = formula::compute(offer, current, self.vesting_tolerance);

        if !projection.vesting_is_valid && !offer.vesting_mode.is_equal() {
            tracing::debug!(
                vesting_total = projection.vesting_total_percentage,
                "custom vesting schedule does not add up to 100%"
            );
        }
        tracing::debug!(
            years = projection.yearly_breakdown.len(),
            first_year_total = projection.first_year.total,
            hike = projection.hike_percentage,
            vesting_valid = projection.vesting_is_valid,
            "offer projected"
        );

        projection
    }

    /// Validate both inputs, then project. Rejects vesting periods longer
    /// than `max_vesting_years` before anything is allocated.
    pub fn project_checked(
        &self,
        offer: &OfferSpec,
        current: &CurrentCompensation,
    ) -> OfferResult<CompensationProjection> {
        offer.validate_with(&CalculatorConfig {
            vesting_tolerance: self.vesting_tolerance,
            max_vesting_years: self.max_vesting_years,
            ..CalculatorConfig::default()
        })?;
        current.validate()?;
        Ok(self.project(offer, current))
    }

    /// Project a loaded scenario.
    pub fn project_scenario(&self, scenario: &Scenario) -> CompensationProjection {
        let span = scenario_span!(scenario.current.total());
        let _guard = span.enter();
        self.project(&scenario.offer, &scenario.current)
    }
}

impl Default for OfferCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl IOfferCalculator for OfferCalculator {
    fn calculate(
        &self,
        offer: &OfferSpec,
        current: &CurrentCompensation,
    ) -> OfferResult<CompensationProjection> {
        self.project_checked(offer, current)
    }
}
