//! Span definitions per operation: projection, scenario projection.
//!
//! Each span carries its inputs as fields via the `tracing` crate.

/// Create a projection span.
#[macro_export]
macro_rules! projection_span {
    ($vesting_years:expr, $pf_included:expr) => {
        tracing::debug_span!(
            "offercomp.projection",
            vesting_years = $vesting_years,
            pf_included = $pf_included
        )
    };
}

/// Create a scenario span, wrapping the projection span of a loaded scenario.
#[macro_export]
macro_rules! scenario_span {
    ($current_total:expr) => {
        tracing::debug_span!("offercomp.scenario", current_total = $current_total)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROJECTION: &str = "offercomp.projection";
    pub const SCENARIO: &str = "offercomp.scenario";
}
