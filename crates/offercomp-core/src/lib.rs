//! # offercomp-core
//!
//! Foundation crate for the OfferComp compensation projector.
//! Defines the offer/current-compensation inputs, the projection output,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod compensation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod scenario;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use compensation::{
    CompensationProjection, CurrentCompensation, FirstYearSummary, OfferSpec, VestingMode,
    VestingSchedule, YearProjection,
};
pub use config::OfferCompConfig;
pub use errors::{OfferCompError, OfferError, OfferResult};
pub use scenario::Scenario;
