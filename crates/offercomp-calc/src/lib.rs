//! # offercomp-calc
//!
//! Projects a job offer year by year over its vesting period and compares
//! year 1 against current compensation. Pure and synchronous: the same
//! inputs always give the same [`CompensationProjection`](offercomp_core::CompensationProjection).

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::OfferCalculator;
pub use factors::pf::PfTotals;
