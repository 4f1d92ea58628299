//! Per-year building blocks of the projection, one concern per module.

pub mod bonus;
pub mod hike;
pub mod pf;
pub mod vesting;
