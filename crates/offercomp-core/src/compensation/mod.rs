pub mod current;
pub mod offer;
pub mod projection;
pub mod vesting;

pub use current::CurrentCompensation;
pub use offer::OfferSpec;
pub use projection::{
    CompensationComponent, CompensationProjection, ComponentShare, FirstYearSummary,
    YearProjection,
};
pub use vesting::{VestingEntry, VestingMode, VestingSchedule};
