/// OfferComp version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage the vesting schedule must add up to.
pub const FULL_VESTING_PERCENTAGE: f64 = 100.0;

/// Year index that receives one-time amounts (joining + relocation).
pub const ONE_TIME_PAYOUT_YEAR: u32 = 1;
