// Single source of truth for all default values.

// --- Calculator ---
pub const DEFAULT_VESTING_TOLERANCE: f64 = 0.01;
pub const DEFAULT_EXCHANGE_RATE: f64 = 83.0;
pub const DEFAULT_EMPLOYER_PF_PERCENTAGE: f64 = 12.0;
pub const DEFAULT_VESTING_YEARS: u32 = 4;
pub const DEFAULT_MAX_VESTING_YEARS: u32 = 6;
pub const DEFAULT_PF_INCLUDED_IN_BASE: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
