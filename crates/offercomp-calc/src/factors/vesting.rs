use offercomp_core::constants::FULL_VESTING_PERCENTAGE;
use offercomp_core::VestingMode;

/// Share of the grant vesting in `year`, in percent.
///
/// Equal mode spreads 100% evenly over `vesting_years`; custom mode reads
/// the schedule and treats missing years as 0.
pub fn stock_percentage(mode: &VestingMode, year: u32, vesting_years: u32) -> f64 {
    match mode {
        VestingMode::Equal if vesting_years == 0 => 0.0,
        VestingMode::Equal => FULL_VESTING_PERCENTAGE / vesting_years as f64,
        VestingMode::Custom { schedule } => schedule.percentage_for(year),
    }
}

/// Vesting adds up when its total is within `tolerance` of 100%.
pub fn is_valid(total_percentage: f64, tolerance: f64) -> bool {
    (total_percentage - FULL_VESTING_PERCENTAGE).abs() < tolerance
}

/// Grant value in local currency: `grant × rate`.
pub fn stock_value_local(stock_grant_value: f64, exchange_rate: f64) -> f64 {
    stock_grant_value * exchange_rate
}
