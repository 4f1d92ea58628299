use serde::{Deserialize, Serialize};

use super::defaults;

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Allowed distance of the vesting total from 100%.
    pub vesting_tolerance: f64,
    /// Foreign→local rate used for a fresh offer.
    pub default_exchange_rate: f64,
    /// Employer PF percentage used for a fresh offer.
    pub default_employer_pf_percentage: f64,
    /// Vesting period used for a fresh offer.
    pub default_vesting_years: u32,
    /// Upper bound of the vesting period hosts offer for selection.
    pub max_vesting_years: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            vesting_tolerance: defaults::DEFAULT_VESTING_TOLERANCE,
            default_exchange_rate: defaults::DEFAULT_EXCHANGE_RATE,
            default_employer_pf_percentage: defaults::DEFAULT_EMPLOYER_PF_PERCENTAGE,
            default_vesting_years: defaults::DEFAULT_VESTING_YEARS,
            max_vesting_years: defaults::DEFAULT_MAX_VESTING_YEARS,
        }
    }
}
