use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::vesting::{VestingMode, VestingSchedule};
use crate::config::{defaults, CalculatorConfig};
use crate::errors::OfferError;

/// A job offer, as collected by the host form.
///
/// Amounts are annual and in local currency, except `stock_grant_value`
/// which is in the foreign unit converted by `exchange_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OfferSpec {
    pub base_salary: f64,
    /// Percent of base paid as performance bonus every year.
    pub performance_bonus_percentage: f64,
    pub joining_bonus: f64,
    pub relocation_bonus: f64,
    /// Total grant value in the foreign unit (USD).
    pub stock_grant_value: f64,
    pub exchange_rate: f64,
    /// Years the grant vests over; 0 projects nothing.
    pub vesting_years: u32,
    pub vesting_mode: VestingMode,
    /// Whether `base_salary` already embeds the employer PF contribution.
    #[serde(rename = "pfIncludedInBase")]
    pub pf_included_in_base: bool,
    #[serde(rename = "employerPFPercentage")]
    pub employer_pf_percentage: f64,
}

impl OfferSpec {
    /// A blank offer seeded with the configured rate, PF and vesting defaults.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            base_salary: 0.0,
            performance_bonus_percentage: 0.0,
            joining_bonus: 0.0,
            relocation_bonus: 0.0,
            stock_grant_value: 0.0,
            exchange_rate: config.default_exchange_rate,
            vesting_years: config.default_vesting_years,
            vesting_mode: VestingMode::Equal,
            pf_included_in_base: defaults::DEFAULT_PF_INCLUDED_IN_BASE,
            employer_pf_percentage: config.default_employer_pf_percentage,
        }
    }

    /// Joining plus relocation bonus, paid once in year 1.
    pub fn one_time_total(&self) -> f64 {
        self.joining_bonus + self.relocation_bonus
    }

    /// Change the vesting period.
    ///
    /// A custom schedule is reseeded to an equal split over the new period,
    /// matching what the host shows when the period picker changes.
    pub fn with_vesting_years(mut self, years: u32) -> Self {
        self.vesting_years = years;
        if !self.vesting_mode.is_equal() {
            self.vesting_mode = VestingMode::custom(VestingSchedule::equal_split(years));
        }
        self
    }

    /// Validate against the default `[calculator]` limits.
    pub fn validate(&self) -> Result<(), OfferError> {
        self.validate_with(&CalculatorConfig::default())
    }

    /// Check amounts are finite and non-negative, the rate is positive, and
    /// the vesting period is within `config.max_vesting_years`.
    pub fn validate_with(&self, config: &CalculatorConfig) -> Result<(), OfferError> {
        if self.vesting_years > config.max_vesting_years {
            return Err(OfferError::VestingYearsOutOfRange {
                years: self.vesting_years,
                max: config.max_vesting_years,
            });
        }
        check_amount("baseSalary", self.base_salary)?;
        check_amount(
            "performanceBonusPercentage",
            self.performance_bonus_percentage,
        )?;
        check_amount("joiningBonus", self.joining_bonus)?;
        check_amount("relocationBonus", self.relocation_bonus)?;
        check_amount("stockGrantValue", self.stock_grant_value)?;
        check_amount("employerPFPercentage", self.employer_pf_percentage)?;

        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(OfferError::InvalidExchangeRate {
                value: self.exchange_rate,
            });
        }
        if let Some(schedule) = self.vesting_mode.schedule() {
            schedule.validate()?;
        }
        Ok(())
    }
}

impl Default for OfferSpec {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<(), OfferError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OfferError::InvalidAmount { field, value })
    }
}
