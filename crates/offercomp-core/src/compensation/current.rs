use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::offer::check_amount;
use crate::errors::OfferError;

/// The compensation the offer is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCompensation {
    pub base_salary: f64,
    pub variable_pay: f64,
}

impl CurrentCompensation {
    pub fn new(base_salary: f64, variable_pay: f64) -> Self {
        Self {
            base_salary,
            variable_pay,
        }
    }

    /// Base plus variable pay.
    pub fn total(&self) -> f64 {
        self.base_salary + self.variable_pay
    }

    pub fn validate(&self) -> Result<(), OfferError> {
        check_amount("current.baseSalary", self.base_salary)?;
        check_amount("current.variablePay", self.variable_pay)
    }
}
