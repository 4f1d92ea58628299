use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One projected year of the offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// 1-indexed year.
    pub year: u32,
    pub base: f64,
    /// Recurring performance bonus.
    pub bonus: f64,
    /// Share of the grant vesting this year, in percent.
    pub stock_percentage: f64,
    /// Vested stock value, local currency.
    pub stocks: f64,
    /// Joining + relocation; non-zero only in year 1.
    pub one_time: f64,
    #[serde(rename = "totalWithoutPF")]
    pub total_without_pf: f64,
    #[serde(rename = "totalWithPF")]
    pub total_with_pf: f64,
}

impl YearProjection {
    /// Cost to company for the year. Always the PF-inclusive total.
    pub fn ctc(&self) -> f64 {
        self.total_with_pf
    }
}

/// Year-1 headline figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FirstYearSummary {
    pub base: f64,
    /// Recurring bonus plus joining and relocation.
    pub bonus: f64,
    pub stocks: f64,
    /// Year-1 cost to company (PF-inclusive).
    pub total: f64,
    #[serde(rename = "totalWithPF")]
    pub total_with_pf: f64,
    #[serde(rename = "totalWithoutPF")]
    pub total_without_pf: f64,
}

/// Slice of the year-1 package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CompensationComponent {
    Base,
    Bonuses,
    Stocks,
}

/// Amount of one component and its share of the year-1 package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentShare {
    pub component: CompensationComponent,
    pub amount: f64,
    /// Percent of base + bonuses + stocks.
    pub share: f64,
}

impl FirstYearSummary {
    /// Split year 1 into base, bonuses and stocks.
    ///
    /// Shares are 0 across the board when every component is 0.
    pub fn composition(&self) -> Vec<ComponentShare> {
        let parts = [
            (CompensationComponent::Base, self.base),
            (CompensationComponent::Bonuses, self.bonus),
            (CompensationComponent::Stocks, self.stocks),
        ];
        let sum: f64 = parts.iter().map(|(_, amount)| amount).sum();

        parts
            .into_iter()
            .map(|(component, amount)| ComponentShare {
                component,
                amount,
                share: if sum > 0.0 { amount / sum * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

/// Full projection of an offer against current compensation.
///
/// Derived from its inputs only; recompute instead of patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompensationProjection {
    pub yearly_breakdown: Vec<YearProjection>,
    pub first_year: FirstYearSummary,
    /// Year-1 PF-inclusive total vs current total, in percent. 0 when current is 0.
    pub hike_percentage: f64,
    pub vesting_total_percentage: f64,
    pub vesting_is_valid: bool,
    /// Whole grant converted to local currency.
    pub stock_value_local: f64,
    /// Current base + variable pay.
    pub current_total: f64,
}

impl CompensationProjection {
    /// Row for a 1-indexed year.
    pub fn year(&self, year: u32) -> Option<&YearProjection> {
        let index = year.checked_sub(1)? as usize;
        self.yearly_breakdown.get(index)
    }

    pub fn vesting_years(&self) -> usize {
        self.yearly_breakdown.len()
    }
}
