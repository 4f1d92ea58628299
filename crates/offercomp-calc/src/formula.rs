use offercomp_core::{
    CompensationProjection, CurrentCompensation, FirstYearSummary, OfferSpec, YearProjection,
};

use crate::factors::{self, pf};

/// Year-by-year projection of `offer` against `current`.
///
/// For each year `i` in `1..=vesting_years`:
///
/// ```text
/// gross(i)   = base + bonus + stocks(i) + oneTime(i)
/// stocks(i)  = grant × rate × stockPercentage(i) / 100
/// oneTime(i) = joining + relocation   if i == 1, else 0
/// ```
///
/// then split into PF-inclusive / PF-exclusive totals. Nothing is rounded.
/// Zero vesting years gives an empty breakdown and an all-zero year 1.
pub fn compute(
    offer: &OfferSpec,
    current: &CurrentCompensation,
    vesting_tolerance: f64,
) -> CompensationProjection {
    let stock_value_local =
        factors::vesting::stock_value_local(offer.stock_grant_value, offer.exchange_rate);

    let mut yearly_breakdown = Vec::new();
    let mut vesting_total_percentage = 0.0;

    for year in 1..=offer.vesting_years {
        let stock_percentage =
            factors::vesting::stock_percentage(&offer.vesting_mode, year, offer.vesting_years);
        vesting_total_percentage += stock_percentage;
        yearly_breakdown.push(year_row(offer, year, stock_percentage, stock_value_local));
    }

    let first_year = first_year_summary(yearly_breakdown.first(), offer.one_time_total());
    let current_total = current.total();

    CompensationProjection {
        hike_percentage: factors::hike::percentage(first_year.total_with_pf, current_total),
        vesting_is_valid: factors::vesting::is_valid(vesting_total_percentage, vesting_tolerance),
        vesting_total_percentage,
        yearly_breakdown,
        first_year,
        stock_value_local,
        current_total,
    }
}

/// One projected year.
pub fn year_row(
    offer: &OfferSpec,
    year: u32,
    stock_percentage: f64,
    stock_value_local: f64,
) -> YearProjection {
    let base = offer.base_salary;
    let bonus = factors::bonus::recurring(offer);
    let stocks = stock_value_local * stock_percentage / 100.0;
    let one_time = factors::bonus::one_time(offer, year);

    let contribution = pf::contribution(
        base,
        offer.employer_pf_percentage,
        offer.pf_included_in_base,
    );
    let totals = pf::totals(
        base + bonus + stocks + one_time,
        contribution,
        offer.pf_included_in_base,
    );

    YearProjection {
        year,
        base,
        bonus,
        stock_percentage,
        stocks,
        one_time,
        total_without_pf: totals.without_pf,
        total_with_pf: totals.with_pf,
    }
}

/// Year-1 headline figures. The bonus line folds in the one-time amounts.
fn first_year_summary(first: Option<&YearProjection>, one_time_total: f64) -> FirstYearSummary {
    match first {
        Some(row) => FirstYearSummary {
            base: row.base,
            bonus: row.bonus + one_time_total,
            stocks: row.stocks,
            total: row.ctc(),
            total_with_pf: row.total_with_pf,
            total_without_pf: row.total_without_pf,
        },
        None => FirstYearSummary::default(),
    }
}
