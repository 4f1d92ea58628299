use offercomp_core::constants::ONE_TIME_PAYOUT_YEAR;
use offercomp_core::OfferSpec;

/// Performance bonus: `base × bonus% / 100`, identical every year.
pub fn recurring(offer: &OfferSpec) -> f64 {
    offer.base_salary * offer.performance_bonus_percentage / 100.0
}

/// Joining + relocation in year 1, nothing afterwards.
pub fn one_time(offer: &OfferSpec, year: u32) -> f64 {
    if year == ONE_TIME_PAYOUT_YEAR {
        offer.one_time_total()
    } else {
        0.0
    }
}
