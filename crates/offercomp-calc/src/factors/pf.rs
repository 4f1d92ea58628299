//! Employer provident fund (PF) contribution.
//!
//! PF is a percentage of a basic figure. When the stated base already
//! embeds it, base = basic + PF, so `PF = base × pf% / (100 + pf%)`.
//! Otherwise PF is added on top: `PF = base × pf% / 100`.

/// Employer PF contribution for the year.
pub fn contribution(base_salary: f64, pf_percentage: f64, included_in_base: bool) -> f64 {
    if included_in_base {
        base_salary * pf_percentage / (100.0 + pf_percentage)
    } else {
        base_salary * pf_percentage / 100.0
    }
}

/// Base salary with the embedded PF taken out: `base × 100 / (100 + pf%)`.
pub fn basic_from_inclusive(base_salary: f64, pf_percentage: f64) -> f64 {
    base_salary * 100.0 / (100.0 + pf_percentage)
}

/// A year's cost to company with and without employer PF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PfTotals {
    pub with_pf: f64,
    pub without_pf: f64,
}

/// Split `gross` (base + bonus + stocks + one-time) into PF-inclusive and
/// PF-exclusive totals.
///
/// Embedded PF is already inside `gross`; additive PF sits on top of it.
pub fn totals(gross: f64, contribution: f64, included_in_base: bool) -> PfTotals {
    if included_in_base {
        PfTotals {
            with_pf: gross,
            without_pf: gross - contribution,
        }
    } else {
        PfTotals {
            with_pf: gross + contribution,
            without_pf: gross,
        }
    }
}
