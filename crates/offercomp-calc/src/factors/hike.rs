/// Signed percent change of the offer's year-1 total over current total.
///
/// Formula: `(offer − current) / current × 100`, or 0 when current is 0.
pub fn percentage(first_year_total: f64, current_total: f64) -> f64 {
    if current_total > 0.0 {
        (first_year_total - current_total) / current_total * 100.0
    } else {
        0.0
    }
}
