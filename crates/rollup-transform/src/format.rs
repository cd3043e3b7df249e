//! Final shaping of the summary set: rounding and ordering.

use rollup_model::MonthlySummary;

/// Round to two decimals, half away from zero.
///
/// The convention is pinned here: `f64::round` rounds halves away from
/// zero, so 10.555 + 4.445 = 15.000 stays 15.00 while a lone 0.125 becomes
/// 0.13. Applied to group sums only, never to individual amounts.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round every group total and sort the set by `customer_id` ascending,
/// then `year_month` ascending.
///
/// `YYYY-MM` strings sort lexicographically in chronological order, so the
/// string comparison is the chronological one.
pub fn finalize_summaries(mut summaries: Vec<MonthlySummary>) -> Vec<MonthlySummary> {
    for summary in &mut summaries {
        summary.total_amount = round_to_cents(summary.total_amount);
    }
    summaries.sort_by(|a, b| {
        a.customer_id
            .cmp(&b.customer_id)
            .then_with(|| a.year_month.cmp(&b.year_month))
    });
    summaries
}
