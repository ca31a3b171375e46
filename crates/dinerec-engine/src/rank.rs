//! Deterministic candidate ranking.

use dinerec_core::RestaurantRecord;

/// Score used for deterministic ordering. Missing ratings count as zero
/// at scoring time only; the stored record is never touched.
fn score(record: &RestaurantRecord) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let votes = record.votes as f64;
    record.rating.unwrap_or(0.0) * 100.0 + votes
}

/// Order candidates by score descending, name ascending on ties.
///
/// The name tie-break makes the order total for any finite input, so
/// repeated calls with the same rows always agree — this is also the
/// fallback order when the external ranker is unavailable.
#[must_use]
pub fn rank<'a>(rows: &[&'a RestaurantRecord]) -> Vec<&'a RestaurantRecord> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        score(b)
            .total_cmp(&score(a))
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}
