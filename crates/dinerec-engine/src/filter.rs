//! Candidate filtering: city, cuisine, then price window.
//!
//! Each stage takes borrowed rows and returns a new vector, preserving
//! input order. An empty result is a valid outcome, never an error.

use dinerec_core::{PricePreference, PriceTiers, RestaurantRecord, ValidatedUserInput};

/// Tolerance applied to exact-price preferences at the filter stage —
/// wider than the parser default so a target like 700 still catches
/// restaurants at 550 or 850.
const FILTER_TOLERANCE_FRACTION: f64 = 0.15;
const FILTER_TOLERANCE_FLOOR: f64 = 150.0;

/// Apply all three filters in sequence for a validated request.
#[must_use]
pub fn filter_candidates<'a>(
    rows: &[&'a RestaurantRecord],
    input: &ValidatedUserInput,
    tiers: &PriceTiers,
) -> Vec<&'a RestaurantRecord> {
    let by_city = filter_by_city(rows, &input.city);
    tracing::debug!(rows = by_city.len(), city = %input.city, "after city filter");

    let by_cuisine = filter_by_cuisine(&by_city, &input.cuisine);
    tracing::debug!(rows = by_cuisine.len(), cuisine = %input.cuisine, "after cuisine filter");

    let by_price = filter_by_price(&by_cuisine, &input.price, tiers);
    tracing::debug!(rows = by_price.len(), "after price filter");

    by_price
}

/// Keep rows whose city equals the canonical city exactly. Input has
/// already been canonicalized upstream, so no fuzzy matching here.
#[must_use]
pub fn filter_by_city<'a>(rows: &[&'a RestaurantRecord], city: &str) -> Vec<&'a RestaurantRecord> {
    rows.iter().copied().filter(|r| r.city == city).collect()
}

/// Keep rows whose cuisine list contains the canonical cuisine. Rows with
/// an empty cuisine list never match.
#[must_use]
pub fn filter_by_cuisine<'a>(
    rows: &[&'a RestaurantRecord],
    cuisine: &str,
) -> Vec<&'a RestaurantRecord> {
    rows.iter()
        .copied()
        .filter(|r| r.cuisines.iter().any(|c| c == cuisine))
        .collect()
}

/// Keep rows whose cost falls inside the preference's resolved window.
///
/// Bounds are inclusive and applied only where present; rows without a
/// cost are excluded whenever any bound applies. A fully open range
/// passes everything through.
#[must_use]
pub fn filter_by_price<'a>(
    rows: &[&'a RestaurantRecord],
    price: &PricePreference,
    tiers: &PriceTiers,
) -> Vec<&'a RestaurantRecord> {
    let (min, max) =
        price.resolve_range_with(tiers, FILTER_TOLERANCE_FRACTION, FILTER_TOLERANCE_FLOOR);

    if min.is_none() && max.is_none() {
        return rows.to_vec();
    }

    rows.iter()
        .copied()
        .filter(|r| {
            let Some(cost) = r.cost_for_two else {
                return false;
            };
            min.is_none_or(|lo| cost >= lo) && max.is_none_or(|hi| cost <= hi)
        })
        .collect()
}
