use std::collections::BTreeSet;
use std::path::Path;

use dinerec_core::RestaurantRecord;

use crate::clean::{parse_cost, parse_rate, split_cuisines};
use crate::error::DatasetError;
use crate::types::RawRestaurantRow;

/// Load and clean the restaurant table from a JSON dataset file.
///
/// Rows without a usable name are skipped rather than failing the load;
/// the skip count is logged.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be read and
/// [`DatasetError::Parse`] if it is not a JSON array of rows.
pub fn load_table(path: &Path) -> Result<Vec<RestaurantRecord>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let raw_rows: Vec<RawRestaurantRow> = serde_json::from_str(&content)?;
    let total = raw_rows.len();

    let records: Vec<RestaurantRecord> = raw_rows.into_iter().filter_map(clean_row).collect();
    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(skipped, total, "dropped dataset rows without a name");
    }
    tracing::info!(rows = records.len(), path = %path.display(), "loaded restaurant table");

    Ok(records)
}

/// Clean a single raw row into a [`RestaurantRecord`].
///
/// Returns `None` when the row has no usable name (the matching key).
fn clean_row(raw: RawRestaurantRow) -> Option<RestaurantRecord> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let city = raw
        .listed_in_city
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Some(RestaurantRecord {
        name,
        address: raw.address.unwrap_or_default(),
        city,
        cuisines: raw.cuisines.as_deref().map(split_cuisines).unwrap_or_default(),
        rating: raw.rate.as_deref().and_then(parse_rate),
        votes: raw.votes.and_then(|v| u64::try_from(v).ok()).unwrap_or(0),
        cost_for_two: raw.approx_cost_for_two.as_deref().and_then(parse_cost),
        url: raw.url,
        rest_type: raw.rest_type,
        location: raw.location,
    })
}

/// Unique, sorted city vocabulary; empty cities are dropped.
#[must_use]
pub fn unique_cities(table: &[RestaurantRecord]) -> Vec<String> {
    table
        .iter()
        .map(|r| r.city.clone())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Unique, sorted cuisine vocabulary across all rows.
#[must_use]
pub fn unique_cuisines(table: &[RestaurantRecord]) -> Vec<String> {
    table
        .iter()
        .flat_map(|r| r.cuisines.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Summary statistics over the costs present in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub count: usize,
}

/// Compute cost statistics; `None` when no row carries a cost.
#[must_use]
pub fn price_stats(table: &[RestaurantRecord]) -> Option<PriceStats> {
    let mut costs: Vec<f64> = table.iter().filter_map(|r| r.cost_for_two).collect();
    if costs.is_empty() {
        return None;
    }
    costs.sort_by(f64::total_cmp);

    let count = costs.len();
    let sum: f64 = costs.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / count as f64;
    let median = if count % 2 == 0 {
        (costs[count / 2 - 1] + costs[count / 2]) / 2.0
    } else {
        costs[count / 2]
    };

    Some(PriceStats {
        min: costs[0],
        max: costs[count - 1],
        mean,
        median,
        count,
    })
}
