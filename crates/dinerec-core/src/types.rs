use serde::{Deserialize, Serialize};

use crate::tiers::PriceTiers;

/// One cleaned restaurant row.
///
/// Produced by the dataset loader; treated as read-only by every pipeline
/// stage. `name` is the matching key between the engine and the external
/// ranker. `rating` and `cost_for_two` stay `None` when the source value
/// was unparseable; scoring defaults them without mutating the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: u64,
    pub cost_for_two: Option<f64>,
    pub url: Option<String>,
    pub rest_type: Option<String>,
    pub location: Option<String>,
}

/// Named price tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    Budget,
    Moderate,
    Premium,
}

impl std::fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceCategory::Budget => write!(f, "budget"),
            PriceCategory::Moderate => write!(f, "moderate"),
            PriceCategory::Premium => write!(f, "premium"),
        }
    }
}

/// Default tolerance applied around an exact price target: 10% of the
/// value, floored at 100.
pub const DEFAULT_TOLERANCE_FRACTION: f64 = 0.10;
pub const DEFAULT_TOLERANCE_FLOOR: f64 = 100.0;

/// A user's cost-for-two preference. Exactly one mode at a time.
///
/// Category preferences carry only the tier name; their numeric bounds
/// are resolved on demand from [`PriceTiers`], so the parser and the
/// filter always agree on where the tiers sit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePreference {
    Exact(f64),
    Range {
        min: Option<f64>,
        max: Option<f64>,
    },
    Category(PriceCategory),
}

impl PricePreference {
    /// Resolve to inclusive `(min, max)` bounds with the default
    /// exact-value tolerance.
    #[must_use]
    pub fn resolve_range(&self, tiers: &PriceTiers) -> (Option<f64>, Option<f64>) {
        self.resolve_range_with(tiers, DEFAULT_TOLERANCE_FRACTION, DEFAULT_TOLERANCE_FLOOR)
    }

    /// Resolve to inclusive `(min, max)` bounds.
    ///
    /// Explicit ranges are returned verbatim, even when only one bound is
    /// set. An exact target becomes a window of
    /// `max(absolute_floor, value * relative_fraction)` on each side,
    /// floored at zero below. Categories resolve through the shared tier
    /// configuration; the tolerance parameters do not apply to them.
    #[must_use]
    pub fn resolve_range_with(
        &self,
        tiers: &PriceTiers,
        relative_fraction: f64,
        absolute_floor: f64,
    ) -> (Option<f64>, Option<f64>) {
        match *self {
            PricePreference::Range { min, max } => (min, max),
            PricePreference::Exact(value) => {
                let tol = (value * relative_fraction).max(absolute_floor);
                (Some((value - tol).max(0.0)), Some(value + tol))
            }
            PricePreference::Category(category) => tiers.category_range(category),
        }
    }

    /// Human-readable form of the resolved range, used in prompts and logs.
    #[must_use]
    pub fn describe(&self, tiers: &PriceTiers) -> String {
        match self.resolve_range(tiers) {
            (Some(lo), Some(hi)) => format!("{lo:.0}-{hi:.0}"),
            (Some(lo), None) => format!("{lo:.0} and above"),
            (None, Some(hi)) => format!("up to {hi:.0}"),
            (None, None) => "any".to_string(),
        }
    }
}

/// Output projection of a record plus the justification attached by the
/// ranking step. Constructed fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRestaurant {
    pub name: String,
    pub address: String,
    pub city: String,
    pub cuisines: Vec<String>,
    pub rating: Option<f64>,
    pub cost_for_two: Option<f64>,
    pub url: Option<String>,
    pub reason: String,
}

impl RecommendedRestaurant {
    #[must_use]
    pub fn from_record(record: &RestaurantRecord, reason: impl Into<String>) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            city: record.city.clone(),
            cuisines: record.cuisines.clone(),
            rating: record.rating,
            cost_for_two: record.cost_for_two,
            url: record.url.clone(),
            reason: reason.into(),
        }
    }
}
