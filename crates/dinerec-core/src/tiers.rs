use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::PriceCategory;

/// Price-tier boundaries for cost-for-two, shared by the price parser and
/// the candidate filter so the two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTiers {
    pub budget_max: f64,
    pub moderate_max: f64,
}

impl Default for PriceTiers {
    fn default() -> Self {
        Self {
            budget_max: 500.0,
            moderate_max: 1000.0,
        }
    }
}

impl PriceTiers {
    /// Build validated tier boundaries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` unless `0 < budget_max < moderate_max`
    /// and both values are finite.
    pub fn new(budget_max: f64, moderate_max: f64) -> Result<Self, ConfigError> {
        if !budget_max.is_finite() || budget_max <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "budget_max must be a positive number, got {budget_max}"
            )));
        }
        if !moderate_max.is_finite() || moderate_max <= budget_max {
            return Err(ConfigError::Validation(format!(
                "moderate_max ({moderate_max}) must be greater than budget_max ({budget_max})"
            )));
        }
        Ok(Self {
            budget_max,
            moderate_max,
        })
    }

    /// Inclusive cost bounds for a named tier. Premium is open-ended above.
    #[must_use]
    pub fn category_range(&self, category: PriceCategory) -> (Option<f64>, Option<f64>) {
        match category {
            PriceCategory::Budget => (Some(0.0), Some(self.budget_max)),
            PriceCategory::Moderate => (Some(self.budget_max), Some(self.moderate_max)),
            PriceCategory::Premium => (Some(self.moderate_max), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_are_500_and_1000() {
        let tiers = PriceTiers::default();
        assert_eq!(tiers.budget_max, 500.0);
        assert_eq!(tiers.moderate_max, 1000.0);
    }

    #[test]
    fn category_ranges_share_boundaries() {
        let tiers = PriceTiers::default();
        assert_eq!(
            tiers.category_range(PriceCategory::Budget),
            (Some(0.0), Some(500.0))
        );
        assert_eq!(
            tiers.category_range(PriceCategory::Moderate),
            (Some(500.0), Some(1000.0))
        );
        assert_eq!(
            tiers.category_range(PriceCategory::Premium),
            (Some(1000.0), None)
        );
    }

    #[test]
    fn new_rejects_non_positive_budget_max() {
        let result = PriceTiers::new(0.0, 1000.0);
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "expected Validation error, got: {result:?}"
        );
    }

    #[test]
    fn new_rejects_inverted_boundaries() {
        let result = PriceTiers::new(1000.0, 500.0);
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "expected Validation error, got: {result:?}"
        );
    }

    #[test]
    fn new_accepts_custom_boundaries() {
        let tiers = PriceTiers::new(300.0, 800.0).expect("valid tiers");
        assert_eq!(
            tiers.category_range(PriceCategory::Moderate),
            (Some(300.0), Some(800.0))
        );
    }
}
