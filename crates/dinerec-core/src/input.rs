use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::price::parse_price_preference;
use crate::types::PricePreference;
use crate::vocab::resolve_vocab;

/// A fully validated recommendation request.
///
/// `city` and `cuisine` are canonical strings drawn verbatim from the
/// dataset vocabularies — never free text past this point. Created once
/// per request and consumed read-only by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedUserInput {
    pub city: String,
    pub cuisine: String,
    pub price: PricePreference,
}

/// Validate a full recommendation request in one call.
///
/// Resolves city, then cuisine, then parses price; the first failure is
/// returned.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first field that fails.
pub fn validate_user_input(
    city: &str,
    cuisine: &str,
    price: &str,
    available_cities: &[String],
    available_cuisines: &[String],
) -> Result<ValidatedUserInput, ValidationError> {
    let city = resolve_vocab("city", city, available_cities)?;
    let cuisine = resolve_vocab("cuisine", cuisine, available_cuisines)?;
    let price = parse_price_preference(price)?;
    Ok(ValidatedUserInput {
        city,
        cuisine,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        vec!["Bangalore".to_string(), "Mumbai".to_string()]
    }

    fn cuisines() -> Vec<String> {
        vec!["North Indian".to_string(), "Chinese".to_string()]
    }

    #[test]
    fn all_fields_resolve_to_canonical_values() {
        let input = validate_user_input("bangalore", "north indian", "700", &cities(), &cuisines())
            .expect("should validate");
        assert_eq!(input.city, "Bangalore");
        assert_eq!(input.cuisine, "North Indian");
        assert_eq!(input.price, PricePreference::Exact(700.0));
    }

    #[test]
    fn city_failure_wins_over_later_fields() {
        let err = validate_user_input("atlantis", "nope", "junk", &cities(), &cuisines())
            .unwrap_err();
        assert!(
            matches!(err, ValidationError::NotFound { field: "city", .. }),
            "expected city error first, got: {err:?}"
        );
    }

    #[test]
    fn price_error_surfaces_after_valid_city_and_cuisine() {
        let err = validate_user_input("mumbai", "chinese", "whatever", &cities(), &cuisines())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice));
    }
}
