use regex::Regex;

use crate::error::ValidationError;
use crate::normalize::normalize_token;
use crate::types::{PriceCategory, PricePreference};

/// Parse a free-text price expression into a [`PricePreference`].
///
/// Accepted grammars, in order:
/// - a tier name with common synonyms (`budget`/`low`/`cheap`,
///   `moderate`/`mid`/`medium`, `premium`/`high`/`expensive`);
/// - a range — `500-1000`, `500 to 1000`, en/em dashes — with bounds
///   swapped when given high-to-low;
/// - a single number, optionally with currency noise around it.
///
/// # Errors
///
/// - `ValidationError::Required` if the text normalizes to nothing;
/// - `ValidationError::InvalidPrice` if no number and no tier name is
///   recognized.
pub fn parse_price_preference(text: &str) -> Result<PricePreference, ValidationError> {
    let q = normalize_token(text);
    if q.is_empty() {
        return Err(ValidationError::Required { field: "price" });
    }

    match q.as_str() {
        "budget" | "low" | "cheap" => {
            return Ok(PricePreference::Category(PriceCategory::Budget));
        }
        "moderate" | "mid" | "medium" => {
            return Ok(PricePreference::Category(PriceCategory::Moderate));
        }
        "premium" | "high" | "expensive" => {
            return Ok(PricePreference::Category(PriceCategory::Premium));
        }
        _ => {}
    }

    let dashed = q.replace(['\u{2013}', '\u{2014}'], "-").replace(" to ", "-");

    let number = Regex::new(r"\d+(?:\.\d+)?").expect("valid number regex");
    let mut numbers = number
        .find_iter(&dashed)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    let Some(first) = numbers.next() else {
        return Err(ValidationError::InvalidPrice);
    };

    match numbers.next() {
        None => Ok(PricePreference::Exact(first)),
        Some(second) => {
            let (min, max) = if first > second {
                (second, first)
            } else {
                (first, second)
            };
            Ok(PricePreference::Range {
                min: Some(min),
                max: Some(max),
            })
        }
    }
}
