//! Field-level cleaning rules for raw dataset values.

use regex::Regex;

/// Parse a rating string like `"4.1/5"` into a numeric rating.
///
/// Placeholder values (`"NEW"`, `"-"`, empty) yield `None`. The first
/// signed decimal in the string is taken and clamped to the 0–5 scale.
#[must_use]
pub fn parse_rate(rate: &str) -> Option<f64> {
    let trimmed = rate.trim();
    if trimmed.is_empty() || trimmed == "NEW" || trimmed == "-" {
        return None;
    }

    let number = Regex::new(r"-?\d+(?:\.\d+)?").expect("valid rating regex");
    let value: f64 = number.find(trimmed)?.as_str().parse().ok()?;
    Some(value.clamp(0.0, 5.0))
}

/// Parse a cost string into a numeric cost-for-two.
///
/// Currency symbols, commas, and whitespace are stripped first. A single
/// number is taken as-is; two numbers are treated as a range and reduced
/// to their midpoint; with more than two the first wins.
#[must_use]
pub fn parse_cost(cost: &str) -> Option<f64> {
    let stripped: String = cost
        .chars()
        .filter(|c| !matches!(c, ',' | '\u{20b9}' | '$') && !c.is_whitespace())
        .collect();

    let number = Regex::new(r"\d+").expect("valid cost regex");
    let values: Vec<f64> = number
        .find_iter(&stripped)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    match values.as_slice() {
        [] => None,
        [single] => Some(*single),
        [low, high] => Some((low + high) / 2.0),
        [first, ..] => Some(*first),
    }
}

/// Split a comma-separated cuisine string into trimmed, non-empty names.
#[must_use]
pub fn split_cuisines(cuisines: &str) -> Vec<String> {
    cuisines
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect()
}
