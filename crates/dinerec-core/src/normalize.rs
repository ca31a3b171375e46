/// Canonicalize a free-text token for matching: trim, collapse internal
/// whitespace runs to a single space, lowercase.
///
/// Pure and total; whitespace-only input normalizes to the empty string.
#[must_use]
pub fn normalize_token(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
