use crate::error::ValidationError;
use crate::normalize::normalize_token;

/// Minimum Jaro-Winkler similarity for a vocabulary entry to appear in the
/// "did you mean" shortlist.
const SIMILARITY_CUTOFF: f64 = 0.6;
const MAX_SUGGESTIONS: usize = 5;

/// Resolve a free-text query to exactly one canonical vocabulary value.
///
/// Matching order, short-circuiting on first success:
/// 1. exact match on normalized forms;
/// 2. unique substring containment (two or more hits are ambiguous and
///    fall through rather than resolving);
/// 3. a similarity shortlist that only feeds the error message.
///
/// Deterministic for a fixed vocabulary and query; suggestion ties keep
/// vocabulary order.
///
/// # Errors
///
/// - `ValidationError::EmptyVocabulary` if `vocabulary` is empty (a setup
///   defect, not a failed lookup);
/// - `ValidationError::Required` if the query normalizes to nothing;
/// - `ValidationError::NotFound` otherwise, with up to 5 suggestions when
///   any entry scored at least the similarity cutoff.
pub fn resolve_vocab(
    field: &'static str,
    query: &str,
    vocabulary: &[String],
) -> Result<String, ValidationError> {
    if vocabulary.is_empty() {
        return Err(ValidationError::EmptyVocabulary { field });
    }

    let q = normalize_token(query);
    if q.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let normalized: Vec<(String, &String)> = vocabulary
        .iter()
        .map(|entry| (normalize_token(entry), entry))
        .collect();

    if let Some((_, canonical)) = normalized.iter().find(|(norm, _)| *norm == q) {
        return Ok((*canonical).clone());
    }

    let containing: Vec<&String> = normalized
        .iter()
        .filter(|(norm, _)| norm.contains(&q))
        .map(|(_, canonical)| *canonical)
        .collect();
    if let [only] = containing.as_slice() {
        return Ok((*only).clone());
    }

    let mut scored: Vec<(f64, &String)> = normalized
        .iter()
        .map(|(norm, canonical)| (strsim::jaro_winkler(&q, norm), *canonical))
        .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
        .collect();
    // Stable sort: equal scores keep vocabulary order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let suggestions: Vec<String> = scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, canonical)| canonical.clone())
        .collect();
    Err(ValidationError::NotFound { field, suggestions })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        ["Bangalore", "Mumbai", "Delhi"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn exact_match_is_case_and_whitespace_insensitive() {
        let resolved = resolve_vocab("city", "  bangalore ", &cities()).expect("should resolve");
        assert_eq!(resolved, "Bangalore");
    }

    #[test]
    fn unique_containment_resolves() {
        let resolved = resolve_vocab("city", "bang", &cities()).expect("should resolve");
        assert_eq!(resolved, "Bangalore");
    }

    #[test]
    fn ambiguous_containment_falls_through_to_suggestions() {
        let vocab: Vec<String> = ["Bangalore East", "Bangalore West", "Mumbai"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let err = resolve_vocab("city", "bangalore", &vocab).unwrap_err();
        match err {
            ValidationError::NotFound { suggestions, .. } => {
                assert!(
                    suggestions.contains(&"Bangalore East".to_string()),
                    "expected fuzzy suggestions, got: {suggestions:?}"
                );
            }
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn near_miss_yields_suggestions() {
        let err = resolve_vocab("city", "bangalor", &cities()).unwrap_err();
        match err {
            ValidationError::NotFound { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Bangalore"));
            }
            other => panic!("expected NotFound with suggestions, got: {other:?}"),
        }
    }

    #[test]
    fn garbage_yields_plain_not_found() {
        let err = resolve_vocab("city", "xyz123", &cities()).unwrap_err();
        match err {
            ValidationError::NotFound { suggestions, .. } => {
                assert!(
                    suggestions.is_empty(),
                    "expected no suggestions, got: {suggestions:?}"
                );
            }
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn suggestions_are_capped_at_five() {
        let vocab: Vec<String> = (0..8).map(|i| format!("Restaurant Row {i}")).collect();
        let err = resolve_vocab("city", "restaurant row", &vocab).unwrap_err();
        match err {
            ValidationError::NotFound { suggestions, .. } => {
                assert_eq!(suggestions.len(), 5);
                // Ties keep vocabulary order.
                assert_eq!(suggestions[0], "Restaurant Row 0");
            }
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn empty_query_requires_input() {
        let err = resolve_vocab("city", "   ", &cities()).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "city" }));
    }

    #[test]
    fn empty_vocabulary_is_a_distinct_error() {
        let err = resolve_vocab("cuisine", "thai", &[]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyVocabulary { field: "cuisine" }
        ));
    }
}
