use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// Parsed values failed cross-field validation.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Errors raised while validating user input.
///
/// These are always surfaced to the caller synchronously; nothing in the
/// recommendation pipeline recovers from them.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input was empty after normalization.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The reference vocabulary itself was empty. A setup defect rather
    /// than a user-input problem, reported distinctly from not-found.
    #[error("no {field} values available for validation")]
    EmptyVocabulary { field: &'static str },

    /// The input could not be resolved against the vocabulary. The
    /// message embeds fuzzy-match suggestions when any were close enough.
    #[error("{field} not found{}", did_you_mean(.suggestions))]
    NotFound {
        field: &'static str,
        suggestions: Vec<String>,
    },

    /// The price text matched none of the accepted grammars.
    #[error("price must be a number, range, or category (budget/moderate/premium)")]
    InvalidPrice,
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_embeds_suggestions() {
        let err = ValidationError::NotFound {
            field: "city",
            suggestions: vec!["Bangalore".to_string(), "Mangalore".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "city not found. Did you mean: Bangalore, Mangalore?"
        );
    }

    #[test]
    fn not_found_message_without_suggestions_is_plain() {
        let err = ValidationError::NotFound {
            field: "cuisine",
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "cuisine not found");
    }

    #[test]
    fn empty_vocabulary_names_the_field() {
        let err = ValidationError::EmptyVocabulary { field: "city" };
        assert_eq!(err.to_string(), "no city values available for validation");
    }
}
