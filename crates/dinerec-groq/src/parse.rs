//! Strict parsing of the model's ranking response.

use regex::Regex;
use serde_json::Value;

use crate::error::GroqError;
use crate::types::{RankedPick, Ranking};

/// Extract the JSON object span from a response that may wrap it in prose
/// or fenced code blocks.
///
/// A fenced block (```` ```json ```` or bare fences) takes priority;
/// within the remaining text, the span from the first `{` to the last `}`
/// is taken.
///
/// # Errors
///
/// Returns [`GroqError::MalformedResponse`] when no object span exists.
pub fn extract_json(text: &str) -> Result<String, GroqError> {
    let fence = Regex::new(r"(?is)```(?:json)?\s*([\s\S]*?)\s*```").expect("valid fence regex");
    let inner = fence
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str());

    let start = inner.find('{');
    let end = inner.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(inner[start..=end].to_string()),
        _ => Err(GroqError::MalformedResponse(
            "response does not contain a JSON object".to_string(),
        )),
    }
}

/// Parse and validate the model's ranking output.
///
/// The payload must be a JSON object with a `recommendations` array;
/// every entry must be an object with a non-empty string `name`, and
/// `reason` must be a string when present (defaulting to empty). Any
/// violation rejects the whole response — no partial recovery, the
/// caller's fallback handles it.
///
/// # Errors
///
/// [`GroqError::MalformedResponse`] if no decodable object is found,
/// [`GroqError::Schema`] on any contract violation.
pub fn parse_ranking(text: &str) -> Result<Ranking, GroqError> {
    let raw = extract_json(text)?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| GroqError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let Some(entries) = value.get("recommendations").and_then(Value::as_array) else {
        return Err(GroqError::Schema(
            "payload must contain a 'recommendations' list".to_string(),
        ));
    };

    let mut recommendations = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_object() else {
            return Err(GroqError::Schema(format!(
                "recommendation at index {index} must be an object"
            )));
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() {
            return Err(GroqError::Schema(format!(
                "recommendation at index {index} has an invalid 'name'"
            )));
        }

        let reason = match fields.get("reason") {
            None | Some(Value::Null) => "",
            Some(Value::String(reason)) => reason.trim(),
            Some(_) => {
                return Err(GroqError::Schema(format!(
                    "recommendation at index {index} has an invalid 'reason'"
                )));
            }
        };

        recommendations.push(RankedPick {
            name: name.to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(Ranking { recommendations })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_object() {
        let raw = extract_json(r#"{"recommendations": []}"#).expect("should extract");
        assert_eq!(raw, r#"{"recommendations": []}"#);
    }

    #[test]
    fn extracts_from_fenced_block() {
        let text = "Here you go:\n```json\n{\"recommendations\": []}\n```\nEnjoy!";
        let raw = extract_json(text).expect("should extract");
        assert_eq!(raw, r#"{"recommendations": []}"#);
    }

    #[test]
    fn extracts_from_surrounding_prose() {
        let text = "Sure! {\"recommendations\": [{\"name\": \"A\"}]} Hope that helps.";
        let raw = extract_json(text).expect("should extract");
        assert!(raw.starts_with('{') && raw.ends_with('}'));
    }

    #[test]
    fn rejects_text_without_object() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, GroqError::MalformedResponse(_)));
    }

    #[test]
    fn parses_valid_ranking() {
        let text = r#"{"recommendations": [
            {"name": "Punjab Grill", "reason": "highest rating in range"},
            {"name": "Empire Restaurant"}
        ]}"#;
        let ranking = parse_ranking(text).expect("should parse");
        assert_eq!(ranking.recommendations.len(), 2);
        assert_eq!(ranking.recommendations[0].name, "Punjab Grill");
        assert_eq!(ranking.recommendations[0].reason, "highest rating in range");
        assert_eq!(ranking.recommendations[1].reason, "");
    }

    #[test]
    fn empty_list_is_structurally_valid() {
        let ranking = parse_ranking(r#"{"recommendations": []}"#).expect("should parse");
        assert!(ranking.recommendations.is_empty());
    }

    #[test]
    fn rejects_missing_recommendations_field() {
        let err = parse_ranking(r#"{"picks": []}"#).unwrap_err();
        assert!(matches!(err, GroqError::Schema(_)));
    }

    #[test]
    fn rejects_non_object_entry() {
        let err = parse_ranking(r#"{"recommendations": ["Punjab Grill"]}"#).unwrap_err();
        assert!(matches!(err, GroqError::Schema(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err =
            parse_ranking(r#"{"recommendations": [{"name": "  ", "reason": "x"}]}"#).unwrap_err();
        assert!(matches!(err, GroqError::Schema(_)));
    }

    #[test]
    fn rejects_non_string_reason() {
        let err =
            parse_ranking(r#"{"recommendations": [{"name": "A", "reason": 42}]}"#).unwrap_err();
        assert!(matches!(err, GroqError::Schema(_)));
    }

    #[test]
    fn one_bad_entry_fails_the_whole_response() {
        let text = r#"{"recommendations": [
            {"name": "Good", "reason": "fine"},
            {"name": ""}
        ]}"#;
        assert!(parse_ranking(text).is_err());
    }

    #[test]
    fn rejects_undecodable_object_span() {
        let err = parse_ranking("{not json at all}").unwrap_err();
        assert!(matches!(err, GroqError::MalformedResponse(_)));
    }
}
