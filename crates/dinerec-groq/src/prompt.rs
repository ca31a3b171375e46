//! Prompt construction for the ranking call.

use crate::types::CandidateSummary;

/// System message: the model must answer with JSON and nothing else.
pub(crate) const SYSTEM_PROMPT: &str = "You return strict JSON only. No prose.";

/// Build the user prompt for a ranking request.
///
/// The prompt pins the model to the supplied candidates (no inventing or
/// renaming), asks for at most `top_n` picks ranked best to worst, and
/// spells out the exact response schema. Deterministic for fixed inputs,
/// which keeps request shapes reproducible in tests.
#[must_use]
pub fn build_ranking_prompt(
    city: &str,
    cuisine: &str,
    price_description: &str,
    candidates: &[CandidateSummary],
    top_n: usize,
) -> String {
    let candidates_json =
        serde_json::to_string(candidates).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are a restaurant recommendation engine.\n\
         \n\
         User preferences:\n\
         - City: {city}\n\
         - Cuisine: {cuisine}\n\
         - Price: {price_description} (approx cost for two)\n\
         \n\
         You MUST recommend ONLY from the provided candidate restaurants.\n\
         Do NOT invent or rename restaurants.\n\
         \n\
         Task:\n\
         - Pick the best {top_n} restaurants from the candidates.\n\
         - Rank them from best to worst.\n\
         - Provide a short reason for each pick, grounded only in the candidate data.\n\
         \n\
         Return STRICT JSON matching this schema:\n\
         {{\"recommendations\": [{{\"name\": \"string (MUST match exactly one candidate name)\", \
         \"reason\": \"string (short, factual, based on provided candidate fields)\"}}]}}\n\
         \n\
         Candidates (JSON):\n\
         {candidates_json}"
    )
}
