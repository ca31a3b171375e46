use dinerec_core::RestaurantRecord;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Groq Chat Completions client.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Build a config with the production defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// The candidate projection embedded in the ranking prompt: the name plus
/// the handful of fields a justification can be grounded in.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub name: String,
    pub city: String,
    pub location: Option<String>,
    pub cuisines: Vec<String>,
    pub rating: Option<f64>,
    pub votes: u64,
    pub cost_for_two: Option<f64>,
    pub rest_type: Option<String>,
}

impl CandidateSummary {
    #[must_use]
    pub fn from_record(record: &RestaurantRecord) -> Self {
        Self {
            name: record.name.clone(),
            city: record.city.clone(),
            location: record.location.clone(),
            cuisines: record.cuisines.clone(),
            rating: record.rating,
            votes: record.votes,
            cost_for_two: record.cost_for_two,
            rest_type: record.rest_type.clone(),
        }
    }
}

/// One pick from the model's ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPick {
    pub name: String,
    pub reason: String,
}

/// The model's full ranking, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub recommendations: Vec<RankedPick>,
}

// Wire types for the OpenAI-compatible chat completions endpoint.

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub temperature: f64,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    pub content: String,
}
