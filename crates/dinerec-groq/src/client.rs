use std::time::Duration;

use reqwest::Client;

use crate::error::GroqError;
use crate::parse::parse_ranking;
use crate::prompt::{build_ranking_prompt, SYSTEM_PROMPT};
use crate::types::{CandidateSummary, ChatMessage, ChatRequest, ChatResponse, GroqConfig, Ranking};

const RANKING_TEMPERATURE: f64 = 0.2;

/// Client for the Groq Chat Completions API.
///
/// Carries a bounded request timeout; a timed-out or otherwise failed
/// call surfaces as a [`GroqError`] and the caller falls back — no
/// retries happen here. Point `base_url` at a mock server in tests.
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GroqError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: GroqConfig) -> Result<Self, GroqError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dinerec/0.1 (restaurant-recommendations)")
            .build()?;

        Ok(Self { client, config })
    }

    /// Ask the model to rank `candidates` for the given preferences.
    ///
    /// Builds the constrained prompt, performs one chat completion, and
    /// parses the response under the strict ranking contract. Note that
    /// the returned names are NOT checked against `candidates` here — the
    /// orchestrator owns that closed-world check.
    ///
    /// # Errors
    ///
    /// - [`GroqError::Http`] on network failure or timeout.
    /// - [`GroqError::Api`] on a non-success HTTP status.
    /// - [`GroqError::MalformedResponse`] / [`GroqError::Schema`] when
    ///   the response does not satisfy the ranking contract.
    pub async fn rank_candidates(
        &self,
        city: &str,
        cuisine: &str,
        price_description: &str,
        candidates: &[CandidateSummary],
        top_n: usize,
    ) -> Result<Ranking, GroqError> {
        tracing::debug!(
            model = %self.config.model,
            candidates = candidates.len(),
            top_n,
            "requesting ranking"
        );
        let user_prompt = build_ranking_prompt(city, cuisine, price_description, candidates, top_n);
        let content = self.chat_completion(SYSTEM_PROMPT, &user_prompt).await?;
        parse_ranking(&content)
    }

    /// Perform one chat completion and return the assistant content.
    async fn chat_completion(&self, system: &str, user: &str) -> Result<String, GroqError> {
        let request = ChatRequest {
            model: &self.config.model,
            temperature: RANKING_TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GroqError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            GroqError::MalformedResponse(format!("unexpected chat completion shape: {e}"))
        })?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GroqError::MalformedResponse("chat completion has no choices".to_string()))
    }
}
