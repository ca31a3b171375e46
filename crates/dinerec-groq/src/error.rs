use thiserror::Error;

/// Errors returned by the Groq ranking client.
///
/// The variants matter for diagnostics, not control flow: the
/// orchestrator reacts to all of them identically (deterministic
/// fallback).
#[derive(Debug, Error)]
pub enum GroqError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Groq API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not contain the expected structure (no JSON
    /// object, no chat content, undecodable payload).
    #[error("malformed Groq response: {0}")]
    MalformedResponse(String),

    /// The payload decoded but violated the ranking schema (missing list,
    /// non-object entry, empty name, non-string reason).
    #[error("Groq response failed schema validation: {0}")]
    Schema(String),
}
