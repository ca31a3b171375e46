//! HTTP client for the Groq Chat Completions API (OpenAI-compatible),
//! specialized to restaurant re-ranking.
//!
//! The client submits a deterministically ranked candidate set together
//! with the user's preferences and asks the model to pick and rank from
//! those candidates only. Responses are parsed under a strict contract:
//! a single JSON object with a `recommendations` list of `{name, reason}`
//! entries. Anything else is an error — callers fall back to the
//! deterministic order, so a rejected response is always safe.

mod client;
mod error;
mod parse;
mod prompt;
mod types;

pub use client::GroqClient;
pub use error::GroqError;
pub use parse::{extract_json, parse_ranking};
pub use prompt::build_ranking_prompt;
pub use types::{CandidateSummary, GroqConfig, RankedPick, Ranking};
