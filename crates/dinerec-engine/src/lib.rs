//! The recommendation pipeline: deterministic filtering and ranking over
//! the restaurant table, with an optional Groq re-ranking step that fails
//! safe.
//!
//! Every stage is a pure transformation over borrowed rows; the only
//! await point is the single external ranking call, and any failure there
//! degrades to the deterministic order instead of propagating.

mod engine;
mod filter;
mod rank;

pub use engine::{RecommendationEngine, FALLBACK_REASON};
pub use filter::filter_candidates;
pub use rank::rank;
