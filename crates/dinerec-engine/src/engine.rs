use std::collections::HashMap;

use dinerec_core::{PriceTiers, RecommendedRestaurant, RestaurantRecord, ValidatedUserInput};
use dinerec_groq::{CandidateSummary, GroqClient, Ranking};

use crate::filter::filter_candidates;
use crate::rank::rank;

/// Justification attached to every entry when the deterministic order is
/// used instead of the model's.
pub const FALLBACK_REASON: &str = "Deterministically ranked based on rating and votes.";

const DEFAULT_CANDIDATE_LIMIT: usize = 20;
const DEFAULT_TOP_N: usize = 10;

/// The recommendation orchestrator.
///
/// Owns a cleaned, immutable restaurant table and sequences
/// filter → rank → external re-rank → fallback. All methods take `&self`
/// and build per-request views over the table, so concurrent requests
/// are safe.
///
/// `ranker` is optional: without one (no API key configured) every
/// request takes the deterministic path directly.
pub struct RecommendationEngine {
    table: Vec<RestaurantRecord>,
    ranker: Option<GroqClient>,
    tiers: PriceTiers,
    candidate_limit: usize,
    top_n: usize,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(table: Vec<RestaurantRecord>, ranker: Option<GroqClient>, tiers: PriceTiers) -> Self {
        Self {
            table,
            ranker,
            tiers,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Override the default candidate limit (20) and top-N (10).
    #[must_use]
    pub fn with_limits(mut self, candidate_limit: usize, top_n: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self.top_n = top_n;
        self
    }

    /// Number of rows in the loaded table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Generate recommendations for a validated request.
    ///
    /// The result is always a (possibly empty) list: no rows after
    /// filtering and an unreachable or misbehaving ranker both degrade
    /// rather than error. The output is guaranteed to be a subset, by
    /// name, of the candidates sent to the ranker.
    pub async fn get_recommendations(
        &self,
        input: &ValidatedUserInput,
        top_n: Option<usize>,
        candidate_limit: Option<usize>,
    ) -> Vec<RecommendedRestaurant> {
        let top_n = top_n.unwrap_or(self.top_n);
        let candidate_limit = candidate_limit.unwrap_or(self.candidate_limit);

        let rows: Vec<&RestaurantRecord> = self.table.iter().collect();
        let filtered = filter_candidates(&rows, input, &self.tiers);
        if filtered.is_empty() {
            tracing::info!(city = %input.city, cuisine = %input.cuisine, "no rows after filtering");
            return Vec::new();
        }

        let mut candidates = rank(&filtered);
        candidates.truncate(candidate_limit);
        if candidates.is_empty() {
            return Vec::new();
        }

        match self.external_ranking(input, &candidates, top_n).await {
            Some(ranking) => Self::apply_ranking(&candidates, &ranking, top_n),
            None => candidates
                .iter()
                .take(top_n)
                .map(|record| RecommendedRestaurant::from_record(record, FALLBACK_REASON))
                .collect(),
        }
    }

    /// One attempt at the external re-ranking. `None` means "use the
    /// deterministic order": no ranker configured, any call error, or a
    /// structurally valid but empty recommendation list.
    async fn external_ranking(
        &self,
        input: &ValidatedUserInput,
        candidates: &[&RestaurantRecord],
        top_n: usize,
    ) -> Option<Ranking> {
        let ranker = self.ranker.as_ref()?;

        let summaries: Vec<CandidateSummary> = candidates
            .iter()
            .map(|record| CandidateSummary::from_record(record))
            .collect();
        let price_description = input.price.describe(&self.tiers);

        match ranker
            .rank_candidates(
                &input.city,
                &input.cuisine,
                &price_description,
                &summaries,
                top_n,
            )
            .await
        {
            Ok(ranking) if ranking.recommendations.is_empty() => {
                tracing::warn!("ranker returned an empty list; using deterministic order");
                None
            }
            Ok(ranking) => Some(ranking),
            Err(error) => {
                tracing::warn!(%error, "ranker call failed; using deterministic order");
                None
            }
        }
    }

    /// Re-order candidates to the external ranking.
    ///
    /// Only names present in the candidate set survive — anything else
    /// the model returned is silently dropped, so the output can never
    /// leave the candidate set. Candidates the model omitted are dropped
    /// too; the deterministic order does not fill gaps here.
    fn apply_ranking(
        candidates: &[&RestaurantRecord],
        ranking: &Ranking,
        top_n: usize,
    ) -> Vec<RecommendedRestaurant> {
        let by_name: HashMap<&str, &RestaurantRecord> = candidates
            .iter()
            .map(|record| (record.name.as_str(), *record))
            .collect();

        ranking
            .recommendations
            .iter()
            .filter_map(|pick| {
                let record = by_name.get(pick.name.as_str());
                if record.is_none() {
                    tracing::warn!(name = %pick.name, "ranker returned a name outside the candidate set");
                }
                record.map(|record| RecommendedRestaurant::from_record(record, pick.reason.clone()))
            })
            .take(top_n)
            .collect()
    }
}
