use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use dinerec_core::{validate_user_input, RecommendedRestaurant};
use serde::Deserialize;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub city: String,
    pub cuisine: String,
    pub price: String,
    pub top_n: Option<usize>,
}

/// `POST /api/v1/recommendations`
///
/// Validates the free-text request against the dataset vocabularies and
/// runs the recommendation pipeline. Validation failures come back as
/// 400 with the actionable message (including "did you mean"
/// suggestions); an unavailable ranker never surfaces here — the engine
/// falls back internally.
pub async fn create_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = validate_user_input(
        &request.city,
        &request.cuisine,
        &request.price,
        &state.cities,
        &state.cuisines,
    )
    .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let recommendations: Vec<RecommendedRestaurant> = state
        .engine
        .get_recommendations(&input, request.top_n, None)
        .await;

    tracing::info!(
        city = %input.city,
        cuisine = %input.cuisine,
        results = recommendations.len(),
        "served recommendations"
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: recommendations,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
