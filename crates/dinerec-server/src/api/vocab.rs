use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// `GET /api/v1/cities` — the canonical city vocabulary.
pub async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: state.cities.as_ref().clone(),
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

/// `GET /api/v1/cuisines` — the canonical cuisine vocabulary.
pub async fn list_cuisines(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: state.cuisines.as_ref().clone(),
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
