//! Handler for aggregate launch statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::state::AppState;

/// Returns launch totals.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// { "total": 187, "successful": 180 }
/// ```
///
/// Answers `{ "total": 0, "successful": 0 }` when the GraphQL endpoint fails.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.launch_service.launch_stats().await.into())
}
