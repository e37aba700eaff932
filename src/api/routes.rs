//! API route configuration.

use crate::api::handlers::{launch_handler, launch_list_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only JSON API.
///
/// # Endpoints
///
/// - `GET /launches`      - Launches, newest first (`limit`, `offset`)
/// - `GET /launches/{id}` - One launch with derived status
/// - `GET /stats`         - Aggregate totals
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/launches", get(launch_list_handler))
        .route("/launches/{id}", get(launch_handler))
        .route("/stats", get(stats_handler))
}
