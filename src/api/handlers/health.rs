//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **GraphQL**: Sends a trivial query to the endpoint
/// 2. **Cache**: Tests Redis PING (always ok when caching is disabled)
/// 3. **Feeds**: Reports open catalog sessions against capacity
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "graphql": {
///       "status": "ok",
///       "message": "Reachable: https://spacex-production.up.railway.app/"
///     },
///     "cache": {
///       "status": "ok",
///       "message": "Cache reachable"
///     },
///     "feeds": {
///       "status": "ok",
///       "message": "Open sessions: 3/1024"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (graphql_check, cache_check) = tokio::join!(check_graphql(&state), check_cache(&state));

    let feeds_check = check_feeds(&state).await;

    let all_healthy = graphql_check.is_ok() && cache_check.is_ok() && feeds_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            graphql: graphql_check,
            cache: cache_check,
            feeds: feeds_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the GraphQL endpoint answers.
async fn check_graphql(state: &AppState) -> CheckStatus {
    let endpoint = state.graphql.endpoint();
    if state.graphql.ping().await {
        CheckStatus::ok(format!("Reachable: {endpoint}"))
    } else {
        CheckStatus::error(format!("Unreachable: {endpoint}"))
    }
}

/// Checks cache connectivity via PING command.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache reachable")
    } else {
        CheckStatus::error("Redis connection failed")
    }
}

/// Reports feed session usage.
async fn check_feeds(state: &AppState) -> CheckStatus {
    let open = state.feeds.len().await;
    CheckStatus::ok(format!("Open sessions: {}/{}", open, state.feeds.capacity()))
}
