//! Handlers for launch listing and lookup.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use validator::Validate;

use crate::api::dto::launch::{LaunchDto, LaunchListResponse};
use crate::api::dto::pagination::LaunchListQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists launches, newest first.
///
/// # Endpoint
///
/// `GET /api/launches`
///
/// # Query Parameters
///
/// - `limit` (optional): Maximum number of records, 1..=100
/// - `offset` (optional): Records to skip upstream
///
/// # Response
///
/// ```json
/// { "items": [{ "id": "109", "mission_name": "CRS-20", "status": "succeeded", ... }], "count": 1 }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the parameters are invalid
/// - 502 Bad Gateway if the GraphQL endpoint fails
pub async fn launch_list_handler(
    State(state): State<AppState>,
    Query(query): Query<LaunchListQuery>,
) -> Result<Json<LaunchListResponse>, AppError> {
    query.validate()?;

    let launches = state
        .launch_service
        .launch_page(query.limit, query.offset)
        .await?;

    Ok(Json(LaunchListResponse::new(launches)))
}

/// Fetches one launch with its derived status.
///
/// # Endpoint
///
/// `GET /api/launches/{id}`
///
/// # Errors
///
/// - 400 Bad Request if the id is malformed
/// - 404 Not Found if the id does not resolve
/// - 502 Bad Gateway if the GraphQL endpoint fails
pub async fn launch_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LaunchDto>, AppError> {
    let launch = state.launch_service.launch_by_id(&id).await?;
    Ok(Json(LaunchDto::new(launch, Utc::now())))
}
