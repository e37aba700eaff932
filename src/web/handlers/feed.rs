//! Feed endpoints driven by the catalog page script.

use std::sync::Arc;

use askama::Template;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;

use super::catalog::CatalogQuery;
use crate::domain::entities::Launch;
use crate::domain::feed::{FeedSnapshot, FetchOutcome, LaunchFeed};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_id::is_session_id;
use crate::web::view::LaunchCardView;

/// Card markup without the page layout.
#[derive(Template)]
#[template(path = "partials/cards.html")]
struct CardsTemplate<'a> {
    cards: &'a [LaunchCardView],
}

/// Response of the `next` and `reset` endpoints.
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    /// Rendered cards for the launches carried by this response.
    pub html: String,
    /// Number of cards in `html`.
    pub appended: usize,
    /// Length of the accumulated list after this call.
    pub total: usize,
    pub reached_end: bool,
    /// True if another request for this feed is still running.
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedResponse {
    fn build(launches: &[Launch], snapshot: &FeedSnapshot) -> Result<Self, AppError> {
        let cards = LaunchCardView::from_launches(launches);
        let html = CardsTemplate { cards: &cards }
            .render()
            .map_err(|e| AppError::internal("Failed to render cards", json!({ "reason": e.to_string() })))?;

        Ok(Self {
            html,
            appended: cards.len(),
            total: snapshot.launches.len(),
            reached_end: snapshot.reached_end,
            loading: snapshot.loading,
            error: snapshot.error.clone(),
        })
    }
}

async fn find_feed(state: &AppState, session_id: &str) -> Result<Arc<LaunchFeed>, AppError> {
    let feed = if is_session_id(session_id) {
        state.feeds.get(session_id).await
    } else {
        None
    };

    feed.ok_or_else(|| {
        AppError::not_found("Feed session not found", json!({ "session": session_id }))
    })
}

/// Loads the next page of a feed.
///
/// # Endpoint
///
/// `POST /launches/feed/{session}/next`
///
/// `html` holds only the newly appended cards. A call made while another
/// request is running, or after the end was reached, appends nothing. After a
/// failure `error` is set and the next call retries the same offset.
///
/// # Errors
///
/// Returns 404 if the session is unknown or expired.
pub async fn feed_next_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<FeedResponse>, AppError> {
    let feed = find_feed(&state, &session_id).await?;

    let appended = match feed.fetch_next_page().await {
        FetchOutcome::Appended { items, .. } => items,
        _ => Vec::new(),
    };
    let snapshot = feed.snapshot().await;

    Ok(Json(FeedResponse::build(&appended, &snapshot)?))
}

/// Restarts a feed with new parameters and loads its first page.
///
/// # Endpoint
///
/// `POST /launches/feed/{session}/reset?video=1&page_size=N`
///
/// Any request still running for the old parameters is aborted and its
/// result discarded. If a `next` call for the new parameters got in first,
/// the response waits for it. `html` holds the whole new list.
///
/// # Errors
///
/// Returns 404 if the session is unknown or expired.
pub async fn feed_reset_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<FeedResponse>, AppError> {
    let feed = find_feed(&state, &session_id).await?;

    feed.restart(query.feed_params(state.feed_page_size)).await;
    if feed.fetch_next_page().await == FetchOutcome::Busy {
        feed.wait_idle().await;
    }
    let snapshot = feed.snapshot().await;

    Ok(Json(FeedResponse::build(&snapshot.launches, &snapshot)?))
}

/// Drops a feed session.
///
/// # Endpoint
///
/// `POST /launches/feed/{session}/close`
///
/// Always answers `204 No Content`; closing an unknown session is a no-op.
pub async fn feed_close_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    if is_session_id(&session_id) && state.feeds.close(&session_id).await {
        tracing::debug!(session = %session_id, "Feed session closed");
    }
    StatusCode::NO_CONTENT
}
