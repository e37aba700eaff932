//! Catalog page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::feed::{FeedParams, LaunchFilter};
use crate::state::AppState;
use crate::web::view::{Crumb, LaunchCardView, Layout, NavItem, catalog_breadcrumbs};

/// Query string of the catalog page and the feed reset endpoint.
///
/// Values are parsed leniently: an unparsable `page_size` falls back to the
/// configured default instead of rejecting the page.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub video: Option<String>,
    pub page_size: Option<String>,
}

impl CatalogQuery {
    pub fn video_only(&self) -> bool {
        matches!(
            self.video.as_deref().map(str::trim),
            Some("1" | "true" | "on")
        )
    }

    /// Feed parameters for this query, clamped to the allowed page sizes.
    pub fn feed_params(&self, default_page_size: usize) -> FeedParams {
        let page_size = self
            .page_size
            .as_deref()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(default_page_size);

        FeedParams::new(page_size).with_filter(LaunchFilter::from_video_flag(self.video_only()))
    }
}

/// Template for the catalog page.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub layout: Layout,
    pub breadcrumbs: Vec<Crumb>,
    pub session_id: String,
    pub page_size: usize,
    pub video_only: bool,
    pub cards: Vec<LaunchCardView>,
    pub reached_end: bool,
    pub error: Option<String>,
}

/// Renders the catalog with the first page of a new feed session.
///
/// # Endpoint
///
/// `GET /launches?video=1&page_size=N`
///
/// Later pages are loaded by the browser through the feed endpoints using the
/// session id embedded in the page. A failed first page renders the retry
/// alert instead of an error page.
pub async fn catalog_handler(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let params = query.feed_params(state.feed_page_size);
    let (session_id, feed) = state.feeds.open(params).await;

    feed.fetch_next_page().await;
    let snapshot = feed.snapshot().await;

    tracing::debug!(
        session = %session_id,
        page_size = params.page_size,
        video_only = params.filter.is_video_only(),
        loaded = snapshot.launches.len(),
        "Catalog feed opened"
    );

    let page = CatalogTemplate {
        layout: Layout::new(NavItem::Catalog),
        breadcrumbs: catalog_breadcrumbs(),
        session_id,
        page_size: snapshot.params.page_size,
        video_only: snapshot.params.filter.is_video_only(),
        cards: LaunchCardView::from_launches(&snapshot.launches),
        reached_end: snapshot.reached_end,
        error: snapshot.error,
    };

    // The page embeds a session id and must not be replayed from a cache.
    ([(header::CACHE_CONTROL, "no-store")], page)
}
