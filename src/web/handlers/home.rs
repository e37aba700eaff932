//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::utils::format::group_thousands;
use crate::web::view::{LaunchCardView, Layout, NavItem};

/// Number of launch cards shown below the stat tiles.
pub const HOME_CARD_LIMIT: usize = 6;

/// Template for the home page.
///
/// Stat values are preformatted with pt-BR digit grouping.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub total: String,
    pub successful: String,
    pub with_video: String,
    pub cards: Vec<LaunchCardView>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Never fails: stats degrade to zeros and the card list to the fallback
/// launch when the data source is down.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let overview = state.launch_service.home_overview(HOME_CARD_LIMIT).await;

    HomeTemplate {
        layout: Layout::new(NavItem::Home),
        total: group_thousands(overview.stats.total),
        successful: group_thousands(overview.stats.successful),
        with_video: group_thousands(overview.with_video),
        cards: LaunchCardView::from_launches(&overview.launches),
    }
}
