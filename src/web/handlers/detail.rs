//! Launch detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use super::not_found::not_found_page;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::{Crumb, LaunchDetailView, Layout, NavItem, detail_breadcrumbs};

const LAUNCH_NOT_FOUND_MESSAGE: &str =
    "Não encontramos este lançamento. Ele pode ter sido removido ou o endereço está incorreto.";

/// Template for the launch detail page.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub layout: Layout,
    pub breadcrumbs: Vec<Crumb>,
    pub launch: LaunchDetailView,
}

/// Renders one launch.
///
/// # Endpoint
///
/// `GET /launches/{id}`
///
/// Malformed ids, unknown ids and upstream failures all render the 404 page
/// with status 404.
pub async fn detail_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.launch_service.launch_by_id(&id).await {
        Ok(launch) => DetailTemplate {
            layout: Layout::new(NavItem::Catalog),
            breadcrumbs: detail_breadcrumbs(&launch.mission_name),
            launch: LaunchDetailView::new(&launch, Utc::now()),
        }
        .into_response(),
        Err(e) => {
            match &e {
                AppError::Upstream { .. } | AppError::Internal { .. } => {
                    tracing::error!(id = %id, "Error fetching launch: {}", e)
                }
                _ => tracing::debug!(id = %id, "Launch not shown: {}", e),
            }
            not_found_page(LAUNCH_NOT_FOUND_MESSAGE)
        }
    }
}
