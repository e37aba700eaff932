//! 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::web::view::{Layout, NavItem};

const PAGE_NOT_FOUND_MESSAGE: &str = "A página que você procura não existe ou foi movida.";

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub message: String,
}

/// Renders the 404 page with `message` and status 404.
pub fn not_found_page(message: &str) -> Response {
    let page = NotFoundTemplate {
        layout: Layout::new(NavItem::None),
        message: message.to_string(),
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

/// Fallback for unmatched paths.
pub async fn not_found_handler() -> Response {
    not_found_page(PAGE_NOT_FOUND_MESSAGE)
}
