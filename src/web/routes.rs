//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, catalog_handler, detail_handler, feed_close_handler, feed_next_handler,
    feed_reset_handler, home_handler, privacy_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Home page with stats and recent launches
/// - `GET /launches` - Catalog with the first feed page
/// - `GET /launches/{id}` - Launch detail page
/// - `GET /about` - About page
/// - `GET /privacy` - Privacy policy
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/launches", get(catalog_handler))
        .route("/launches/{id}", get(detail_handler))
        .route("/about", get(about_handler))
        .route("/privacy", get(privacy_handler))
}

/// Endpoints called by the catalog script.
///
/// # Endpoints
///
/// - `POST /launches/feed/{session}/next` - Load the next page
/// - `POST /launches/feed/{session}/reset` - Restart with new parameters
/// - `POST /launches/feed/{session}/close` - Drop the session
pub fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/launches/feed/{session}/next", post(feed_next_handler))
        .route("/launches/feed/{session}/reset", post(feed_reset_handler))
        .route("/launches/feed/{session}/close", post(feed_close_handler))
}
