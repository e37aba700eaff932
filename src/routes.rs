//! Top-level router configuration combining pages, feed endpoints and API.
//!
//! # Route Structure
//!
//! - `GET  /`, `/launches`, `/launches/{id}`, `/about`, `/privacy` - Pages
//! - `POST /launches/feed/{session}/*` - Catalog feed endpoints
//! - `GET  /health`   - Health check: GraphQL, cache, feed sessions
//! - `/api/*`         - Read-only JSON API
//! - `/static/*`      - Static assets
//! - anything else    - 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API and feed endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Applies the per-IP rate limiter to `router`.
///
/// `behind_proxy` selects a key extractor that reads the client IP from
/// forwarding headers instead of the peer socket address.
fn rate_limited(router: Router<AppState>, behind_proxy: bool) -> Result<Router<AppState>> {
    Ok(if behind_proxy {
        router.layer(rate_limit::proxied_layer()?)
    } else {
        router.layer(rate_limit::layer()?)
    })
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// # Errors
///
/// Fails if the rate limiter configuration is rejected.
pub fn app_router(
    state: AppState,
    static_dir: &str,
    behind_proxy: bool,
) -> Result<NormalizePath<Router>> {
    let api_router = rate_limited(api::routes::api_routes(), behind_proxy)?;
    let feed_router = rate_limited(web::routes::feed_routes(), behind_proxy)?;

    let router = Router::new()
        .merge(web::routes::page_routes())
        .merge(feed_router)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
