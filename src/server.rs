//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, GraphQL client construction, the feed session
//! sweeper, and the Axum server lifecycle.

use crate::application::services::{FeedRegistry, run_session_sweeper};
use crate::config::Config;
use crate::domain::repositories::LaunchRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::graphql::{GraphqlClient, GraphqlLaunchRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to Redis when configured, falling back to [`NullCache`].
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    }
}

/// Builds the GraphQL client for the configured endpoint.
///
/// # Errors
///
/// Returns an error if the endpoint URL is invalid or the HTTP client
/// cannot be created.
pub fn build_graphql_client(
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<Arc<GraphqlClient>> {
    let client = GraphqlClient::new(
        &config.graphql_endpoint,
        config.request_timeout(),
        cache,
        config.cache_ttl_seconds,
    )
    .context("Failed to create GraphQL client")?;

    Ok(Arc::new(client))
}

/// How often idle feed sessions are purged.
fn sweep_interval(ttl: Duration) -> Duration {
    (ttl / 4).clamp(Duration::from_secs(1), Duration::from_secs(60))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback)
/// - GraphQL client and launch repositories
/// - Feed session registry and its sweeper task
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The GraphQL endpoint is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config).await;
    let graphql = build_graphql_client(&config, cache.clone())?;
    tracing::info!(endpoint = graphql.endpoint(), "GraphQL client ready");

    // Pages share cached responses; feeds always read fresh pages.
    let page_repository: Arc<dyn LaunchRepository> =
        Arc::new(GraphqlLaunchRepository::cached(graphql.clone()));
    let feed_repository: Arc<dyn LaunchRepository> =
        Arc::new(GraphqlLaunchRepository::uncached(graphql.clone()));

    let feeds = Arc::new(FeedRegistry::new(
        feed_repository,
        config.feed_session_ttl(),
        config.feed_session_capacity,
    ));
    let sweeper = tokio::spawn(run_session_sweeper(
        feeds.clone(),
        sweep_interval(config.feed_session_ttl()),
    ));

    let state = AppState::new(
        page_repository,
        feeds,
        cache,
        graphql,
        config.feed_page_size,
    );

    let app = app_router(state, &config.static_dir, config.behind_proxy)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_interval_bounds() {
        assert_eq!(sweep_interval(Duration::from_secs(900)), Duration::from_secs(60));
        assert_eq!(sweep_interval(Duration::from_secs(120)), Duration::from_secs(30));
        assert_eq!(sweep_interval(Duration::from_secs(2)), Duration::from_secs(1));
    }
}
