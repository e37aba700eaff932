//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{FeedRegistry, LaunchService};
use crate::domain::repositories::LaunchRepository;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::graphql::GraphqlClient;

#[derive(Clone)]
pub struct AppState {
    /// Cached data access for server-rendered pages and the JSON API.
    pub launch_service: Arc<LaunchService<dyn LaunchRepository>>,
    /// Live catalog feeds, keyed by session id.
    pub feeds: Arc<FeedRegistry>,
    pub cache: Arc<dyn CacheService>,
    pub graphql: Arc<GraphqlClient>,
    /// Page size used when the catalog request does not ask for one.
    pub feed_page_size: usize,
}

impl AppState {
    pub fn new(
        launch_repository: Arc<dyn LaunchRepository>,
        feeds: Arc<FeedRegistry>,
        cache: Arc<dyn CacheService>,
        graphql: Arc<GraphqlClient>,
        feed_page_size: usize,
    ) -> Self {
        Self {
            launch_service: Arc::new(LaunchService::new(launch_repository)),
            feeds,
            cache,
            graphql,
            feed_page_size,
        }
    }
}
