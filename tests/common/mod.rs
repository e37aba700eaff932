#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use launch_portal::api::handlers::health_handler;
use launch_portal::api::routes::api_routes;
use launch_portal::application::services::FeedRegistry;
use launch_portal::domain::entities::{Launch, LaunchStats};
use launch_portal::domain::repositories::LaunchRepository;
use launch_portal::error::AppError;
use launch_portal::infrastructure::cache::{CacheResult, CacheService, NullCache};
use launch_portal::infrastructure::graphql::GraphqlClient;
use launch_portal::state::AppState;
use launch_portal::web::handlers::not_found_handler;
use launch_portal::web::routes::{feed_routes, page_routes};

/// Nothing listens here; requests fail fast with a connection error.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/";

/// A past launch with a fixed date, no video and no images.
pub fn launch(id: &str) -> Launch {
    let mut l = Launch::fallback();
    l.id = id.to_string();
    l.mission_name = format!("Mission {id}");
    l.launch_date = Some(Utc.with_ymd_and_hms(2020, 5, 30, 19, 22, 0).unwrap());
    l.success = Some(true);
    l.site = Some("Kennedy Space Center".to_string());
    l.details = Some(format!("Details of {id}"));
    l
}

pub fn launch_with_video(id: &str) -> Launch {
    let mut l = launch(id);
    l.links.video_link = Some(format!("https://www.youtube.com/watch?v={id}"));
    l
}

pub fn launch_at(id: &str, date: DateTime<Utc>) -> Launch {
    let mut l = launch(id);
    l.launch_date = Some(date);
    l
}

pub fn future_launch(id: &str) -> Launch {
    let mut l = launch_at(id, Utc::now() + ChronoDuration::days(30));
    l.success = None;
    l
}

/// `count` launches with ids `L0`, `L1`, ...
pub fn launches(count: usize) -> Vec<Launch> {
    (0..count).map(|i| launch(&format!("L{i}"))).collect()
}

/// In-memory [`LaunchRepository`] serving a fixed list.
///
/// `limit`/`offset` slice the list the way the upstream API does. When
/// `failing` is set every call returns an upstream error.
pub struct StubRepository {
    launches: Vec<Launch>,
    failing: bool,
    calls: Mutex<Vec<(Option<usize>, Option<usize>)>>,
}

impl StubRepository {
    pub fn new(launches: Vec<Launch>) -> Self {
        Self {
            launches,
            failing: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            launches: Vec::new(),
            failing: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Option<usize>, Option<usize>)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            Err(AppError::upstream("upstream down", json!({})))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LaunchRepository for StubRepository {
    async fn list_launches(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Launch>, AppError> {
        self.calls.lock().unwrap().push((limit, offset));
        self.check()?;
        let start = offset.unwrap_or(0).min(self.launches.len());
        let end = limit.map_or(self.launches.len(), |l| (start + l).min(self.launches.len()));
        Ok(self.launches[start..end].to_vec())
    }

    async fn launch_stats(&self) -> Result<LaunchStats, AppError> {
        self.check()?;
        Ok(LaunchStats::from_launches(&self.launches))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Launch>, AppError> {
        self.check()?;
        Ok(self.launches.iter().find(|l| l.id == id).cloned())
    }
}

/// One scripted answer of [`ScriptedRepository::list_launches`].
pub enum Step {
    Page(Vec<Launch>),
    Fail,
    /// Waits for the gate to open, then answers with the page.
    Gated(Arc<Notify>, Vec<Launch>),
    /// Never answers.
    Hang,
}

/// Repository answering `list_launches` calls from a queue of [`Step`]s.
///
/// Every call is recorded as `(limit, offset)` before its step runs. An
/// exhausted queue answers with an empty page.
pub struct ScriptedRepository {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(Option<usize>, Option<usize>)>>,
}

impl ScriptedRepository {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Option<usize>, Option<usize>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .map(|(_, offset)| offset.unwrap_or(0))
            .collect()
    }
}

#[async_trait]
impl LaunchRepository for ScriptedRepository {
    async fn list_launches(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Launch>, AppError> {
        self.calls.lock().unwrap().push((limit, offset));
        let step = self.steps.lock().unwrap().pop_front();

        match step {
            Some(Step::Page(page)) => Ok(page),
            Some(Step::Fail) => Err(AppError::upstream("scripted failure", json!({}))),
            Some(Step::Gated(gate, page)) => {
                gate.notified().await;
                Ok(page)
            }
            Some(Step::Hang) => std::future::pending().await,
            None => Ok(Vec::new()),
        }
    }

    async fn launch_stats(&self) -> Result<LaunchStats, AppError> {
        Ok(LaunchStats::default())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Launch>, AppError> {
        Ok(None)
    }
}

/// Process-local [`CacheService`] used to observe cache traffic.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, payload: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

pub fn graphql_client(endpoint: &str, cache: Arc<dyn CacheService>) -> Arc<GraphqlClient> {
    Arc::new(GraphqlClient::new(endpoint, Duration::from_secs(2), cache, 60).unwrap())
}

/// State whose pages and feeds both read from `repository`.
///
/// The GraphQL client only serves the health check and points at
/// `graphql_endpoint`.
pub fn create_test_state_with(
    repository: Arc<dyn LaunchRepository>,
    graphql_endpoint: &str,
) -> AppState {
    let cache: Arc<dyn CacheService> = Arc::new(NullCache::new());
    let feeds = Arc::new(FeedRegistry::new(
        repository.clone(),
        Duration::from_secs(900),
        64,
    ));

    AppState::new(
        repository,
        feeds,
        cache.clone(),
        graphql_client(graphql_endpoint, cache),
        12,
    )
}

pub fn create_test_state(repository: Arc<dyn LaunchRepository>) -> AppState {
    create_test_state_with(repository, UNREACHABLE_ENDPOINT)
}

/// Every route without rate limiting, which needs a peer address.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(feed_routes())
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .fallback(not_found_handler)
        .with_state(state)
}

/// Extracts the feed session id embedded in a rendered catalog page.
pub fn session_id(html: &str) -> String {
    let marker = "data-feed=\"";
    let start = html.find(marker).expect("catalog page has no feed session") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_string()
}
