//! Per-visitor feed sessions for the catalog page.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::domain::feed::{FeedParams, LaunchFeed};
use crate::domain::repositories::LaunchRepository;
use crate::utils::session_id::generate_session_id;

struct FeedSession {
    feed: Arc<LaunchFeed>,
    last_access: Instant,
}

/// Owns the live [`LaunchFeed`]s, one per rendered catalog page.
///
/// Sessions are bounded two ways: idle sessions older than the TTL are
/// purged, and opening a session at capacity evicts the least recently used
/// one. Evicted and closed feeds have their in-flight fetch aborted.
pub struct FeedRegistry {
    repository: Arc<dyn LaunchRepository>,
    sessions: Mutex<HashMap<String, FeedSession>>,
    ttl: Duration,
    capacity: usize,
}

impl FeedRegistry {
    pub fn new(repository: Arc<dyn LaunchRepository>, ttl: Duration, capacity: usize) -> Self {
        Self {
            repository,
            sessions: Mutex::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Creates a feed session and returns its id with the feed.
    pub async fn open(&self, params: FeedParams) -> (String, Arc<LaunchFeed>) {
        let feed = Arc::new(LaunchFeed::new(Arc::clone(&self.repository), params));
        let id = generate_session_id();
        let now = Instant::now();

        let dropped = {
            let mut sessions = self.sessions.lock().await;
            let mut dropped = take_expired(&mut sessions, now, self.ttl);

            while sessions.len() >= self.capacity {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, session)| session.last_access)
                    .map(|(id, _)| id.clone());
                match oldest.and_then(|id| sessions.remove(&id)) {
                    Some(session) => dropped.push(session.feed),
                    None => break,
                }
            }

            sessions.insert(
                id.clone(),
                FeedSession {
                    feed: Arc::clone(&feed),
                    last_access: now,
                },
            );
            metrics::gauge!("feed_sessions").set(sessions.len() as f64);
            dropped
        };

        if !dropped.is_empty() {
            tracing::debug!(count = dropped.len(), "Dropping idle feed sessions");
        }
        for stale in dropped {
            stale.close().await;
        }

        (id, feed)
    }

    /// Looks up a session and refreshes its last access time.
    pub async fn get(&self, id: &str) -> Option<Arc<LaunchFeed>> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(id)?;
        session.last_access = Instant::now();
        Some(Arc::clone(&session.feed))
    }

    /// Removes a session and aborts its in-flight fetch.
    ///
    /// Returns false if the id was unknown.
    pub async fn close(&self, id: &str) -> bool {
        let removed = self.sessions.lock().await.remove(id);
        match removed {
            Some(session) => {
                session.feed.close().await;
                true
            }
            None => false,
        }
    }

    /// Drops sessions idle longer than the TTL. Returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let expired = {
            let mut sessions = self.sessions.lock().await;
            let expired = take_expired(&mut sessions, Instant::now(), self.ttl);
            metrics::gauge!("feed_sessions").set(sessions.len() as f64);
            expired
        };

        let count = expired.len();
        for feed in expired {
            feed.close().await;
        }
        count
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

fn take_expired(
    sessions: &mut HashMap<String, FeedSession>,
    now: Instant,
    ttl: Duration,
) -> Vec<Arc<LaunchFeed>> {
    let expired: Vec<String> = sessions
        .iter()
        .filter(|(_, session)| now.duration_since(session.last_access) > ttl)
        .map(|(id, _)| id.clone())
        .collect();

    expired
        .into_iter()
        .filter_map(|id| sessions.remove(&id))
        .map(|session| session.feed)
        .collect()
}

/// Periodically purges idle feed sessions until the task is aborted.
pub async fn run_session_sweeper(registry: Arc<FeedRegistry>, every: Duration) {
    tracing::info!(
        interval_secs = every.as_secs(),
        ttl_secs = registry.ttl().as_secs(),
        "Feed session sweeper started"
    );

    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let purged = registry.purge_expired().await;
        if purged > 0 {
            tracing::debug!(purged, "Purged idle feed sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLaunchRepository;

    fn registry(ttl_secs: u64, capacity: usize) -> FeedRegistry {
        FeedRegistry::new(
            Arc::new(MockLaunchRepository::new()),
            Duration::from_secs(ttl_secs),
            capacity,
        )
    }

    #[tokio::test]
    async fn test_open_and_get() {
        let registry = registry(60, 4);
        let (id, feed) = registry.open(FeedParams::new(6)).await;

        let found = registry.get(&id).await.unwrap();
        assert!(Arc::ptr_eq(&feed, &found));
        assert_eq!(found.params().await.page_size, 6);
        assert!(registry.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_close_removes_session() {
        let registry = registry(60, 4);
        let (id, _) = registry.open(FeedParams::default()).await;

        assert!(registry.close(&id).await);
        assert!(!registry.close(&id).await);
        assert!(registry.get(&id).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let registry = registry(60, 2);
        let (first, _) = registry.open(FeedParams::default()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let (second, _) = registry.open(FeedParams::default()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        // Touch the first session so the second becomes the oldest.
        registry.get(&first).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let (third, _) = registry.open(FeedParams::default()).await;

        assert_eq!(registry.len().await, 2);
        assert!(registry.get(&first).await.is_some());
        assert!(registry.get(&second).await.is_none());
        assert!(registry.get(&third).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_expire() {
        let registry = registry(10, 8);
        let (idle, _) = registry.open(FeedParams::default()).await;
        let (active, _) = registry.open(FeedParams::default()).await;

        tokio::time::advance(Duration::from_secs(6)).await;
        registry.get(&active).await.unwrap();
        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(registry.purge_expired().await, 1);
        assert!(registry.get(&idle).await.is_none());
        assert!(registry.get(&active).await.is_some());
    }
}
