//! Launch data access with page-level fallbacks.

use std::sync::Arc;

use crate::domain::entities::{Launch, LaunchStats};
use crate::domain::repositories::LaunchRepository;
use crate::error::AppError;
use crate::utils::launch_id::validate_launch_id;
use serde_json::json;

/// Data shown on the home page.
#[derive(Debug, Clone)]
pub struct HomeOverview {
    pub stats: LaunchStats,
    /// Launches with a video link among every fetched launch.
    pub with_video: u64,
    /// The newest launches, capped at the requested card count.
    pub launches: Vec<Launch>,
}

/// Service wrapping a [`LaunchRepository`] with the per-view error policy.
///
/// | operation         | on upstream failure                 |
/// |-------------------|-------------------------------------|
/// | `recent_launches` | `[Launch::fallback()]`              |
/// | `launch_stats`    | `{ total: 0, successful: 0 }`       |
/// | `launch_page`     | error returned                      |
/// | `launch_by_id`    | error returned                      |
pub struct LaunchService<R: LaunchRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LaunchRepository + ?Sized> LaunchService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Lists launches newest first, degrading to the fallback record.
    pub async fn recent_launches(&self, limit: Option<usize>, offset: Option<usize>) -> Vec<Launch> {
        match self.repository.list_launches(limit, offset).await {
            Ok(launches) => launches,
            Err(e) => {
                tracing::error!("Error fetching launches: {}", e);
                vec![Launch::fallback()]
            }
        }
    }

    /// Lists launches newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the endpoint fails.
    pub async fn launch_page(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Launch>, AppError> {
        self.repository.list_launches(limit, offset).await
    }

    /// Aggregate totals, or zeros when the endpoint fails.
    pub async fn launch_stats(&self) -> LaunchStats {
        match self.repository.launch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Error fetching stats: {}", e);
                LaunchStats::default()
            }
        }
    }

    /// Fetches one launch.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `id` is malformed; no request is made
    /// - [`AppError::NotFound`] if the id does not resolve
    /// - [`AppError::Upstream`] if the endpoint fails
    pub async fn launch_by_id(&self, id: &str) -> Result<Launch, AppError> {
        validate_launch_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Launch not found", json!({ "id": id })))
    }

    /// Stats and launches for the home page, fetched concurrently.
    pub async fn home_overview(&self, card_limit: usize) -> HomeOverview {
        let (stats, launches) = tokio::join!(self.launch_stats(), self.recent_launches(None, None));

        let with_video = launches.iter().filter(|l| l.has_video()).count() as u64;
        let launches = launches.into_iter().take(card_limit).collect();

        HomeOverview {
            stats,
            with_video,
            launches,
        }
    }
}
