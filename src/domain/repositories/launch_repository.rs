//! Repository trait for launch data access.

use crate::domain::entities::{Launch, LaunchStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading launch records.
///
/// Backed by the three fixed GraphQL queries of the upstream API.
///
/// # Implementations
///
/// - [`crate::infrastructure::graphql::GraphqlLaunchRepository`] - GraphQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_launch.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LaunchRepository: Send + Sync {
    /// Lists launches, newest first.
    ///
    /// `limit` and `offset` are forwarded to the upstream query only when set.
    /// The result never holds more than `limit` records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the endpoint fails.
    async fn list_launches(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Launch>, AppError>;

    /// Computes aggregate totals from the simplified listing query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the endpoint fails.
    async fn launch_stats(&self) -> Result<LaunchStats, AppError>;

    /// Fetches a single launch by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Launch))` if found
    /// - `Ok(None)` if the id does not resolve
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the endpoint fails.
    async fn find_by_id(&self, id: &str) -> Result<Option<Launch>, AppError>;
}
