//! [`LaunchRepository`] backed by the GraphQL launch API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::client::{FetchPolicy, GraphqlClient};
use super::queries::{GET_LAUNCH_DETAILS, GET_LAUNCHES, GET_LAUNCHES_SIMPLE};
use super::records::{LaunchData, LaunchesData};
use crate::domain::entities::{Launch, LaunchStats};
use crate::domain::repositories::LaunchRepository;
use crate::error::AppError;

pub struct GraphqlLaunchRepository {
    client: Arc<GraphqlClient>,
    policy: FetchPolicy,
}

impl GraphqlLaunchRepository {
    /// Repository for server-rendered pages; responses go through the cache.
    pub fn cached(client: Arc<GraphqlClient>) -> Self {
        Self {
            client,
            policy: FetchPolicy::Cached,
        }
    }

    /// Repository for feeds; every page goes to the network.
    pub fn uncached(client: Arc<GraphqlClient>) -> Self {
        Self {
            client,
            policy: FetchPolicy::NoStore,
        }
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }
}

/// Builds the `GetLaunches` variables, leaving out unset values.
pub fn page_variables(limit: Option<usize>, offset: Option<usize>) -> Value {
    let mut vars = Map::new();
    if let Some(limit) = limit {
        vars.insert("limit".to_string(), json!(limit));
    }
    if let Some(offset) = offset {
        vars.insert("offset".to_string(), json!(offset));
    }
    Value::Object(vars)
}

/// Orders newest first and caps the list at `limit`. Undated launches sort last.
fn newest_first(mut launches: Vec<Launch>, limit: Option<usize>) -> Vec<Launch> {
    launches.sort_by(|a, b| b.launch_date.cmp(&a.launch_date));
    if let Some(limit) = limit {
        launches.truncate(limit);
    }
    launches
}

#[async_trait]
impl LaunchRepository for GraphqlLaunchRepository {
    async fn list_launches(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Launch>, AppError> {
        let data: LaunchesData = self
            .client
            .execute(&GET_LAUNCHES, page_variables(limit, offset), self.policy)
            .await?;

        Ok(newest_first(data.into_launches(), limit))
    }

    async fn launch_stats(&self) -> Result<LaunchStats, AppError> {
        let data: LaunchesData = self
            .client
            .execute(&GET_LAUNCHES_SIMPLE, json!({}), self.policy)
            .await?;

        Ok(LaunchStats::from_launches(&data.into_launches()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Launch>, AppError> {
        let data: LaunchData = self
            .client
            .execute(&GET_LAUNCH_DETAILS, json!({ "id": id }), self.policy)
            .await?;

        Ok(data.launch.map(Launch::from))
    }
}
