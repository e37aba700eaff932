//! Minimal GraphQL-over-HTTP client.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::queries::{PING, Query};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Errors raised while talking to the GraphQL endpoint.
#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("Invalid GraphQL endpoint: {0}")]
    Endpoint(String),

    #[error("GraphQL transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL endpoint returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("GraphQL response has no data")]
    MissingData,

    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphqlError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Endpoint(_) => "endpoint",
            Self::Http(e) if e.is_timeout() => "timeout",
            Self::Http(_) => "transport",
            Self::Status { .. } => "status",
            Self::Graphql(_) => "graphql",
            Self::MissingData => "missing_data",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<GraphqlError> for AppError {
    fn from(e: GraphqlError) -> Self {
        let details = match &e {
            GraphqlError::Status { status, .. } => json!({ "kind": e.kind(), "status": status }),
            GraphqlError::Graphql(messages) => json!({ "kind": e.kind(), "errors": messages }),
            _ => json!({ "kind": e.kind() }),
        };
        AppError::upstream(e.to_string(), details)
    }
}

/// Whether a request may be answered from the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Served from the cache when present; stored for the configured TTL.
    Cached,
    /// Always sent to the endpoint.
    NoStore,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Sends the fixed launch queries to one endpoint.
///
/// Successful `data` payloads are cached through [`CacheService`] when the
/// caller asks for [`FetchPolicy::Cached`].
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: Url,
    cache: Arc<dyn CacheService>,
    cache_ttl: u64,
}

impl GraphqlClient {
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
    ) -> Result<Self, GraphqlError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| GraphqlError::Endpoint(format!("{endpoint}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            cache,
            cache_ttl: cache_ttl_seconds,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn cache(&self) -> &Arc<dyn CacheService> {
        &self.cache
    }

    /// Cache key of one query/variables pair: `gql:` + SHA-256 hex.
    pub fn cache_key(query: &Query, variables: &Value) -> String {
        let mut hasher = Sha256::new();
        hasher.update(query.document.as_bytes());
        hasher.update(b"\n");
        hasher.update(variables.to_string().as_bytes());
        format!("gql:{}", hex::encode(hasher.finalize()))
    }

    /// Runs `query` and decodes its `data` member into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<T, GraphqlError> {
        let key = match policy {
            FetchPolicy::Cached => Some(Self::cache_key(query, &variables)),
            FetchPolicy::NoStore => None,
        };

        if let Some(key) = &key {
            match self.cache.get(key).await {
                Ok(Some(payload)) => match serde_json::from_str::<T>(&payload) {
                    Ok(data) => {
                        debug!(operation = query.operation, "GraphQL cache hit");
                        return Ok(data);
                    }
                    Err(e) => warn!(operation = query.operation, "Discarding cached payload: {}", e),
                },
                Ok(None) => {}
                Err(e) => warn!("Cache lookup failed: {}", e),
            }
        }

        let data = self.send(query, &variables).await?;

        if let Some(key) = &key {
            if let Err(e) = self.cache.set(key, &data.to_string(), Some(self.cache_ttl)).await {
                warn!("Cache store failed: {}", e);
            }
        }

        Ok(serde_json::from_value(data)?)
    }

    /// Returns true if the endpoint answers a trivial query.
    pub async fn ping(&self) -> bool {
        self.send(&PING, &json!({})).await.is_ok()
    }

    async fn send(&self, query: &Query, variables: &Value) -> Result<Value, GraphqlError> {
        let started = std::time::Instant::now();
        metrics::counter!("graphql_requests_total", "operation" => query.operation).increment(1);

        let body = GraphqlRequest {
            query: query.document,
            operation_name: query.operation,
            variables,
        };

        let result = self.round_trip(&body).await;

        debug!(
            operation = query.operation,
            variables = %variables,
            latency_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "GraphQL request finished"
        );
        if let Err(e) = &result {
            metrics::counter!("graphql_failures_total", "kind" => e.kind()).increment(1);
        }

        result
    }

    async fn round_trip(&self, body: &GraphqlRequest<'_>) -> Result<Value, GraphqlError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GraphqlError::Status {
                status: status.as_u16(),
                body: text.chars().take(512).collect(),
            });
        }

        let envelope: GraphqlResponse = serde_json::from_str(&text)?;

        if !envelope.errors.is_empty() {
            return Err(GraphqlError::Graphql(
                envelope.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        match envelope.data {
            Some(Value::Null) | None => Err(GraphqlError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::graphql::queries::{GET_LAUNCHES, GET_LAUNCH_DETAILS};

    #[test]
    fn test_cache_key_is_stable_and_distinct() {
        let a = GraphqlClient::cache_key(&GET_LAUNCHES, &json!({ "limit": 6 }));
        let b = GraphqlClient::cache_key(&GET_LAUNCHES, &json!({ "limit": 6 }));
        let c = GraphqlClient::cache_key(&GET_LAUNCHES, &json!({ "limit": 7 }));
        let d = GraphqlClient::cache_key(&GET_LAUNCH_DETAILS, &json!({ "limit": 6 }));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a.starts_with("gql:"));
        assert_eq!(a.len(), 4 + 64);
    }

    #[test]
    fn test_error_maps_to_upstream() {
        let err: AppError = GraphqlError::Status {
            status: 503,
            body: String::new(),
        }
        .into();
        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.message(), "GraphQL endpoint returned HTTP 503");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let result = GraphqlClient::new(
            "not a url",
            Duration::from_secs(1),
            Arc::new(crate::infrastructure::cache::NullCache::new()),
            60,
        );
        assert!(matches!(result, Err(GraphqlError::Endpoint(_))));
    }
}
