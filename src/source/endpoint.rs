//! HTTP object-list endpoint.

use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;

use super::{ListFormat, parse_object_list};
use crate::constants::{MAX_BACKOFF_DELAY_MS, MAX_ENDPOINT_RETRIES, STARTING_BACKOFF_DELAY_MS};
use crate::core::DepviewError;
use crate::graph::NodeMap;

/// The backend endpoint returning the current object list as JSON.
#[derive(Debug, Clone)]
pub struct EndpointSource {
    /// Full URL of the list endpoint.
    pub url: String,
    /// Bearer token sent in the `Authorization` header.
    pub token: Option<String>,
    /// Timeout for a single request.
    pub timeout: Duration,
}

impl EndpointSource {
    /// Create an endpoint source without authentication.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            token: None,
            timeout,
        }
    }

    /// Authenticate requests with a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Fetch and decode the object list.
    ///
    /// Transport failures and 5xx answers are retried with exponential
    /// backoff; any other status fails immediately.
    pub async fn fetch(&self) -> Result<NodeMap, DepviewError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build().map_err(|e| {
            DepviewError::EndpointRequest {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let retry_strategy = ExponentialBackoff::from_millis(STARTING_BACKOFF_DELAY_MS)
            .max_delay(Duration::from_millis(MAX_BACKOFF_DELAY_MS))
            .take(MAX_ENDPOINT_RETRIES);

        let body = RetryIf::start(retry_strategy, || self.request(&client), is_retriable).await?;
        parse_object_list(&body, ListFormat::Json, &self.url)
    }

    async fn request(&self, client: &reqwest::Client) -> Result<String, DepviewError> {
        tracing::debug!("GET {}", self.url);
        let mut request = client.get(&self.url).header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", self.url, e);
            DepviewError::EndpointRequest {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", self.url, status.as_u16());
            return Err(DepviewError::EndpointStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| DepviewError::EndpointRequest {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

fn is_retriable(error: &DepviewError) -> bool {
    match error {
        DepviewError::EndpointRequest {
            ..
        } => true,
        DepviewError::EndpointStatus {
            status,
            ..
        } => *status >= 500,
        _ => false,
    }
}
