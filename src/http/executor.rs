use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::error::AppResult;
use crate::metrics::{RequestErrorKind, RequestOutcome};

use super::client::build_client;

/// Executes one GET and reports what happened. Implementations never retry
/// and never fail: every problem becomes part of the returned outcome.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, url: &str) -> RequestOutcome;
}

#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// Creates an executor with its own client.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(request_timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: build_client(request_timeout)?,
        })
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, url: &str) -> RequestOutcome {
        execute_get(&self.client, url).await
    }
}

/// Issues a GET to `url`, timing from just before the request until the
/// response head (or the failure) arrives. The body is drained afterwards so
/// the connection goes back to the pool.
pub async fn execute_get(client: &Client, url: &str) -> RequestOutcome {
    let start = Instant::now();
    let result = client.get(url).send().await;
    let duration = start.elapsed();

    match result {
        Ok(response) => {
            let status_code = response.status().as_u16();
            match drain_response_body(response).await {
                Ok(_) => RequestOutcome::success(duration, status_code),
                Err(err) => {
                    debug!("Failed to read response body: {}", err);
                    RequestOutcome::failure(duration, status_code, RequestErrorKind::Body)
                }
            }
        }
        Err(err) => {
            debug!("Request failed: {}", err);
            let status_code = err.status().map_or(0, |status| status.as_u16());
            RequestOutcome::failure(duration, status_code, classify_error(&err))
        }
    }
}

pub(super) fn classify_error(err: &reqwest::Error) -> RequestErrorKind {
    if err.is_timeout() {
        RequestErrorKind::Timeout
    } else if err.is_connect() {
        RequestErrorKind::Connect
    } else if err.is_body() || err.is_decode() {
        RequestErrorKind::Body
    } else {
        RequestErrorKind::Request
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
