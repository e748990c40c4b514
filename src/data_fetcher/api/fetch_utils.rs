//! HTTP fetching with status classification

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Issues a single GET and returns the raw body.
///
/// The orchestrator only depends on this trait so tests can substitute a
/// scripted transport.
#[async_trait]
pub trait HttpRequester: Send + Sync {
    async fn get(&self, url: &str) -> Result<Bytes, AppError>;
}

/// [`HttpRequester`] backed by a configured reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    client: Client,
}

impl ReqwestRequester {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpRequester for ReqwestRequester {
    async fn get(&self, url: &str) -> Result<Bytes, AppError> {
        fetch_bytes(&self.client, url).await
    }
}

/// Performs one GET request without retries.
///
/// Transport errors become `NetworkTimeout`/`NetworkConnection`, any non-2xx
/// status becomes `ApiStatus`. Retrying is left to the caller's next cycle.
#[instrument(skip(client))]
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Bytes, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return Err(AppError::api_status(status.as_u16(), reason, url));
    }

    let body = response.bytes().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}
