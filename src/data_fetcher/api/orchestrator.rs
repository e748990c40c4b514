//! Batch fetching: one concurrent unit per endpoint, each checking the cache,
//! fetching on a miss and persisting the body.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use super::date_logic::DateProvider;
use super::endpoints::{Endpoint, FetchOperation};
use super::fetch_utils::{HttpRequester, ReqwestRequester};
use super::http_client::create_http_client_with_timeout;
use super::params::EndpointParams;
use super::urls::{build_all, build_url};
use crate::config::Config;
use crate::data_fetcher::cache::{CacheKey, CacheStore, EvictionReport, FileCacheStore};
use crate::error::AppError;

/// How a single endpoint was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Downloaded and written to the cache.
    Fetched,
    /// A usable cache entry already existed.
    Cached,
}

/// Summary of a batch in which every endpoint succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub date: String,
    pub season: String,
    pub fetched: Vec<Endpoint>,
    pub cached: Vec<Endpoint>,
    /// `None` when the sweep itself failed; that never fails the batch.
    pub eviction: Option<EvictionReport>,
}

/// Fetch orchestrator with injected cache, transport and clock.
pub struct Fetcher {
    cache: Arc<dyn CacheStore>,
    requester: Arc<dyn HttpRequester>,
    dates: Arc<dyn DateProvider>,
    api_base: String,
    retention: Duration,
    season_override: Option<String>,
}

impl Fetcher {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        requester: Arc<dyn HttpRequester>,
        dates: Arc<dyn DateProvider>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            requester,
            dates,
            api_base: api_base.into(),
            retention: Duration::from_secs(crate::constants::cache::RETENTION_HOURS * 3600),
            season_override: None,
        }
    }

    /// Production wiring: file cache under the configured root and a reqwest
    /// client with the configured timeout.
    pub fn from_config(config: &Config, dates: Arc<dyn DateProvider>) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout())?;
        Ok(Self::new(
            Arc::new(FileCacheStore::new(config.cache_root())),
            Arc::new(ReqwestRequester::new(client)),
            dates,
            config.api_base(),
        )
        .with_retention(config.cache_retention()))
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    /// Uses `season` instead of the one derived from today's date.
    pub fn with_season(mut self, season: Option<String>) -> Self {
        self.season_override = season;
        self
    }

    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    pub fn dates(&self) -> &Arc<dyn DateProvider> {
        &self.dates
    }

    /// Season used for request parameters.
    pub fn season(&self) -> Result<String, AppError> {
        match &self.season_override {
            Some(season) => Ok(season.clone()),
            None => self.dates.current_season(),
        }
    }

    /// Cache location of `endpoint` for today.
    pub fn cache_path(&self, endpoint: Endpoint, id: Option<&str>) -> Result<PathBuf, AppError> {
        let date = self.dates.current_date()?;
        Ok(self.cache.path_for(&CacheKey::new(endpoint, id, date)))
    }

    /// Runs one logical fetch.
    ///
    /// Every endpoint is attempted even if others fail. Successful writes are
    /// kept; if any endpoint failed the result is [`AppError::BatchFailed`]
    /// naming the failures. Cancelling `cancel` aborts outstanding units,
    /// which are then reported as failed.
    #[instrument(skip(self, cancel), fields(operation = operation.name()))]
    pub async fn run(
        &self,
        operation: &FetchOperation,
        cancel: &CancellationToken,
    ) -> Result<BatchReport, AppError> {
        let date = self.dates.current_date()?;
        let season = self.season()?;
        let urls = build_all(&self.api_base, operation, &date, &season);
        let total = urls.len();

        let eviction = match self.cache.evict_older_than(self.retention).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Cache eviction incomplete: {e}");
                None
            }
        };

        let id = operation.target_id();
        let units = urls.into_iter().map(|(endpoint, url)| {
            let date = date.as_str();
            async move {
                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        Err(AppError::Cancelled(endpoint.to_string()))
                    }
                    result = self.run_unit(endpoint, url, id, date) => result,
                };
                (endpoint, outcome)
            }
        });

        let mut report = BatchReport {
            date: date.clone(),
            season: season.clone(),
            eviction,
            ..Default::default()
        };
        let mut failed = Vec::new();
        let mut cancelled = 0;

        for (endpoint, outcome) in join_all(units).await {
            match outcome {
                Ok(FetchOutcome::Fetched) => report.fetched.push(endpoint),
                Ok(FetchOutcome::Cached) => report.cached.push(endpoint),
                Err(AppError::Cancelled(_)) => {
                    warn!("{endpoint} cancelled");
                    cancelled += 1;
                    failed.push(endpoint.to_string());
                }
                Err(e) => {
                    error!("{endpoint} failed: {e}");
                    failed.push(endpoint.to_string());
                }
            }
        }

        if !failed.is_empty() {
            return Err(AppError::batch_failed(total, failed, cancelled));
        }

        info!(
            "{} finished: {} fetched, {} from cache",
            operation.name(),
            report.fetched.len(),
            report.cached.len()
        );
        Ok(report)
    }

    /// On-demand fetch of a single endpoint with the same cache rules as a
    /// batch unit.
    #[instrument(skip(self, params), fields(endpoint = %params.endpoint()))]
    pub async fn fetch_single(
        &self,
        params: &dyn EndpointParams,
        id: Option<&str>,
    ) -> Result<FetchOutcome, AppError> {
        let date = self.dates.current_date()?;
        let url = build_url(&self.api_base, params);
        if let Err(e) = &url {
            warn!("Not requesting {}: {e}", params.endpoint());
        }
        self.run_unit(params.endpoint(), url, id, &date).await
    }

    async fn run_unit(
        &self,
        endpoint: Endpoint,
        url: Result<String, AppError>,
        id: Option<&str>,
        date: &str,
    ) -> Result<FetchOutcome, AppError> {
        let url = url?;
        let path = self.cache.path_for(&CacheKey::new(endpoint, id, date));

        if !endpoint.always_refresh() && self.cache.exists(&path).await {
            debug!("{endpoint} served from cache at {}", path.display());
            return Ok(FetchOutcome::Cached);
        }

        let body = self.requester.get(&url).await?;
        self.cache.write(&path, &body).await?;
        debug!("{endpoint} cached at {}", path.display());
        Ok(FetchOutcome::Fetched)
    }
}
