//! NBA stats fetch, cache and decode core
//!
//! The crate downloads tables from the public stats API, stores raw responses
//! in a dated file cache and turns them into typed records that can be
//! projected into display strings.
//!
//! ## Layout
//!
//! - [`data_fetcher::api`]: endpoint catalogue, request parameters, HTTP and
//!   the batch [`Fetcher`](data_fetcher::Fetcher)
//! - [`data_fetcher::cache`]: file-backed cache with age-based eviction
//! - [`data_fetcher::models`]: response envelope and record types
//! - [`data_fetcher::processors`]: table decoding and per-endpoint extractors
//! - [`projector`]: record → display strings
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nba_stats::{Config, FetchOperation, Fetcher, StatsReader};
//! use nba_stats::data_fetcher::api::SystemDateProvider;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nba_stats::AppError> {
//!     let config = Config::load().await?;
//!     let fetcher = Fetcher::from_config(&config, Arc::new(SystemDateProvider))?;
//!     fetcher
//!         .run(&FetchOperation::DailyRefresh, &CancellationToken::new())
//!         .await?;
//!
//!     let leaders = StatsReader::for_fetcher(&fetcher).league_leaders().await?;
//!     for row in nba_stats::projector::project_all(&leaders.records) {
//!         println!("{}", row.join("\t"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod projector;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{BatchReport, Endpoint, FetchOperation, Fetcher, StatsReader};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
