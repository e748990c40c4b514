pub mod api;
pub mod cache;
pub mod models;
pub mod processors;
pub mod reader;

pub use api::{BatchReport, Endpoint, FetchOperation, Fetcher};
pub use reader::StatsReader;
