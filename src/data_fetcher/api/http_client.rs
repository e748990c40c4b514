//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{ACCEPT, CONNECTION, HeaderMap, HeaderName, HeaderValue, REFERER};
use std::time::Duration;

use crate::constants::headers;

/// Fixed header set the stats API expects on every request. Requests without
/// the origin and token headers tend to hang instead of failing.
pub fn stats_api_headers() -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static(headers::ACCEPT));
    map.insert(REFERER, HeaderValue::from_static(headers::REFERER));
    map.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    map.insert(
        HeaderName::from_static(headers::ORIGIN_HEADER),
        HeaderValue::from_static(headers::ORIGIN_VALUE),
    );
    map.insert(
        HeaderName::from_static(headers::TOKEN_HEADER),
        HeaderValue::from_static(headers::TOKEN_VALUE),
    );
    map
}

/// Creates an HTTP client with the stats API header set, connection pooling
/// and a per-request timeout.
pub fn create_http_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(headers::USER_AGENT)
        .default_headers(stats_api_headers())
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_api_headers_complete() {
        let map = stats_api_headers();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get("x-nba-stats-origin").unwrap(), "stats");
        assert_eq!(map.get("x-nba-stats-token").unwrap(), "true");
        assert_eq!(map.get(CONNECTION).unwrap(), "keep-alive");
    }

    #[test]
    fn test_client_builds() {
        assert!(create_http_client_with_timeout(Duration::from_secs(8)).is_ok());
    }
}
