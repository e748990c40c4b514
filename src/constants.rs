//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers shared by the fetch, cache and
//! decode layers.

/// Application directory name under the user's config directory
pub const APP_NAME: &str = "nba_stats";

/// Default base URL of the stats API
pub const DEFAULT_API_DOMAIN: &str = "https://stats.nba.com/stats";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 8;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// NBA league identifier used by every league-scoped endpoint
pub const NBA_LEAGUE_ID: &str = "00";

/// Cache store limits
pub mod cache {
    /// Files smaller than this are treated as not cached (empty or error bodies)
    pub const MIN_CACHED_BYTES: u64 = 1000;

    /// Default retention window for dated cache files (72 hours)
    pub const RETENTION_HOURS: u64 = 72;

    /// Largest accepted retention window (ten years)
    pub const MAX_RETENTION_HOURS: u64 = 24 * 365 * 10;

    /// Length of the `YYYY-MM-DD` prefix of a cache file name
    pub const DATE_PREFIX_LEN: usize = 10;
}

/// Decoding limits
pub mod decode {
    /// Number of most recent game log entries kept for a player profile
    pub const RECENT_GAMES_CAP: usize = 5;
}

/// Fixed request headers required by the upstream stats API
pub mod headers {
    pub const USER_AGENT: &str = concat!(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 ",
        "(KHTML, like Gecko) Chrome/120.0 Safari/537.36"
    );
    pub const ACCEPT: &str = "application/json, text/plain, */*";
    pub const REFERER: &str = "https://www.nba.com/";
    pub const ORIGIN_HEADER: &str = "x-nba-stats-origin";
    pub const ORIGIN_VALUE: &str = "stats";
    pub const TOKEN_HEADER: &str = "x-nba-stats-token";
    pub const TOKEN_VALUE: &str = "true";
}

/// Environment variable names for configuration overrides
pub mod env_vars {
    pub const API_DOMAIN: &str = "NBA_STATS_API_DOMAIN";
    pub const HTTP_TIMEOUT: &str = "NBA_STATS_HTTP_TIMEOUT";
    pub const CACHE_DIR: &str = "NBA_STATS_CACHE_DIR";
    pub const LOG_FILE: &str = "NBA_STATS_LOG_FILE";
}
