use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Request building
    #[error("Invalid request parameters for {endpoint}: {message}")]
    Validation { endpoint: String, message: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned HTTP {status}: {message} (URL: {url})")]
    ApiStatus {
        status: u16,
        message: String,
        url: String,
    },

    // Cache store errors
    #[error("Cache I/O error at {path}: {source}")]
    CacheIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache eviction failed for {failed} of {scanned} files: {}", .paths.join(", "))]
    CacheEviction {
        failed: usize,
        scanned: usize,
        paths: Vec<String>,
    },

    // Decoding errors
    #[error("Malformed response data: {0}")]
    DecodeMalformed(#[from] serde_json::Error),

    #[error(
        "Row length mismatch in table '{table}' at row {row}: \
         expected {expected} values, got {actual}"
    )]
    DecodeRowLength {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unexpected layout of table '{table}': {message}")]
    DecodeSchema { table: String, message: String },

    #[error("No data in response: {0}")]
    DecodeNoData(String),

    // Batch orchestration
    #[error("{failed} of {total} endpoints failed: {}", .endpoints.join(", "))]
    BatchFailed {
        failed: usize,
        total: usize,
        endpoints: Vec<String>,
        /// How many of the failures were cancellations.
        cancelled: usize,
    },

    #[error("Fetch cancelled: {0}")]
    Cancelled(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a request parameter validation error
    pub fn validation(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn api_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Wrap a filesystem error with the cache path it happened on
    pub fn cache_io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::CacheIo {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a row/header length mismatch error
    pub fn row_length_mismatch(
        table: impl Into<String>,
        row: usize,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::DecodeRowLength {
            table: table.into(),
            row,
            expected,
            actual,
        }
    }

    /// Create a table layout error
    pub fn decode_schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DecodeSchema {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a missing-data error
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::DecodeNoData(msg.into())
    }

    /// Create a composite batch failure
    pub fn batch_failed(total: usize, endpoints: Vec<String>, cancelled: usize) -> Self {
        Self::BatchFailed {
            failed: endpoints.len(),
            total,
            endpoints,
            cancelled,
        }
    }

    /// Transport failures and unsuccessful HTTP statuses
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiStatus { .. }
        )
    }

    /// Response could not be turned into records
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AppError::DecodeMalformed(_)
                | AppError::DecodeRowLength { .. }
                | AppError::DecodeSchema { .. }
                | AppError::DecodeNoData(_)
        )
    }

    /// Data is absent rather than broken. Callers show an empty view for these.
    pub fn is_no_data(&self) -> bool {
        match self {
            AppError::DecodeNoData(_) => true,
            AppError::CacheIo { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_validation_helper() {
        let error = AppError::validation("boxscoretraditionalv2", "GameID is required");
        assert!(matches!(error, AppError::Validation { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid request parameters for boxscoretraditionalv2: GameID is required"
        );
    }

    #[test]
    fn test_api_status_helper() {
        let error = AppError::api_status(500, "Internal Server Error", "https://api.example.com");
        assert!(error.is_network());
        assert_eq!(
            error.to_string(),
            "API returned HTTP 500: Internal Server Error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert!(error.is_network());
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://api.example.com"
        );
    }

    #[test]
    fn test_row_length_mismatch_message() {
        let error = AppError::row_length_mismatch("LeagueLeaders", 3, 24, 25);
        assert!(error.is_decode());
        assert!(!error.is_no_data());
        assert_eq!(
            error.to_string(),
            "Row length mismatch in table 'LeagueLeaders' at row 3: expected 24 values, got 25"
        );
    }

    #[test]
    fn test_no_data_is_distinct_from_malformed() {
        let missing = AppError::no_data("table 'Standings' not found");
        assert!(missing.is_decode());
        assert!(missing.is_no_data());

        let malformed: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(malformed.is_decode());
        assert!(!malformed.is_no_data());
    }

    #[test]
    fn test_missing_cache_file_is_no_data() {
        let error = AppError::cache_io(
            "/tmp/none",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(error.is_no_data());
        assert!(!error.is_decode());
    }

    #[test]
    fn test_batch_failed_names_count_and_endpoints() {
        let error = AppError::batch_failed(3, vec!["leagueleaders".to_string()], 0);
        assert!(matches!(error, AppError::BatchFailed { failed: 1, total: 3, .. }));
        assert_eq!(error.to_string(), "1 of 3 endpoints failed: leagueleaders");
    }

    #[test]
    fn test_cache_eviction_message() {
        let error = AppError::CacheEviction {
            failed: 2,
            scanned: 5,
            paths: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Cache eviction failed for 2 of 5 files: a, b"
        );
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
