use crate::constants::cache::MAX_RETENTION_HOURS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - HTTP timeout must be positive
/// - Cache retention must be positive and at most [`MAX_RETENTION_HOURS`]
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_domain: &str,
    http_timeout_seconds: u64,
    cache_retention_hours: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if cache_retention_hours == 0 {
        return Err(AppError::config_error(
            "Cache retention must be at least 1 hour",
        ));
    }

    if cache_retention_hours > MAX_RETENTION_HOURS {
        return Err(AppError::config_error(format!(
            "Cache retention cannot exceed {MAX_RETENTION_HOURS} hours"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://stats.nba.com/stats", 8, 72, &None).is_ok());
        assert!(validate_config("localhost:8080", 8, 72, &None).is_ok());
    }

    #[test]
    fn test_rejects_empty_domain() {
        let err = validate_config("", 8, 72, &None).unwrap_err();
        assert!(err.to_string().contains("API domain cannot be empty"));
    }

    #[test]
    fn test_rejects_bare_word_domain() {
        assert!(validate_config("statsapi", 8, 72, &None).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout_and_retention() {
        assert!(validate_config("https://stats.nba.com", 0, 72, &None).is_err());
        assert!(validate_config("https://stats.nba.com", 8, 0, &None).is_err());
    }

    #[test]
    fn test_rejects_retention_beyond_limit() {
        let url = "https://stats.nba.com";
        assert!(validate_config(url, 8, MAX_RETENTION_HOURS, &None).is_ok());
        let err = validate_config(url, 8, MAX_RETENTION_HOURS + 1, &None).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"));
        assert!(validate_config(url, 8, u64::MAX / 1000, &None).is_err());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        assert!(validate_config("https://stats.nba.com", 8, 72, &Some(String::new())).is_err());
    }
}
