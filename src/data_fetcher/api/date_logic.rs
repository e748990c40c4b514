//! Date and season resolution for request parameters and cache file names

use crate::error::AppError;
use chrono::{Datelike, Local, NaiveDate};

/// First month (October) that belongs to the season starting in the same calendar year.
pub const SEASON_START_MONTH: u32 = 10;

/// Source of "today" for the fetch and cache layers.
///
/// Injected into the orchestrator so tests can pin the date.
pub trait DateProvider: Send + Sync {
    fn today(&self) -> Result<NaiveDate, AppError>;

    /// Today's date as `YYYY-MM-DD`.
    fn current_date(&self) -> Result<String, AppError> {
        Ok(format_date(self.today()?))
    }

    /// Season containing today, as `YYYY-YY`.
    fn current_season(&self) -> Result<String, AppError> {
        Ok(season_for_date(self.today()?))
    }
}

/// Wall-clock provider using the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn today(&self) -> Result<NaiveDate, AppError> {
        Ok(Local::now().date_naive())
    }
}

/// Provider pinned to a single date, either injected directly or parsed from
/// a `--date` style argument.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider {
    date: NaiveDate,
}

impl FixedDateProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn parse(date: &str) -> Result<Self, AppError> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(Self::new)
            .map_err(|e| AppError::datetime_parse_error(format!("invalid date '{date}': {e}")))
    }
}

impl DateProvider for FixedDateProvider {
    fn today(&self) -> Result<NaiveDate, AppError> {
        Ok(self.date)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Derives the season string for a date.
///
/// Before October the date belongs to the season that started the previous
/// year (`2024-03-01` → `2023-24`); from October on it belongs to the season
/// starting this year (`2024-10-22` → `2024-25`).
pub fn season_for_date(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() < SEASON_START_MONTH {
        format!("{}-{:02}", year - 1, year.rem_euclid(100))
    } else {
        format!("{}-{:02}", year, (year + 1).rem_euclid(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_season_before_october_uses_previous_year() {
        assert_eq!(season_for_date(date("2024-03-01")), "2023-24");
        assert_eq!(season_for_date(date("2024-09-30")), "2023-24");
    }

    #[test]
    fn test_season_from_october_uses_current_year() {
        assert_eq!(season_for_date(date("2024-10-01")), "2024-25");
        assert_eq!(season_for_date(date("2024-12-25")), "2024-25");
    }

    #[test]
    fn test_season_suffix_is_zero_padded() {
        assert_eq!(season_for_date(date("2009-11-01")), "2009-10");
        assert_eq!(season_for_date(date("2099-10-01")), "2099-00");
        assert_eq!(season_for_date(date("2010-01-15")), "2009-10");
    }

    #[test]
    fn test_fixed_provider() {
        let provider = FixedDateProvider::parse("2025-01-15").unwrap();
        assert_eq!(provider.current_date().unwrap(), "2025-01-15");
        assert_eq!(provider.current_season().unwrap(), "2024-25");
    }

    #[test]
    fn test_fixed_provider_rejects_bad_date() {
        let err = FixedDateProvider::parse("2025-13-01").unwrap_err();
        assert!(matches!(err, AppError::DateTimeParse(_)));
    }

    #[test]
    fn test_system_provider_formats_date() {
        let today = SystemDateProvider.current_date().unwrap();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
