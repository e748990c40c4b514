//! URL building for API endpoints

use std::collections::BTreeMap;

use reqwest::Url;
use tracing::{debug, warn};

use super::endpoints::{Endpoint, FetchOperation};
use super::params::{
    BoxScoreParams, EndpointParams, LeagueLeadersParams, PlayerCareerParams,
    PlayerGameLogParams, PlayerInfoParams, ScoreboardParams, StandingsParams, TeamInfoParams,
};
use crate::error::AppError;

/// URL per endpoint for one operation. Endpoints whose parameters failed
/// validation carry the error instead of a URL and must not be requested.
pub type UrlMap = BTreeMap<Endpoint, Result<String, AppError>>;

/// Builds the full request URL for one endpoint after validating its parameters.
///
/// # Example
/// ```
/// use nba_stats::data_fetcher::api::{build_url, BoxScoreParams};
///
/// let url = build_url("https://api.example.com", &BoxScoreParams::new("0022400061")).unwrap();
/// assert!(url.starts_with("https://api.example.com/boxscoretraditionalv2?"));
/// assert!(url.contains("GameID=0022400061"));
/// ```
pub fn build_url(api_base: &str, params: &dyn EndpointParams) -> Result<String, AppError> {
    params.validate()?;

    let base = format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        params.endpoint_path()
    );
    let url = Url::parse_with_params(&base, params.query_values()).map_err(|e| {
        AppError::config_error(format!("invalid API URL '{base}': {e}"))
    })?;

    Ok(url.to_string())
}

/// Parameter objects for every endpoint of an operation.
pub fn build_params(
    operation: &FetchOperation,
    date: &str,
    season: &str,
) -> Vec<Box<dyn EndpointParams>> {
    match operation {
        FetchOperation::DailyRefresh => vec![
            Box::new(LeagueLeadersParams::new(season)),
            Box::new(StandingsParams::new(season)),
            Box::new(ScoreboardParams::new(date)),
        ],
        FetchOperation::BoxScore { game_id } => vec![Box::new(BoxScoreParams::new(game_id))],
        FetchOperation::TeamProfile { team_id } => {
            vec![Box::new(TeamInfoParams::new(team_id, season))]
        }
        FetchOperation::PlayerProfile { player_id } => vec![
            Box::new(PlayerInfoParams::new(player_id)),
            Box::new(PlayerCareerParams::new(player_id)),
            Box::new(PlayerGameLogParams::new(player_id, season)),
        ],
    }
}

/// Assembles every URL one logical fetch needs.
///
/// A validation failure is logged and recorded against its endpoint; the
/// remaining endpoints are still built.
pub fn build_all(api_base: &str, operation: &FetchOperation, date: &str, season: &str) -> UrlMap {
    build_params(operation, date, season)
        .into_iter()
        .map(|params| {
            let endpoint = params.endpoint();
            let url = build_url(api_base, params.as_ref());
            match &url {
                Ok(url) => debug!("Built URL for {endpoint}: {url}"),
                Err(e) => warn!("Skipping {endpoint} in {}: {e}", operation.name()),
            }
            (endpoint, url)
        })
        .collect()
}
