//! Per-endpoint request parameters
//!
//! Each parameter type knows its endpoint, serializes itself to query pairs and
//! checks that the fields the upstream API requires are present.

use super::endpoints::Endpoint;
use crate::constants::NBA_LEAGUE_ID;
use crate::error::AppError;

pub const REGULAR_SEASON: &str = "Regular Season";

/// Request parameters for a single endpoint.
pub trait EndpointParams: Send + Sync {
    fn endpoint(&self) -> Endpoint;

    fn query_values(&self) -> Vec<(&'static str, String)>;

    fn validate(&self) -> Result<(), AppError>;

    fn endpoint_path(&self) -> &'static str {
        self.endpoint().path()
    }
}

fn require(endpoint: Endpoint, field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(
            endpoint.path(),
            format!("{field} is required"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueLeadersParams {
    pub league_id: String,
    pub season: String,
    pub season_type: String,
    pub per_mode: String,
    pub stat_category: String,
}

impl LeagueLeadersParams {
    pub fn new(season: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            season: season.into(),
            season_type: REGULAR_SEASON.to_string(),
            per_mode: "PerGame".to_string(),
            stat_category: "PTS".to_string(),
        }
    }
}

impl EndpointParams for LeagueLeadersParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::LeagueLeaders
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("PerMode", self.per_mode.clone()),
            ("Scope", "S".to_string()),
            ("Season", self.season.clone()),
            ("SeasonType", self.season_type.clone()),
            ("StatCategory", self.stat_category.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "LeagueID", &self.league_id)?;
        require(self.endpoint(), "Season", &self.season)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsParams {
    pub league_id: String,
    pub season: String,
    pub season_type: String,
}

impl StandingsParams {
    pub fn new(season: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            season: season.into(),
            season_type: REGULAR_SEASON.to_string(),
        }
    }
}

impl EndpointParams for StandingsParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Standings
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("Season", self.season.clone()),
            ("SeasonType", self.season_type.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "LeagueID", &self.league_id)?;
        require(self.endpoint(), "Season", &self.season)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardParams {
    pub league_id: String,
    pub game_date: String,
    pub day_offset: i32,
}

impl ScoreboardParams {
    pub fn new(game_date: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            game_date: game_date.into(),
            day_offset: 0,
        }
    }
}

impl EndpointParams for ScoreboardParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Scoreboard
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("DayOffset", self.day_offset.to_string()),
            ("GameDate", self.game_date.clone()),
            ("LeagueID", self.league_id.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "LeagueID", &self.league_id)?;
        require(self.endpoint(), "GameDate", &self.game_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreParams {
    pub game_id: String,
}

impl BoxScoreParams {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
        }
    }
}

impl EndpointParams for BoxScoreParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::BoxScore
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        // Full game range: periods 0..=10, 0 to 28800 tenths of a second.
        vec![
            ("EndPeriod", "10".to_string()),
            ("EndRange", "28800".to_string()),
            ("GameID", self.game_id.clone()),
            ("RangeType", "0".to_string()),
            ("StartPeriod", "0".to_string()),
            ("StartRange", "0".to_string()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "GameID", &self.game_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamInfoParams {
    pub league_id: String,
    pub team_id: String,
    pub season: String,
    pub season_type: String,
}

impl TeamInfoParams {
    pub fn new(team_id: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            team_id: team_id.into(),
            season: season.into(),
            season_type: REGULAR_SEASON.to_string(),
        }
    }
}

impl EndpointParams for TeamInfoParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::TeamInfo
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("Season", self.season.clone()),
            ("SeasonType", self.season_type.clone()),
            ("TeamID", self.team_id.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "LeagueID", &self.league_id)?;
        require(self.endpoint(), "TeamID", &self.team_id)?;
        require(self.endpoint(), "Season", &self.season)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfoParams {
    pub league_id: String,
    pub player_id: String,
}

impl PlayerInfoParams {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            player_id: player_id.into(),
        }
    }
}

impl EndpointParams for PlayerInfoParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::PlayerInfo
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("PlayerID", self.player_id.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "PlayerID", &self.player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCareerParams {
    pub league_id: String,
    pub player_id: String,
    pub per_mode: String,
}

impl PlayerCareerParams {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            player_id: player_id.into(),
            per_mode: "PerGame".to_string(),
        }
    }
}

impl EndpointParams for PlayerCareerParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::PlayerCareer
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("LeagueID", self.league_id.clone()),
            ("PerMode", self.per_mode.clone()),
            ("PlayerID", self.player_id.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "PlayerID", &self.player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGameLogParams {
    pub player_id: String,
    pub season: String,
    pub season_type: String,
}

impl PlayerGameLogParams {
    pub fn new(player_id: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            season: season.into(),
            season_type: REGULAR_SEASON.to_string(),
        }
    }
}

impl EndpointParams for PlayerGameLogParams {
    fn endpoint(&self) -> Endpoint {
        Endpoint::PlayerGameLog
    }

    fn query_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PlayerID", self.player_id.clone()),
            ("Season", self.season.clone()),
            ("SeasonType", self.season_type.clone()),
        ]
    }

    fn validate(&self) -> Result<(), AppError> {
        require(self.endpoint(), "PlayerID", &self.player_id)?;
        require(self.endpoint(), "Season", &self.season)
    }
}
