//! Typed access to today's cached responses
//!
//! The reader never touches the network. It resolves the cache path for an
//! endpoint, decodes the stored envelope and runs the matching extractor.
//! A missing cache file surfaces as a "no data" error.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::api::{DateProvider, Endpoint, Fetcher};
use super::cache::{CacheKey, CacheStore};
use super::models::{
    BoxScoreLine, GameResult, LeagueLeader, PlayerProfile, ResponseEnvelope, TeamProfile,
    TeamStanding,
};
use super::processors::{
    Extracted, extract_box_score, extract_league_leaders, extract_player_bio,
    extract_recent_games, extract_scoreboard, extract_season_stats, extract_standings,
    extract_team_profile,
};
use crate::error::AppError;

#[derive(Clone)]
pub struct StatsReader {
    cache: Arc<dyn CacheStore>,
    dates: Arc<dyn DateProvider>,
}

impl StatsReader {
    pub fn new(cache: Arc<dyn CacheStore>, dates: Arc<dyn DateProvider>) -> Self {
        Self { cache, dates }
    }

    /// Reader over the same cache and clock as `fetcher`.
    pub fn for_fetcher(fetcher: &Fetcher) -> Self {
        Self::new(fetcher.cache().clone(), fetcher.dates().clone())
    }

    #[instrument(skip(self))]
    async fn envelope(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope, AppError> {
        let date = self.dates.current_date()?;
        let path = self.cache.path_for(&CacheKey::new(endpoint, id, date));
        let bytes = self.cache.read(&path).await?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        ResponseEnvelope::decode(&bytes)
    }

    pub async fn league_leaders(&self) -> Result<Extracted<LeagueLeader>, AppError> {
        extract_league_leaders(&self.envelope(Endpoint::LeagueLeaders, None).await?)
    }

    pub async fn standings(&self) -> Result<Extracted<TeamStanding>, AppError> {
        extract_standings(&self.envelope(Endpoint::Standings, None).await?)
    }

    pub async fn scoreboard(&self) -> Result<Extracted<GameResult>, AppError> {
        extract_scoreboard(&self.envelope(Endpoint::Scoreboard, None).await?)
    }

    pub async fn box_score(&self, game_id: &str) -> Result<Extracted<BoxScoreLine>, AppError> {
        extract_box_score(&self.envelope(Endpoint::BoxScore, Some(game_id)).await?)
    }

    pub async fn team_profile(&self, team_id: &str) -> Result<TeamProfile, AppError> {
        extract_team_profile(&self.envelope(Endpoint::TeamInfo, Some(team_id)).await?)
    }

    /// Bio, career rows and recent games. The bio is required; the other two
    /// parts come back empty when their tables have no data.
    pub async fn player_profile(&self, player_id: &str) -> Result<PlayerProfile, AppError> {
        let id = Some(player_id);
        let bio = extract_player_bio(&self.envelope(Endpoint::PlayerInfo, id).await?)?;

        let seasons = match self.envelope(Endpoint::PlayerCareer, id).await {
            Ok(envelope) => or_empty(extract_season_stats(&envelope))?,
            Err(e) if e.is_no_data() => Vec::new(),
            Err(e) => return Err(e),
        };
        let recent_games = match self.envelope(Endpoint::PlayerGameLog, id).await {
            Ok(envelope) => or_empty(extract_recent_games(&envelope))?,
            Err(e) if e.is_no_data() => Vec::new(),
            Err(e) => return Err(e),
        };

        Ok(PlayerProfile {
            bio,
            seasons,
            recent_games,
        })
    }
}

fn or_empty<R>(result: Result<Extracted<R>, AppError>) -> Result<Vec<R>, AppError> {
    match result {
        Ok(extracted) => Ok(extracted.records),
        Err(e) if e.is_no_data() => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}
