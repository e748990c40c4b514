//! Per-target extractors: box scores, team profiles and player profiles

use tracing::{debug, instrument, warn};

use super::table::{Extracted, cap_rows, decode_named};
use crate::constants::decode::RECENT_GAMES_CAP;
use crate::data_fetcher::models::box_score::PLAYER_STATS_TABLE;
use crate::data_fetcher::models::player::{GAME_LOG_INDEX, PLAYER_INFO_TABLE, SEASON_TOTALS_TABLE};
use crate::data_fetcher::models::team::{TEAM_INFO_TABLE, TEAM_RANKS_TABLE};
use crate::data_fetcher::models::{
    BoxScoreLine, GameLogEntry, PlayerBio, ResponseEnvelope, SeasonStats, TeamInfo, TeamProfile,
    TeamSeasonRanks,
};
use crate::error::AppError;

/// Player lines of one game's box score.
#[instrument(skip(envelope))]
pub fn extract_box_score(
    envelope: &ResponseEnvelope,
) -> Result<Extracted<BoxScoreLine>, AppError> {
    decode_named(envelope.table_named(PLAYER_STATS_TABLE)?)
}

/// Team info joined with its season ranks.
///
/// A team with no info row is "no data". The ranks table is optional: it is
/// empty before the season starts, and a broken ranks table is logged and
/// dropped rather than failing the whole profile.
#[instrument(skip(envelope))]
pub fn extract_team_profile(envelope: &ResponseEnvelope) -> Result<TeamProfile, AppError> {
    let info: Extracted<TeamInfo> = decode_named(envelope.table_named(TEAM_INFO_TABLE)?)?;
    let info = info
        .records
        .into_iter()
        .next()
        .ok_or_else(|| AppError::no_data(format!("'{TEAM_INFO_TABLE}' has no rows")))?;

    let ranks = match envelope
        .table_named(TEAM_RANKS_TABLE)
        .and_then(decode_named::<TeamSeasonRanks>)
    {
        Ok(ranks) => ranks.records.into_iter().next(),
        Err(e) if e.is_no_data() => None,
        Err(e) => {
            warn!("Ignoring unreadable season ranks for team {}: {e}", info.team_id);
            None
        }
    };

    Ok(TeamProfile { info, ranks })
}

/// Biography of one player.
#[instrument(skip(envelope))]
pub fn extract_player_bio(envelope: &ResponseEnvelope) -> Result<PlayerBio, AppError> {
    let bio: Extracted<PlayerBio> = decode_named(envelope.table_named(PLAYER_INFO_TABLE)?)?;
    bio.records
        .into_iter()
        .next()
        .ok_or_else(|| AppError::no_data(format!("'{PLAYER_INFO_TABLE}' has no rows")))
}

/// Regular-season rows of a player's career, oldest season first.
#[instrument(skip(envelope))]
pub fn extract_season_stats(
    envelope: &ResponseEnvelope,
) -> Result<Extracted<SeasonStats>, AppError> {
    decode_named(envelope.table_named(SEASON_TOTALS_TABLE)?)
}

/// The player's most recent games, at most [`RECENT_GAMES_CAP`].
#[instrument(skip(envelope))]
pub fn extract_recent_games(
    envelope: &ResponseEnvelope,
) -> Result<Extracted<GameLogEntry>, AppError> {
    let log: Extracted<GameLogEntry> = decode_named(envelope.table_at(GAME_LOG_INDEX)?)?;
    let total = log.len();
    let capped = cap_rows(log, RECENT_GAMES_CAP);
    debug!("Keeping {} of {} game log rows", capped.len(), total);
    Ok(capped)
}
