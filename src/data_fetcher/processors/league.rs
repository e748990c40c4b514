//! League-wide extractors: leaders, standings and the daily scoreboard

use tracing::{debug, instrument};

use super::table::{Extracted, decode_named, decode_positional};
use crate::data_fetcher::models::scoreboard::{GAME_HEADER_INDEX, LINE_SCORE_INDEX};
use crate::data_fetcher::models::standings::STANDINGS_TABLE;
use crate::data_fetcher::models::{
    GameHeader, GameResult, LeagueLeader, LineScore, ResponseEnvelope, STANDINGS_COLUMNS,
    TeamStanding,
};
use crate::error::AppError;

/// League leaders from the single `resultSet` of `leagueleaders`.
#[instrument(skip(envelope))]
pub fn extract_league_leaders(
    envelope: &ResponseEnvelope,
) -> Result<Extracted<LeagueLeader>, AppError> {
    decode_named(envelope.single_table()?)
}

/// Season standings, decoded by column position.
#[instrument(skip(envelope))]
pub fn extract_standings(
    envelope: &ResponseEnvelope,
) -> Result<Extracted<TeamStanding>, AppError> {
    let table = envelope.table_named(STANDINGS_TABLE)?;
    decode_positional(table, STANDINGS_COLUMNS)
}

/// Today's games, one [`GameResult`] per game header.
///
/// Both scoreboard tables are validated even though only the joined result is
/// returned; the headers are those of the game header table.
#[instrument(skip(envelope))]
pub fn extract_scoreboard(envelope: &ResponseEnvelope) -> Result<Extracted<GameResult>, AppError> {
    let games: Extracted<GameHeader> = decode_named(envelope.table_at(GAME_HEADER_INDEX)?)?;
    let lines: Extracted<LineScore> = decode_named(envelope.table_at(LINE_SCORE_INDEX)?)?;

    let records: Vec<GameResult> = games
        .records
        .iter()
        .map(|header| GameResult::from_parts(header, &lines.records))
        .collect();

    debug!(
        "Scoreboard has {} games ({} final)",
        records.len(),
        records.iter().filter(|g| g.is_final()).count()
    );

    Ok(Extracted {
        records,
        headers: games.headers,
    })
}

/// Raw line scores for callers that want per-quarter detail.
pub fn extract_line_scores(envelope: &ResponseEnvelope) -> Result<Extracted<LineScore>, AppError> {
    decode_named(envelope.table_at(LINE_SCORE_INDEX)?)
}
