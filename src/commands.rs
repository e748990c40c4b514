use crate::cli::Args;
use nba_stats::config::Config;
use nba_stats::data_fetcher::api::{DateProvider, FixedDateProvider, SystemDateProvider};
use nba_stats::data_fetcher::models::Record;
use nba_stats::data_fetcher::processors::Extracted;
use nba_stats::data_fetcher::{FetchOperation, Fetcher, StatsReader};
use nba_stats::error::AppError;
use nba_stats::projector::{labels, project, project_visible, visible_labels};
use std::io::{Write, stdout};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the --config command by storing a new API domain.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }
    config.validate()?;

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Runs the requested fetch, then prints whatever the cache holds for it.
///
/// A failed batch still prints the views whose data did arrive; the batch
/// error is returned afterwards so the exit status reflects it. Without a
/// batch error, the first view that failed to load is returned instead.
pub async fn handle_fetch_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let dates: Arc<dyn DateProvider> = match &args.date {
        Some(date) => Arc::new(FixedDateProvider::parse(date)?),
        None => Arc::new(SystemDateProvider),
    };
    let fetcher = Fetcher::from_config(config, dates)?.with_season(args.season.clone());
    let operation = args.operation();

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let outcome = fetcher.run(&operation, &cancel).await;
    match &outcome {
        Ok(report) => info!(
            "Fetched {:?}, cached {:?} for {} ({})",
            report.fetched, report.cached, report.date, report.season
        ),
        Err(e) => warn!("Batch incomplete, showing cached data: {e}"),
    }

    let reader = StatsReader::for_fetcher(&fetcher);
    let mut out = stdout();
    let printed = print_operation(&mut out, &reader, &operation, args.all_columns).await;

    outcome?;
    printed
}

/// Prints every view of `operation`. A view that fails to load is shown as a
/// placeholder and the remaining views still print; the first such failure
/// is returned once everything has been written.
async fn print_operation<W: Write>(
    out: &mut W,
    reader: &StatsReader,
    operation: &FetchOperation,
    all_columns: bool,
) -> Result<(), AppError> {
    let mut first_error = None;
    match operation {
        FetchOperation::DailyRefresh => {
            let scores = reader.scoreboard().await;
            print_view(out, "Scores", scores, all_columns, &mut first_error)?;
            let standings = reader.standings().await;
            print_view(out, "Standings", standings, all_columns, &mut first_error)?;
            let leaders = reader.league_leaders().await;
            print_view(out, "League leaders", leaders, all_columns, &mut first_error)?;
        }
        FetchOperation::BoxScore { game_id } => {
            let lines = reader.box_score(game_id).await;
            print_view(out, "Box score", lines, all_columns, &mut first_error)?;
        }
        FetchOperation::TeamProfile { team_id } => match reader.team_profile(team_id).await {
            Ok(profile) => {
                write_table(out, "Team", std::slice::from_ref(&profile.info), all_columns)?;
                let ranks: Vec<_> = profile.ranks.into_iter().collect();
                write_table(out, "Season ranks", &ranks, all_columns)?;
            }
            Err(e) => print_unavailable(out, "Team", e, &mut first_error)?,
        },
        FetchOperation::PlayerProfile { player_id } => {
            match reader.player_profile(player_id).await {
                Ok(profile) => {
                    let bio = std::slice::from_ref(&profile.bio);
                    write_table(out, "Player", bio, all_columns)?;
                    write_table(out, "Career", &profile.seasons, all_columns)?;
                    write_table(out, "Last games", &profile.recent_games, all_columns)?;
                }
                Err(e) => print_unavailable(out, "Player", e, &mut first_error)?,
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn print_view<W: Write, R: Record>(
    out: &mut W,
    title: &str,
    result: Result<Extracted<R>, AppError>,
    all_columns: bool,
    first_error: &mut Option<AppError>,
) -> Result<(), AppError> {
    match result {
        Ok(extracted) => write_table(out, title, &extracted.records, all_columns),
        Err(e) => print_unavailable(out, title, e, first_error),
    }
}

/// Writes a placeholder for a view that could not be loaded. "No data" is
/// not a failure; anything else is logged and kept in `first_error`.
/// Only write errors on `out` are returned.
fn print_unavailable<W: Write>(
    out: &mut W,
    title: &str,
    error: AppError,
    first_error: &mut Option<AppError>,
) -> Result<(), AppError> {
    if error.is_no_data() {
        writeln!(out, "== {title} ==\n(no data)\n")?;
        return Ok(());
    }

    error!("Failed to load {title}: {error}");
    writeln!(out, "== {title} ==\n(error: {error})\n")?;
    first_error.get_or_insert(error);
    Ok(())
}

/// Writes a titled, tab-separated table with a label row.
fn write_table<W: Write, R: Record>(
    out: &mut W,
    title: &str,
    records: &[R],
    all_columns: bool,
) -> Result<(), AppError> {
    writeln!(out, "== {title} ==")?;
    let header = if all_columns { labels::<R>() } else { visible_labels::<R>() };
    writeln!(out, "{}", header.join("\t"))?;
    for record in records {
        let row = if all_columns {
            project(record)
        } else {
            project_visible(record)
        };
        writeln!(out, "{}", row.join("\t"))?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_stats::data_fetcher::cache::FileCacheStore;
    use nba_stats::data_fetcher::models::GameResult;
    use nba_stats::testing_utils::{envelope_body, leaders_envelope};
    use tempfile::tempdir;

    fn game() -> GameResult {
        GameResult {
            game_id: "0022400061".to_string(),
            status: "Final".to_string(),
            away_team: "GSW".to_string(),
            away_points: 105,
            home_team: "LAL".to_string(),
            home_points: 115,
            ..Default::default()
        }
    }

    #[test]
    fn test_write_table_visible_columns() {
        let mut out = Vec::new();
        write_table(&mut out, "Scores", &[game()], false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "== Scores ==\nStatus\tAway\tPts\tHome\tPts\nFinal\tGSW\t105\tLAL\t115\n\n"
        );
    }

    #[test]
    fn test_write_table_all_columns_includes_ids() {
        let mut out = Vec::new();
        write_table(&mut out, "Scores", &[game()], true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game ID"));
        assert!(text.contains("0022400061"));
    }

    #[test]
    fn test_missing_data_prints_placeholder() {
        let mut out = Vec::new();
        let mut first_error = None;
        let missing = Err(AppError::no_data("x"));
        print_view::<_, GameResult>(&mut out, "Scores", missing, false, &mut first_error)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("(no data)"));
        assert!(first_error.is_none());
    }

    #[test]
    fn test_broken_view_prints_error_and_keeps_first() {
        let mut out = Vec::new();
        let mut first_error = None;
        let broken = Err(AppError::row_length_mismatch("GameHeader", 0, 2, 1));
        print_view::<_, GameResult>(&mut out, "Scores", broken, false, &mut first_error)
            .unwrap();
        let later = Err(AppError::no_data("y"));
        print_view::<_, GameResult>(&mut out, "Standings", later, false, &mut first_error)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Scores ==\n(error: "));
        assert!(text.contains("== Standings ==\n(no data)"));
        assert!(first_error.unwrap().is_decode());
    }

    #[tokio::test]
    async fn test_daily_views_print_past_a_corrupt_cache_file() {
        let dir = tempdir().unwrap();
        let league = dir.path().join("league");
        std::fs::create_dir_all(&league).unwrap();
        std::fs::write(league.join("2025-01-15_leaders"), envelope_body(&leaders_envelope(3)))
            .unwrap();
        std::fs::write(league.join("2025-01-15_scores"), b"<html>blocked</html>").unwrap();

        let reader = StatsReader::new(
            Arc::new(FileCacheStore::new(dir.path())),
            Arc::new(FixedDateProvider::parse("2025-01-15").unwrap()),
        );
        let mut out = Vec::new();
        let err = print_operation(&mut out, &reader, &FetchOperation::DailyRefresh, false)
            .await
            .unwrap_err();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("== Scores ==\n(error: "));
        assert!(text.contains("== Standings ==\n(no data)"));
        let leaders = text.split("== League leaders ==\n").nth(1).unwrap();
        assert_eq!(leaders.trim_end().lines().count(), 4);
        assert!(err.is_decode());
    }
}
