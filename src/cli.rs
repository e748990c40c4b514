use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nba_stats::data_fetcher::FetchOperation;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA stats fetcher
///
/// Downloads league leaders, standings and the day's scores from the stats
/// API into a dated local cache, then prints them as tab-separated tables.
/// Responses already cached for the day are not downloaded again, except the
/// scoreboard which is always refreshed.
///
/// With --box-score, --team or --player only that view is fetched.
#[derive(Parser, Debug)]
#[command(about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Treat this date (YYYY-MM-DD) as today for requests and cache names.
    #[arg(long = "date", short = 'd', help_heading = "Data")]
    pub date: Option<String>,

    /// Season in YYYY-YY format. Derived from the date when omitted.
    #[arg(long = "season", short = 's', help_heading = "Data")]
    pub season: Option<String>,

    /// Show the traditional box score of one game.
    #[arg(long = "box-score", value_name = "GAME_ID", help_heading = "Views",
          conflicts_with_all = ["team", "player"])]
    pub box_score: Option<String>,

    /// Show a team profile with season ranks.
    #[arg(long = "team", value_name = "TEAM_ID", help_heading = "Views",
          conflicts_with = "player")]
    pub team: Option<String>,

    /// Show a player's bio, career averages and last games.
    #[arg(long = "player", value_name = "PLAYER_ID", help_heading = "Views")]
    pub player: Option<String>,

    /// Print every column, including ids and detail columns.
    #[arg(long = "all-columns", short = 'a', help_heading = "Views")]
    pub all_columns: bool,

    /// Update API domain in config.
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the
    /// default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// The fetch this invocation asks for.
    pub fn operation(&self) -> FetchOperation {
        if let Some(game_id) = &self.box_score {
            FetchOperation::BoxScore {
                game_id: game_id.clone(),
            }
        } else if let Some(team_id) = &self.team {
            FetchOperation::TeamProfile {
                team_id: team_id.clone(),
            }
        } else if let Some(player_id) = &self.player {
            FetchOperation::PlayerProfile {
                player_id: player_id.clone(),
            }
        } else {
            FetchOperation::DailyRefresh
        }
    }

    /// Config-only invocations skip fetching.
    pub fn is_config_command(&self) -> bool {
        self.list_config || self.new_api_domain.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_daily_refresh() {
        let args = Args::parse_from(["nba_stats"]);
        assert_eq!(args.operation(), FetchOperation::DailyRefresh);
        assert!(!args.is_config_command());
    }

    #[test]
    fn test_player_operation() {
        let args = Args::parse_from(["nba_stats", "--player", "2544", "--season", "2023-24"]);
        assert_eq!(
            args.operation(),
            FetchOperation::PlayerProfile {
                player_id: "2544".to_string()
            }
        );
        assert_eq!(args.season.as_deref(), Some("2023-24"));
    }

    #[test]
    fn test_views_conflict() {
        assert!(Args::try_parse_from(["nba_stats", "--team", "1", "--player", "2"]).is_err());
        assert!(Args::try_parse_from(["nba_stats", "--box-score", "1", "--team", "2"]).is_err());
    }

    #[test]
    fn test_config_commands() {
        assert!(Args::parse_from(["nba_stats", "-l"]).is_config_command());
        assert!(
            Args::parse_from(["nba_stats", "--config", "https://example.com"]).is_config_command()
        );
    }
}
