//! Team profile (`teaminfocommon`)

pub const TEAM_INFO_TABLE: &str = "TeamInfoCommon";
pub const TEAM_RANKS_TABLE: &str = "TeamSeasonRanks";

crate::stats_record! {
    /// Identity and record of a team for the requested season.
    pub struct TeamInfo {
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        season_year: String = "SEASON_YEAR", "Season";
        team_city: String = "TEAM_CITY", "City";
        team_name: String = "TEAM_NAME", "Team";
        team_abbreviation: String = "TEAM_ABBREVIATION", "Abbr";
        conference: String = "TEAM_CONFERENCE", "Conf";
        division: String = "TEAM_DIVISION", "Div";
        wins: i64 = "W", "W";
        losses: i64 = "L", "L";
        win_pct: f64 = "PCT", "PCT" [pct];
        conference_rank: i64 = "CONF_RANK", "Conf Rank";
        division_rank: i64 = "DIV_RANK", "Div Rank";
        min_year: String = "MIN_YEAR", "Since" [hidden];
        max_year: String = "MAX_YEAR", "Until" [hidden];
    }
}

crate::stats_record! {
    /// League ranks of the team's per-game averages.
    pub struct TeamSeasonRanks {
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        season_id: String = "SEASON_ID", "Season" [hidden];
        points_rank: i64 = "PTS_RANK", "PTS Rank";
        points_per_game: f64 = "PTS_PG", "PTS";
        rebounds_rank: i64 = "REB_RANK", "REB Rank";
        rebounds_per_game: f64 = "REB_PG", "REB";
        assists_rank: i64 = "AST_RANK", "AST Rank";
        assists_per_game: f64 = "AST_PG", "AST";
        opponent_points_rank: i64 = "OPP_PTS_RANK", "OPP Rank";
        opponent_points_per_game: f64 = "OPP_PTS_PG", "OPP PTS";
    }
}

/// Everything the team view shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamProfile {
    pub info: TeamInfo,
    /// Absent before the team has played a game in the season.
    pub ranks: Option<TeamSeasonRanks>,
}
