//! Season standings (`leaguestandingsv3`, table `Standings`)
//!
//! The standings table repeats several display headers at different
//! positions, so it is decoded by column index. [`STANDINGS_COLUMNS`] is the
//! schema contract; the header strings in the field table are the canonical
//! names at those positions and are informational only.

crate::stats_record! {
    /// A team's line in the season standings.
    pub struct TeamStanding {
        team_id: i64 = "TeamID", "Team ID" [hidden];
        team_city: String = "TeamCity", "City";
        team_name: String = "TeamName", "Team";
        conference: String = "Conference", "Conf";
        conference_record: String = "ConferenceRecord", "Conf Rec" [hidden];
        playoff_rank: i64 = "PlayoffRank", "Seed";
        clinch_indicator: String = "ClinchIndicator", "Clinch" [hidden];
        division: String = "Division", "Div" [hidden];
        wins: i64 = "WINS", "W";
        losses: i64 = "LOSSES", "L";
        win_pct: f64 = "WinPCT", "PCT" [pct];
        league_rank: i64 = "LeagueRank", "League Rank" [hidden];
        home: String = "HOME", "Home";
        road: String = "ROAD", "Road";
        last_ten: String = "L10", "L10";
        current_streak: String = "strCurrentStreak", "Streak";
        conference_games_back: f64 = "ConferenceGamesBack", "GB";
    }
}

/// Column index → field for the `Standings` table.
pub const STANDINGS_COLUMNS: &[(usize, &str)] = &[
    (2, "team_id"),
    (3, "team_city"),
    (4, "team_name"),
    (6, "conference"),
    (7, "conference_record"),
    (8, "playoff_rank"),
    (9, "clinch_indicator"),
    (10, "division"),
    (13, "wins"),
    (14, "losses"),
    (15, "win_pct"),
    (16, "league_rank"),
    (18, "home"),
    (19, "road"),
    (20, "last_ten"),
    (37, "current_streak"),
    (38, "conference_games_back"),
];

pub const STANDINGS_TABLE: &str = "Standings";
