//! Player profile (`commonplayerinfo`, `playercareerstats`, `playergamelog`)

pub const PLAYER_INFO_TABLE: &str = "CommonPlayerInfo";
pub const SEASON_TOTALS_TABLE: &str = "SeasonTotalsRegularSeason";
/// `playergamelog` returns its only table first; the name is not relied on.
pub const GAME_LOG_INDEX: usize = 0;

crate::stats_record! {
    /// Biographical data of a player.
    pub struct PlayerBio {
        person_id: i64 = "PERSON_ID", "Player ID" [hidden];
        display_name: String = "DISPLAY_FIRST_LAST", "Name";
        birthdate: String = "BIRTHDATE", "Born";
        school: String = "SCHOOL", "School";
        country: String = "COUNTRY", "Country";
        height: String = "HEIGHT", "Height";
        weight: String = "WEIGHT", "Weight";
        season_experience: i64 = "SEASON_EXP", "Exp";
        jersey: String = "JERSEY", "#";
        position: String = "POSITION", "Pos";
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        team_abbreviation: String = "TEAM_ABBREVIATION", "Team";
        from_year: i64 = "FROM_YEAR", "From";
        to_year: i64 = "TO_YEAR", "To";
        draft_year: String = "DRAFT_YEAR", "Draft";
        draft_round: String = "DRAFT_ROUND", "Round" [hidden];
        draft_number: String = "DRAFT_NUMBER", "Pick" [hidden];
    }
}

crate::stats_record! {
    /// Regular-season averages for one season and team.
    pub struct SeasonStats {
        player_id: i64 = "PLAYER_ID", "Player ID" [hidden];
        season_id: String = "SEASON_ID", "Season";
        team_abbreviation: String = "TEAM_ABBREVIATION", "Team";
        player_age: i64 = "PLAYER_AGE", "Age";
        games_played: i64 = "GP", "GP";
        games_started: i64 = "GS", "GS";
        minutes: f64 = "MIN", "MIN";
        field_goal_pct: f64 = "FG_PCT", "FG%" [pct];
        three_pct: f64 = "FG3_PCT", "3P%" [pct];
        free_throw_pct: f64 = "FT_PCT", "FT%" [pct];
        rebounds: f64 = "REB", "REB";
        assists: f64 = "AST", "AST";
        steals: f64 = "STL", "STL";
        blocks: f64 = "BLK", "BLK";
        turnovers: f64 = "TOV", "TOV";
        points: f64 = "PTS", "PTS";
    }
}

crate::stats_record! {
    /// One game from a player's season log.
    pub struct GameLogEntry {
        season_id: String = "SEASON_ID", "Season" [hidden];
        player_id: i64 = "Player_ID", "Player ID" [hidden];
        game_id: String = "Game_ID", "Game ID" [hidden];
        game_date: String = "GAME_DATE", "Date";
        matchup: String = "MATCHUP", "Matchup";
        win_loss: String = "WL", "W/L";
        minutes: i64 = "MIN", "MIN";
        points: i64 = "PTS", "PTS";
        rebounds: i64 = "REB", "REB";
        assists: i64 = "AST", "AST";
        steals: i64 = "STL", "STL";
        blocks: i64 = "BLK", "BLK";
        turnovers: i64 = "TOV", "TOV";
        field_goal_pct: f64 = "FG_PCT", "FG%" [pct];
        three_pct: f64 = "FG3_PCT", "3P%" [pct];
        free_throw_pct: f64 = "FT_PCT", "FT%" [pct];
        plus_minus: i64 = "PLUS_MINUS", "+/-";
    }
}

/// Everything the player view shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerProfile {
    pub bio: PlayerBio,
    pub seasons: Vec<SeasonStats>,
    /// Most recent games first.
    pub recent_games: Vec<GameLogEntry>,
}
