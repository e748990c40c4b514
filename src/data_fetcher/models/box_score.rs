//! Traditional box score (`boxscoretraditionalv2`, table `PlayerStats`)

pub const PLAYER_STATS_TABLE: &str = "PlayerStats";

crate::stats_record! {
    /// One player's line in a game.
    pub struct BoxScoreLine {
        game_id: String = "GAME_ID", "Game ID" [hidden];
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        team_abbreviation: String = "TEAM_ABBREVIATION", "Team";
        player_id: i64 = "PLAYER_ID", "Player ID" [hidden];
        player_name: String = "PLAYER_NAME", "Player";
        start_position: String = "START_POSITION", "Pos";
        comment: String = "COMMENT", "Comment" [hidden];
        /// Minutes played as `MM:SS`.
        minutes: String = "MIN", "MIN";
        field_goals_made: i64 = "FGM", "FGM";
        field_goals_attempted: i64 = "FGA", "FGA";
        field_goal_pct: f64 = "FG_PCT", "FG%" [pct];
        threes_made: i64 = "FG3M", "3PM";
        threes_attempted: i64 = "FG3A", "3PA";
        three_pct: f64 = "FG3_PCT", "3P%" [pct];
        free_throws_made: i64 = "FTM", "FTM";
        free_throws_attempted: i64 = "FTA", "FTA";
        free_throw_pct: f64 = "FT_PCT", "FT%" [pct];
        offensive_rebounds: i64 = "OREB", "OREB" [hidden];
        defensive_rebounds: i64 = "DREB", "DREB" [hidden];
        rebounds: i64 = "REB", "REB";
        assists: i64 = "AST", "AST";
        steals: i64 = "STL", "STL";
        blocks: i64 = "BLK", "BLK";
        turnovers: i64 = "TO", "TO";
        fouls: i64 = "PF", "PF";
        points: i64 = "PTS", "PTS";
        plus_minus: i64 = "PLUS_MINUS", "+/-";
    }
}

impl BoxScoreLine {
    /// Players who did not play carry a `DNP`/`DND` comment and no minutes.
    pub fn did_play(&self) -> bool {
        !self.minutes.trim().is_empty()
    }
}
