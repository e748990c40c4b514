//! League leaders table (`leagueleaders`, single `resultSet`)

crate::stats_record! {
    /// One row of the league leaders table, per-game averages.
    pub struct LeagueLeader {
        player_id: i64 = "PLAYER_ID", "Player ID" [hidden];
        rank: i64 = "RANK", "#";
        player: String = "PLAYER", "Player";
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        team: String = "TEAM", "Team";
        games_played: i64 = "GP", "GP";
        minutes: f64 = "MIN", "MIN";
        field_goals_made: f64 = "FGM", "FGM" [hidden];
        field_goals_attempted: f64 = "FGA", "FGA" [hidden];
        field_goal_pct: f64 = "FG_PCT", "FG%" [pct];
        threes_made: f64 = "FG3M", "3PM" [hidden];
        threes_attempted: f64 = "FG3A", "3PA" [hidden];
        three_pct: f64 = "FG3_PCT", "3P%" [pct];
        free_throws_made: f64 = "FTM", "FTM" [hidden];
        free_throws_attempted: f64 = "FTA", "FTA" [hidden];
        free_throw_pct: f64 = "FT_PCT", "FT%" [pct];
        offensive_rebounds: f64 = "OREB", "OREB" [hidden];
        defensive_rebounds: f64 = "DREB", "DREB" [hidden];
        rebounds: f64 = "REB", "REB";
        assists: f64 = "AST", "AST";
        steals: f64 = "STL", "STL";
        blocks: f64 = "BLK", "BLK";
        turnovers: f64 = "TOV", "TOV";
        points: f64 = "PTS", "PTS";
        efficiency: f64 = "EFF", "EFF" [hidden];
    }
}
