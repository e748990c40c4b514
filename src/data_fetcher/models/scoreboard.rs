//! Daily scoreboard (`scoreboardv2`)
//!
//! The endpoint returns several unlabeled-by-contract tables; the first two are
//! used: `resultSets[0]` is the game header list and `resultSets[1]` holds one
//! line score per team per game.

pub const GAME_HEADER_INDEX: usize = 0;
pub const LINE_SCORE_INDEX: usize = 1;

crate::stats_record! {
    /// Schedule and status of one game.
    pub struct GameHeader {
        game_date: String = "GAME_DATE_EST", "Date" [hidden];
        game_sequence: i64 = "GAME_SEQUENCE", "Seq" [hidden];
        game_id: String = "GAME_ID", "Game ID" [hidden];
        status_id: i64 = "GAME_STATUS_ID", "Status ID" [hidden];
        status_text: String = "GAME_STATUS_TEXT", "Status";
        home_team_id: i64 = "HOME_TEAM_ID", "Home ID" [hidden];
        visitor_team_id: i64 = "VISITOR_TEAM_ID", "Visitor ID" [hidden];
        live_period: i64 = "LIVE_PERIOD", "Period";
        live_clock: String = "LIVE_PC_TIME", "Clock";
        broadcaster: String = "NATL_TV_BROADCASTER_ABBREVIATION", "TV";
    }
}

crate::stats_record! {
    /// Points by period for one team in one game.
    pub struct LineScore {
        game_id: String = "GAME_ID", "Game ID" [hidden];
        team_id: i64 = "TEAM_ID", "Team ID" [hidden];
        team_abbreviation: String = "TEAM_ABBREVIATION", "Team";
        team_city: String = "TEAM_CITY_NAME", "City" [hidden];
        team_name: String = "TEAM_NAME", "Name" [hidden];
        record: String = "TEAM_WINS_LOSSES", "Record";
        q1: i64 = "PTS_QTR1", "Q1";
        q2: i64 = "PTS_QTR2", "Q2";
        q3: i64 = "PTS_QTR3", "Q3";
        q4: i64 = "PTS_QTR4", "Q4";
        overtime_1: i64 = "PTS_OT1", "OT1" [hidden];
        points: i64 = "PTS", "PTS";
        field_goal_pct: f64 = "FG_PCT", "FG%" [pct];
        free_throw_pct: f64 = "FT_PCT", "FT%" [pct];
        three_pct: f64 = "FG3_PCT", "3P%" [pct];
        assists: i64 = "AST", "AST";
        rebounds: i64 = "REB", "REB";
        turnovers: i64 = "TOV", "TOV";
    }
}

crate::stats_record! {
    /// A game joined with both teams' line scores.
    pub struct GameResult {
        game_id: String = "GAME_ID", "Game ID" [hidden];
        status: String = "GAME_STATUS_TEXT", "Status";
        away_team: String = "AWAY_TEAM", "Away";
        away_record: String = "AWAY_RECORD", "Away Rec" [hidden];
        away_points: i64 = "AWAY_PTS", "Pts";
        home_team: String = "HOME_TEAM", "Home";
        home_record: String = "HOME_RECORD", "Home Rec" [hidden];
        home_points: i64 = "HOME_PTS", "Pts";
    }
}

impl GameResult {
    /// Joins a header with its teams' line scores. A team without a line score
    /// (game not started) keeps empty name and zero points.
    pub fn from_parts(header: &GameHeader, lines: &[LineScore]) -> Self {
        let line_for = |team_id: i64| {
            lines
                .iter()
                .find(|l| l.game_id == header.game_id && l.team_id == team_id)
        };
        let away = line_for(header.visitor_team_id);
        let home = line_for(header.home_team_id);

        Self {
            game_id: header.game_id.clone(),
            status: header.status_text.trim().to_string(),
            away_team: away.map(|l| l.team_abbreviation.clone()).unwrap_or_default(),
            away_record: away.map(|l| l.record.clone()).unwrap_or_default(),
            away_points: away.map(|l| l.points).unwrap_or_default(),
            home_team: home.map(|l| l.team_abbreviation.clone()).unwrap_or_default(),
            home_record: home.map(|l| l.record.clone()).unwrap_or_default(),
            home_points: home.map(|l| l.points).unwrap_or_default(),
        }
    }

    /// Finished games report `Final`, `Final/OT` and so on.
    pub fn is_final(&self) -> bool {
        self.status.starts_with("Final")
    }
}
