//! Turns decoded envelopes into typed records

pub mod league;
pub mod profiles;
pub mod table;

pub use league::{
    extract_league_leaders, extract_line_scores, extract_scoreboard, extract_standings,
};
pub use profiles::{
    extract_box_score, extract_player_bio, extract_recent_games, extract_season_stats,
    extract_team_profile,
};
pub use table::{Extracted, cap_rows, decode_named, decode_positional};
