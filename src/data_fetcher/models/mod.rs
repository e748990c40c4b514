pub mod box_score;
pub mod envelope;
pub mod leaders;
pub mod player;
pub mod record;
pub mod scoreboard;
pub mod standings;
pub mod team;

pub use box_score::BoxScoreLine;
pub use envelope::{Cell, ResponseEnvelope, ResultSet};
pub use leaders::LeagueLeader;
pub use player::{GameLogEntry, PlayerBio, PlayerProfile, SeasonStats};
pub use record::{FieldKind, FieldMeta, FieldType, FieldValue, Record};
pub use scoreboard::{GameHeader, GameResult, LineScore};
pub use standings::{STANDINGS_COLUMNS, TeamStanding};
pub use team::{TeamInfo, TeamProfile, TeamSeasonRanks};
