//! Endpoint catalogue and the logical fetch operations built from it

use std::fmt;

/// Remote stats endpoints known to the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    LeagueLeaders,
    Standings,
    Scoreboard,
    BoxScore,
    TeamInfo,
    PlayerInfo,
    PlayerCareer,
    PlayerGameLog,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::LeagueLeaders,
        Endpoint::Standings,
        Endpoint::Scoreboard,
        Endpoint::BoxScore,
        Endpoint::TeamInfo,
        Endpoint::PlayerInfo,
        Endpoint::PlayerCareer,
        Endpoint::PlayerGameLog,
    ];

    /// URL path segment under the API base.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::LeagueLeaders => "leagueleaders",
            Endpoint::Standings => "leaguestandingsv3",
            Endpoint::Scoreboard => "scoreboardv2",
            Endpoint::BoxScore => "boxscoretraditionalv2",
            Endpoint::TeamInfo => "teaminfocommon",
            Endpoint::PlayerInfo => "commonplayerinfo",
            Endpoint::PlayerCareer => "playercareerstats",
            Endpoint::PlayerGameLog => "playergamelog",
        }
    }

    /// Cache directory below the cache root.
    pub const fn cache_subpath(self) -> &'static str {
        match self {
            Endpoint::LeagueLeaders | Endpoint::Standings | Endpoint::Scoreboard => "league",
            Endpoint::BoxScore => "games",
            Endpoint::TeamInfo => "teams",
            Endpoint::PlayerInfo | Endpoint::PlayerCareer | Endpoint::PlayerGameLog => "players",
        }
    }

    /// File name suffix after the `YYYY-MM-DD_` prefix.
    pub const fn cache_suffix(self) -> &'static str {
        match self {
            Endpoint::LeagueLeaders => "leaders",
            Endpoint::Standings => "standings",
            Endpoint::Scoreboard => "scores",
            Endpoint::BoxScore => "boxscore",
            Endpoint::TeamInfo => "team",
            Endpoint::PlayerInfo => "bio",
            Endpoint::PlayerCareer => "career",
            Endpoint::PlayerGameLog => "gamelog",
        }
    }

    /// Live data that is refetched on every batch regardless of the cache.
    pub const fn always_refresh(self) -> bool {
        matches!(self, Endpoint::Scoreboard)
    }

    /// Every distinct cache subdirectory, used as eviction roots.
    pub fn cache_subpaths() -> Vec<&'static str> {
        let mut subpaths: Vec<&'static str> =
            Self::ALL.iter().map(|e| e.cache_subpath()).collect();
        subpaths.sort_unstable();
        subpaths.dedup();
        subpaths
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One logical fetch: the set of endpoints a view needs together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOperation {
    /// League leaders, standings and today's scores.
    DailyRefresh,
    BoxScore { game_id: String },
    TeamProfile { team_id: String },
    PlayerProfile { player_id: String },
}

impl FetchOperation {
    /// Target id used in request parameters and cache file names.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            FetchOperation::DailyRefresh => None,
            FetchOperation::BoxScore { game_id } => Some(game_id),
            FetchOperation::TeamProfile { team_id } => Some(team_id),
            FetchOperation::PlayerProfile { player_id } => Some(player_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FetchOperation::DailyRefresh => "daily-refresh",
            FetchOperation::BoxScore { .. } => "box-score",
            FetchOperation::TeamProfile { .. } => "team-profile",
            FetchOperation::PlayerProfile { .. } => "player-profile",
        }
    }
}
