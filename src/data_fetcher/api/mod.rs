pub mod date_logic;
pub mod endpoints;
pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod params;
pub mod urls;

pub use date_logic::{DateProvider, FixedDateProvider, SystemDateProvider, season_for_date};
pub use endpoints::{Endpoint, FetchOperation};
pub use fetch_utils::{HttpRequester, ReqwestRequester, fetch_bytes};
pub use http_client::{create_http_client_with_timeout, stats_api_headers};
pub use orchestrator::{BatchReport, FetchOutcome, Fetcher};
pub use params::{
    BoxScoreParams, EndpointParams, LeagueLeadersParams, PlayerCareerParams, PlayerGameLogParams,
    PlayerInfoParams, ScoreboardParams, StandingsParams, TeamInfoParams,
};
pub use urls::{UrlMap, build_all, build_params, build_url};
