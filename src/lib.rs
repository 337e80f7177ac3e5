//! Padel tournament web app: library with models, tournament logic, and the game store.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    advance_winners, bracket_shape, build_knockout_rounds, build_league_rounds, compute_standings,
    convert_game_to_tournament, match_progress, partition_teams, record_match_result,
    resolve_champion, revert_tournament, round_name, standings_csv, tournament_status,
    view_tournament, BracketShape, ChampionStatus, ConvertRequest, MatchProgress, MatchResult,
    TournamentView,
};
pub use models::{
    Game, GameId, GameMatch, GameStatus, MatchId, Player, PlayerId, PlayerProfile, Round,
    Standing, Team, TeamId, TeamStats, TournamentData, TournamentError, TournamentFormat,
    TournamentStatus, Winner,
};
pub use store::{DocumentStore, ProfileCache};
