//! Tournament business logic: teams, bracket and league generation, standings, conversion.

mod champion;
mod convert;
mod knockout;
mod league;
mod standings;
mod teams;

pub use champion::{
    resolve_champion, tournament_status, view_tournament, ChampionStatus, TournamentView,
};
pub use convert::{
    convert_game_to_tournament, record_match_result, revert_tournament, ConvertRequest,
    MatchResult,
};
pub use knockout::{advance_winners, bracket_shape, build_knockout_rounds, round_name, BracketShape};
pub use league::build_league_rounds;
pub use standings::{compute_standings, match_progress, standings_csv, MatchProgress};
pub use teams::partition_teams;
