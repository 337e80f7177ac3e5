//! Data structures for padel games and tournaments: players, teams, matches, rounds.

mod game;
mod game_match;
mod player;
mod team;
mod tournament;

pub use game::{Game, GameId, GameStatus};
pub use game_match::{GameMatch, MatchId, Winner};
pub use player::{Player, PlayerId, PlayerProfile, TBC_PLAYER_ID};
pub use team::{
    is_bye_id, team_color, Standing, Team, TeamId, TeamStats, KNOCKOUT_BYE_ID, LEAGUE_BYE_ID,
    TEAM_COLORS, TEAM_NAMES,
};
pub use tournament::{Round, TournamentData, TournamentError, TournamentFormat, TournamentStatus};
