//! Tournament data embedded in a game, its rounds, and TournamentError.

use crate::models::game::GameId;
use crate::models::game_match::{GameMatch, MatchId};
use crate::models::player::PlayerId;
use crate::models::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur during game and tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Not enough players to make two teams.
    InsufficientParticipants { found: usize },
    /// The game has already been converted.
    AlreadyTournament,
    /// The game has no tournament data.
    NotATournament,
    GameNotFound(GameId),
    /// The game no longer accepts joins or leaves.
    GameClosed,
    GameFull,
    AlreadyJoined,
    NotJoined,
    MatchNotFound(MatchId),
    /// One of the match slots is still waiting for a team.
    MatchNotReady,
    /// Knockout matches need a winner.
    DrawNotAllowed,
    /// A BYE cannot win a knockout match.
    ByeCannotWin,
    UserNotFound(PlayerId),
    /// Writing the standings export failed.
    Export(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientParticipants { found } => {
                write!(f, "Need at least 3 players (two teams) to create a tournament (found {})", found)
            }
            TournamentError::AlreadyTournament => write!(f, "This game is already a tournament"),
            TournamentError::NotATournament => write!(f, "This game is not a tournament"),
            TournamentError::GameNotFound(_) => write!(f, "Game not found"),
            TournamentError::GameClosed => write!(f, "This game is closed"),
            TournamentError::GameFull => write!(f, "This game is full"),
            TournamentError::AlreadyJoined => write!(f, "Player already joined this game"),
            TournamentError::NotJoined => write!(f, "Player has not joined this game"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::MatchNotReady => write!(f, "Both teams must be known before recording a result"),
            TournamentError::DrawNotAllowed => write!(f, "Knockout matches cannot end in a draw"),
            TournamentError::ByeCannotWin => write!(f, "A BYE cannot win a knockout match"),
            TournamentError::UserNotFound(_) => write!(f, "User not found"),
            TournamentError::Export(msg) => write!(f, "Could not export standings: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum TournamentFormat {
    /// Single elimination.
    #[default]
    Knockout,
    /// Round robin.
    League,
}

/// Derived lifecycle of a tournament. Never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// No match decided yet.
    Created,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub name: String,
    pub matches: Vec<GameMatch>,
}

impl Round {
    pub fn new(name: impl Into<String>, matches: Vec<GameMatch>) -> Self {
        Self {
            name: name.into(),
            matches,
        }
    }
}

/// Tournament state written onto the originating game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    pub name: String,
    pub format: TournamentFormat,
    pub teams: Vec<Team>,
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
    pub created_by: PlayerId,
}

impl TournamentData {
    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .find(|m| m.id == id)
    }

    pub fn find_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.rounds
            .iter_mut()
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == id)
    }

    /// All matches, first round first.
    pub fn matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }
}
