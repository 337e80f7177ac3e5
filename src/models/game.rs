//! A padel game that players join, and which can be converted into a tournament.

use crate::models::player::PlayerId;
use crate::models::tournament::{TournamentData, TournamentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Accepting players.
    #[default]
    Open,
    Closed,
    /// Converted; `tournament_data` is set.
    Tournament,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub max_players: usize,
    /// User ids in join order.
    pub players: Vec<PlayerId>,
    pub status: GameStatus,
    pub is_open: bool,
    pub created_by: PlayerId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tournament_data: Option<TournamentData>,
}

impl Game {
    pub fn new(title: impl Into<String>, max_players: usize, created_by: impl Into<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            location: None,
            scheduled_at: None,
            max_players,
            players: Vec::new(),
            status: GameStatus::Open,
            is_open: true,
            created_by: created_by.into(),
            created_at: Utc::now(),
            tournament_data: None,
        }
    }

    pub fn is_tournament(&self) -> bool {
        self.tournament_data.is_some()
    }

    /// Add a player (only while open and not full).
    pub fn join(&mut self, player: impl Into<PlayerId>) -> Result<(), TournamentError> {
        if !self.is_open {
            return Err(TournamentError::GameClosed);
        }
        let player = player.into();
        if self.players.contains(&player) {
            return Err(TournamentError::AlreadyJoined);
        }
        if self.players.len() >= self.max_players {
            return Err(TournamentError::GameFull);
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove a player (only while open).
    pub fn leave(&mut self, player: &str) -> Result<(), TournamentError> {
        if !self.is_open {
            return Err(TournamentError::GameClosed);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p == player)
            .ok_or(TournamentError::NotJoined)?;
        self.players.remove(idx);
        Ok(())
    }

    /// Stop accepting players. A tournament stays a tournament.
    pub fn close(&mut self) {
        self.is_open = false;
        if self.status == GameStatus::Open {
            self.status = GameStatus::Closed;
        }
    }
}
