//! In-memory document store: games and user profiles, plus the profile cache.

use crate::models::{Game, GameId, Player, PlayerId, PlayerProfile, TournamentError};
use std::collections::HashMap;

/// Resolved players by id. Owned by whoever owns the profiles; invalidate on profile change.
#[derive(Clone, Debug, Default)]
pub struct ProfileCache {
    players: HashMap<PlayerId, Player>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached player, or resolve from `profiles` (missing profile: "Unknown Player").
    pub fn get_or_resolve(&mut self, id: &str, profiles: &HashMap<PlayerId, PlayerProfile>) -> Player {
        if let Some(p) = self.players.get(id) {
            return p.clone();
        }
        let player = match profiles.get(id) {
            Some(profile) => profile.to_player(),
            None => {
                log::warn!("No profile for player {}, using fallback name", id);
                Player::unknown(id)
            }
        };
        self.players.insert(id.to_string(), player.clone());
        player
    }

    pub fn invalidate(&mut self, id: &str) {
        self.players.remove(id);
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

/// Games and users collections. Writes are last-write-wins.
#[derive(Debug, Default)]
pub struct DocumentStore {
    games: HashMap<GameId, Game>,
    users: HashMap<PlayerId, PlayerProfile>,
    profiles: ProfileCache,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user profile. Drops the cached player for that id.
    pub fn upsert_user(&mut self, profile: PlayerProfile) {
        self.profiles.invalidate(&profile.id);
        self.users.insert(profile.id.clone(), profile);
    }

    pub fn remove_user(&mut self, id: &str) -> Result<PlayerProfile, TournamentError> {
        self.profiles.invalidate(id);
        self.users
            .remove(id)
            .ok_or_else(|| TournamentError::UserNotFound(id.to_string()))
    }

    pub fn users(&self) -> &HashMap<PlayerId, PlayerProfile> {
        &self.users
    }

    /// Users sorted by resolved name.
    pub fn list_users(&self) -> Vec<&PlayerProfile> {
        let mut users: Vec<_> = self.users.values().collect();
        users.sort_by_key(|u| u.resolved_name());
        users
    }

    pub fn insert_game(&mut self, game: Game) -> GameId {
        let id = game.id;
        self.games.insert(id, game);
        id
    }

    pub fn game(&self, id: GameId) -> Result<&Game, TournamentError> {
        self.games.get(&id).ok_or(TournamentError::GameNotFound(id))
    }

    pub fn game_mut(&mut self, id: GameId) -> Result<&mut Game, TournamentError> {
        self.games.get_mut(&id).ok_or(TournamentError::GameNotFound(id))
    }

    pub fn remove_game(&mut self, id: GameId) -> Result<Game, TournamentError> {
        self.games.remove(&id).ok_or(TournamentError::GameNotFound(id))
    }

    /// Games, newest first.
    pub fn list_games(&self) -> Vec<&Game> {
        let mut games: Vec<_> = self.games.values().collect();
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        games
    }

    /// Split borrow: one game mutably, plus the users and the profile cache.
    pub fn game_with_profiles(
        &mut self,
        id: GameId,
    ) -> Result<(&mut Game, &HashMap<PlayerId, PlayerProfile>, &mut ProfileCache), TournamentError> {
        let game = self.games.get_mut(&id).ok_or(TournamentError::GameNotFound(id))?;
        Ok((game, &self.users, &mut self.profiles))
    }
}
