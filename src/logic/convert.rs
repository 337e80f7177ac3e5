//! Game to tournament conversion, reverting it, and recording match results.

use crate::logic::knockout::build_knockout_rounds;
use crate::logic::league::build_league_rounds;
use crate::logic::teams::partition_teams;
use crate::models::{
    Game, GameStatus, MatchId, PlayerId, PlayerProfile, Team, TournamentData, TournamentError,
    TournamentFormat, Winner,
};
use crate::store::ProfileCache;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub name: String,
    #[serde(default)]
    pub format: TournamentFormat,
    pub created_by: PlayerId,
}

/// Snapshot the game's players into teams and rounds and store them on the game.
///
/// Needs at least two teams; the game is left untouched otherwise. On success the
/// game is closed. Players without a profile get a fallback name.
pub fn convert_game_to_tournament<R: Rng + ?Sized>(
    game: &mut Game,
    request: &ConvertRequest,
    users: &HashMap<PlayerId, PlayerProfile>,
    cache: &mut ProfileCache,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    if game.is_tournament() {
        return Err(TournamentError::AlreadyTournament);
    }

    let players: Vec<_> = game
        .players
        .iter()
        .map(|id| cache.get_or_resolve(id, users))
        .collect();
    let teams = partition_teams(&players, rng);
    if teams.len() < 2 {
        return Err(TournamentError::InsufficientParticipants {
            found: players.len(),
        });
    }

    game.close();
    let rounds = match request.format {
        TournamentFormat::Knockout => build_knockout_rounds(&teams),
        TournamentFormat::League => build_league_rounds(&teams),
    };

    let name = match request.name.trim() {
        "" => game.title.clone(),
        name => name.to_string(),
    };
    log::info!(
        "Converted game {} into {:?} tournament '{}': {} teams, {} rounds",
        game.id,
        request.format,
        name,
        teams.len(),
        rounds.len()
    );
    game.tournament_data = Some(TournamentData {
        name,
        format: request.format,
        teams,
        rounds,
        created_at: now,
        created_by: request.created_by.clone(),
    });
    game.status = GameStatus::Tournament;
    Ok(())
}

/// Drop the tournament data; the game goes back to being a closed game.
pub fn revert_tournament(game: &mut Game) -> Result<TournamentData, TournamentError> {
    let data = game
        .tournament_data
        .take()
        .ok_or(TournamentError::NotATournament)?;
    game.status = GameStatus::Closed;
    game.is_open = false;
    log::info!("Reverted tournament '{}' on game {}", data.name, game.id);
    Ok(data)
}

/// Score update for a single match. Every field is written as given.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default)]
    pub score1: Option<u32>,
    #[serde(default)]
    pub score2: Option<u32>,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
}

/// Overwrite the result of one match (last write wins).
pub fn record_match_result(
    tournament: &mut TournamentData,
    match_id: MatchId,
    result: MatchResult,
) -> Result<(), TournamentError> {
    let format = tournament.format;
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !m.is_ready() {
        return Err(TournamentError::MatchNotReady);
    }
    let outcome = Winner::resolve(result.winner, result.score1, result.score2);
    if format == TournamentFormat::Knockout && result.completed {
        let winning_slot = match outcome {
            Some(Winner::Draw) => return Err(TournamentError::DrawNotAllowed),
            Some(Winner::Team1) => m.team1.as_ref(),
            Some(Winner::Team2) => m.team2.as_ref(),
            None => None,
        };
        if winning_slot.is_some_and(Team::is_bye) {
            return Err(TournamentError::ByeCannotWin);
        }
    }

    m.score1 = result.score1;
    m.score2 = result.score2;
    m.winner = result.winner;
    m.completed = result.completed;
    if result.match_date.is_some() {
        m.match_date = result.match_date;
    }
    log::debug!("Recorded result for match {}: {:?}", match_id, outcome);
    Ok(())
}
