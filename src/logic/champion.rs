//! Champion and tournament status, derived from the stored matches on every read.

use crate::logic::standings::{compute_standings, match_progress, MatchProgress};
use crate::models::{Standing, Team, TournamentData, TournamentFormat, TournamentStatus};
use serde::Serialize;

/// Who is on top. A league leader is only the champion once every match is decided.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "team", rename_all = "snake_case")]
pub enum ChampionStatus {
    Champion(Team),
    Leader(Team),
    Undecided,
}

impl ChampionStatus {
    pub fn champion(&self) -> Option<&Team> {
        match self {
            ChampionStatus::Champion(t) => Some(t),
            _ => None,
        }
    }
}

/// Knockout: winner of the final. League: top of the table once finished,
/// otherwise the current leader.
pub fn resolve_champion(tournament: &TournamentData, standings: &[Standing]) -> ChampionStatus {
    match tournament.format {
        TournamentFormat::Knockout => tournament
            .rounds
            .last()
            .and_then(|final_round| final_round.matches.first())
            .and_then(|m| m.winning_team())
            .map(|t| ChampionStatus::Champion(t.clone()))
            .unwrap_or(ChampionStatus::Undecided),
        TournamentFormat::League => {
            let progress = match_progress(&tournament.rounds);
            match standings.first() {
                Some(top) if progress.is_finished() => ChampionStatus::Champion(top.team.clone()),
                Some(top) if progress.completed > 0 => ChampionStatus::Leader(top.team.clone()),
                _ => ChampionStatus::Undecided,
            }
        }
    }
}

/// Created until any match is decided, Completed once there is a champion.
pub fn tournament_status(tournament: &TournamentData) -> TournamentStatus {
    let finished = match tournament.format {
        TournamentFormat::Knockout => resolve_champion(tournament, &[]).champion().is_some(),
        TournamentFormat::League => match_progress(&tournament.rounds).is_finished(),
    };
    if finished {
        TournamentStatus::Completed
    } else if tournament.matches().any(|m| m.is_decided()) {
        TournamentStatus::InProgress
    } else {
        TournamentStatus::Created
    }
}

/// Everything a bracket or league page shows, recomputed from the tournament.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView {
    pub tournament: TournamentData,
    pub standings: Vec<Standing>,
    pub progress: MatchProgress,
    pub status: TournamentStatus,
    pub champion: ChampionStatus,
}

pub fn view_tournament(tournament: &TournamentData) -> TournamentView {
    let standings = compute_standings(&tournament.teams, &tournament.rounds);
    let champion = resolve_champion(tournament, &standings);
    TournamentView {
        tournament: tournament.clone(),
        progress: match_progress(&tournament.rounds),
        status: tournament_status(tournament),
        standings,
        champion,
    }
}
