//! A single match between two teams, and who won it.

use crate::models::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Result of a match. Draws only make sense in a league.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Team1,
    Team2,
    Draw,
}

impl Winner {
    /// `winner` if given, else compare the scores.
    pub fn resolve(winner: Option<Winner>, score1: Option<u32>, score2: Option<u32>) -> Option<Winner> {
        if winner.is_some() {
            return winner;
        }
        match (score1, score2) {
            (Some(a), Some(b)) if a > b => Some(Winner::Team1),
            (Some(a), Some(b)) if a < b => Some(Winner::Team2),
            (Some(_), Some(_)) => Some(Winner::Draw),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// None while waiting for an earlier-round winner (or an absent knockout slot).
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    #[serde(default)]
    pub score1: Option<u32>,
    #[serde(default)]
    pub score2: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    /// None if not yet played.
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
    /// Earlier-round match whose winner fills `team1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_from: Option<MatchId>,
    /// Earlier-round match whose winner fills `team2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_from: Option<MatchId>,
}

impl GameMatch {
    pub fn new(team1: Option<Team>, team2: Option<Team>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1,
            team2,
            score1: None,
            score2: None,
            completed: false,
            winner: None,
            match_date: None,
            team1_from: None,
            team2_from: None,
        }
    }

    /// Empty later-round match fed by the winners of two earlier matches.
    pub fn fed_by(team1_from: MatchId, team2_from: MatchId) -> Self {
        Self {
            team1_from: Some(team1_from),
            team2_from: Some(team2_from),
            ..Self::new(None, None)
        }
    }

    /// Explicit winner if set, otherwise the score comparison when both scores exist.
    pub fn outcome(&self) -> Option<Winner> {
        Winner::resolve(self.winner, self.score1, self.score2)
    }

    /// Whether this match counts towards standings and completion.
    pub fn is_decided(&self) -> bool {
        self.completed && self.outcome().is_some()
    }

    pub fn involves_bye(&self) -> bool {
        [&self.team1, &self.team2]
            .into_iter()
            .flatten()
            .any(Team::is_bye)
    }

    /// No real team can ever play here: each slot is a BYE, or empty with no feeder.
    pub fn is_vacant(&self) -> bool {
        let vacant = |team: &Option<Team>, from: &Option<MatchId>| match team {
            Some(t) => t.is_bye(),
            None => from.is_none(),
        };
        vacant(&self.team1, &self.team1_from) && vacant(&self.team2, &self.team2_from)
    }

    /// Both slots hold a team.
    pub fn is_ready(&self) -> bool {
        self.team1.is_some() && self.team2.is_some()
    }

    /// The team that won, if the match is decided and not drawn.
    pub fn winning_team(&self) -> Option<&Team> {
        if !self.is_decided() {
            return None;
        }
        match self.outcome()? {
            Winner::Team1 => self.team1.as_ref(),
            Winner::Team2 => self.team2.as_ref(),
            Winner::Draw => None,
        }
    }
}
