//! League standings, match progress, and the CSV export of the table.

use crate::models::{Round, Standing, Team, TeamId, TeamStats, TournamentError, Winner};
use serde::Serialize;
use std::collections::HashMap;

/// Decided vs playable matches across a tournament. Bye and vacant matches are not counted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProgress {
    pub completed: usize,
    pub total: usize,
}

impl MatchProgress {
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn match_progress(rounds: &[Round]) -> MatchProgress {
    rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .filter(|m| !m.involves_bye() && !m.is_vacant())
        .fold(MatchProgress::default(), |mut p, m| {
            p.total += 1;
            if m.is_decided() {
                p.completed += 1;
            }
            p
        })
}

/// Compute the league table from scratch.
///
/// Every decided match between two known (non-bye) teams counts: both teams get a
/// game played, goals when both scores are present, and 3 points for a win or
/// 1 point each for a draw. Sorted by points, goal difference, then goals for.
pub fn compute_standings(teams: &[Team], rounds: &[Round]) -> Vec<Standing> {
    let mut stats: HashMap<&TeamId, TeamStats> = teams
        .iter()
        .filter(|t| !t.is_bye())
        .map(|t| (&t.id, TeamStats::default()))
        .collect();

    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        if !m.is_decided() {
            continue;
        }
        let (Some(team1), Some(team2)) = (&m.team1, &m.team2) else {
            log::debug!("Skipping match {}: missing team", m.id);
            continue;
        };
        if !stats.contains_key(&team1.id) || !stats.contains_key(&team2.id) {
            log::debug!("Skipping match {}: {} vs {} not in standings", m.id, team1.id, team2.id);
            continue;
        }
        let Some(outcome) = m.outcome() else {
            continue;
        };

        for (id, own, other) in [(&team1.id, m.score1, m.score2), (&team2.id, m.score2, m.score1)] {
            if let Some(s) = stats.get_mut(id) {
                s.played += 1;
                if let (Some(own), Some(other)) = (own, other) {
                    s.goals_for = s.goals_for.saturating_add(own);
                    s.goals_against = s.goals_against.saturating_add(other);
                }
            }
        }

        let (winner_id, loser_id) = match outcome {
            Winner::Team1 => (&team1.id, &team2.id),
            Winner::Team2 => (&team2.id, &team1.id),
            Winner::Draw => {
                for id in [&team1.id, &team2.id] {
                    if let Some(s) = stats.get_mut(id) {
                        s.add_draw();
                    }
                }
                continue;
            }
        };
        if let Some(s) = stats.get_mut(winner_id) {
            s.add_win();
        }
        if let Some(s) = stats.get_mut(loser_id) {
            s.add_loss();
        }
    }

    let mut standings: Vec<Standing> = teams
        .iter()
        .filter(|t| !t.is_bye())
        .map(|t| Standing {
            team: t.clone(),
            stats: stats.get(&t.id).copied().unwrap_or_default(),
        })
        .collect();
    standings.sort_by(|a, b| {
        b.stats
            .points
            .cmp(&a.stats.points)
            .then_with(|| b.stats.goal_difference().cmp(&a.stats.goal_difference()))
            .then_with(|| b.stats.goals_for.cmp(&a.stats.goals_for))
    });
    standings
}

#[derive(Serialize)]
struct StandingRow<'a> {
    position: usize,
    team: &'a str,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    goal_difference: i64,
    points: u32,
}

/// League table as CSV, one row per team in standings order.
pub fn standings_csv(standings: &[Standing]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, s) in standings.iter().enumerate() {
        writer
            .serialize(StandingRow {
                position: i + 1,
                team: &s.team.name,
                played: s.stats.played,
                won: s.stats.won,
                drawn: s.stats.drawn,
                lost: s.stats.lost,
                goals_for: s.stats.goals_for,
                goals_against: s.stats.goals_against,
                goal_difference: s.stats.goal_difference(),
                points: s.stats.points,
            })
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
