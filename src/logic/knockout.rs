//! Knockout bracket: seeded first round, empty later rounds, and winner propagation.

use crate::models::{GameMatch, MatchId, Round, Team, TournamentData};
use std::collections::HashMap;

/// Size of a single-elimination bracket for a given team count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BracketShape {
    /// At least one, even for zero or one team.
    pub rounds: usize,
    /// `2^rounds`.
    pub full_size: usize,
    /// Empty seats in the first round.
    pub byes: usize,
}

/// `rounds = max(1, ceil(log2(n)))`.
pub fn bracket_shape(team_count: usize) -> BracketShape {
    let mut rounds = 0;
    while (1usize << rounds) < team_count {
        rounds += 1;
    }
    let rounds = rounds.max(1);
    let full_size = 1usize << rounds;
    BracketShape {
        rounds,
        full_size,
        byes: full_size.saturating_sub(team_count),
    }
}

/// Positional round name: Final, Semi-Finals, Quarter-Finals, else `Round k`.
pub fn round_name(index: usize, total_rounds: usize) -> String {
    match total_rounds.saturating_sub(index) {
        1 => "Final".to_string(),
        2 => "Semi-Finals".to_string(),
        3 => "Quarter-Finals".to_string(),
        _ => format!("Round {}", index + 1),
    }
}

/// Build every round of a knockout bracket from seeded teams.
///
/// First-round match `j` pairs teams `2j` and `2j+1`. A missing first team leaves
/// the match empty; a missing second team puts a BYE opponent in, and the match
/// stays open until someone records the result. Later rounds start empty, each
/// slot pointing at the earlier match whose winner will fill it.
pub fn build_knockout_rounds(teams: &[Team]) -> Vec<Round> {
    let shape = bracket_shape(teams.len());
    let mut rounds = Vec::with_capacity(shape.rounds);

    let first: Vec<GameMatch> = (0..shape.full_size / 2)
        .map(|j| {
            let team1 = teams.get(2 * j).cloned();
            let team2 = team1
                .is_some()
                .then(|| teams.get(2 * j + 1).cloned().unwrap_or_else(Team::knockout_bye));
            GameMatch::new(team1, team2)
        })
        .collect();
    rounds.push(Round::new(round_name(0, shape.rounds), first));

    for r in 1..shape.rounds {
        let previous: Vec<MatchId> = rounds[r - 1].matches.iter().map(|m| m.id).collect();
        let matches = previous
            .chunks(2)
            .map(|feeders| GameMatch::fed_by(feeders[0], feeders[1]))
            .collect();
        rounds.push(Round::new(round_name(r, shape.rounds), matches));
    }

    log::debug!(
        "Built knockout bracket: {} teams, {} rounds, {} byes",
        teams.len(),
        shape.rounds,
        shape.byes
    );
    rounds
}

/// What a match sends to the next round: its winner, or a BYE when no real
/// team can ever play in it.
fn advancing_team(m: &GameMatch) -> Option<Team> {
    if m.is_vacant() {
        return Some(Team::knockout_bye());
    }
    m.winning_team().cloned()
}

/// Copy winners of decided matches into the later-round slots that reference them.
///
/// Vacant matches (empty first-round pairings, BYE against BYE) pass a BYE on,
/// round after round. Completed target matches are left alone. Returns how many
/// slots changed.
pub fn advance_winners(tournament: &mut TournamentData) -> usize {
    let mut changed = 0;
    for r in 1..tournament.rounds.len() {
        let (earlier, later) = tournament.rounds.split_at_mut(r);
        let advancing: HashMap<MatchId, Team> = earlier
            .iter()
            .flat_map(|round| round.matches.iter())
            .filter_map(|m| advancing_team(m).map(|t| (m.id, t)))
            .collect();

        for m in later[0].matches.iter_mut().filter(|m| !m.completed) {
            if let Some(team) = m.team1_from.and_then(|id| advancing.get(&id)) {
                if m.team1.as_ref() != Some(team) {
                    m.team1 = Some(team.clone());
                    changed += 1;
                }
            }
            if let Some(team) = m.team2_from.and_then(|id| advancing.get(&id)) {
                if m.team2.as_ref() != Some(team) {
                    m.team2 = Some(team.clone());
                    changed += 1;
                }
            }
        }
    }
    if changed > 0 {
        log::info!("Advanced {} team(s) in tournament '{}'", changed, tournament.name);
    }
    changed
}
