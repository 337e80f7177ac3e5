//! League schedule: round robin by the circle method.

use crate::models::{GameMatch, Round, Team};

/// Build a round-robin schedule where every team meets every other team once.
///
/// An odd team count is padded with a BYE team; its matches are real matches and
/// are skipped by the standings. The first team stays fixed while the rest rotate
/// one seat per round.
pub fn build_league_rounds(teams: &[Team]) -> Vec<Round> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut padded = teams.to_vec();
    if padded.len() % 2 == 1 {
        padded.push(Team::league_bye());
    }
    let fixed = &padded[0];
    let rest = &padded[1..];
    let len = rest.len();
    let num_rounds = padded.len() - 1;
    let matches_per_round = padded.len() / 2;

    (0..num_rounds)
        .map(|round| {
            let mut matches = Vec::with_capacity(matches_per_round);
            matches.push(GameMatch::new(
                Some(fixed.clone()),
                Some(rest[round % len].clone()),
            ));
            for k in 1..matches_per_round {
                let home = &rest[(round + k) % len];
                let away = &rest[(round + len - k) % len];
                matches.push(GameMatch::new(Some(home.clone()), Some(away.clone())));
            }
            Round::new(format!("Round {}", round + 1), matches)
        })
        .collect()
}
