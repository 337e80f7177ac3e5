//! Team partitioning: shuffle the players and pair them up.

use crate::models::{team_color, Player, Team, TEAM_NAMES};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split players into teams of two.
///
/// 1. Shuffle the players with `rng`.
/// 2. Take consecutive pairs; an odd last player is paired with the TBC placeholder.
/// 3. Ids are `team-1`, `team-2`, ...; colours follow the index, names come from
///    the shuffled name pool and fall back to `Team n` once it runs out.
pub fn partition_teams<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Vec<Team> {
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let mut names = TEAM_NAMES.to_vec();
    names.shuffle(rng);

    shuffled
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let second = pair.get(1).cloned().unwrap_or_else(Player::tbc);
            let name = names
                .get(i)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Team {}", i + 1));
            Team::new(
                format!("team-{}", i + 1),
                name,
                team_color(i),
                vec![pair[0].clone(), second],
            )
        })
        .collect()
}
