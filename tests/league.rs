//! Integration tests for the round-robin league schedule.

use padel_tournament_web::{build_league_rounds, match_progress, Player, Team};
use std::collections::{HashMap, HashSet};

fn teams(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| {
            Team::new(
                format!("team-{}", i + 1),
                format!("T{}", i + 1),
                "#000000",
                vec![Player::new(format!("a{i}"), "A"), Player::new(format!("b{i}"), "B")],
            )
        })
        .collect()
}

#[test]
fn four_teams_three_rounds_of_two() {
    let rounds = build_league_rounds(&teams(4));
    assert_eq!(rounds.len(), 3);
    let mut appearances: HashMap<String, usize> = HashMap::new();
    for (r, round) in rounds.iter().enumerate() {
        assert_eq!(round.name, format!("Round {}", r + 1));
        assert_eq!(round.matches.len(), 2);
        for m in &round.matches {
            for t in [&m.team1, &m.team2].into_iter().flatten() {
                *appearances.entry(t.id.clone()).or_default() += 1;
            }
        }
    }
    assert_eq!(appearances.len(), 4);
    assert!(appearances.values().all(|&n| n == 3));
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=12 {
        let rounds = build_league_rounds(&teams(n));
        let padded = n + n % 2;
        assert_eq!(rounds.len(), padded - 1, "n = {n}");

        let mut pairs: HashMap<(String, String), usize> = HashMap::new();
        for round in &rounds {
            assert_eq!(round.matches.len(), padded / 2);
            let mut in_round = HashSet::new();
            for m in &round.matches {
                let a = m.team1.as_ref().unwrap();
                let b = m.team2.as_ref().unwrap();
                assert_ne!(a.id, b.id);
                assert!(in_round.insert(a.id.clone()), "n = {n}: {} twice in a round", a.id);
                assert!(in_round.insert(b.id.clone()), "n = {n}: {} twice in a round", b.id);
                if a.is_bye() || b.is_bye() {
                    continue;
                }
                let key = if a.id < b.id {
                    (a.id.clone(), b.id.clone())
                } else {
                    (b.id.clone(), a.id.clone())
                };
                *pairs.entry(key).or_default() += 1;
            }
        }
        assert_eq!(pairs.len(), n * (n - 1) / 2, "n = {n}");
        assert!(pairs.values().all(|&count| count == 1));
    }
}

#[test]
fn odd_league_pads_with_bye_team() {
    let rounds = build_league_rounds(&teams(5));
    assert_eq!(rounds.len(), 5);
    let bye_matches = rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .filter(|m| m.involves_bye())
        .count();
    assert_eq!(bye_matches, 5);
    for round in &rounds {
        assert_eq!(round.matches.iter().filter(|m| m.involves_bye()).count(), 1);
    }

    let progress = match_progress(&rounds);
    assert_eq!(progress.total, 10);
    assert_eq!(progress.completed, 0);
    assert!(!progress.is_finished());
}

#[test]
fn fewer_than_two_teams_has_no_schedule() {
    assert!(build_league_rounds(&[]).is_empty());
    assert!(build_league_rounds(&teams(1)).is_empty());
}
