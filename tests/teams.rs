//! Integration tests for team partitioning and player name resolution.

use padel_tournament_web::{partition_teams, Player, PlayerProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn players(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("u{i}"), format!("P{i}"))).collect()
}

#[test]
fn partition_pairs_every_player_once() {
    for n in 0..=11 {
        let input = players(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let teams = partition_teams(&input, &mut rng);

        assert_eq!(teams.len(), (n + 1) / 2, "team count for {n} players");
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (i, team) in teams.iter().enumerate() {
            assert_eq!(team.players.len(), 2);
            assert_eq!(team.id, format!("team-{}", i + 1));
            let is_last = i + 1 == teams.len();
            assert_eq!(team.players[1].is_tbc(), n % 2 == 1 && is_last);
            assert!(!team.players[0].is_tbc());
            for p in team.players.iter().filter(|p| !p.is_tbc()) {
                *seen.entry(p.id.clone()).or_default() += 1;
            }
        }
        assert_eq!(seen.len(), n);
        assert!(seen.values().all(|&count| count == 1));
    }
}

#[test]
fn five_players_make_three_teams_with_tbc() {
    let mut rng = StdRng::seed_from_u64(5);
    let teams = partition_teams(&players(5), &mut rng);
    assert_eq!(teams.len(), 3);
    assert_eq!(teams[2].players[1], Player::tbc());
    assert_eq!(teams[2].players[1].name, "TBC");
}

#[test]
fn same_seed_gives_same_teams() {
    let input = players(8);
    let a = partition_teams(&input, &mut StdRng::seed_from_u64(42));
    let b = partition_teams(&input, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn teams_get_distinct_names_and_indexed_colors() {
    let teams = partition_teams(&players(12), &mut StdRng::seed_from_u64(1));
    let mut names: Vec<_> = teams.iter().map(|t| t.name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), teams.len());
    assert_eq!(teams[0].color, padel_tournament_web::models::TEAM_COLORS[0]);
    assert_eq!(teams[1].color, padel_tournament_web::models::TEAM_COLORS[1]);
}

#[test]
fn name_pool_overflow_falls_back_to_numbered_names() {
    let teams = partition_teams(&players(40), &mut StdRng::seed_from_u64(3));
    assert_eq!(teams.len(), 20);
    assert_eq!(teams[19].name, "Team 20");
}

#[test]
fn empty_player_list_gives_no_teams() {
    let teams = partition_teams(&[], &mut StdRng::seed_from_u64(0));
    assert!(teams.is_empty());
}

#[test]
fn resolved_name_precedence() {
    let mut profile = PlayerProfile::new("u1");
    assert_eq!(profile.resolved_name(), "TBC");

    profile.email = Some("ana.garcia@example.com".to_string());
    assert_eq!(profile.resolved_name(), "ana.garcia");

    profile.display_name = Some("Ana G".to_string());
    assert_eq!(profile.resolved_name(), "Ana G");

    profile.first_name = Some("Ana".to_string());
    assert_eq!(profile.resolved_name(), "Ana");

    profile.last_name = Some("Garcia".to_string());
    assert_eq!(profile.resolved_name(), "Ana Garcia");
}

#[test]
fn blank_fields_are_ignored() {
    let profile = PlayerProfile {
        first_name: Some("  ".to_string()),
        display_name: Some(String::new()),
        email: Some("@example.com".to_string()),
        ..PlayerProfile::new("u2")
    };
    assert_eq!(profile.resolved_name(), "TBC");
}
