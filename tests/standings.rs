//! Integration tests for league standings, completion, and champion resolution.

use padel_tournament_web::{
    build_league_rounds, compute_standings, match_progress, resolve_champion, standings_csv,
    tournament_status, view_tournament, ChampionStatus, GameMatch, Player, Round, Team,
    TournamentData, TournamentFormat, TournamentStatus, Winner,
};

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

fn league(n: usize) -> TournamentData {
    let teams = teams(n);
    TournamentData {
        name: "League".to_string(),
        format: TournamentFormat::League,
        rounds: build_league_rounds(&teams),
        teams,
        created_at: chrono::Utc::now(),
        created_by: "admin".to_string(),
    }
}

/// Decide a match so that the team with the lower index in `teams` wins.
fn decide_by_rank(m: &mut GameMatch) {
    let rank = |t: &Option<Team>| {
        t.as_ref()
            .and_then(|t| t.id.strip_prefix("team-"))
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(u32::MAX)
    };
    m.winner = Some(if rank(&m.team1) < rank(&m.team2) {
        Winner::Team1
    } else {
        Winner::Team2
    });
    m.completed = true;
}

fn played(team1: &Team, team2: &Team, score1: u32, score2: u32) -> GameMatch {
    let mut m = GameMatch::new(Some(team1.clone()), Some(team2.clone()));
    m.score1 = Some(score1);
    m.score2 = Some(score2);
    m.completed = true;
    m
}

#[test]
fn full_league_ranks_by_points_and_crowns_champion() {
    let mut t = league(4);
    for m in t.rounds.iter_mut().flat_map(|r| r.matches.iter_mut()) {
        decide_by_rank(m);
    }

    let standings = compute_standings(&t.teams, &t.rounds);
    let order: Vec<_> = standings.iter().map(|s| s.team.id.as_str()).collect();
    assert_eq!(order, ["team-1", "team-2", "team-3", "team-4"]);
    assert_eq!(standings[0].stats.won, 3);
    assert_eq!(standings[0].stats.points, 9);
    assert_eq!(standings[1].stats.won, 2);
    assert_eq!(standings[1].stats.lost, 1);
    assert_eq!(standings[1].stats.points, 6);
    assert!(standings.iter().all(|s| s.stats.played == 3));

    assert!(match_progress(&t.rounds).is_finished());
    assert_eq!(
        resolve_champion(&t, &standings),
        ChampionStatus::Champion(t.teams[0].clone())
    );
    assert_eq!(tournament_status(&t), TournamentStatus::Completed);
}

#[test]
fn partial_league_reports_leader_not_champion() {
    let mut t = league(4);
    assert_eq!(tournament_status(&t), TournamentStatus::Created);
    assert_eq!(resolve_champion(&t, &compute_standings(&t.teams, &t.rounds)), ChampionStatus::Undecided);

    decide_by_rank(&mut t.rounds[0].matches[0]);
    let standings = compute_standings(&t.teams, &t.rounds);
    let status = resolve_champion(&t, &standings);
    assert!(matches!(status, ChampionStatus::Leader(_)));
    assert_eq!(status.champion(), None);
    assert_eq!(tournament_status(&t), TournamentStatus::InProgress);
}

#[test]
fn draws_give_a_point_each() {
    let teams = teams(2);
    let rounds = vec![Round::new("Round 1", vec![played(&teams[0], &teams[1], 4, 4)])];
    let standings = compute_standings(&teams, &rounds);
    for s in &standings {
        assert_eq!(s.stats.played, 1);
        assert_eq!(s.stats.drawn, 1);
        assert_eq!(s.stats.points, 1);
        assert_eq!(s.stats.goals_for, 4);
        assert_eq!(s.stats.goals_against, 4);
    }
}

#[test]
fn explicit_draw_winner_counts_as_draw() {
    let teams = teams(2);
    let mut m = GameMatch::new(Some(teams[0].clone()), Some(teams[1].clone()));
    m.winner = Some(Winner::Draw);
    m.completed = true;
    let standings = compute_standings(&teams, &[Round::new("Round 1", vec![m])]);
    assert!(standings.iter().all(|s| s.stats.drawn == 1 && s.stats.points == 1));
}

#[test]
fn ties_broken_by_goal_difference_then_goals_for() {
    let t = teams(4);
    let rounds = vec![Round::new(
        "Round 1",
        vec![
            played(&t[0], &t[1], 6, 4),
            played(&t[2], &t[3], 6, 1),
        ],
    )];
    let standings = compute_standings(&t, &rounds);
    let order: Vec<_> = standings.iter().map(|s| s.team.id.as_str()).collect();
    assert_eq!(order, ["team-3", "team-1", "team-2", "team-4"]);

    let rounds = vec![Round::new(
        "Round 1",
        vec![
            played(&t[0], &t[1], 6, 4),
            played(&t[2], &t[3], 7, 5),
        ],
    )];
    let standings = compute_standings(&t, &rounds);
    assert_eq!(standings[0].team.id, "team-3");
    assert_eq!(standings[1].team.id, "team-1");
}

#[test]
fn undecided_and_incomplete_matches_are_ignored() {
    let t = teams(2);
    let mut scored_only = GameMatch::new(Some(t[0].clone()), Some(t[1].clone()));
    scored_only.score1 = Some(6);
    scored_only.score2 = Some(2);

    let mut completed_without_result = GameMatch::new(Some(t[0].clone()), Some(t[1].clone()));
    completed_without_result.completed = true;

    let rounds = vec![Round::new("Round 1", vec![scored_only, completed_without_result])];
    let standings = compute_standings(&t, &rounds);
    assert!(standings.iter().all(|s| s.stats == Default::default()));
    assert_eq!(match_progress(&rounds).completed, 0);
    assert_eq!(match_progress(&rounds).total, 2);
}

#[test]
fn unknown_teams_and_byes_are_skipped() {
    let t = teams(3);
    let stranger = Team::new("team-99", "Stranger", "#ffffff", Vec::new());
    let rounds = vec![Round::new(
        "Round 1",
        vec![
            played(&t[0], &stranger, 6, 0),
            played(&t[1], &Team::league_bye(), 6, 0),
        ],
    )];
    let standings = compute_standings(&t, &rounds);
    assert_eq!(standings.len(), 3);
    assert!(standings.iter().all(|s| s.stats.played == 0));
}

#[test]
fn odd_league_finishes_without_bye_matches() {
    let mut t = league(3);
    for m in t.rounds.iter_mut().flat_map(|r| r.matches.iter_mut()) {
        if !m.involves_bye() {
            decide_by_rank(m);
        }
    }
    let progress = match_progress(&t.rounds);
    assert_eq!(progress.total, 3);
    assert!(progress.is_finished());

    let view = view_tournament(&t);
    assert_eq!(view.status, TournamentStatus::Completed);
    assert_eq!(view.standings.len(), 3);
    assert!(view.standings.iter().all(|s| s.stats.played == 2));
    assert_eq!(view.champion, ChampionStatus::Champion(t.teams[0].clone()));
}

#[test]
fn standings_are_deterministic_and_champion_is_stable() {
    let mut t = league(6);
    for m in t.rounds.iter_mut().flat_map(|r| r.matches.iter_mut()) {
        m.score1 = Some(6);
        m.score2 = Some(3);
        m.completed = true;
    }
    let first = compute_standings(&t.teams, &t.rounds);
    let second = compute_standings(&t.teams, &t.rounds);
    assert_eq!(first, second);

    let champion = resolve_champion(&t, &first);
    assert!(champion.champion().is_some());
    for _ in 0..3 {
        assert_eq!(view_tournament(&t).champion, champion);
    }
}

#[test]
fn csv_export_lists_table_in_order() {
    let t = teams(2);
    let rounds = vec![Round::new("Round 1", vec![played(&t[0], &t[1], 2, 6)])];
    let csv = standings_csv(&compute_standings(&t, &rounds)).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "position,team,played,won,drawn,lost,goals_for,goals_against,goal_difference,points"
    );
    assert_eq!(lines[1], "1,T2,1,1,0,0,6,2,4,3");
    assert_eq!(lines[2], "2,T1,1,0,0,1,2,6,-4,0");
}

#[test]
fn huge_scores_saturate_instead_of_overflowing() {
    let t = teams(2);
    let rounds = vec![Round::new(
        "Round 1",
        vec![
            played(&t[0], &t[1], u32::MAX, 0),
            played(&t[0], &t[1], u32::MAX, 1),
        ],
    )];
    let standings = compute_standings(&t, &rounds);
    let top = &standings[0];
    assert_eq!(top.team.id, "team-1");
    assert_eq!(top.stats.goals_for, u32::MAX);
    assert_eq!(top.stats.played, 2);
    assert_eq!(standings[1].stats.goals_against, u32::MAX);
    assert_eq!(standings[1].stats.goals_for, 1);
}
