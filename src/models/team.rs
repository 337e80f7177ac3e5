//! Teams of two players, their derived league stats, and the name/colour pools.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Team identifier, unique only within one tournament.
pub type TeamId = String;

/// Id of the synthetic opponent filling an odd knockout pairing.
pub const KNOCKOUT_BYE_ID: &str = "bye";
/// Id of the synthetic team padding an odd league to an even size.
pub const LEAGUE_BYE_ID: &str = "team-bye";

/// Names handed out to generated teams.
pub const TEAM_NAMES: [&str; 16] = [
    "Net Ninjas",
    "Lob Stars",
    "Smash Brothers",
    "Volley Llamas",
    "Bandeja Bandits",
    "Glass Walkers",
    "Vibora Vipers",
    "Drop Shot Crew",
    "Court Jesters",
    "Wall Bouncers",
    "Chiquita Kings",
    "Padel Pirates",
    "Rally Raptors",
    "Topspin Titans",
    "Baseline Bosses",
    "Golden Points",
];

/// Team colours, assigned by team index.
pub const TEAM_COLORS: [&str; 10] = [
    "#e53935", "#1e88e5", "#43a047", "#fb8c00", "#8e24aa", "#00acc1", "#fdd835", "#6d4c41",
    "#d81b60", "#3949ab",
];

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: String,
    /// Two players for real teams (second may be the TBC placeholder), none for byes.
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, color: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            players,
        }
    }

    /// Opponent for a knockout pairing with no second team. Never auto-advanced.
    pub fn knockout_bye() -> Self {
        Self::new(KNOCKOUT_BYE_ID, "BYE", "#9e9e9e", Vec::new())
    }

    /// Padding team for an odd league.
    pub fn league_bye() -> Self {
        Self::new(LEAGUE_BYE_ID, "BYE", "#9e9e9e", Vec::new())
    }

    pub fn is_bye(&self) -> bool {
        is_bye_id(&self.id)
    }
}

pub fn is_bye_id(id: &str) -> bool {
    id == KNOCKOUT_BYE_ID || id == LEAGUE_BYE_ID
}

/// Colour for the team at `index`.
pub fn team_color(index: usize) -> &'static str {
    TEAM_COLORS[index % TEAM_COLORS.len()]
}

/// League tallies for one team. Always recomputed from the matches, never stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStats {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    pub fn add_win(&mut self) {
        self.won += 1;
        self.points += 3;
    }

    pub fn add_loss(&mut self) {
        self.lost += 1;
    }

    pub fn add_draw(&mut self) {
        self.drawn += 1;
        self.points += 1;
    }
}

/// A team decorated with freshly computed stats (one row of the league table).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team: Team,
    pub stats: TeamStats,
}
