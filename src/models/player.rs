//! Player references and the user profiles they are resolved from.

use serde::{Deserialize, Serialize};

/// Identifier of a user in the profile store.
pub type PlayerId = String;

/// Id of the placeholder that fills the empty seat of an odd team.
pub const TBC_PLAYER_ID: &str = "tbc";

/// A player as embedded in a team. Snapshotted at conversion time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    /// Placeholder for the second seat of a team with only one real member.
    pub fn tbc() -> Self {
        Self::new(TBC_PLAYER_ID, "TBC")
    }

    /// A player whose profile could not be found.
    pub fn unknown(id: impl Into<PlayerId>) -> Self {
        Self::new(id, "Unknown Player")
    }

    pub fn is_tbc(&self) -> bool {
        self.id == TBC_PLAYER_ID
    }
}

/// A user profile as stored in the users collection. Every name field is optional.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl PlayerProfile {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Name shown for this user: first + last name, then display name,
    /// then the local part of the email, then "TBC".
    pub fn resolved_name(&self) -> String {
        match (non_blank(&self.first_name), non_blank(&self.last_name)) {
            (Some(first), Some(last)) => return format!("{first} {last}"),
            (Some(only), None) | (None, Some(only)) => return only.to_string(),
            (None, None) => {}
        }
        if let Some(display) = non_blank(&self.display_name) {
            return display.to_string();
        }
        if let Some(local) = non_blank(&self.email)
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
        {
            return local.to_string();
        }
        "TBC".to_string()
    }

    /// Snapshot of this profile as a team member.
    pub fn to_player(&self) -> Player {
        Player {
            id: self.id.clone(),
            name: self.resolved_name(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
