use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A third-party gaming service account linked to a profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamingAccount {
    pub platform: String,
    pub account_id: String,
}

impl GamingAccount {
    pub fn new(platform: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            account_id: account_id.into(),
        }
    }

    /// Glyph shown next to the platform name
    pub fn icon(&self) -> &'static str {
        if self.platform == "Steam" {
            "🎮"
        } else {
            "🎯"
        }
    }
}

/// A named, dated badge earned by the profile owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Unique within a profile, used as the render key
    pub id: String,
    pub name: String,
    pub description: String,
    /// Calendar date as delivered by the profile source (e.g. "2024-03-15")
    pub earned_date: String,
}

/// Gaming profile keyed to a wallet address
///
/// Read-only on the page: built fresh on every successful fetch and dropped when
/// the connected address changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamingProfile {
    pub username: String,
    pub bio: String,
    #[serde(default)]
    pub gaming_accounts: Vec<GamingAccount>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub reputation: i64,
}

impl GamingProfile {
    /// Returns the first achievement id that appears more than once
    pub fn duplicate_achievement_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.achievements
            .iter()
            .map(|a| a.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    pub fn reputation_label(&self) -> String {
        format!("Reputation: {}", self.reputation)
    }

    pub fn achievement_count_label(&self) -> String {
        format!("{} Achievements", self.achievements.len())
    }
}
