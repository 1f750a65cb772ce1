//! User and badge models for storage.

use crate::models::{Coordinate, GameLevel};
use crate::time_utils::{format_badge_date, rfc3339_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Icon token shown for level-up badges.
pub const LEVEL_BADGE_ICON: &str = "🏆";

/// User profile stored under the `communityUser` key.
///
/// `level` is always the level resolved from `points`; see
/// [`crate::services::levels::LevelTable::level_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Opaque identifier (UUID v7)
    pub id: String,
    /// Display name
    pub name: String,
    pub email: String,
    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Cumulative points
    pub points: u32,
    /// Derived level number (>= 1)
    pub level: u32,
    /// Earned badges in the order they were minted
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// When the user registered
    #[serde(with = "rfc3339_millis")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub joined_at: DateTime<Utc>,
    /// Last known position, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

impl User {
    /// A fresh level-1 user with no points.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        location: Option<Coordinate>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            points: 0,
            level: 1,
            badges: Vec::new(),
            joined_at,
            location,
        }
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b.id == badge_id)
    }
}

/// Achievement record. Never mutated after it is minted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(with = "rfc3339_millis")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub earned_at: DateTime<Utc>,
}

impl Badge {
    /// Stable id of the badge minted on reaching `level`.
    pub fn level_badge_id(level: u32) -> String {
        format!("level-{}", level)
    }

    /// Badge minted when a user reaches `level`.
    pub fn for_level(level: &GameLevel, earned_at: DateTime<Utc>) -> Self {
        Self {
            id: Self::level_badge_id(level.level),
            name: format!("Nível {}", level.name),
            description: format!("Alcançou o nível {}", level.name),
            icon: LEVEL_BADGE_ICON.to_string(),
            earned_at,
        }
    }

    /// Date label shown under the badge.
    pub fn earned_on(&self) -> String {
        format_badge_date(self.earned_at)
    }
}
