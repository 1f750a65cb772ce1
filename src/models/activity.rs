// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Point-earning activity model for storage.

use crate::time_utils::rfc3339_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Kind of interaction that earned points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityKind {
    Visit,
    Purchase,
    /// Likes are stored as reviews
    #[serde(alias = "like")]
    Review,
    Share,
    Referral,
}

/// Stored activity record, one per award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Unique id, ordered by creation time (UUID v7)
    pub id: String,
    /// Owning user id
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Related business, if the award came from a business interaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    /// Points awarded
    pub points: u32,
    pub description: String,
    #[serde(with = "rfc3339_millis")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
}

/// What happened, minus the point value, owner, id and time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub business_id: Option<String>,
    pub description: String,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            business_id: None,
            description: description.into(),
        }
    }

    pub fn with_business(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = Some(business_id.into());
        self
    }

    /// Stamp the event into a stored activity.
    pub fn into_activity(self, user_id: &str, points: u32, timestamp: DateTime<Utc>) -> Activity {
        Activity {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            kind: self.kind,
            business_id: self.business_id,
            points,
            description: self.description,
            timestamp,
        }
    }
}
