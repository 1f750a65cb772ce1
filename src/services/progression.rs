// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Points, levels and level-up badges.
//!
//! Awarding points:
//! 1. Add the delta to the user's total
//! 2. Resolve the level for the new total
//! 3. Mint the level badge if the level went up (once per level)
//! 4. Record the activity
//! 5. Persist user and activity in one store write

use crate::db::SessionStore;
use crate::error::Result;
use crate::models::{Activity, ActivityEvent, ActivityKind, Badge, Business, User};
use crate::services::levels::LevelTable;
use crate::time_utils::now_millis;
use chrono::{DateTime, Utc};

/// Outcome of one award.
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    pub user: User,
    pub activity: Activity,
    /// Badge minted by this award, if the user levelled up
    pub badge: Option<Badge>,
}

impl Progression {
    pub fn leveled_up(&self) -> bool {
        self.badge.is_some()
    }
}

/// Compute the result of awarding `points` to `user`. Pure; nothing is stored.
pub fn advance(
    levels: &LevelTable,
    user: &User,
    points: u32,
    event: ActivityEvent,
    now: DateTime<Utc>,
) -> Progression {
    let new_points = user.points.saturating_add(points);
    let new_level = levels.level_for(new_points);

    let mut updated = user.clone();
    let mut badge = None;

    if new_level.level > user.level {
        let minted = Badge::for_level(new_level, now);
        // A level is only ever rewarded once.
        if !updated.has_badge(&minted.id) {
            updated.badges.push(minted.clone());
            badge = Some(minted);
        }
    }

    updated.points = new_points;
    updated.level = new_level.level;

    let activity = event.into_activity(&user.id, points, now);

    Progression {
        user: updated,
        activity,
        badge,
    }
}

/// Applies awards and persists them.
pub struct ProgressionEngine<S> {
    store: S,
    levels: LevelTable,
}

impl<S: SessionStore> ProgressionEngine<S> {
    /// Engine using the standard level table.
    pub fn new(store: S) -> Self {
        Self::with_levels(store, LevelTable::standard().clone())
    }

    pub fn with_levels(store: S, levels: LevelTable) -> Self {
        Self { store, levels }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Award `points` for `event` and store the result.
    ///
    /// The point value always comes from `points`, never from the event.
    pub fn award_points(
        &self,
        user: &User,
        points: u32,
        event: ActivityEvent,
    ) -> Result<Progression> {
        let progression = advance(&self.levels, user, points, event, now_millis());

        self.store
            .apply_progression(&progression.user, &progression.activity)?;

        log_award(&progression, points);
        Ok(progression)
    }

    /// Award the first points to a newly created `user`.
    ///
    /// Whatever the store held before is replaced in the same write.
    pub fn start(&self, user: &User, points: u32, event: ActivityEvent) -> Result<Progression> {
        let progression = advance(&self.levels, user, points, event, now_millis());

        self.store
            .start_session(&progression.user, &progression.activity)?;

        log_award(&progression, points);
        Ok(progression)
    }
}

fn log_award(progression: &Progression, awarded: u32) {
    let user = &progression.user;
    if let Some(badge) = &progression.badge {
        tracing::info!(
            user_id = %user.id,
            points = user.points,
            level = user.level,
            badge = %badge.id,
            "Level up"
        );
    } else {
        tracing::debug!(
            user_id = %user.id,
            awarded,
            points = user.points,
            "Points awarded"
        );
    }
}

/// Ways a user can interact with a business card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Visit,
    Like,
    Share,
}

impl Interaction {
    /// Points earned for the interaction.
    pub fn points(self) -> u32 {
        match self {
            Interaction::Visit => 20,
            Interaction::Like => 5,
            Interaction::Share => 10,
        }
    }

    /// Activity kind recorded in the ledger.
    pub fn activity_kind(self) -> ActivityKind {
        match self {
            Interaction::Visit => ActivityKind::Visit,
            Interaction::Like => ActivityKind::Review,
            Interaction::Share => ActivityKind::Share,
        }
    }

    /// Ledger event for interacting with `business`.
    pub fn event_for(self, business: &Business) -> ActivityEvent {
        let description = match self {
            Interaction::Visit => format!("Visitou {}", business.name),
            Interaction::Like => format!("Curtiu {}", business.name),
            Interaction::Share => format!("Compartilhou {}", business.name),
        };
        ActivityEvent::new(self.activity_kind(), description).with_business(business.id.clone())
    }
}
