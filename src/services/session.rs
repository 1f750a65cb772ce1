// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local session lifecycle: bootstrap, register, login, logout.
//!
//! There is no credential store. Passwords are accepted for presence only
//! and login succeeds when the email matches the one persisted user.

use crate::db::SessionStore;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityEvent, ActivityKind, Business, Coordinate, User};
use crate::services::levels::{LevelProgress, LevelTable};
use crate::services::progression::{Interaction, Progression, ProgressionEngine};
use crate::time_utils::now_millis;
use validator::Validate;

/// Points granted on registration.
pub const WELCOME_BONUS: u32 = 50;

/// Ledger description of the registration bonus.
pub const WELCOME_DESCRIPTION: &str = "Boas-vindas à Comunidade Local Ativa!";

/// Registration form input.
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Required but never checked or stored.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub location: Option<Coordinate>,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }
}

/// State restored at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: User,
    /// Stored activities, newest first
    pub activities: Vec<Activity>,
}

/// The single local session.
pub struct Session<S> {
    engine: ProgressionEngine<S>,
    current: Option<User>,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_engine(ProgressionEngine::new(store))
    }

    pub fn with_engine(engine: ProgressionEngine<S>) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    pub fn store(&self) -> &S {
        self.engine.store()
    }

    pub fn levels(&self) -> &LevelTable {
        self.engine.levels()
    }

    /// Signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Restore the persisted user and their activities.
    ///
    /// `None` means the caller has to register or log in.
    pub fn bootstrap(&mut self) -> Result<Option<SessionSnapshot>> {
        let Some(user) = self.store().load_user()? else {
            tracing::info!("No stored session");
            self.current = None;
            return Ok(None);
        };

        let activities = self.store().load_activities()?;
        tracing::info!(
            user_id = %user.id,
            points = user.points,
            activities = activities.len(),
            "Session restored"
        );

        self.current = Some(user.clone());
        Ok(Some(SessionSnapshot { user, activities }))
    }

    /// Create the local user and grant the welcome bonus.
    ///
    /// Any previously stored user and their activities are replaced in the
    /// same write that stores the new user.
    pub fn register(&mut self, registration: Registration) -> Result<User> {
        registration.validate()?;

        if let Some(previous) = self.store().load_user()? {
            tracing::warn!(
                previous_user_id = %previous.id,
                "Registering over an existing local user"
            );
        }

        let user = User::new(
            registration.name,
            registration.email,
            registration.location,
            now_millis(),
        );
        tracing::info!(user_id = %user.id, "Registering user");

        let welcome = ActivityEvent::new(ActivityKind::Referral, WELCOME_DESCRIPTION);
        let progression = self.engine.start(&user, WELCOME_BONUS, welcome)?;

        self.current = Some(progression.user.clone());
        Ok(progression.user)
    }

    /// Sign in as the stored user. The password is not checked.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<User> {
        match self.store().load_user()? {
            Some(user) if user.email == email => {
                tracing::info!(user_id = %user.id, "Logged in");
                self.current = Some(user.clone());
                Ok(user)
            }
            Some(_) => {
                tracing::warn!("Login email does not match the stored user");
                Err(AppError::AuthMismatch)
            }
            None => {
                tracing::warn!("Login attempted with no stored user");
                Err(AppError::AuthMismatch)
            }
        }
    }

    /// Drop the stored user and activities. Irreversible.
    pub fn logout(&mut self) -> Result<()> {
        self.store().clear_all()?;
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        Ok(())
    }

    /// Award points to the signed-in user.
    pub fn award_points(&mut self, points: u32, event: ActivityEvent) -> Result<Progression> {
        let user = self.current.as_ref().ok_or(AppError::NoSession)?;
        let progression = self.engine.award_points(user, points, event)?;
        self.current = Some(progression.user.clone());
        Ok(progression)
    }

    /// Visit, like or share a business.
    pub fn interact(
        &mut self,
        business: &Business,
        interaction: Interaction,
    ) -> Result<Progression> {
        self.award_points(interaction.points(), interaction.event_for(business))
    }

    /// Fresh read of the ledger, newest first.
    pub fn activities(&self) -> Result<Vec<Activity>> {
        self.store().load_activities()
    }

    /// Level standing of the signed-in user.
    pub fn progress(&self) -> Result<LevelProgress> {
        let user = self.current.as_ref().ok_or(AppError::NoSession)?;
        Ok(self.levels().progress(user.points))
    }
}
