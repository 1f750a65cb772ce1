// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod business;
pub mod coordinate;
pub mod level;
pub mod user;

pub use activity::{Activity, ActivityEvent, ActivityKind};
pub use business::{Business, Offer};
pub use coordinate::Coordinate;
pub use level::GameLevel;
pub use user::{Badge, User};
