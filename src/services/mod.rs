// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod geo;
pub mod geolocation;
pub mod ledger;
pub mod levels;
pub mod progression;
pub mod session;

pub use catalog::{BusinessCatalog, CatalogError, NearbyBusiness};
pub use geo::distance_km;
pub use geolocation::{GeoError, GeolocationProvider, StaticGeolocation};
pub use ledger::ActivityLedger;
pub use levels::{LevelProgress, LevelTable};
pub use progression::{Interaction, Progression, ProgressionEngine};
pub use session::{Registration, Session, SessionSnapshot};
