// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot position lookup with a bounded wait and a fixed fallback.

use crate::models::Coordinate;
use std::future::Future;
use std::time::Duration;

/// Position used whenever the provider cannot answer (São Paulo centre).
pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(-23.5505, -46.6333);

/// Default bound on the startup position lookup.
pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the device position.
pub trait GeolocationProvider {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, GeoError>> + Send;
}

/// Provider that reports a configured position, or nothing at all.
#[derive(Debug, Clone, Default)]
pub struct StaticGeolocation {
    position: Option<Coordinate>,
}

impl StaticGeolocation {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

impl GeolocationProvider for StaticGeolocation {
    async fn current_position(&self) -> Result<Coordinate, GeoError> {
        self.position
            .ok_or_else(|| GeoError::Unavailable("no position configured".to_string()))
    }
}

/// Ask the provider for a position, giving up after `timeout`.
pub async fn get_current_position<P: GeolocationProvider>(
    provider: &P,
    timeout: Duration,
) -> Result<Coordinate, GeoError> {
    tokio::time::timeout(timeout, provider.current_position())
        .await
        .map_err(|_| GeoError::Timeout(timeout))?
}

/// Resolve the position, substituting [`DEFAULT_LOCATION`] on any failure.
pub async fn locate_or_default<P: GeolocationProvider>(
    provider: &P,
    timeout: Duration,
) -> Coordinate {
    match get_current_position(provider, timeout).await {
        Ok(position) => {
            tracing::debug!(lat = position.lat, lng = position.lng, "Position resolved");
            position
        }
        Err(e) => {
            tracing::warn!(error = %e, "Geolocation failed, using default location");
            DEFAULT_LOCATION
        }
    }
}

/// Errors from position lookups.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    #[error("Geolocation timed out after {0:?}")]
    Timeout(Duration),
}
