// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance between coordinates.

use crate::models::Coordinate;
use geo::{Distance, HaversineMeasure, Point};

/// Mean Earth radius used for distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0);

/// Haversine distance in kilometers.
///
/// Symmetric, never negative, and zero for coincident points.
/// Inputs are not range-checked.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let km = EARTH.distance(Point::from(a), Point::from(b)) / 1000.0;
    // Rounding can push the haversine term past 1 for antipodal points.
    if km.is_nan() && [a.lat, a.lng, b.lat, b.lng].iter().all(|v| v.is_finite()) {
        return EARTH_RADIUS_KM * std::f64::consts::PI;
    }
    km
}

/// Distance label shown next to a business address, e.g. `1.2km`.
pub fn format_distance(km: f64) -> String {
    format!("{:.1}km", km)
}
