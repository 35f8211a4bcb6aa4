//! Marker placement: one random point on a circle per record.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use rand::Rng;

use super::feed::{NearEarthObjectRecord, NeoFeed};
use crate::types::NEO_ORBIT_SCALE;

/// Scene-space orbit radius for a semi-major axis in AU.
pub fn orbit_radius(semi_major_axis: f64) -> f64 {
    semi_major_axis * NEO_ORBIT_SCALE
}

/// Orbit radius for a record, applying the missing-value default.
pub fn record_orbit_radius(record: &NearEarthObjectRecord) -> f64 {
    orbit_radius(record.effective_semi_major_axis())
}

/// Point on the XZ circle of `radius` at `angle` radians.
pub fn point_on_orbit(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Random point on the XZ circle of `radius`, with the angle uniform in
/// `[0, 2π)`.
pub fn marker_position(radius: f64, rng: &mut impl Rng) -> DVec3 {
    let angle = rng.gen_range(0.0..TAU);
    point_on_orbit(radius, angle)
}

/// A marker ready to spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPlacement {
    pub orbit_radius: f64,
    pub position: DVec3,
}

/// Placements for a whole feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementBatch {
    pub markers: Vec<MarkerPlacement>,
    /// Records whose position came out non-finite and were dropped.
    pub skipped: usize,
}

/// Place every record in the feed, dates ascending.
///
/// One angle is drawn per record, including skipped ones, so the random
/// sequence does not depend on which records are malformed.
pub fn place_feed(feed: &NeoFeed, rng: &mut impl Rng) -> PlacementBatch {
    let mut batch = PlacementBatch::default();
    for record in feed.records() {
        let radius = record_orbit_radius(record);
        let position = marker_position(radius, rng);
        if position.is_finite() {
            batch.markers.push(MarkerPlacement {
                orbit_radius: radius,
                position,
            });
        } else {
            batch.skipped += 1;
        }
    }
    batch
}
