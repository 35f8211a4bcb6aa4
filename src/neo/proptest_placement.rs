//! Property-based tests for marker placement and planet orbits using proptest.

use proptest::prelude::*;

use super::placement::{marker_position, orbit_radius, point_on_orbit};
use crate::animation::orbit_position;
use crate::test_utils::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every marker lies on its orbit circle in the XZ plane.
    #[test]
    fn prop_marker_on_orbit_circle(
        axis in 0.01f64..50.0,
        seed in any::<u64>(),
    ) {
        let radius = orbit_radius(axis);
        let pos = marker_position(radius, &mut fixtures::seeded_rng(seed));

        prop_assert_eq!(pos.y, 0.0);
        let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
        prop_assert!(
            (r - radius).abs() <= radius * 1e-12,
            "marker at distance {} from the Sun, expected {}", r, radius
        );
    }

    /// Placement is the closed-form point for the drawn angle.
    #[test]
    fn prop_point_on_orbit_matches_formula(
        radius in 0.0f64..5000.0,
        angle in 0.0f64..std::f64::consts::TAU,
    ) {
        let pos = point_on_orbit(radius, angle);
        prop_assert_eq!(pos.x, angle.cos() * radius);
        prop_assert_eq!(pos.z, angle.sin() * radius);
    }

    /// Planet positions keep their orbit distance for any wall-clock time.
    #[test]
    fn prop_planet_stays_on_orbit(
        t_ms in 0.0f64..2.0e12,
        index in 0usize..8,
        distance in 1.0f64..300.0,
    ) {
        let pos = orbit_position(t_ms, index, distance);
        prop_assert_eq!(pos.y, 0.0);
        let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
        prop_assert!((r - distance).abs() < 1e-9 * distance);
    }

    /// Same time and index always give the same bits.
    #[test]
    fn prop_planet_position_idempotent(
        t_ms in 0.0f64..2.0e12,
        index in 0usize..8,
        distance in 1.0f64..300.0,
    ) {
        let a = orbit_position(t_ms, index, distance);
        let b = orbit_position(t_ms, index, distance);
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.z.to_bits(), b.z.to_bits());
    }
}
