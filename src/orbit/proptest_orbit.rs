//! Property-based tests for orbit animation using proptest.
//!
//! These check that stepping keeps bodies on their circle and that angles
//! accumulate linearly, across the range of radii and speeds the scene uses.

use bevy::prelude::*;
use proptest::prelude::*;

use super::{initial_angle, position_on_orbit, OrbitState};
use crate::catalog::all_bodies;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The orbit radius drifts by no more than float noise.
    #[test]
    fn prop_radius_preserved(
        radius in 1.0f32..200.0,
        speed in 0.001f32..0.1,
        start in 0.0f32..std::f32::consts::TAU,
        ticks in 1usize..2000,
    ) {
        let mut orbit = OrbitState::new(start, speed);
        let mut pos = position_on_orbit(start, radius);
        let initial = Vec2::new(pos.x, pos.z).length();

        for _ in 0..ticks {
            pos = orbit.advance(pos);
        }

        let r = Vec2::new(pos.x, pos.z).length();
        prop_assert!(
            (r - initial).abs() <= initial * 1e-3,
            "radius drifted from {} to {} after {} ticks", initial, r, ticks
        );
        prop_assert_eq!(pos.y, 0.0);
    }

    /// After k ticks the angle is start + k * speed, without wrapping.
    #[test]
    fn prop_angle_accumulates(
        speed in 0.001f32..0.05,
        ticks in 0usize..1000,
    ) {
        let mut orbit = OrbitState::new(0.0, speed);
        let mut pos = position_on_orbit(0.0, 50.0);
        for _ in 0..ticks {
            pos = orbit.advance(pos);
        }

        let expected = ticks as f32 * speed;
        prop_assert!(
            (orbit.angle - expected).abs() <= 1e-4 * expected.max(1.0),
            "angle {} expected {}", orbit.angle, expected
        );
    }

    /// Catalog start positions sit on their configured distance.
    #[test]
    fn prop_catalog_start_positions(index in 0usize..9) {
        let body = &all_bodies()[index];
        let angle = initial_angle(index, all_bodies().len());
        let pos = position_on_orbit(angle, body.distance);

        prop_assert!((pos.x.hypot(pos.z) - body.distance).abs() < 1e-3);
        prop_assert_eq!(pos.y, 0.0);
    }
}
