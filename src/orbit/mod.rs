//! Circular orbit animation for the catalog bodies.
//!
//! Bodies move by a fixed angle per frame in the horizontal (XZ) plane.
//! There is no physical model here: start angles come from list position
//! and speeds from the catalog.

#[cfg(test)]
mod proptest_orbit;

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::types::FrameSet;

/// Plugin advancing orbiting bodies once per frame.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_orbits.in_set(FrameSet::Animate));
    }
}

/// Live orbital state of one body.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Accumulated angle in radians. Never wrapped.
    pub angle: f32,
    /// Angle added per frame.
    pub speed: f32,
}

impl OrbitState {
    pub fn new(angle: f32, speed: f32) -> Self {
        Self { angle, speed }
    }

    /// The central body has zero speed and is never updated.
    pub fn is_orbiting(&self) -> bool {
        self.speed > 0.0
    }

    /// Advance by one frame and return the new position.
    ///
    /// The orbit radius is taken from the current position rather than from
    /// the catalog, so whatever radius the body has now is the one it keeps.
    pub fn advance(&mut self, position: Vec3) -> Vec3 {
        if !self.is_orbiting() {
            return position;
        }
        self.angle += self.speed;
        let radius = position.length();
        position_on_orbit(self.angle, radius)
    }
}

/// Start angle for the body at `index` out of `total`, spreading bodies
/// evenly around the circle.
pub fn initial_angle(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index as f32 / total as f32) * TAU
}

/// Point on a horizontal circle of `radius` around the origin.
pub fn position_on_orbit(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Move every orbiting body one step along its circle.
pub fn advance_orbits(mut query: Query<(&mut Transform, &mut OrbitState)>) {
    for (mut transform, mut orbit) in query.iter_mut() {
        if !orbit.is_orbiting() {
            continue;
        }
        transform.translation = orbit.advance(transform.translation);
    }
}
