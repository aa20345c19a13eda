//! Test utilities for scene tests.
//!
//! Provides fixtures for spawning bodies without rendering and assertions
//! for the orbit invariants.

use bevy::prelude::*;

use crate::catalog::all_bodies;
use crate::orbit::OrbitState;
use crate::render::bodies::initial_layout;
use crate::types::SceneEntity;

/// Fixtures for populating a world with scene entities.
pub mod fixtures {
    use super::*;

    /// Spawn every catalog body with its initial transform and orbit state,
    /// returning entities in catalog order.
    pub fn spawn_catalog(world: &mut World) -> Vec<Entity> {
        let bodies = all_bodies();
        bodies
            .iter()
            .enumerate()
            .map(|(index, body)| {
                let (position, orbit) = initial_layout(index, bodies.len(), body);
                world
                    .spawn((Transform::from_translation(position), orbit, SceneEntity))
                    .id()
            })
            .collect()
    }
}

/// Assertions for verifying orbit invariants.
pub mod assertions {
    use super::*;

    /// Distance from the vertical axis through the origin.
    pub fn orbit_radius(position: Vec3) -> f32 {
        position.x.hypot(position.z)
    }

    /// Assert that a body stayed on its orbit within a relative tolerance.
    ///
    /// # Panics
    /// Panics if the radius drifted more than `tolerance` (relative).
    pub fn assert_radius_preserved(initial: f32, position: Vec3, tolerance: f32) {
        let radius = orbit_radius(position);
        let drift = if initial > 1e-6 {
            ((radius - initial) / initial).abs()
        } else {
            (radius - initial).abs()
        };
        assert!(
            drift <= tolerance,
            "Orbit radius not preserved: initial={initial}, final={radius}, drift={drift:e}"
        );
        assert_eq!(position.y, 0.0, "Body left the orbital plane");
    }

    /// Current orbit state of an entity.
    pub fn orbit_of(world: &World, entity: Entity) -> OrbitState {
        *world
            .get::<OrbitState>(entity)
            .expect("entity has no orbit state")
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    use crate::lifecycle::LifecyclePlugin;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }

    /// Headless app with scene liveness and teardown wired in.
    pub fn lifecycle_app() -> App {
        let mut app = headless_app();
        app.add_plugins(LifecyclePlugin);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_catalog_places_every_body() {
        let mut world = World::new();
        let entities = fixtures::spawn_catalog(&mut world);
        assert_eq!(entities.len(), 9);

        for (entity, body) in entities.iter().zip(all_bodies()) {
            let position = world.get::<Transform>(*entity).unwrap().translation;
            assertions::assert_radius_preserved(body.distance, position, 1e-5);
            assert_eq!(assertions::orbit_of(&world, *entity).speed, body.speed);
        }
    }
}
