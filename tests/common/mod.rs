//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use orrery::catalog::all_bodies;
use orrery::lifecycle::LifecyclePlugin;
use orrery::render::bodies::initial_layout;
use orrery::types::SceneEntity;

/// Create a minimal Bevy app with scene liveness wired in.
pub fn scene_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(LifecyclePlugin);
    app
}

/// Spawn the catalog bodies without meshes or materials.
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

/// Distance from the vertical axis through the origin.
pub fn orbit_radius(position: Vec3) -> f32 {
    position.x.hypot(position.z)
}

/// Current translation of an entity.
pub fn position_of(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity has no transform")
        .translation
}
