//! Celestial body rendering and spawning.
//!
//! Handles the visual representation of the Sun and planets.

use bevy::prelude::*;

use crate::catalog::{all_bodies, BodyDescriptor, CelestialBodyId};
use crate::orbit::{initial_angle, position_on_orbit, OrbitState};
use crate::render::textures::TextureWatch;
use crate::settings::SceneSettings;
use crate::types::SceneEntity;

/// Component marking an entity as a renderable celestial body.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Identifier for this body.
    pub id: CelestialBodyId,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Configured orbit radius.
    pub distance: f32,
    /// Human-readable name.
    pub name: String,
}

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Initial layout of one body: where it starts and its orbit state.
pub fn initial_layout(index: usize, total: usize, body: &BodyDescriptor) -> (Vec3, OrbitState) {
    let angle = initial_angle(index, total);
    (
        position_on_orbit(angle, body.distance),
        OrbitState::new(angle, body.speed),
    )
}

/// Spawn all celestial bodies in catalog order.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
) {
    let bodies = all_bodies();
    let segments = settings.sphere_segments;

    for (index, body) in bodies.iter().enumerate() {
        let (position, orbit) = initial_layout(index, bodies.len(), body);

        let mesh = meshes.add(Sphere::new(body.radius).mesh().uv(segments, segments));

        let texture_path = body.id.texture_path();
        let texture: Handle<Image> = asset_server.load(texture_path.clone());
        let material = materials.add(StandardMaterial {
            base_color_texture: Some(texture.clone()),
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            CelestialBody {
                id: body.id,
                radius: body.radius,
                distance: body.distance,
                name: body.id.name().to_string(),
            },
            orbit,
            TextureWatch::new(texture, material, texture_path),
            SceneEntity,
        ));
    }

    info!("Spawned {} celestial bodies", bodies.len());
}
