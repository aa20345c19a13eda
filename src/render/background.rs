//! Background rendering for the solar system visualization.
//!
//! Provides starfield and lighting systems.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::settings::SceneSettings;
use crate::types::SceneEntity;

/// Direction the key light shines from, before normalization.
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Illuminance of the key light at unit intensity.
pub const LIGHT_ILLUMINANCE: f32 = 5000.0;

/// Ambient brightness; combined with the dim gray below.
pub const AMBIENT_BRIGHTNESS: f32 = 200.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// The background star positions, generated once at startup.
#[derive(Resource, Clone, Debug)]
pub struct Starfield {
    pub points: Vec<Vec3>,
}

/// Marker for the point cloud entity drawing the starfield.
#[derive(Component)]
pub struct StarfieldCloud;

/// Sample `count` points uniformly in `[-half_extent, half_extent)` per axis.
pub fn generate_starfield<R: Rng>(rng: &mut R, count: usize, half_extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            )
        })
        .collect()
}

/// Point list mesh with one vertex per star.
pub fn starfield_mesh(points: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

/// Spawn the starfield as a single point cloud.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let points = match settings.star_seed {
        Some(seed) => generate_starfield(
            &mut StdRng::seed_from_u64(seed),
            settings.star_count,
            settings.star_half_extent,
        ),
        None => generate_starfield(
            &mut rand::thread_rng(),
            settings.star_count,
            settings.star_half_extent,
        ),
    };

    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(&points))),
        MeshMaterial3d(star_material),
        Transform::default(),
        StarfieldCloud,
        SceneEntity,
    ));

    info!("Spawned {} background stars", points.len());
    commands.insert_resource(Starfield { points });
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Dim gray fill so the night side of each body is not pitch black
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(LIGHT_DIRECTION.normalize()).looking_at(Vec3::ZERO, Vec3::Y),
        SceneEntity,
    ));

    info!("Scene lighting initialized");
}
