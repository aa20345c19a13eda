//! Scene tuning.
//!
//! Insert a customised [`SceneSettings`] before adding the scene plugins to
//! override any of the defaults.

use bevy::prelude::*;

/// Number of background stars.
pub const STAR_COUNT: usize = 1000;

/// Stars are sampled in a cube spanning `[-STAR_HALF_EXTENT, STAR_HALF_EXTENT)`
/// on every axis.
pub const STAR_HALF_EXTENT: f32 = 1000.0;

/// Longitude and latitude segments of every body sphere.
pub const SPHERE_SEGMENTS: u32 = 32;

/// Fraction of pending camera motion applied per frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Initial camera position, above and behind the sun.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 50.0, 100.0);

/// Canvas the window binds to when running in a browser.
pub const CANVAS_SELECTOR: &str = "#orrery";

/// Settings for scene construction and camera behaviour.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    pub star_count: usize,
    pub star_half_extent: f32,
    /// Fixed seed for the starfield; `None` draws from the thread RNG.
    pub star_seed: Option<u64>,
    pub sphere_segments: u32,
    pub camera_start: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub damping_factor: f32,
    /// Send `AppExit` once the scene has been torn down.
    pub exit_on_teardown: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            star_half_extent: STAR_HALF_EXTENT,
            star_seed: None,
            sphere_segments: SPHERE_SEGMENTS,
            camera_start: CAMERA_START,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            damping_factor: DAMPING_FACTOR,
            exit_on_teardown: true,
        }
    }
}
