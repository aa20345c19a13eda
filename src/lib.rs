//! Orrery - Animated Solar System Scene
//!
//! A sun and eight planets circling at fixed angular speeds over a
//! starfield, viewed through a damped orbit camera.

pub mod camera;
pub mod catalog;
pub mod input;
pub mod lifecycle;
pub mod orbit;
pub mod render;
pub mod settings;
pub mod surface;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use camera::CameraPlugin;
use input::InputPlugin;
use lifecycle::LifecyclePlugin;
use orbit::OrbitPlugin;
use render::RenderPlugin;
use settings::SceneSettings;
use surface::SurfacePlugin;

/// Everything the scene needs on top of Bevy's `DefaultPlugins`.
///
/// Uses an existing [`SceneSettings`] resource if one was inserted first.
pub struct OrbitScenePlugin;

impl Plugin for OrbitScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>().add_plugins((
            LifecyclePlugin,
            SurfacePlugin,
            CameraPlugin,
            OrbitPlugin,
            RenderPlugin,
            InputPlugin,
        ));
    }
}
