//! The rendering surface: the perspective camera drawing into the mounted
//! window, and keeping it in step with the window size.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::{MainCamera, OrbitControls};
use crate::settings::SceneSettings;
use crate::types::{FrameSet, SceneEntity, SceneSurface};

/// Size of the rendering surface in logical pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a degenerate (minimised) surface.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }
}

/// Plugin mounting the rendering surface and handling resizes.
pub struct SurfacePlugin;

impl Plugin for SurfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, mount_surface)
            .add_systems(Update, handle_resize.in_set(FrameSet::Input));
    }
}

/// Perspective projection for the given settings and aspect ratio.
pub fn scene_projection(settings: &SceneSettings, aspect_ratio: f32) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        aspect_ratio,
        near: settings.near,
        far: settings.far,
        ..default()
    })
}

/// Spawn the camera sized to the primary window, with orbit controls.
pub fn mount_surface(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(window) = window_query.single() {
        *viewport = Viewport::new(window.width(), window.height());
    }

    let eye = settings.camera_start;
    commands.spawn((
        Camera3d::default(),
        scene_projection(&settings, viewport.aspect_ratio()),
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitControls::new(eye, Vec3::ZERO, settings.damping_factor),
        MainCamera,
        SceneSurface,
        SceneEntity,
    ));

    info!(
        "Mounted rendering surface {}x{}",
        viewport.width, viewport.height
    );
}

/// Match the camera aspect ratio and the viewport to the resized window.
pub fn handle_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut camera_query: Query<&mut Projection, With<SceneSurface>>,
) {
    // Only the most recent size matters.
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    *viewport = Viewport::new(resized.width, resized.height);

    for mut projection in camera_query.iter_mut() {
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.aspect_ratio = viewport.aspect_ratio();
        }
    }

    debug!("Surface resized to {}x{}", resized.width, resized.height);
}
