//! Orbit camera controls.
//!
//! The camera circles a target point. Mouse input accumulates pending
//! rotation, pan and dolly; each frame applies a fraction of the pending
//! motion (damping) so the view eases toward where the user pointed it.
//! Left drag rotates, right drag pans, the wheel dollies.

use std::f32::consts::{PI, TAU};

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::surface::Viewport;
use crate::types::FrameSet;

/// Closest the camera may get to its target.
pub const MIN_DISTANCE: f32 = 1.0;

/// Furthest the camera may get from its target, inside the far plane.
pub const MAX_DISTANCE: f32 = 900.0;

/// Rotation speed multiplier for drag input.
pub const ROTATE_SPEED: f32 = 1.0;

/// Zoom speed multiplier for wheel input.
pub const ZOOM_SPEED: f32 = 1.0;

/// Pan speed multiplier for drag input.
pub const PAN_SPEED: f32 = 1.0;

/// Keeps the polar angle away from the poles, where the view would flip.
const POLAR_EPSILON: f32 = 1e-6;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates around a target, Y up.
///
/// `phi` is the polar angle from +Y, `theta` the azimuth from +Z toward +X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Damped orbit controls attached to the camera.
#[derive(Component, Clone, Debug)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: Vec3,
    pub damping_factor: f32,
    spherical: Spherical,
    spherical_delta: Spherical,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    /// Controls for a camera at `eye` looking at `target`.
    pub fn new(eye: Vec3, target: Vec3, damping_factor: f32) -> Self {
        Self {
            enabled: true,
            target,
            damping_factor,
            spherical: Spherical::from_offset(eye - target),
            spherical_delta: Spherical::default(),
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Current camera position.
    pub fn eye(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    /// Queue a rotation around the vertical axis.
    pub fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.theta -= angle;
    }

    /// Queue a rotation toward the pole.
    pub fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.phi -= angle;
    }

    /// Move toward the target; `scale` below 1 brings the camera closer.
    pub fn dolly_in(&mut self, scale: f32) {
        self.scale *= scale;
    }

    /// Inverse of [`Self::dolly_in`].
    pub fn dolly_out(&mut self, scale: f32) {
        self.scale /= scale;
    }

    /// Queue a world-space translation of the target.
    pub fn pan(&mut self, offset: Vec3) {
        self.pan_offset += offset;
    }

    /// Apply one damped step of the pending motion and return the new eye
    /// position.
    pub fn update(&mut self) -> Vec3 {
        let factor = self.damping_factor;

        self.spherical.theta += self.spherical_delta.theta * factor;
        self.spherical.phi += self.spherical_delta.phi * factor;
        self.spherical.phi = self.spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.spherical.radius = (self.spherical.radius * self.scale).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.target += self.pan_offset * factor;

        self.spherical_delta.theta *= 1.0 - factor;
        self.spherical_delta.phi *= 1.0 - factor;
        self.pan_offset *= 1.0 - factor;
        self.scale = 1.0;

        self.eye()
    }
}

/// Plugin providing camera control functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, capture_control_input.in_set(FrameSet::Input))
            .add_systems(Update, update_orbit_controls.in_set(FrameSet::Controls));
    }
}

/// Wheel zoom factor per notch.
pub fn zoom_scale() -> f32 {
    0.95_f32.powf(ZOOM_SPEED)
}

/// Feed mouse input into the controls.
pub fn capture_control_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    viewport: Res<Viewport>,
    mut camera_query: Query<(&mut OrbitControls, &Transform, &Projection), With<MainCamera>>,
) {
    let Ok((mut controls, transform, projection)) = camera_query.single_mut() else {
        return;
    };

    if !controls.enabled {
        return;
    }

    let height = viewport.height.max(1.0);
    let delta = mouse_motion.delta;

    if mouse_buttons.pressed(MouseButton::Left) && delta != Vec2::ZERO {
        controls.rotate_left(TAU * delta.x / height * ROTATE_SPEED);
        controls.rotate_up(TAU * delta.y / height * ROTATE_SPEED);
    }

    // Panning needs a field of view; other projections skip it.
    if mouse_buttons.pressed(MouseButton::Right) && delta != Vec2::ZERO {
        if let Projection::Perspective(perspective) = projection {
            // Scale so the point under the cursor at the target's depth follows it.
            let target_distance = controls.spherical().radius * (perspective.fov / 2.0).tan();
            let world_per_pixel = 2.0 * target_distance / height * PAN_SPEED;
            let offset =
                (-transform.right() * delta.x + transform.up() * delta.y) * world_per_pixel;
            controls.pan(offset);
        }
    }

    if mouse_scroll.delta.y > 0.0 {
        controls.dolly_in(zoom_scale());
    } else if mouse_scroll.delta.y < 0.0 {
        controls.dolly_out(zoom_scale());
    }
}

/// Damping step: move the camera toward the pending orientation.
pub fn update_orbit_controls(
    mut camera_query: Query<(&mut OrbitControls, &mut Transform), With<MainCamera>>,
) {
    for (mut controls, mut transform) in camera_query.iter_mut() {
        let eye = controls.update();
        *transform = Transform::from_translation(eye).looking_at(controls.target, Vec3::Y);
    }
}
