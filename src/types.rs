//! Shared scene types: per-frame system ordering and entity markers.

use bevy::prelude::*;

/// System sets for one animation frame, run in declaration order.
///
/// Every set is gated on the scene being live, so nothing in here runs
/// after teardown.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Resize events and pointer input.
    Input,
    /// Orbit advancement and asset bookkeeping.
    Animate,
    /// Camera controls damping step.
    Controls,
    /// Frame accounting right before Bevy presents.
    Present,
}

/// Marker for every entity owned by the scene.
///
/// Teardown despawns all of these.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneEntity;

/// Marker for the entity acting as the rendering surface (the camera
/// rendering into the mounted window).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneSurface;
