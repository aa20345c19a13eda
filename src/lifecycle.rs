//! Scene liveness and teardown.
//!
//! The scene is live from startup until the first [`TeardownScene`]
//! message. Every per-frame system is gated on [`scene_is_live`], so once
//! teardown runs nothing reschedules against the released surface.

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::settings::SceneSettings;
use crate::types::{FrameSet, SceneEntity};

/// Request to tear the scene down. Repeat requests are ignored.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct TeardownScene;

/// Resource tracking whether the scene still owns its resources.
#[derive(Resource, Debug)]
pub struct SceneLifecycle {
    live: bool,
}

impl Default for SceneLifecycle {
    fn default() -> Self {
        Self { live: true }
    }
}

impl SceneLifecycle {
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Mark the scene disposed. Returns `true` only for the call that
    /// actually performed the transition.
    pub fn dispose(&mut self) -> bool {
        std::mem::replace(&mut self.live, false)
    }
}

/// Count of frames the scene has presented.
#[derive(Resource, Debug, Default)]
pub struct SceneClock {
    pub frames: u64,
}

/// Plugin providing liveness tracking and teardown.
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneLifecycle>()
            .init_resource::<SceneClock>()
            .add_message::<TeardownScene>()
            .add_message::<WindowCloseRequested>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Animate,
                    FrameSet::Controls,
                    FrameSet::Present,
                )
                    .chain()
                    .run_if(scene_is_live),
            )
            .add_systems(Update, count_frame.in_set(FrameSet::Present))
            .add_systems(
                Update,
                (teardown_on_close_request, teardown_scene)
                    .chain()
                    .after(FrameSet::Present),
            );
    }
}

/// Run condition: true until teardown.
pub fn scene_is_live(lifecycle: Res<SceneLifecycle>) -> bool {
    lifecycle.is_live()
}

/// Record that a frame is about to be presented.
pub fn count_frame(mut clock: ResMut<SceneClock>) {
    clock.frames += 1;
}

/// Closing the window tears the scene down first.
fn teardown_on_close_request(
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut teardown: MessageWriter<TeardownScene>,
) {
    if close_requests.read().next().is_some() {
        teardown.write(TeardownScene);
    }
}

/// Release every scene entity, including the rendering surface.
pub fn teardown_scene(
    mut commands: Commands,
    mut requests: MessageReader<TeardownScene>,
    mut lifecycle: ResMut<SceneLifecycle>,
    settings: Option<Res<SceneSettings>>,
    entities: Query<Entity, With<SceneEntity>>,
    mut exit: MessageWriter<AppExit>,
) {
    if requests.read().next().is_none() {
        return;
    }

    if !lifecycle.dispose() {
        debug!("Teardown requested for a scene that is already disposed");
        return;
    }

    let mut released = 0;
    for entity in entities.iter() {
        commands.entity(entity).despawn();
        released += 1;
    }
    info!("Scene torn down, released {} entities", released);

    if settings.is_some_and(|s| s.exit_on_teardown) {
        exit.write(AppExit::Success);
    }
}
