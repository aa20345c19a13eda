//! Keyboard shortcuts.
//!
//! Escape tears the scene down.

use bevy::prelude::*;

use crate::lifecycle::TeardownScene;
use crate::types::FrameSet;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts.in_set(FrameSet::Input));
    }
}

/// Handle keyboard shortcuts for scene control.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut teardown: MessageWriter<TeardownScene>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, tearing the scene down");
        teardown.write(TeardownScene);
    }
}
