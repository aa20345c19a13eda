//! Orrery - Animated Solar System Scene
//!
//! Opens a window (or binds to the `#orrery` canvas in a browser) and runs
//! the scene until it is torn down.

use bevy::prelude::*;

use orrery::settings::CANVAS_SELECTOR;
use orrery::OrbitScenePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                canvas: Some(CANVAS_SELECTOR.into()),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(OrbitScenePlugin)
        .run();
}
