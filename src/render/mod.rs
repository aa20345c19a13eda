//! Rendering systems for the solar system scene.
//!
//! This module provides the visual representation of celestial bodies,
//! their textures, and background elements.

pub mod background;
pub mod bodies;
pub mod textures;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::textures::TexturePlugin;

// Re-export for use in other modules
pub use self::background::Starfield;
pub use self::bodies::CelestialBody;
pub use self::textures::{AssetLoadFailure, TextureDiagnostics};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin, TexturePlugin));
    }
}
