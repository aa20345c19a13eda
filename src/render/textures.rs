//! Body texture loading diagnostics.
//!
//! Textures load asynchronously through the asset server. A body whose image
//! fails to load gets one diagnostic and keeps rendering with its texture
//! stripped; loads are never retried.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::lifecycle::SceneLifecycle;
use crate::render::bodies::CelestialBody;
use crate::types::FrameSet;

/// A body's texture could not be loaded.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("failed to load texture for {body} ({path}): {reason}")]
pub struct AssetLoadFailure {
    pub body: String,
    pub path: String,
    pub reason: String,
}

/// Load progress of a texture as far as the scene cares.
#[derive(Clone, Debug, PartialEq)]
pub enum TextureProbe {
    Pending,
    Loaded,
    Failed(String),
}

impl From<&LoadState> for TextureProbe {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => TextureProbe::Loaded,
            LoadState::Failed(err) => TextureProbe::Failed(err.to_string()),
            _ => TextureProbe::Pending,
        }
    }
}

/// Outcome of a texture once it stops loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

/// Tracks the texture of one body until it settles.
#[derive(Component, Clone, Debug)]
pub struct TextureWatch {
    pub texture: Handle<Image>,
    pub material: Handle<StandardMaterial>,
    pub path: String,
    status: TextureStatus,
}

impl TextureWatch {
    pub fn new(texture: Handle<Image>, material: Handle<StandardMaterial>, path: String) -> Self {
        Self {
            texture,
            material,
            path,
            status: TextureStatus::Pending,
        }
    }

    pub fn status(&self) -> TextureStatus {
        self.status
    }

    /// Fold one observation into the watch.
    ///
    /// Returns a failure only on the transition into `Failed`, so a body is
    /// reported at most once. Settled watches ignore further observations.
    pub fn observe(&mut self, body: &str, probe: TextureProbe) -> Option<AssetLoadFailure> {
        if self.status != TextureStatus::Pending {
            return None;
        }
        match probe {
            TextureProbe::Pending => None,
            TextureProbe::Loaded => {
                self.status = TextureStatus::Loaded;
                None
            }
            TextureProbe::Failed(reason) => {
                self.status = TextureStatus::Failed;
                Some(AssetLoadFailure {
                    body: body.to_string(),
                    path: self.path.clone(),
                    reason,
                })
            }
        }
    }
}

/// Texture failures seen so far, in the order they were reported.
#[derive(Resource, Debug, Default)]
pub struct TextureDiagnostics {
    pub failures: Vec<AssetLoadFailure>,
}

impl TextureDiagnostics {
    /// Failures reported for the named body.
    pub fn for_body<'a>(&'a self, body: &'a str) -> impl Iterator<Item = &'a AssetLoadFailure> {
        self.failures.iter().filter(move |f| f.body == body)
    }
}

/// Plugin watching body texture loads.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureDiagnostics>()
            .add_systems(Update, watch_texture_loads.in_set(FrameSet::Animate));
    }
}

/// Poll pending textures and degrade bodies whose texture failed.
fn watch_texture_loads(
    asset_server: Res<AssetServer>,
    lifecycle: Res<SceneLifecycle>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut diagnostics: ResMut<TextureDiagnostics>,
    mut bodies: Query<(&CelestialBody, &mut TextureWatch)>,
) {
    for (body, mut watch) in bodies.iter_mut() {
        if watch.status() != TextureStatus::Pending {
            continue;
        }
        let probe = TextureProbe::from(&asset_server.load_state(watch.texture.id()));
        record_probe(&lifecycle, &mut materials, &mut diagnostics, body, &mut watch, probe);
    }
}

/// Apply one probe result for a body.
///
/// Does nothing once the scene is disposed, so a load finishing after
/// teardown never touches released materials.
pub fn record_probe(
    lifecycle: &SceneLifecycle,
    materials: &mut Assets<StandardMaterial>,
    diagnostics: &mut TextureDiagnostics,
    body: &CelestialBody,
    watch: &mut TextureWatch,
    probe: TextureProbe,
) {
    if !lifecycle.is_live() {
        return;
    }

    let Some(failure) = watch.observe(&body.name, probe) else {
        return;
    };

    error!("{}", failure);

    // Render the body untextured instead of not at all.
    if let Some(mut material) = materials.get_mut(&watch.material) {
        material.base_color_texture = None;
    }
    diagnostics.failures.push(failure);
}
