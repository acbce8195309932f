//! Bevy resources for the letter frequency scene.

use alphafreq_core::scene::SILVER;
use alphafreq_core::{GlyphLayout, GlyphStyle, OrbitRig, Srgb};
use bevy::prelude::*;

/// Laid-out glyphs computed from the input text.
///
/// Inserted by the host app before `App::run`; the startup scene build reads it.
#[derive(Resource)]
pub struct LetterFrequencies {
    pub layout: GlyphLayout,
}

impl LetterFrequencies {
    pub fn new(layout: GlyphLayout) -> Self {
        Self { layout }
    }
}

/// Glyph colour, stroke width, and extrusion direction.
#[derive(Resource, Default, Clone, Copy)]
pub struct GlyphAppearance(pub GlyphStyle);

/// Fixed presentation applied after the camera is framed on the glyphs.
#[derive(Resource, Clone, Copy)]
pub struct ViewSettings {
    /// Degrees above the horizontal plane.
    pub elevation: f32,
    /// Degrees about the view-up axis.
    pub azimuth: f32,
    /// Dolly factor (> 1 moves closer).
    pub dolly: f32,
    pub background: Srgb<u8>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -30.0,
            dolly: 1.0,
            background: SILVER,
        }
    }
}

/// Camera orbit state.
///
/// `current` is what the camera shows; `home` is the startup framing that a
/// reset returns to.
#[derive(Resource, Default)]
pub struct CameraRig {
    pub current: OrbitRig,
    pub home: OrbitRig,
}

/// Marker on each glyph entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct LetterGlyphActor {
    pub letter: char,
    pub count: u64,
    pub scale: f32,
}

/// Marker on the scene camera.
#[derive(Component)]
pub struct SceneCamera;
