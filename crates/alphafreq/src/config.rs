//! Application configuration for the viewer.

use std::path::PathBuf;

use alphafreq_bevy::resources::ViewSettings;
use alphafreq_core::GlyphStyle;
use bevy::prelude::*;

/// Default window width.
const DEFAULT_WIDTH: f32 = 900.0;
/// Default window height.
const DEFAULT_HEIGHT: f32 = 900.0;
/// Window title.
const WINDOW_TITLE: &str = "AlphaFrequency";

/// Runtime configuration for the AlphaFrequency viewer.
///
/// Only the input path comes from the command line; everything else is a
/// fixed presentation constant.
#[derive(Resource, Clone)]
pub struct AppConfig {
    /// Text file whose letters are counted.
    pub input: PathBuf,
    /// Window width in logical pixels.
    pub width: f32,
    /// Window height in logical pixels.
    pub height: f32,
    pub title: String,
    /// Camera angles, dolly, and background.
    pub view: ViewSettings,
    /// Glyph colour and extrusion.
    pub glyph: GlyphStyle,
}

impl AppConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            view: ViewSettings::default(),
            glyph: GlyphStyle::default(),
        }
    }

    /// Primary window matching this configuration.
    pub fn window(&self) -> Window {
        let mut window = Window {
            title: self.title.clone(),
            ..default()
        };
        window.resolution.set(self.width, self.height);
        window
    }
}
