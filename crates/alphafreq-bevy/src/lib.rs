//! AlphaFrequency Bevy Plugin — renders the letter frequency glyphs in Bevy's ECS.
//!
//! Provides `AlphaFrequencyPlugin` which registers the resources, messages,
//! and systems needed to spawn the extruded glyph grid and drive its camera.
//! The host app inserts a [`resources::LetterFrequencies`] resource before
//! running.

pub mod backend;
pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

use events::CameraCommand;
use resources::{CameraRig, GlyphAppearance, ViewSettings};
use systems::{
    apply_camera_commands, build_glyph_scene, spawn_scene_camera, sync_camera_transform,
};

/// Main Bevy plugin for the letter frequency scene.
///
/// Registers resources, messages, and systems for:
/// - Building one extruded mesh entity per letter at startup
/// - Framing the camera on the visible glyphs
/// - Applying orbit/pan/dolly commands to the camera
pub struct AlphaFrequencyPlugin;

impl Plugin for AlphaFrequencyPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CameraCommand>()
            .init_resource::<ViewSettings>()
            .init_resource::<GlyphAppearance>()
            .init_resource::<CameraRig>()
            .add_systems(
                Startup,
                (insert_clear_color, build_glyph_scene, spawn_scene_camera).chain(),
            )
            .add_systems(
                Update,
                (
                    apply_camera_commands,
                    sync_camera_transform.after(apply_camera_commands),
                ),
            );
    }
}

/// Startup system: paint the background with the configured colour.
fn insert_clear_color(mut commands: Commands, view: Res<ViewSettings>) {
    let background = backend::to_bevy_color(view.background.into_format());
    commands.insert_resource(ClearColor(background));
}
