//! Interactive camera controls — mouse orbit/pan/dolly and viewer hotkeys.

mod keyboard;
mod mouse;

use alphafreq_bevy::systems::apply_camera_commands;
use bevy::prelude::*;

/// Plugin that registers all viewer input systems.
pub struct ViewerInputPlugin;

impl Plugin for ViewerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (mouse::drive_camera_with_mouse, keyboard::handle_hotkeys)
                .before(apply_camera_commands),
        );
    }
}
