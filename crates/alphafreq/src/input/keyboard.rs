//! Viewer hotkeys: `r` resets the camera, `q` or `e` quits.

use alphafreq_bevy::events::CameraCommand;
use bevy::prelude::*;

pub fn handle_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    mut camera: MessageWriter<CameraCommand>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        camera.write(CameraCommand::Reset);
    }
    if keys.any_just_pressed([KeyCode::KeyQ, KeyCode::KeyE]) {
        tracing::info!("Exit requested from keyboard");
        exit.write(AppExit::Success);
    }
}
