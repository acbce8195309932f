//! Bevy messages for driving the scene camera.

use bevy::prelude::*;

/// Camera manipulation requested by input handling.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Rotate around the focal point, in degrees.
    Orbit { azimuth: f32, elevation: f32 },
    /// Shift the view, as a fraction of the visible height.
    Pan(Vec2),
    /// Move toward (> 1) or away from (< 1) the focal point.
    Dolly(f32),
    /// Return to the startup framing.
    Reset,
}
