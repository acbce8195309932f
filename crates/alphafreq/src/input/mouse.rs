//! Mouse camera controls.
//!
//! Left drag orbits, middle drag (or shift + left drag) pans, right drag and
//! the scroll wheel dolly.

use alphafreq_bevy::events::CameraCommand;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Degrees of orbit per pixel of drag.
const ORBIT_DEG_PER_PIXEL: f32 = 0.4;
/// Multiplicative dolly per scroll-wheel line tick.
const DOLLY_FACTOR: f32 = 1.1;
/// Pixels of right-drag equivalent to one scroll line.
const DOLLY_DRAG_PIXELS: f32 = 10.0;
/// Pixels per line for high-resolution (pixel unit) scroll devices.
const SCROLL_PIXELS_PER_LINE: f32 = 50.0;

/// What a mouse drag does to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Orbit,
    Pan,
    Dolly,
}

/// Pick the drag mode from the held buttons. Left wins over middle over right.
pub fn drag_mode(buttons: &ButtonInput<MouseButton>, shift: bool) -> Option<DragMode> {
    if buttons.pressed(MouseButton::Left) {
        Some(if shift { DragMode::Pan } else { DragMode::Orbit })
    } else if buttons.pressed(MouseButton::Middle) {
        Some(DragMode::Pan)
    } else if buttons.pressed(MouseButton::Right) {
        Some(DragMode::Dolly)
    } else {
        None
    }
}

/// Translate a drag of `delta` window pixels into a camera command.
///
/// Window `y` grows downward. Dragging moves the scene with the cursor.
pub fn drag_command(mode: DragMode, delta: Vec2, window_height: f32) -> Option<CameraCommand> {
    if delta == Vec2::ZERO {
        return None;
    }
    let cmd = match mode {
        DragMode::Orbit => CameraCommand::Orbit {
            azimuth: -delta.x * ORBIT_DEG_PER_PIXEL,
            elevation: delta.y * ORBIT_DEG_PER_PIXEL,
        },
        DragMode::Pan => {
            let height = window_height.max(1.0);
            CameraCommand::Pan(Vec2::new(-delta.x / height, delta.y / height))
        }
        DragMode::Dolly => CameraCommand::Dolly(DOLLY_FACTOR.powf(-delta.y / DOLLY_DRAG_PIXELS)),
    };
    Some(cmd)
}

/// Dolly factor for a scroll of `lines` (positive scrolls in).
pub fn scroll_dolly(lines: f32) -> Option<CameraCommand> {
    (lines.abs() >= f32::EPSILON).then(|| CameraCommand::Dolly(DOLLY_FACTOR.powf(lines)))
}

/// Turn this frame's accumulated mouse input into camera commands.
pub fn drive_camera_with_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera: MessageWriter<CameraCommand>,
) {
    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / SCROLL_PIXELS_PER_LINE,
    };
    if let Some(cmd) = scroll_dolly(lines) {
        camera.write(cmd);
    }

    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let Some(mode) = drag_mode(&buttons, shift) else {
        return;
    };
    let height = windows.single().map(|w| w.height()).unwrap_or(1.0);
    if let Some(cmd) = drag_command(mode, motion.delta, height) {
        camera.write(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_mode_priority() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        assert_eq!(drag_mode(&buttons, false), None);

        buttons.press(MouseButton::Right);
        assert_eq!(drag_mode(&buttons, false), Some(DragMode::Dolly));
        buttons.press(MouseButton::Middle);
        assert_eq!(drag_mode(&buttons, false), Some(DragMode::Pan));
        buttons.press(MouseButton::Left);
        assert_eq!(drag_mode(&buttons, false), Some(DragMode::Orbit));
        assert_eq!(drag_mode(&buttons, true), Some(DragMode::Pan));
    }

    #[test]
    fn test_orbit_direction() {
        let Some(CameraCommand::Orbit { azimuth, elevation }) =
            drag_command(DragMode::Orbit, Vec2::new(10.0, -5.0), 900.0)
        else {
            panic!("expected orbit");
        };
        assert!(azimuth < 0.0);
        assert!(elevation < 0.0);
    }

    #[test]
    fn test_pan_scaled_by_window_height() {
        assert_eq!(
            drag_command(DragMode::Pan, Vec2::new(90.0, 45.0), 900.0),
            Some(CameraCommand::Pan(Vec2::new(-0.1, 0.05)))
        );
    }

    #[test]
    fn test_dolly_up_moves_closer() {
        let Some(CameraCommand::Dolly(factor)) =
            drag_command(DragMode::Dolly, Vec2::new(0.0, -10.0), 900.0)
        else {
            panic!("expected dolly");
        };
        assert!((factor - DOLLY_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn test_no_motion_no_command() {
        assert_eq!(drag_command(DragMode::Orbit, Vec2::ZERO, 900.0), None);
        assert_eq!(scroll_dolly(0.0), None);
    }

    #[test]
    fn test_scroll_dolly() {
        assert_eq!(scroll_dolly(1.0), Some(CameraCommand::Dolly(DOLLY_FACTOR)));
        let Some(CameraCommand::Dolly(out)) = scroll_dolly(-2.0) else {
            panic!("expected dolly");
        };
        assert!(out < 1.0);
    }
}
