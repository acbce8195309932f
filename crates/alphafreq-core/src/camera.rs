//! Camera framing and orbit state.
//!
//! The rig is expressed around a focal point so that interactive rotation,
//! dolly, and pan stay independent of any rendering backend.

use glam::{Vec2, Vec3};

/// Default vertical view angle in degrees.
pub const DEFAULT_VIEW_ANGLE_DEG: f32 = 30.0;

/// Elevation limit; keeps the view-up vector well defined.
const MAX_ELEVATION_DEG: f32 = 89.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Smallest box containing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the bounding sphere (half the diagonal).
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

/// Camera orbiting a focal point.
///
/// Angles are in radians. With both angles at zero the camera sits on the
/// `+z` side of the focus looking down `-z`, with `+y` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub focus: Vec3,
    pub distance: f32,
    /// Rotation about the view-up (`+y`) axis.
    pub azimuth: f32,
    /// Rotation above the horizontal plane.
    pub elevation: f32,
    /// Vertical field of view in radians.
    pub view_angle: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 1.0,
            azimuth: 0.0,
            elevation: 0.0,
            view_angle: DEFAULT_VIEW_ANGLE_DEG.to_radians(),
        }
    }
}

impl OrbitRig {
    /// Frame `bounds`: focus on the centre, back off until the bounding sphere
    /// fits the view angle, and look straight down `-z`.
    pub fn reset_to(&mut self, bounds: &Bounds3) {
        let mut radius = bounds.radius();
        if radius == 0.0 {
            radius = 0.5;
        }
        self.focus = bounds.center();
        self.distance = radius / (self.view_angle * 0.5).sin();
        self.azimuth = 0.0;
        self.elevation = 0.0;
        tracing::debug!(
            "camera reset: focus={} distance={:.3}",
            self.focus,
            self.distance
        );
    }

    /// Rotate about the view-up axis by `degrees`.
    pub fn rotate_azimuth(&mut self, degrees: f32) {
        self.azimuth += degrees.to_radians();
    }

    /// Raise the camera by `degrees`, clamped short of the poles.
    pub fn elevate(&mut self, degrees: f32) {
        let limit = MAX_ELEVATION_DEG.to_radians();
        self.elevation = (self.elevation + degrees.to_radians()).clamp(-limit, limit);
    }

    /// Move toward the focus by `factor` (> 1 moves closer). Non-positive
    /// factors are ignored.
    pub fn dolly(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance /= factor;
        }
    }

    /// Shift focus and camera together in the view plane.
    ///
    /// `delta` is a fraction of the visible height at the focal distance.
    pub fn pan(&mut self, delta: Vec2) {
        let (right, up) = self.view_plane();
        let visible_height = 2.0 * self.distance * (self.view_angle * 0.5).tan();
        self.focus += (right * delta.x + up * delta.y) * visible_height;
    }

    /// Unit vector from the focus toward the camera.
    pub fn direction(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    /// Camera position.
    pub fn eye(&self) -> Vec3 {
        self.focus + self.direction() * self.distance
    }

    /// `(right, up)` unit vectors of the view plane.
    pub fn view_plane(&self) -> (Vec3, Vec3) {
        let forward = -self.direction();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}
