//! Pick rays forwarded from the rendering host.

use glam::{Mat4, Vec2, Vec3};

/// A half-line from `origin` along a unit `direction`.
///
/// A ray built from a zero direction is kept but never hits anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickRay {
    origin: Vec3,
    direction: Vec3,
}

impl PickRay {
    /// Create a ray; `direction` is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from a perspective camera at `eye` through a click at `ndc`.
    ///
    /// `ndc` is in normalized device coordinates (x right, y up, both in
    /// `[-1, 1]`). Works for both standard and reverse-Z projections since
    /// only the mid-depth point of the pixel is unprojected.
    pub fn through_ndc(eye: Vec3, ndc: Vec2, inverse_view_projection: Mat4) -> Self {
        let target = inverse_view_projection.project_point3(ndc.extend(0.5));
        Self::new(eye, target - eye)
    }

    /// Ray origin.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction, or zero for a degenerate ray.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// `false` for rays built from a zero or non-finite direction.
    pub fn is_valid(&self) -> bool {
        self.direction != Vec3::ZERO
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance from `point` to the ray and the parameter of the closest point.
    ///
    /// Points behind the origin measure against the origin itself (`t = 0`).
    pub fn closest_approach(&self, point: Vec3) -> (f32, f32) {
        let t = (point - self.origin).dot(self.direction).max(0.0);
        (point.distance(self.at(t)), t)
    }
}
