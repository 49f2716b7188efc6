//! Model and view matrix composition.
//!
//! All matrices follow glam's column-major, column-vector convention, so a
//! product `A * B` applies `B` first. Rotations are in radians about +Z, the
//! only axis a flat scene needs.
//!
//! ```
//! use parallax::{compose, Vec3};
//!
//! // Scale, then rotate a quarter turn, then move into place.
//! let model = compose(Vec3::new(0.4, 0.2, 0.0), std::f32::consts::FRAC_PI_2, Vec3::ONE);
//! let p = model.transform_point3(Vec3::new(1.0, 0.0, 0.0));
//! assert!((p - Vec3::new(0.4, 1.2, 0.0)).length() < 1e-6);
//! ```

use glam::{Mat4, Vec3};

/// Builds `T * Rz * S`: scale first, then rotate about the local origin,
/// then translate into world space.
pub fn compose(translation: Vec3, rotation: f32, scale: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * Mat4::from_rotation_z(rotation) * Mat4::from_scale(scale)
}

/// Builds a view matrix for a camera at `position`, rotated by `rotation`.
///
/// This is the inverse of the camera's own model matrix, so the world moves
/// opposite to the camera. Camera scale is always one, which keeps the
/// composed matrix invertible.
pub fn compose_view(position: Vec3, rotation: f32) -> Mat4 {
    compose(position, rotation, Vec3::ONE).inverse()
}

/// Rotation about `pivot` instead of the origin: `T(p) * Rz * T(-p)`.
pub fn pivot_rotation(pivot: Vec3, angle: f32) -> Mat4 {
    let to_pivot = Mat4::from_translation(pivot);
    to_pivot * Mat4::from_rotation_z(angle) * to_pivot.inverse()
}

/// Spins an already placed object about `pivot`.
///
/// `base` is typically a translate-and-scale matrix whose translation is the
/// pivot itself; the result is `pivot_rotation(pivot, angle) * base`.
pub fn rotate_about_pivot(base: Mat4, pivot: Vec3, angle: f32) -> Mat4 {
    pivot_rotation(pivot, angle) * base
}

/// Translation, Z rotation and scale for placing a quad.
///
/// Converted to a matrix with [`Transform::matrix()`], which applies
/// **Scale → Rotate → Translate**.
///
/// ```
/// use parallax::{Transform, Vec3};
///
/// let transform = Transform::new()
///     .translation(Vec3::new(-0.55, 0.0, 0.0))
///     .scale(Vec3::new(1.5, 1.0, 1.0));
/// assert_eq!(transform.rotation, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Radians about +Z.
    pub rotation: f32,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: 0.0,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        compose(self.translation, self.rotation, self.scale)
    }
}
