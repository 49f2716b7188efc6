use glam::{Mat4, Vec3};

use crate::transform::compose_view;

/// A 2D camera: a position and a rotation about +Z.
///
/// The default camera sits at the origin, which produces an identity view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraData {
    pub position: Vec3,
    pub rotation: f32, // radians
}

impl CameraData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> Mat4 {
        compose_view(self.position, self.rotation)
    }
}

/// An orthographic projection volume.
///
/// Uses OpenGL clip conventions: the camera looks down -Z, so with
/// `near = 0` and `far = 10` only geometry with `z` in `[-10, 0]` is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    /// Fits a 1024x768 window: horizontal extent stretched by the 4:3 aspect.
    fn default() -> Self {
        Self {
            left: -1.33,
            right: 1.33,
            bottom: -1.0,
            top: 1.0,
            near: 0.0,
            far: 10.0,
        }
    }
}

impl Projection {
    /// Unit-height volume widened to `aspect` (width / height).
    pub fn for_aspect(aspect: f32) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            ..Default::default()
        }
    }

    pub fn depth(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// True when any pair of planes coincide.
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right || self.bottom == self.top || self.near == self.far
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}
