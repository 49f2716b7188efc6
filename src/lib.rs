//! # Parallax
//!
//! **Quads, matrices and a sprite sheet: the CPU side of a small 2D parallax scene.**
//!
//! The crate builds the scene's quad meshes, composes model and view matrices,
//! animates a walking sprite, and hands the renderer a list of draw calls.
//! Windowing, shader compilation and texture decoding belong to the host.
//!
//! ## Quick Start
//!
//! ```
//! use parallax::*;
//!
//! let mut scene = ParallaxScene::new(SceneConfig::default()).unwrap();
//! let mut input = Input::new();
//! input.press(KeyCode::ArrowRight);
//!
//! scene.update(FrameInput { dt: 1.0 / 60.0, walk_right: input.walk_right() });
//!
//! for call in scene.draw() {
//!     let mesh = scene.mesh(call.mesh).unwrap();
//!     let uniforms = call.uniforms();
//!     // upload mesh.vertex_bytes(), mesh.index_bytes() and
//!     // bytemuck::bytes_of(&uniforms), then draw mesh.index_count() indices
//!     # let _ = (mesh, uniforms);
//! }
//! ```
//!
//! ## Conventions
//!
//! - Column-major matrices, column vectors: `T * R * S` scales first.
//! - Rotations are radians about +Z.
//! - Orthographic projection with OpenGL clip depth; visible `z` is `[-far, -near]`.

mod camera;
mod config;
mod draw;
mod input;
mod mesh;
mod scene;
mod sprite;
mod transform;

pub use camera::{CameraData, Projection};
pub use config::{ConfigError, SceneConfig, SceneTextures};
pub use draw::{
    BlendMode, DrawCall, MeshId, RenderState, SceneUniforms, ShaderKind, SpriteUniforms, TextureId,
};
pub use input::{Input, WALK_RIGHT_KEY};
pub use mesh::{MeshData, QUAD_INDICES, QuadVertex};
pub use scene::{
    AnimationState, BACKGROUND_MESH, CHARACTER_MESH, CLOUD_MESH, FrameInput, ParallaxScene,
    SUN_MESH,
};
pub use sprite::{SpriteAnimator, SpriteSheet};
pub use transform::{Transform, compose, compose_view, pivot_rotation, rotate_about_pivot};

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec2, Vec3};

// Re-export the winit key type used by `Input`
pub use winit::keyboard::KeyCode;
