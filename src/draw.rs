//! Draw calls handed to the renderer.
//!
//! The scene does not own a GPU device. Each frame it produces a list of
//! [`DrawCall`]s: which mesh, which shader, which texture, the matrices to
//! upload and the fixed-function state to draw with. A wgpu-based renderer
//! consumes them through [`DrawCall::uniforms`], [`SpriteUniforms`] and the
//! descriptor helpers on [`RenderState`].

use glam::{Mat4, Vec2};

/// Type-safe handle to one of the scene's meshes.
///
/// Indexes [`ParallaxScene::meshes`](crate::ParallaxScene::meshes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Type-safe handle to a texture owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Shader program a draw call expects to be bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Samples one tile of a sprite sheet and discards transparent texels.
    Spritesheet,
    /// Samples the whole texture and discards transparent texels.
    AlphaTest,
    /// Samples the whole texture with alpha kept for blending.
    Cloud,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Opaque,
    Alpha,
}

/// Fixed-function state for a draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub depth_test: bool,
    pub blend: BlendMode,
}

impl RenderState {
    /// Depth tested, no blending. Used for the character and background.
    pub const OPAQUE: Self = Self {
        depth_test: true,
        blend: BlendMode::Opaque,
    };

    /// Alpha blended without depth testing, so transparent texels never
    /// hide what is drawn after them.
    pub const TRANSLUCENT: Self = Self {
        depth_test: false,
        blend: BlendMode::Alpha,
    };

    pub fn blend_state(&self) -> Option<wgpu::BlendState> {
        match self.blend {
            BlendMode::Opaque => None,
            BlendMode::Alpha => Some(wgpu::BlendState::ALPHA_BLENDING),
        }
    }

    pub fn depth_compare(&self) -> wgpu::CompareFunction {
        if self.depth_test {
            wgpu::CompareFunction::Less
        } else {
            wgpu::CompareFunction::Always
        }
    }

    pub fn depth_write(&self) -> bool {
        self.depth_test
    }
}

/// Matrices for one draw call, laid out for a uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Object to world.
    pub model: [[f32; 4]; 4],
    /// World to camera.
    pub view: [[f32; 4]; 4],
    /// Camera to clip space.
    pub proj: [[f32; 4]; 4],
}

/// Sprite-sheet tile selection, laid out for a uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteUniforms {
    /// Size of one tile in normalized texture coordinates.
    pub size: [f32; 2],
    /// Selected `(column, row)`, in tiles.
    pub offset: [f32; 2],
}

impl SpriteUniforms {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self {
            size: size.to_array(),
            offset: offset.to_array(),
        }
    }
}

/// A mesh to draw with its bindings and matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub shader: ShaderKind,
    pub texture: TextureId,
    pub model: Mat4,
    pub view: Mat4,
    pub proj: Mat4,
    /// Only set for [`ShaderKind::Spritesheet`].
    pub sprite: Option<SpriteUniforms>,
    pub state: RenderState,
}

impl DrawCall {
    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms {
            model: self.model.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            proj: self.proj.to_cols_array_2d(),
        }
    }

    /// Clip-space matrix `proj * view * model`.
    pub fn model_view_proj(&self) -> Mat4 {
        self.proj * self.view * self.model
    }
}
