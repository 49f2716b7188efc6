//! The parallax scene: four quads, a walking character and two clouds.
//!
//! A frame is one [`ParallaxScene::update`] followed by one
//! [`ParallaxScene::draw`]:
//!
//! ```
//! use parallax::{FrameInput, ParallaxScene, SceneConfig};
//!
//! let mut scene = ParallaxScene::new(SceneConfig::default()).unwrap();
//!
//! scene.update(FrameInput { dt: 1.0 / 60.0, walk_right: true });
//! let calls = scene.draw();
//! assert_eq!(calls.len(), 4);
//! ```
//!
//! # Draw Order
//!
//! | # | Mesh       | Shader        | State       |
//! |---|------------|---------------|-------------|
//! | 1 | character  | `Spritesheet` | opaque      |
//! | 2 | background | `AlphaTest`   | opaque      |
//! | 3 | sun        | `AlphaTest`   | translucent |
//! | 4 | cloud      | `Cloud`       | translucent |
//! | 5 | cloud      | `Cloud`       | translucent |
//!
//! The sun is only drawn when [`SceneConfig::show_sun`] is set. Both clouds
//! share one mesh.

use glam::{Mat4, Vec3};

use crate::config::{ConfigError, SceneConfig};
use crate::draw::{DrawCall, MeshId, RenderState, ShaderKind, SpriteUniforms};
use crate::mesh::MeshData;
use crate::sprite::SpriteAnimator;
use crate::transform::{compose, rotate_about_pivot};

pub const CHARACTER_MESH: MeshId = MeshId(0);
pub const BACKGROUND_MESH: MeshId = MeshId(1);
pub const CLOUD_MESH: MeshId = MeshId(2);
pub const SUN_MESH: MeshId = MeshId(3);

/// The spinning cloud is stretched and parked left of center; it spins
/// about its own placement.
const SPINNING_CLOUD_POSITION: Vec3 = Vec3::new(-0.55, 0.0, 0.0);
const SPINNING_CLOUD_SCALE: Vec3 = Vec3::new(1.5, 1.0, 1.0);

const TILTED_CLOUD_POSITION: Vec3 = Vec3::new(0.4, 0.2, 0.0);
const TILTED_CLOUD_ROTATION: f32 = 1.0;

/// Per-frame input from the windowing layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// The "move" intent, see [`Input::walk_right`](crate::Input::walk_right).
    pub walk_right: bool,
}

/// Everything that changes from frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub character_position: Vec3,
    pub sprite: SpriteAnimator,
    /// Radians. Grows without bound; only its sine and cosine matter.
    pub cloud_rotation: f32,
}

impl AnimationState {
    fn new(config: &SceneConfig) -> Self {
        Self {
            character_position: Vec3::ZERO,
            sprite: SpriteAnimator::new(config.frame_step, config.frame_wrap),
            cloud_rotation: config.initial_cloud_rotation,
        }
    }
}

pub struct ParallaxScene {
    config: SceneConfig,
    meshes: [MeshData; 4],
    state: AnimationState,
}

impl ParallaxScene {
    /// Validates `config` and builds the scene's quads.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // Indexed by the *_MESH ids.
        let meshes = [
            MeshData::quad(0.1, 0.2, Vec3::new(0.0, -0.2, 0.0)),
            MeshData::quad(1.0, 1.0, Vec3::new(0.0, 0.0, -0.5)),
            MeshData::quad(0.25, 0.15, Vec3::ZERO),
            MeshData::quad(1.0, 1.0, Vec3::new(0.0, 0.0, 0.4)),
        ];
        log::debug!(
            "built {} quad meshes ({} vertices)",
            meshes.len(),
            meshes.iter().map(|m| m.vertices.len()).sum::<usize>()
        );

        let state = AnimationState::new(&config);
        Ok(Self {
            config,
            meshes,
            state,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    pub fn mesh(&self, id: MeshId) -> Option<&MeshData> {
        self.meshes.get(id.0)
    }

    /// Advances movement, the sprite frame and the cloud spin by one frame.
    ///
    /// Rates are per second; a negative or non-finite `dt` counts as zero.
    pub fn update(&mut self, input: FrameInput) {
        let dt = if input.dt.is_finite() && input.dt >= 0.0 {
            input.dt
        } else {
            log::warn!("ignoring invalid frame time {}", input.dt);
            0.0
        };

        if input.walk_right {
            self.state.character_position.x += self.config.walk_speed * dt;
        }
        self.state.sprite.advance();
        self.state.cloud_rotation += self.config.cloud_spin * dt;
    }

    /// The draw calls for the current state, in submission order.
    pub fn draw(&self) -> Vec<DrawCall> {
        let view = self.config.camera.view_matrix();
        let proj = self.config.projection.matrix();
        let textures = self.config.textures;
        let sheet = self.config.sprite_sheet;

        let frame = self.state.sprite.frame();
        let sprite = SpriteUniforms::new(sheet.tile_size, sheet.offset(frame));

        let mut calls = Vec::with_capacity(5);
        calls.push(DrawCall {
            mesh: CHARACTER_MESH,
            shader: ShaderKind::Spritesheet,
            texture: textures.character,
            model: Mat4::from_translation(self.state.character_position),
            view,
            proj,
            sprite: Some(sprite),
            state: RenderState::OPAQUE,
        });
        calls.push(DrawCall {
            mesh: BACKGROUND_MESH,
            shader: ShaderKind::AlphaTest,
            texture: textures.background,
            model: Mat4::IDENTITY,
            view,
            proj,
            sprite: None,
            state: RenderState::OPAQUE,
        });

        if self.config.show_sun {
            calls.push(DrawCall {
                mesh: SUN_MESH,
                shader: ShaderKind::AlphaTest,
                texture: textures.sun,
                model: Mat4::IDENTITY,
                view,
                proj,
                sprite: None,
                state: RenderState::TRANSLUCENT,
            });
        }

        let clouds = [self.spinning_cloud_matrix(), tilted_cloud_matrix()];
        for model in clouds {
            calls.push(DrawCall {
                mesh: CLOUD_MESH,
                shader: ShaderKind::Cloud,
                texture: textures.cloud,
                model,
                view,
                proj,
                sprite: None,
                state: RenderState::TRANSLUCENT,
            });
        }

        calls
    }

    fn spinning_cloud_matrix(&self) -> Mat4 {
        let base = Mat4::from_translation(SPINNING_CLOUD_POSITION)
            * Mat4::from_scale(SPINNING_CLOUD_SCALE);
        rotate_about_pivot(base, SPINNING_CLOUD_POSITION, self.state.cloud_rotation)
    }
}

fn tilted_cloud_matrix() -> Mat4 {
    compose(TILTED_CLOUD_POSITION, TILTED_CLOUD_ROTATION, Vec3::ONE)
}
