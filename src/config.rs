use glam::Vec3;

use crate::camera::{CameraData, Projection};
use crate::draw::TextureId;
use crate::sprite::SpriteSheet;

/// Errors reported by [`SceneConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The sprite sheet has no columns to select frames from.
    ZeroColumns,
    /// The sprite frame step must be greater than zero.
    NonPositiveStep(f32),
    /// The sprite wrap threshold must be greater than zero.
    NonPositiveWrap(f32),
    /// A numeric setting was NaN or infinite.
    NonFinite(&'static str),
    /// Two opposite projection planes coincide.
    DegenerateProjection,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroColumns => write!(f, "Sprite sheet must have at least one column"),
            ConfigError::NonPositiveStep(step) => {
                write!(f, "Sprite frame step must be positive, got {}", step)
            }
            ConfigError::NonPositiveWrap(wrap) => {
                write!(f, "Sprite wrap threshold must be positive, got {}", wrap)
            }
            ConfigError::NonFinite(name) => write!(f, "Setting '{}' is not finite", name),
            ConfigError::DegenerateProjection => {
                write!(f, "Projection volume has zero width, height or depth")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Texture slots bound by the scene's draw calls.
///
/// The ids are opaque to this crate; the renderer maps them to real textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneTextures {
    pub character: TextureId,
    pub background: TextureId,
    pub cloud: TextureId,
    pub sun: TextureId,
}

impl Default for SceneTextures {
    fn default() -> Self {
        Self {
            character: TextureId(0),
            background: TextureId(1),
            cloud: TextureId(2),
            sun: TextureId(3),
        }
    }
}

/// Tunables for a [`ParallaxScene`](crate::ParallaxScene).
///
/// Defaults reproduce the reference scene.
///
/// ```
/// use parallax::{CameraData, SceneConfig};
///
/// let config = SceneConfig::new()
///     .walk_speed(1.0)
///     .camera(CameraData::new().at(-1.0, 0.0, 0.0))
///     .show_sun(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Character speed in units per second.
    pub walk_speed: f32,
    /// Cloud spin in radians per second.
    pub cloud_spin: f32,
    pub initial_cloud_rotation: f32,
    pub sprite_sheet: SpriteSheet,
    pub frame_step: f32,
    pub frame_wrap: f32,
    pub camera: CameraData,
    pub projection: Projection,
    /// The sun quad is built either way; this only adds its draw call.
    pub show_sun: bool,
    pub textures: SceneTextures,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            walk_speed: 0.5,
            cloud_spin: 1.0,
            initial_cloud_rotation: 1.0,
            sprite_sheet: SpriteSheet::default(),
            frame_step: 0.2,
            frame_wrap: 10.0,
            camera: CameraData::default(),
            projection: Projection::default(),
            show_sun: false,
            textures: SceneTextures::default(),
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walk_speed(mut self, speed: f32) -> Self {
        self.walk_speed = speed;
        self
    }

    pub fn cloud_spin(mut self, radians_per_second: f32) -> Self {
        self.cloud_spin = radians_per_second;
        self
    }

    pub fn initial_cloud_rotation(mut self, radians: f32) -> Self {
        self.initial_cloud_rotation = radians;
        self
    }

    pub fn sprite_sheet(mut self, sheet: SpriteSheet) -> Self {
        self.sprite_sheet = sheet;
        self
    }

    pub fn frame_timing(mut self, step: f32, wrap_after: f32) -> Self {
        self.frame_step = step;
        self.frame_wrap = wrap_after;
        self
    }

    pub fn camera(mut self, camera: CameraData) -> Self {
        self.camera = camera;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn show_sun(mut self, show: bool) -> Self {
        self.show_sun = show;
        self
    }

    pub fn textures(mut self, textures: SceneTextures) -> Self {
        self.textures = textures;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("walk_speed", self.walk_speed),
            ("cloud_spin", self.cloud_spin),
            ("initial_cloud_rotation", self.initial_cloud_rotation),
            ("frame_step", self.frame_step),
            ("frame_wrap", self.frame_wrap),
            ("camera.rotation", self.camera.rotation),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !self.sprite_sheet.tile_size.is_finite() {
            return Err(ConfigError::NonFinite("sprite_sheet.tile_size"));
        }
        if !self.camera.position.is_finite() {
            return Err(ConfigError::NonFinite("camera.position"));
        }
        if !Vec3::new(self.projection.left, self.projection.right, self.projection.bottom)
            .is_finite()
            || !Vec3::new(self.projection.top, self.projection.near, self.projection.far)
                .is_finite()
        {
            return Err(ConfigError::NonFinite("projection"));
        }

        if self.sprite_sheet.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.frame_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.frame_step));
        }
        if self.frame_wrap <= 0.0 {
            return Err(ConfigError::NonPositiveWrap(self.frame_wrap));
        }
        if self.projection.is_degenerate() {
            return Err(ConfigError::DegenerateProjection);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_columns() {
        let config = SceneConfig::new().sprite_sheet(SpriteSheet::new(glam::Vec2::ONE, 0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroColumns));
    }

    #[test]
    fn rejects_bad_frame_timing() {
        assert_eq!(
            SceneConfig::new().frame_timing(0.0, 10.0).validate(),
            Err(ConfigError::NonPositiveStep(0.0))
        );
        assert_eq!(
            SceneConfig::new().frame_timing(0.2, -1.0).validate(),
            Err(ConfigError::NonPositiveWrap(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            SceneConfig::new().walk_speed(f32::NAN).validate(),
            Err(ConfigError::NonFinite("walk_speed"))
        );
        assert_eq!(
            SceneConfig::new()
                .camera(CameraData::new().at(f32::INFINITY, 0.0, 0.0))
                .validate(),
            Err(ConfigError::NonFinite("camera.position"))
        );
    }

    #[test]
    fn rejects_flat_projection() {
        let config = SceneConfig::new().projection(Projection::for_aspect(0.0));
        assert_eq!(config.validate(), Err(ConfigError::DegenerateProjection));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NonFinite("cloud_spin").to_string(),
            "Setting 'cloud_spin' is not finite"
        );
        assert_eq!(
            ConfigError::NonPositiveStep(-0.5).to_string(),
            "Sprite frame step must be positive, got -0.5"
        );
    }
}
