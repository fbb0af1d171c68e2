//! Application configuration
//!
//! Loaded from a JSON file; every section falls back to its defaults when
//! omitted, and the result is validated before anything is built from it.

use crate::error::{check_positive, check_threshold, ConfigResult};
use crate::geometry::{OrthoCamera, Vec2};
use crate::gesture::config::GestureConfig;
use crate::scene::brush::{BrushSettings, Rgba};
use crate::scene::trail::TrailConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file to use when none is given
pub const CONFIG_ENV_VAR: &str = "TOUCH_CANVAS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub gesture: GestureConfig,
    pub camera: OrthoCamera,
    /// Brush in effect at startup
    pub brush: BrushSettings,
    pub trail: TrailConfig,
    /// Half size of a painted sprite in world units
    pub sprite_half_extents: Vec2,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            camera: OrthoCamera::default(),
            brush: BrushSettings::new("circle", Rgba::WHITE),
            trail: TrailConfig::default(),
            sprite_half_extents: Vec2::new(0.5, 0.5),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.gesture.validate()?;
        // A zero-sized camera or viewport would collapse every tap onto one point
        check_positive("camera.half_height", self.camera.half_height)?;
        check_positive("camera.viewport_width", self.camera.viewport_width)?;
        check_positive("camera.viewport_height", self.camera.viewport_height)?;
        check_threshold("sprite_half_extents.x", self.sprite_half_extents.x)?;
        check_threshold("sprite_half_extents.y", self.sprite_half_extents.y)?;
        Ok(())
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, else from `$TOUCH_CANVAS_CONFIG`, else defaults
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                tracing::debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
