//! Brush settings shared by the UI, the painter and the swipe trail

use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// Current brush: which sprite to paint and in what color
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushSettings {
    pub sprite: Option<String>,
    pub color: Rgba,
}

/// Brush handle shared between components
pub type SharedBrush = Arc<ParkingMutex<BrushSettings>>;

impl BrushSettings {
    pub fn new(sprite: impl Into<String>, color: Rgba) -> Self {
        Self {
            sprite: Some(sprite.into()),
            color,
        }
    }

    pub fn shared(self) -> SharedBrush {
        Arc::new(ParkingMutex::new(self))
    }

    pub fn set_sprite(&mut self, sprite: impl Into<String>) {
        self.sprite = Some(sprite.into());
        tracing::debug!("Brush sprite set to {:?}", self.sprite);
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        tracing::debug!("Brush color set to {:?}", color);
    }

    /// A brush can paint once it has a sprite and a visible color
    pub fn is_ready(&self) -> bool {
        self.sprite.is_some() && self.color.is_visible()
    }

    /// Trail gradient: the brush color fading to fully transparent
    pub fn trail_colors(&self) -> (Rgba, Rgba) {
        (self.color, self.color.with_alpha(0.0))
    }
}
