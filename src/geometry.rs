//! 2D vector math and screen-to-world transforms
//!
//! Pointer samples arrive in screen pixels (origin bottom-left, y up). Every
//! positional gesture event is annotated with a world-space position through
//! a [`ScreenToWorld`] implementation supplied by the host.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point or vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero for a zero-length vector
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f64::EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Converts a screen-space pixel position into world space
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

impl<F> ScreenToWorld for F
where
    F: Fn(Vec2) -> Vec2,
{
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self(screen)
    }
}

/// Transform that leaves positions untouched (world units == pixels)
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl ScreenToWorld for IdentityTransform {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen
    }
}

/// Orthographic 2D camera
///
/// `half_height` is the number of world units from the view center to the
/// top edge; the horizontal extent follows from the viewport aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrthoCamera {
    pub center: Vec2,
    pub half_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            half_height: 5.0,
            viewport_width: 1080.0,
            viewport_height: 1920.0,
        }
    }
}

impl OrthoCamera {
    /// World units per screen pixel
    pub fn units_per_pixel(&self) -> f64 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        (self.half_height * 2.0) / self.viewport_height
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let upp = self.units_per_pixel();
        if upp <= 0.0 {
            return Vec2::ZERO;
        }
        let half_viewport = Vec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0);
        (world - self.center) * (1.0 / upp) + half_viewport
    }
}

impl ScreenToWorld for OrthoCamera {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let half_viewport = Vec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0);
        self.center + (screen - half_viewport) * self.units_per_pixel()
    }
}
