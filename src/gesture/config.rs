//! Classifier thresholds
//!
//! Two tuning variants exist for drag and swipe detection. Distance-based
//! drag activation and distance+speed swipes are the defaults; hold-duration
//! drags and distance+duration swipes are available as alternates.

use crate::error::{check_threshold, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Default double-tap window in seconds
pub const DEFAULT_DOUBLE_TAP_TIME: f64 = 0.3;

/// Default double-tap radius in pixels
pub const DEFAULT_DOUBLE_TAP_RADIUS: f64 = 50.0;

/// Default maximum press duration that still counts as a tap
pub const DEFAULT_TAP_MAX_DURATION: f64 = 0.3;

/// Default drag slop in pixels
pub const DEFAULT_DRAG_DISTANCE: f64 = 10.0;

/// Default maximum press-to-release displacement that still counts as a tap
pub const DEFAULT_TAP_SLOP: f64 = DEFAULT_DRAG_DISTANCE;

/// When a pressed, not-yet-classified pointer becomes a drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DragActivation {
    /// Displacement from the press position exceeds `pixels`
    Distance { pixels: f64 },
    /// Pointer moves after being held for at least `seconds`
    Hold { seconds: f64 },
}

impl Default for DragActivation {
    fn default() -> Self {
        DragActivation::Distance {
            pixels: DEFAULT_DRAG_DISTANCE,
        }
    }
}

/// Swipe candidacy thresholds
///
/// A move qualifies once displacement reaches `min_distance` and either
/// the elapsed time is within `max_duration` or the instantaneous speed is
/// at least `min_speed`. Unset criteria never match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeThresholds {
    pub min_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_speed: Option<f64>,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_duration: None,
            min_speed: Some(1000.0),
        }
    }
}

impl SwipeThresholds {
    pub fn matches(&self, displacement: f64, elapsed: f64, speed: Option<f64>) -> bool {
        if displacement < self.min_distance {
            return false;
        }
        let quick = self.max_duration.is_some_and(|max| elapsed <= max);
        let fast = match (self.min_speed, speed) {
            (Some(min), Some(speed)) => speed >= min,
            _ => false,
        };
        quick || fast
    }
}

/// Full classifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Max time between two presses for a double tap (seconds)
    pub double_tap_time: f64,
    /// Max distance between two presses for a double tap (pixels)
    pub double_tap_radius: f64,
    /// Max press duration for a tap (seconds)
    pub tap_max_duration: f64,
    /// Max distance between press and release for a tap (pixels)
    pub tap_slop: f64,
    pub drag_activation: DragActivation,
    pub swipe: SwipeThresholds,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_time: DEFAULT_DOUBLE_TAP_TIME,
            double_tap_radius: DEFAULT_DOUBLE_TAP_RADIUS,
            tap_max_duration: DEFAULT_TAP_MAX_DURATION,
            tap_slop: DEFAULT_TAP_SLOP,
            drag_activation: DragActivation::default(),
            swipe: SwipeThresholds::default(),
        }
    }
}

impl GestureConfig {
    /// Reject negative, NaN or infinite thresholds
    pub fn validate(&self) -> ConfigResult<()> {
        check_threshold("double_tap_time", self.double_tap_time)?;
        check_threshold("double_tap_radius", self.double_tap_radius)?;
        check_threshold("tap_max_duration", self.tap_max_duration)?;
        check_threshold("tap_slop", self.tap_slop)?;

        match self.drag_activation {
            DragActivation::Distance { pixels } => check_threshold("drag_activation.pixels", pixels)?,
            DragActivation::Hold { seconds } => check_threshold("drag_activation.seconds", seconds)?,
        }

        check_threshold("swipe.min_distance", self.swipe.min_distance)?;
        if let Some(max) = self.swipe.max_duration {
            check_threshold("swipe.max_duration", max)?;
        }
        if let Some(min) = self.swipe.min_speed {
            check_threshold("swipe.min_speed", min)?;
        }
        if self.swipe.max_duration.is_none() && self.swipe.min_speed.is_none() {
            return Err(ConfigError::MissingSwipeCriterion);
        }

        Ok(())
    }
}
