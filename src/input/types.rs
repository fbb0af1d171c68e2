use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerPhase {
    Begin,
    Move,
    End,
    Cancel,
}

impl std::fmt::Display for PointerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerPhase::Begin => write!(f, "begin"),
            PointerPhase::Move => write!(f, "move"),
            PointerPhase::End => write!(f, "end"),
            PointerPhase::Cancel => write!(f, "cancel"),
        }
    }
}

/// One pointer observation, produced once per frame by the input source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    /// Identifier of the finger/pointer; only one is tracked at a time
    #[serde(default)]
    pub pointer_id: u64,
    /// Position in screen pixels
    pub position: Vec2,
    pub phase: PointerPhase,
    /// Monotonic time in seconds
    pub timestamp: f64,
}

impl PointerSample {
    pub fn new(pointer_id: u64, x: f64, y: f64, phase: PointerPhase, timestamp: f64) -> Self {
        Self {
            pointer_id,
            position: Vec2::new(x, y),
            phase,
            timestamp,
        }
    }

    /// Sample for the primary pointer (id 0)
    pub fn primary(x: f64, y: f64, phase: PointerPhase, timestamp: f64) -> Self {
        Self::new(0, x, y, phase, timestamp)
    }
}
