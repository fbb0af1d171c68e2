use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// Semantic gesture produced by the classifier
///
/// Positions are world-space. Swipe directions are unit vectors in screen
/// space, measured from the press position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GestureEvent {
    Tap { world: Vec2 },
    DoubleTap { world: Vec2 },
    DragStart { world: Vec2 },
    Drag { world: Vec2 },
    DragEnd,
    /// `world` is where the swipe started
    SwipeStart { world: Vec2 },
    SwipeUpdate { direction: Vec2, world: Vec2 },
    SwipeEnd { direction: Vec2, world: Vec2 },
}

impl GestureEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::Tap { .. } => "tap",
            GestureEvent::DoubleTap { .. } => "double-tap",
            GestureEvent::DragStart { .. } => "drag-start",
            GestureEvent::Drag { .. } => "drag",
            GestureEvent::DragEnd => "drag-end",
            GestureEvent::SwipeStart { .. } => "swipe-start",
            GestureEvent::SwipeUpdate { .. } => "swipe-update",
            GestureEvent::SwipeEnd { .. } => "swipe-end",
        }
    }

    /// World position carried by the event, if any
    pub fn world(&self) -> Option<Vec2> {
        match *self {
            GestureEvent::Tap { world }
            | GestureEvent::DoubleTap { world }
            | GestureEvent::DragStart { world }
            | GestureEvent::Drag { world }
            | GestureEvent::SwipeStart { world }
            | GestureEvent::SwipeUpdate { world, .. }
            | GestureEvent::SwipeEnd { world, .. } => Some(world),
            GestureEvent::DragEnd => None,
        }
    }
}

impl std::fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.world() {
            Some(world) => write!(f, "{} at ({:.2}, {:.2})", self.name(), world.x, world.y),
            None => write!(f, "{}", self.name()),
        }
    }
}
