//! Painting interactions driven by gestures
//!
//! The painter places, moves and erases sprites in a [`SceneWorld`]; the
//! swipe trail traces swipes. Both read the shared [`BrushSettings`].

pub mod brush;
pub mod painter;
pub mod trail;
pub mod world;

pub use brush::{BrushSettings, Rgba, SharedBrush};
pub use painter::SpritePainter;
pub use trail::{SwipeTrail, TrailConfig};
pub use world::{MemoryWorld, ObjectId, SceneObject, SceneWorld, SpriteSpec};
