//! Scene world seam
//!
//! The painter never touches rendering or physics directly. It asks a
//! [`SceneWorld`] to spawn, move and remove sprites and to report which
//! object lies under a world position.

use crate::geometry::Vec2;
use crate::scene::brush::Rgba;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle of an object living in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub sprite: String,
    pub color: Rgba,
}

/// Engine facilities the painter relies on
pub trait SceneWorld {
    fn spawn(&mut self, spec: &SpriteSpec, position: Vec2) -> ObjectId;

    /// Returns false if the object no longer exists
    fn despawn(&mut self, id: ObjectId) -> bool;

    /// Returns false if the object no longer exists
    fn set_position(&mut self, id: ObjectId, position: Vec2) -> bool;

    /// Topmost object under a world position
    fn hit_test(&self, position: Vec2) -> Option<ObjectId>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    pub id: ObjectId,
    pub spec: SpriteSpec,
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl SceneObject {
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.position.x).abs() <= self.half_extents.x
            && (point.y - self.position.y).abs() <= self.half_extents.y
    }
}

/// In-memory world with axis-aligned sprite bounds
///
/// Later objects are drawn above earlier ones, so hit tests scan from the
/// back of the list.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    objects: Vec<SceneObject>,
    sprite_half_extents: Vec2,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new(Vec2::new(0.5, 0.5))
    }
}

impl MemoryWorld {
    pub fn new(sprite_half_extents: Vec2) -> Self {
        Self {
            objects: Vec::new(),
            sprite_half_extents,
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneWorld for MemoryWorld {
    fn spawn(&mut self, spec: &SpriteSpec, position: Vec2) -> ObjectId {
        let id = ObjectId::new();
        self.objects.push(SceneObject {
            id,
            spec: spec.clone(),
            position,
            half_extents: self.sprite_half_extents,
        });
        id
    }

    fn despawn(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        self.objects.len() != before
    }

    fn set_position(&mut self, id: ObjectId, position: Vec2) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    fn hit_test(&self, position: Vec2) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.contains(position))
            .map(|o| o.id)
    }
}
