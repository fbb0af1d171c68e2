//! Sprite painter
//!
//! Tap paints a sprite with the current brush, double tap erases the
//! painted sprite under the finger, drag moves it, and a swipe wipes the
//! canvas. Only objects this painter spawned are ever touched; anything else
//! the world reports under the finger is left alone.

use crate::geometry::Vec2;
use crate::gesture::bus::GestureListener;
use crate::scene::brush::SharedBrush;
use crate::scene::world::{ObjectId, SceneWorld, SpriteSpec};
use std::collections::HashSet;

pub struct SpritePainter<W> {
    world: W,
    brush: SharedBrush,
    owned: HashSet<ObjectId>,
    selected: Option<ObjectId>,
}

impl<W: SceneWorld> SpritePainter<W> {
    pub fn new(world: W, brush: SharedBrush) -> Self {
        Self {
            world,
            brush,
            owned: HashSet::new(),
            selected: None,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn brush(&self) -> &SharedBrush {
        &self.brush
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub fn owns(&self, id: ObjectId) -> bool {
        self.owned.contains(&id)
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Owned object under a world position
    fn owned_hit(&self, position: Vec2) -> Option<ObjectId> {
        self.world
            .hit_test(position)
            .filter(|id| self.owned.contains(id))
    }

    /// Paint a sprite with the current brush; no-op if the brush is incomplete
    pub fn create_object(&mut self, position: Vec2) -> Option<ObjectId> {
        let brush = self.brush.lock().clone();
        let spec = match brush.sprite {
            Some(sprite) if brush.color.is_visible() => SpriteSpec {
                sprite,
                color: brush.color,
            },
            _ => {
                tracing::debug!("Brush not ready, nothing painted");
                return None;
            }
        };

        let id = self.world.spawn(&spec, position);
        self.owned.insert(id);
        tracing::debug!(
            "Painted {} at ({:.2}, {:.2}) as {}",
            spec.sprite,
            position.x,
            position.y,
            id
        );
        Some(id)
    }

    /// Erase the painted object under a world position
    pub fn destroy_object_at(&mut self, position: Vec2) -> Option<ObjectId> {
        let id = self.owned_hit(position)?;
        self.owned.remove(&id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.world.despawn(id);
        tracing::debug!("Erased {}", id);
        Some(id)
    }

    pub fn begin_drag(&mut self, position: Vec2) -> Option<ObjectId> {
        self.selected = self.owned_hit(position);
        if let Some(id) = self.selected {
            tracing::debug!("Selected {} for dragging", id);
        }
        self.selected
    }

    pub fn drag_to(&mut self, position: Vec2) {
        if let Some(id) = self.selected {
            if !self.world.set_position(id, position) {
                // Removed behind our back
                self.owned.remove(&id);
                self.selected = None;
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.selected = None;
    }

    /// Remove every painted object, returning how many were removed
    pub fn clear_all(&mut self) -> usize {
        let count = self.owned.len();
        for id in self.owned.drain() {
            self.world.despawn(id);
        }
        self.selected = None;
        tracing::info!("Canvas wiped ({} objects removed)", count);
        count
    }
}

impl<W: SceneWorld> GestureListener for SpritePainter<W> {
    fn on_tap(&mut self, world: Vec2) {
        self.create_object(world);
    }

    fn on_double_tap(&mut self, world: Vec2) {
        self.destroy_object_at(world);
    }

    fn on_drag_start(&mut self, world: Vec2) {
        self.begin_drag(world);
    }

    fn on_drag(&mut self, world: Vec2) {
        self.drag_to(world);
    }

    fn on_drag_end(&mut self) {
        self.end_drag();
    }

    fn on_swipe_end(&mut self, _direction: Vec2, _world: Vec2) {
        self.clear_all();
    }
}
