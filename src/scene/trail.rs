//! Swipe trail visual
//!
//! Keeps the world-space points traced by the current swipe so a renderer
//! can draw them, colored by the brush and fading to transparent.

use crate::geometry::Vec2;
use crate::gesture::bus::GestureListener;
use crate::scene::brush::{Rgba, SharedBrush};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Oldest points are dropped beyond this length
    pub max_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { max_points: 64 }
    }
}

pub struct SwipeTrail {
    config: TrailConfig,
    brush: SharedBrush,
    active: bool,
    points: VecDeque<Vec2>,
    start_color: Rgba,
    end_color: Rgba,
}

impl SwipeTrail {
    pub fn new(config: TrailConfig, brush: SharedBrush) -> Self {
        Self {
            config,
            brush,
            active: false,
            points: VecDeque::new(),
            start_color: Rgba::WHITE,
            end_color: Rgba::TRANSPARENT,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn colors(&self) -> (Rgba, Rgba) {
        (self.start_color, self.end_color)
    }

    fn activate(&mut self, anchor: Vec2) {
        let (start, end) = self.brush.lock().trail_colors();
        self.start_color = start;
        self.end_color = end;
        self.points.clear();
        self.active = true;
        self.push(anchor);
    }

    fn push(&mut self, point: Vec2) {
        if self.config.max_points == 0 {
            return;
        }
        while self.points.len() >= self.config.max_points {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.points.clear();
    }
}

impl GestureListener for SwipeTrail {
    fn on_double_tap(&mut self, _world: Vec2) {
        self.deactivate();
    }

    fn on_swipe_start(&mut self, world: Vec2) {
        self.activate(world);
    }

    fn on_swipe_update(&mut self, _direction: Vec2, world: Vec2) {
        if self.active {
            self.push(world);
        }
    }

    fn on_swipe_end(&mut self, _direction: Vec2, _world: Vec2) {
        self.deactivate();
    }
}
