//! Synchronous in-process delivery of gesture events
//!
//! Listeners implement only the callbacks they care about. The bus keeps
//! them behind shared mutexes so the host can inspect a listener (e.g. the
//! painter's scene) while the driver task owns the bus.

use crate::geometry::Vec2;
use crate::gesture::events::GestureEvent;
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Receiver of gesture events, one callback per variant
#[allow(unused_variables)]
pub trait GestureListener {
    fn on_tap(&mut self, world: Vec2) {}

    fn on_double_tap(&mut self, world: Vec2) {}

    fn on_drag_start(&mut self, world: Vec2) {}

    fn on_drag(&mut self, world: Vec2) {}

    fn on_drag_end(&mut self) {}

    fn on_swipe_start(&mut self, world: Vec2) {}

    fn on_swipe_update(&mut self, direction: Vec2, world: Vec2) {}

    fn on_swipe_end(&mut self, direction: Vec2, world: Vec2) {}

    /// Route an event to the matching callback
    fn dispatch(&mut self, event: &GestureEvent) {
        match *event {
            GestureEvent::Tap { world } => self.on_tap(world),
            GestureEvent::DoubleTap { world } => self.on_double_tap(world),
            GestureEvent::DragStart { world } => self.on_drag_start(world),
            GestureEvent::Drag { world } => self.on_drag(world),
            GestureEvent::DragEnd => self.on_drag_end(),
            GestureEvent::SwipeStart { world } => self.on_swipe_start(world),
            GestureEvent::SwipeUpdate { direction, world } => self.on_swipe_update(direction, world),
            GestureEvent::SwipeEnd { direction, world } => self.on_swipe_end(direction, world),
        }
    }
}

/// Listener handle shared between the bus and its owner
pub type SharedListener = Arc<ParkingMutex<dyn GestureListener + Send>>;

/// Ordered list of listeners; events are delivered in subscription order
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<SharedListener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn publish(&self, event: &GestureEvent) {
        tracing::trace!("Publishing {} to {} listeners", event, self.listeners.len());
        for listener in &self.listeners {
            listener.lock().dispatch(event);
        }
    }
}

/// Listener that records every event it sees
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<GestureEvent>,
}

impl GestureListener for EventLog {
    fn dispatch(&mut self, event: &GestureEvent) {
        self.events.push(*event);
    }
}
