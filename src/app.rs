//! Canvas assembly
//!
//! Wires the classifier, painter and swipe trail together from an
//! [`AppConfig`], the way a host scene would at startup.

use crate::config::AppConfig;
use crate::driver::{DriverStats, GestureDriver};
use crate::error::ConfigResult;
use crate::geometry::OrthoCamera;
use crate::gesture::bus::{EventBus, EventLog};
use crate::gesture::classifier::GestureClassifier;
use crate::gesture::events::GestureEvent;
use crate::input::source::SampleSource;
use crate::scene::brush::{Rgba, SharedBrush};
use crate::scene::painter::SpritePainter;
use crate::scene::trail::SwipeTrail;
use crate::scene::world::MemoryWorld;
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

pub struct CanvasApp {
    driver: GestureDriver<OrthoCamera>,
    brush: SharedBrush,
    painter: Arc<ParkingMutex<SpritePainter<MemoryWorld>>>,
    trail: Arc<ParkingMutex<SwipeTrail>>,
    log: Arc<ParkingMutex<EventLog>>,
}

impl CanvasApp {
    pub fn new(config: &AppConfig) -> ConfigResult<Self> {
        config.validate()?;

        let classifier = GestureClassifier::new(config.gesture, config.camera)?;
        let brush = config.brush.clone().shared();
        let painter = Arc::new(ParkingMutex::new(SpritePainter::new(
            MemoryWorld::new(config.sprite_half_extents),
            brush.clone(),
        )));
        let trail = Arc::new(ParkingMutex::new(SwipeTrail::new(config.trail, brush.clone())));
        let log = Arc::new(ParkingMutex::new(EventLog::default()));

        let mut bus = EventBus::new();
        bus.subscribe(painter.clone());
        bus.subscribe(trail.clone());
        bus.subscribe(log.clone());

        tracing::info!("Canvas ready with {} gesture listeners", bus.len());

        Ok(Self {
            driver: GestureDriver::new(classifier, bus),
            brush,
            painter,
            trail,
            log,
        })
    }

    /// Brush button: choose the sprite to paint
    pub fn set_sprite(&self, sprite: impl Into<String>) {
        self.brush.lock().set_sprite(sprite);
    }

    /// Color button: choose the paint color
    pub fn set_color(&self, color: Rgba) {
        self.brush.lock().set_color(color);
    }

    pub fn painter(&self) -> &Arc<ParkingMutex<SpritePainter<MemoryWorld>>> {
        &self.painter
    }

    pub fn trail(&self) -> &Arc<ParkingMutex<SwipeTrail>> {
        &self.trail
    }

    /// Every event published so far
    pub fn events(&self) -> Vec<GestureEvent> {
        self.log.lock().events.clone()
    }

    pub async fn run<S: SampleSource>(&mut self, source: &mut S) -> DriverStats {
        self.driver.run(source).await
    }
}
