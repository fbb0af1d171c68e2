//! Async gesture driver
//!
//! Runs the classifier as a single task: it waits for either the next
//! pointer sample or the pending tap's deadline, whichever comes first, and
//! publishes every resulting event on the bus in order.
//!
//! Sample timestamps are mapped onto the runtime clock from the first sample
//! onwards, so a deferred tap fires `double_tap_time` after the release even
//! when no further input arrives.

use crate::geometry::ScreenToWorld;
use crate::gesture::bus::EventBus;
use crate::gesture::classifier::GestureClassifier;
use crate::gesture::events::GestureEvent;
use crate::input::source::SampleSource;
use crate::input::types::PointerSample;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Counters collected over one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStats {
    pub samples: usize,
    pub events: usize,
    pub taps: usize,
    pub double_taps: usize,
    pub drags: usize,
    pub swipes: usize,
}

impl DriverStats {
    fn record(&mut self, event: &GestureEvent) {
        self.events += 1;
        match event {
            GestureEvent::Tap { .. } => self.taps += 1,
            GestureEvent::DoubleTap { .. } => self.double_taps += 1,
            GestureEvent::DragStart { .. } => self.drags += 1,
            GestureEvent::SwipeStart { .. } => self.swipes += 1,
            _ => {}
        }
    }
}

pub struct GestureDriver<T> {
    classifier: GestureClassifier<T>,
    bus: EventBus,
    /// Runtime instant matching the first sample's timestamp
    clock: Option<(Instant, f64)>,
    stats: DriverStats,
}

impl<T: ScreenToWorld + Send> GestureDriver<T> {
    pub fn new(classifier: GestureClassifier<T>, bus: EventBus) -> Self {
        Self {
            classifier,
            bus,
            clock: None,
            stats: DriverStats::default(),
        }
    }

    pub fn classifier(&self) -> &GestureClassifier<T> {
        &self.classifier
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn stats(&self) -> &DriverStats {
        &self.stats
    }

    fn emit(&mut self, event: GestureEvent) {
        tracing::debug!("Gesture: {}", event);
        self.stats.record(&event);
        self.bus.publish(&event);
    }

    /// Classify one sample and publish what it produced
    pub fn handle_sample(&mut self, sample: &PointerSample) {
        self.clock.get_or_insert((Instant::now(), sample.timestamp));
        self.stats.samples += 1;
        for event in self.classifier.process(sample) {
            self.emit(event);
        }
    }

    fn instant_for(&self, timestamp: f64) -> Option<Instant> {
        let (origin_instant, origin_ts) = self.clock?;
        let offset = Duration::try_from_secs_f64((timestamp - origin_ts).max(0.0)).ok()?;
        origin_instant.checked_add(offset)
    }

    fn timestamp_for(&self, instant: Instant) -> Option<f64> {
        let (origin_instant, origin_ts) = self.clock?;
        Some(origin_ts + instant.saturating_duration_since(origin_instant).as_secs_f64())
    }

    /// Drive the classifier until the source closes
    ///
    /// A tap still pending when input ends is published before returning.
    pub async fn run<S: SampleSource>(&mut self, source: &mut S) -> DriverStats {
        tracing::info!("Gesture driver started");

        loop {
            let deadline = self
                .classifier
                .next_deadline()
                .and_then(|ts| self.instant_for(ts).map(|at| (at, ts)));

            tokio::select! {
                sample = source.next_sample() => match sample {
                    Some(sample) => self.handle_sample(&sample),
                    None => break,
                },
                Some(ts) = wait_until(deadline) => {
                    // The timer only fires once the deadline is reached
                    let now = self
                        .timestamp_for(Instant::now())
                        .map_or(ts, |now| now.max(ts));
                    if let Some(event) = self.classifier.poll(now) {
                        self.emit(event);
                    }
                }
            }
        }

        if let Some(event) = self.classifier.flush() {
            self.emit(event);
        }

        tracing::info!(
            "Gesture driver stopped (samples={}, events={})",
            self.stats.samples,
            self.stats.events
        );
        self.stats.clone()
    }
}

/// Sleep until the deadline, or forever if there is none
async fn wait_until(deadline: Option<(Instant, f64)>) -> Option<f64> {
    match deadline {
        Some((at, ts)) => {
            tokio::time::sleep_until(at).await;
            Some(ts)
        }
        None => std::future::pending().await,
    }
}
