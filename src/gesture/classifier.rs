//! Single-pointer gesture classifier
//!
//! Consumes one [`PointerSample`] per frame and turns a touch lifecycle
//! into taps, double taps, drags and swipes.
//!
//! A released press is not reported as a tap right away: it is held as a
//! pending tap until `double_tap_time` has passed since the release, so a
//! second press nearby can turn the pair into a single double tap instead.
//! The host drives that timer through [`GestureClassifier::next_deadline`]
//! and [`GestureClassifier::poll`]. A new press that cannot pair with the
//! pending tap confirms it immediately, before its deadline, so taps stay in
//! order with the events of the next press.

use crate::error::{ConfigResult, SampleRejection};
use crate::geometry::{ScreenToWorld, Vec2};
use crate::gesture::config::{DragActivation, GestureConfig};
use crate::gesture::events::GestureEvent;
use crate::input::types::{PointerPhase, PointerSample};

/// What the tracked pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer down, or the press was consumed by a double tap
    Idle,
    /// Pointer down, not yet a drag or swipe
    Armed,
    Dragging,
    Swiping,
}

#[derive(Debug, Clone, Copy)]
struct Touch {
    pointer_id: u64,
    start_position: Vec2,
    start_time: f64,
    last_position: Vec2,
    last_time: f64,
    /// Set when the press produced a double tap; the rest of the lifecycle is ignored
    consumed: bool,
}

#[derive(Debug, Clone, Copy)]
struct TapRecord {
    position: Vec2,
    time: f64,
}

#[derive(Debug, Clone, Copy)]
struct PendingTap {
    world: Vec2,
    deadline: f64,
}

/// Classifies the lifecycle of one tracked pointer into [`GestureEvent`]s,
/// annotating positions through the injected [`ScreenToWorld`] transform.
pub struct GestureClassifier<T> {
    config: GestureConfig,
    transform: T,
    phase: GesturePhase,
    touch: Option<Touch>,
    last_tap: Option<TapRecord>,
    pending_tap: Option<PendingTap>,
    last_timestamp: Option<f64>,
}

impl<T: ScreenToWorld> GestureClassifier<T> {
    /// Create a classifier, rejecting invalid thresholds up front
    pub fn new(config: GestureConfig, transform: T) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transform,
            phase: GesturePhase::Idle,
            touch: None,
            last_tap: None,
            pending_tap: None,
            last_timestamp: None,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_pointer_down(&self) -> bool {
        self.touch.is_some()
    }

    /// Time at which the pending tap will fire, if one is waiting
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending_tap.map(|tap| tap.deadline)
    }

    /// Fire the pending tap if its deadline has passed
    pub fn poll(&mut self, now: f64) -> Option<GestureEvent> {
        match self.pending_tap {
            Some(tap) if tap.deadline <= now => {
                self.pending_tap = None;
                tracing::debug!("Tap confirmed at t={:.3}", now);
                Some(GestureEvent::Tap { world: tap.world })
            }
            _ => None,
        }
    }

    /// Fire the pending tap regardless of its deadline (end of input)
    pub fn flush(&mut self) -> Option<GestureEvent> {
        self.pending_tap
            .take()
            .map(|tap| GestureEvent::Tap { world: tap.world })
    }

    /// Classify one sample, returning the events it produced in order
    pub fn process(&mut self, sample: &PointerSample) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        if let Some(touch) = &self.touch {
            if sample.pointer_id != touch.pointer_id {
                tracing::trace!(
                    "Ignoring {} from secondary pointer {}",
                    sample.phase,
                    sample.pointer_id
                );
                return events;
            }
        }

        if self.last_timestamp.is_some_and(|last| sample.timestamp < last) {
            self.reject(SampleRejection::TimeWentBackwards, &mut events);
            // Clock discontinuity: the committed tap can no longer pair, confirm it
            events.extend(self.flush());
            self.last_tap = None;
            self.pending_tap = None;
            self.last_timestamp = None;
            return events;
        }
        self.last_timestamp = Some(sample.timestamp);

        events.extend(self.poll(sample.timestamp));

        match (sample.phase, self.touch) {
            (PointerPhase::Begin, Some(_)) => {
                self.reject(SampleRejection::RepeatedBegin, &mut events);
                self.begin(sample, &mut events);
            }
            (PointerPhase::Begin, None) => self.begin(sample, &mut events),
            (PointerPhase::Move, Some(touch)) => self.update(touch, sample, &mut events),
            (PointerPhase::Move, None) => self.reject(SampleRejection::MoveWithoutBegin, &mut events),
            (PointerPhase::End | PointerPhase::Cancel, Some(touch)) => {
                self.release(touch, sample, &mut events)
            }
            (PointerPhase::End | PointerPhase::Cancel, None) => {
                self.reject(SampleRejection::ReleaseWithoutBegin, &mut events)
            }
        }

        events
    }

    fn world(&self, screen: Vec2) -> Vec2 {
        self.transform.screen_to_world(screen)
    }

    fn begin(&mut self, sample: &PointerSample, events: &mut Vec<GestureEvent>) {
        let position = sample.position;
        let now = sample.timestamp;
        let mut touch = Touch {
            pointer_id: sample.pointer_id,
            start_position: position,
            start_time: now,
            last_position: position,
            last_time: now,
            consumed: false,
        };

        let is_double_tap = self.last_tap.is_some_and(|tap| {
            now - tap.time <= self.config.double_tap_time
                && position.distance(tap.position) <= self.config.double_tap_radius
        });

        if is_double_tap {
            self.pending_tap = None;
            self.last_tap = None;
            touch.consumed = true;
            self.touch = Some(touch);
            self.phase = GesturePhase::Idle;
            tracing::debug!("Double tap at ({:.1}, {:.1})", position.x, position.y);
            events.push(GestureEvent::DoubleTap {
                world: self.world(position),
            });
            return;
        }

        // A new press that cannot pair with the pending tap confirms it now
        events.extend(self.flush());
        self.last_tap = None;

        self.touch = Some(touch);
        self.phase = GesturePhase::Armed;
    }

    fn update(&mut self, mut touch: Touch, sample: &PointerSample, events: &mut Vec<GestureEvent>) {
        let position = sample.position;
        let now = sample.timestamp;

        if !touch.consumed {
            match self.phase {
                GesturePhase::Armed => self.classify_motion(&touch, position, now, events),
                GesturePhase::Dragging => events.push(GestureEvent::Drag {
                    world: self.world(position),
                }),
                GesturePhase::Swiping => events.push(GestureEvent::SwipeUpdate {
                    direction: (position - touch.start_position).normalized(),
                    world: self.world(position),
                }),
                GesturePhase::Idle => {}
            }
        }

        touch.last_position = position;
        touch.last_time = now;
        self.touch = Some(touch);
    }

    /// Swipe candidacy is checked before drag activation, so a sample that
    /// crosses both thresholds at once starts a swipe.
    fn classify_motion(
        &mut self,
        touch: &Touch,
        position: Vec2,
        now: f64,
        events: &mut Vec<GestureEvent>,
    ) {
        let displacement = position.distance(touch.start_position);
        let elapsed = now - touch.start_time;
        let step_time = now - touch.last_time;
        let speed = (step_time > 0.0).then(|| position.distance(touch.last_position) / step_time);

        if self.config.swipe.matches(displacement, elapsed, speed) {
            self.phase = GesturePhase::Swiping;
            tracing::debug!(
                "Swipe started (displacement={:.1}px, elapsed={:.3}s)",
                displacement,
                elapsed
            );
            events.push(GestureEvent::SwipeStart {
                world: self.world(touch.start_position),
            });
            events.push(GestureEvent::SwipeUpdate {
                direction: (position - touch.start_position).normalized(),
                world: self.world(position),
            });
            return;
        }

        let drag = match self.config.drag_activation {
            DragActivation::Distance { pixels } => displacement > pixels,
            DragActivation::Hold { seconds } => elapsed >= seconds,
        };
        if drag {
            self.phase = GesturePhase::Dragging;
            tracing::debug!(
                "Drag started (displacement={:.1}px, elapsed={:.3}s)",
                displacement,
                elapsed
            );
            events.push(GestureEvent::DragStart {
                world: self.world(position),
            });
        }
    }

    fn release(&mut self, touch: Touch, sample: &PointerSample, events: &mut Vec<GestureEvent>) {
        let cancelled = sample.phase == PointerPhase::Cancel;
        // Cancel positions are unreliable on some platforms; use the last move
        let end_position = if cancelled {
            touch.last_position
        } else {
            sample.position
        };

        // The release may carry movement no Move sample reported
        if !touch.consumed
            && !cancelled
            && self.phase == GesturePhase::Armed
            && end_position != touch.last_position
        {
            self.classify_motion(&touch, end_position, sample.timestamp, events);
        }

        if !touch.consumed {
            match self.phase {
                GesturePhase::Armed if !cancelled => {
                    let elapsed = sample.timestamp - touch.start_time;
                    let displacement = end_position.distance(touch.start_position);
                    if displacement > self.config.tap_slop {
                        tracing::trace!("Press moved {:.1}px, too far for a tap", displacement);
                    } else if elapsed <= self.config.tap_max_duration {
                        self.last_tap = Some(TapRecord {
                            position: touch.start_position,
                            time: touch.start_time,
                        });
                        self.pending_tap = Some(PendingTap {
                            world: self.world(end_position),
                            deadline: sample.timestamp + self.config.double_tap_time,
                        });
                    } else {
                        tracing::trace!("Press held {:.3}s, too long for a tap", elapsed);
                    }
                }
                GesturePhase::Armed | GesturePhase::Idle => {}
                GesturePhase::Dragging | GesturePhase::Swiping => {
                    self.end_active(&touch, end_position, events)
                }
            }
        }

        self.touch = None;
        self.phase = GesturePhase::Idle;
    }

    /// Emit the closing event of an active drag or swipe
    fn end_active(&mut self, touch: &Touch, end_position: Vec2, events: &mut Vec<GestureEvent>) {
        match self.phase {
            GesturePhase::Dragging => {
                tracing::debug!("Drag ended");
                events.push(GestureEvent::DragEnd);
            }
            GesturePhase::Swiping => {
                let direction = (end_position - touch.start_position).normalized();
                tracing::debug!("Swipe ended (direction=({:.2}, {:.2}))", direction.x, direction.y);
                events.push(GestureEvent::SwipeEnd {
                    direction,
                    world: self.world(end_position),
                });
            }
            GesturePhase::Idle | GesturePhase::Armed => {}
        }
    }

    /// Drop the current lifecycle after a malformed sample
    fn reject(&mut self, reason: SampleRejection, events: &mut Vec<GestureEvent>) {
        tracing::debug!("Ignoring pointer sample: {}", reason);
        if let Some(touch) = self.touch.take() {
            if !touch.consumed {
                self.end_active(&touch, touch.last_position, events);
            }
        }
        self.phase = GesturePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IdentityTransform;
    use crate::gesture::config::SwipeThresholds;
    use PointerPhase::{Begin, Cancel, End, Move};

    fn sample(x: f64, y: f64, phase: PointerPhase, t: f64) -> PointerSample {
        PointerSample::primary(x, y, phase, t)
    }

    fn config() -> GestureConfig {
        GestureConfig {
            double_tap_time: 0.3,
            double_tap_radius: 50.0,
            tap_max_duration: 0.3,
            tap_slop: 10.0,
            drag_activation: DragActivation::Distance { pixels: 10.0 },
            swipe: SwipeThresholds {
                min_distance: 150.0,
                max_duration: Some(0.3),
                min_speed: None,
            },
        }
    }

    fn classifier() -> GestureClassifier<IdentityTransform> {
        GestureClassifier::new(config(), IdentityTransform).unwrap()
    }

    fn run(
        classifier: &mut GestureClassifier<IdentityTransform>,
        samples: &[PointerSample],
    ) -> Vec<GestureEvent> {
        samples.iter().flat_map(|s| classifier.process(s)).collect()
    }

    fn count(events: &[GestureEvent], name: &str) -> usize {
        events.iter().filter(|e| e.name() == name).count()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = GestureConfig {
            double_tap_time: -0.1,
            ..config()
        };
        assert!(GestureClassifier::new(bad, IdentityTransform).is_err());
    }

    #[test]
    fn test_tap_is_deferred_until_double_tap_window_passes() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, Move, 0.05),
                sample(100.0, 100.0, End, 0.1),
            ],
        );
        assert!(events.is_empty());

        let deadline = c.next_deadline().unwrap();
        assert!((deadline - 0.4).abs() < 1e-9);
        assert_eq!(c.poll(0.35), None);

        let tap = c.poll(0.41);
        assert_eq!(
            tap,
            Some(GestureEvent::Tap {
                world: Vec2::new(100.0, 100.0)
            })
        );
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.poll(1.0), None);
    }

    #[test]
    fn test_tap_uses_world_transform() {
        let transform = |p: Vec2| Vec2::new(p.x / 100.0, p.y / 100.0);
        let mut c = GestureClassifier::new(config(), transform).unwrap();

        c.process(&sample(100.0, 200.0, Begin, 0.0));
        c.process(&sample(100.0, 200.0, End, 0.1));

        assert_eq!(
            c.poll(1.0),
            Some(GestureEvent::Tap {
                world: Vec2::new(1.0, 2.0)
            })
        );
    }

    #[test]
    fn test_double_tap_suppresses_tap() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, End, 0.08),
                sample(110.0, 105.0, Begin, 0.2),
                sample(110.0, 105.0, Move, 0.22),
                sample(140.0, 105.0, Move, 0.25),
                sample(110.0, 105.0, End, 0.28),
            ],
        );
        events.extend(c.poll(5.0));
        events.extend(c.flush());

        assert_eq!(
            events,
            vec![GestureEvent::DoubleTap {
                world: Vec2::new(110.0, 105.0)
            }]
        );
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(!c.is_pointer_down());
    }

    #[test]
    fn test_second_tap_too_far_is_two_taps() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, End, 0.05),
                sample(300.0, 100.0, Begin, 0.1),
                sample(300.0, 100.0, End, 0.15),
            ],
        );
        // The first tap is confirmed by the unrelated second press
        assert_eq!(
            events,
            vec![GestureEvent::Tap {
                world: Vec2::new(100.0, 100.0)
            }]
        );

        events.extend(c.poll(1.0));
        assert_eq!(count(&events, "tap"), 2);
        assert_eq!(count(&events, "double-tap"), 0);
    }

    #[test]
    fn test_second_tap_too_late_is_two_taps() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, End, 0.05),
                sample(100.0, 100.0, Begin, 0.5),
                sample(100.0, 100.0, End, 0.55),
            ],
        );
        events.extend(c.poll(2.0));
        assert_eq!(count(&events, "tap"), 2);
        assert_eq!(count(&events, "double-tap"), 0);
    }

    #[test]
    fn test_triple_tap_is_double_tap_then_armed() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, End, 0.05),
                sample(100.0, 100.0, Begin, 0.1),
                sample(100.0, 100.0, End, 0.15),
                sample(100.0, 100.0, Begin, 0.2),
                sample(100.0, 100.0, End, 0.25),
            ],
        );
        events.extend(c.poll(2.0));
        assert_eq!(count(&events, "double-tap"), 1);
        assert_eq!(count(&events, "tap"), 1);
    }

    #[test]
    fn test_long_press_is_not_a_tap() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(102.0, 100.0, Move, 0.2),
                sample(102.0, 100.0, End, 0.8),
            ],
        );
        events.extend(c.poll(5.0));
        assert!(events.is_empty());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(5.0, 0.0, Move, 0.1),
                sample(20.0, 0.0, Move, 0.2),
                sample(40.0, 10.0, Move, 0.3),
                sample(60.0, 20.0, Move, 0.4),
                sample(60.0, 20.0, End, 0.5),
            ],
        );

        assert_eq!(
            events,
            vec![
                GestureEvent::DragStart {
                    world: Vec2::new(20.0, 0.0)
                },
                GestureEvent::Drag {
                    world: Vec2::new(40.0, 10.0)
                },
                GestureEvent::Drag {
                    world: Vec2::new(60.0, 20.0)
                },
                GestureEvent::DragEnd,
            ]
        );
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_swipe_wins_when_both_thresholds_cross_together() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[sample(0.0, 0.0, Begin, 0.0), sample(200.0, 0.0, Move, 0.05)],
        );

        assert_eq!(
            events,
            vec![
                GestureEvent::SwipeStart {
                    world: Vec2::new(0.0, 0.0)
                },
                GestureEvent::SwipeUpdate {
                    direction: Vec2::new(1.0, 0.0),
                    world: Vec2::new(200.0, 0.0)
                },
            ]
        );
        assert_eq!(c.phase(), GesturePhase::Swiping);

        let tail = run(
            &mut c,
            &[sample(250.0, 0.0, Move, 0.08), sample(300.0, 0.0, End, 0.1)],
        );
        assert_eq!(count(&tail, "swipe-update"), 1);
        assert_eq!(
            tail.last(),
            Some(&GestureEvent::SwipeEnd {
                direction: Vec2::new(1.0, 0.0),
                world: Vec2::new(300.0, 0.0)
            })
        );
        assert_eq!(count(&tail, "drag-start"), 0);
    }

    #[test]
    fn test_drag_first_never_becomes_swipe() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(15.0, 0.0, Move, 0.02),
                sample(400.0, 0.0, Move, 0.05),
                sample(400.0, 0.0, End, 0.06),
            ],
        );

        assert_eq!(count(&events, "drag-start"), 1);
        assert_eq!(count(&events, "drag-end"), 1);
        assert_eq!(count(&events, "swipe-start"), 0);
    }

    #[test]
    fn test_slow_long_move_is_drag_not_swipe() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(5.0, 0.0, Move, 0.5),
                sample(200.0, 0.0, Move, 1.0),
                sample(200.0, 0.0, End, 1.1),
            ],
        );
        assert_eq!(count(&events, "drag-start"), 1);
        assert_eq!(count(&events, "swipe-start"), 0);
    }

    #[test]
    fn test_speed_based_swipe() {
        let config = GestureConfig {
            drag_activation: DragActivation::Distance { pixels: 100.0 },
            swipe: SwipeThresholds {
                min_distance: 50.0,
                max_duration: None,
                min_speed: Some(1000.0),
            },
            ..config()
        };
        let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();

        // 60px in 0.02s = 3000px/s
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 1.0),
                sample(0.0, 20.0, Move, 1.5),
                sample(0.0, 80.0, Move, 1.52),
            ],
        );
        assert_eq!(count(&events, "swipe-start"), 1);
        assert_eq!(
            events.last(),
            Some(&GestureEvent::SwipeUpdate {
                direction: Vec2::new(0.0, 1.0),
                world: Vec2::new(0.0, 80.0)
            })
        );
    }

    #[test]
    fn test_hold_activated_drag() {
        let config = GestureConfig {
            drag_activation: DragActivation::Hold { seconds: 0.4 },
            ..config()
        };
        let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();

        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(30.0, 0.0, Move, 0.2),
                sample(35.0, 0.0, Move, 0.5),
                sample(40.0, 0.0, End, 0.6),
            ],
        );
        assert_eq!(
            events,
            vec![
                GestureEvent::DragStart {
                    world: Vec2::new(35.0, 0.0)
                },
                GestureEvent::DragEnd,
            ]
        );
    }

    #[test]
    fn test_flick_without_moves_is_swipe_not_tap() {
        for config in [config(), GestureConfig::default()] {
            let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();
            let mut events = run(
                &mut c,
                &[sample(0.0, 0.0, Begin, 0.0), sample(300.0, 0.0, End, 0.05)],
            );
            events.extend(c.poll(5.0));

            assert_eq!(
                events,
                vec![
                    GestureEvent::SwipeStart {
                        world: Vec2::new(0.0, 0.0)
                    },
                    GestureEvent::SwipeUpdate {
                        direction: Vec2::new(1.0, 0.0),
                        world: Vec2::new(300.0, 0.0)
                    },
                    GestureEvent::SwipeEnd {
                        direction: Vec2::new(1.0, 0.0),
                        world: Vec2::new(300.0, 0.0)
                    },
                ]
            );
            assert_eq!(c.next_deadline(), None);
        }
    }

    #[test]
    fn test_release_away_from_press_is_drag_not_tap() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[sample(0.0, 0.0, Begin, 0.0), sample(30.0, 0.0, End, 0.1)],
        );
        events.extend(c.poll(5.0));

        assert_eq!(
            events,
            vec![
                GestureEvent::DragStart {
                    world: Vec2::new(30.0, 0.0)
                },
                GestureEvent::DragEnd,
            ]
        );
    }

    #[test]
    fn test_moved_press_under_hold_activation_is_not_a_tap() {
        let config = GestureConfig {
            drag_activation: DragActivation::Hold { seconds: 0.4 },
            ..config()
        };
        let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();

        let mut events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(40.0, 0.0, Move, 0.2),
                sample(45.0, 0.0, End, 0.25),
            ],
        );
        events.extend(c.poll(5.0));
        events.extend(c.flush());

        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_small_jitter_is_still_a_tap() {
        let mut c = classifier();
        run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(104.0, 103.0, Move, 0.05),
                sample(106.0, 108.0, End, 0.1),
            ],
        );
        assert_eq!(
            c.poll(1.0),
            Some(GestureEvent::Tap {
                world: Vec2::new(106.0, 108.0)
            })
        );
    }

    #[test]
    fn test_double_tap_window_and_radius_are_inclusive() {
        let config = GestureConfig {
            double_tap_time: 0.25,
            ..config()
        };
        let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();

        // Second press exactly 0.25s after the first and exactly 50px away
        let events = run(
            &mut c,
            &[
                sample(100.0, 100.0, Begin, 0.0),
                sample(100.0, 100.0, End, 0.125),
                sample(130.0, 140.0, Begin, 0.25),
            ],
        );
        assert_eq!(
            events,
            vec![GestureEvent::DoubleTap {
                world: Vec2::new(130.0, 140.0)
            }]
        );
    }

    #[test]
    fn test_drag_distance_is_exclusive() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[sample(0.0, 0.0, Begin, 0.0), sample(6.0, 8.0, Move, 0.5)],
        );
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Armed);

        let events = c.process(&sample(10.5, 0.0, Move, 0.6));
        assert_eq!(count(&events, "drag-start"), 1);
        assert_eq!(c.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn test_swipe_distance_and_duration_are_inclusive() {
        let config = GestureConfig {
            swipe: SwipeThresholds {
                min_distance: 150.0,
                max_duration: Some(0.25),
                min_speed: None,
            },
            ..config()
        };
        let mut c = GestureClassifier::new(config, IdentityTransform).unwrap();

        let events = run(
            &mut c,
            &[sample(0.0, 0.0, Begin, 0.0), sample(150.0, 0.0, Move, 0.25)],
        );
        assert_eq!(count(&events, "swipe-start"), 1);
        assert_eq!(count(&events, "drag-start"), 0);
        assert_eq!(c.phase(), GesturePhase::Swiping);
    }

    #[test]
    fn test_cancel_while_armed_emits_nothing() {
        let mut c = classifier();
        let mut events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(3.0, 0.0, Move, 0.02),
                sample(3.0, 0.0, Cancel, 0.05),
            ],
        );
        events.extend(c.poll(5.0));
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_cancel_ends_drag_and_swipe() {
        let mut c = classifier();
        let drag = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(20.0, 0.0, Move, 0.5),
                sample(0.0, 0.0, Cancel, 0.6),
            ],
        );
        assert_eq!(drag.last(), Some(&GestureEvent::DragEnd));

        let swipe = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 1.0),
                sample(0.0, -200.0, Move, 1.05),
                sample(999.0, 999.0, Cancel, 1.1),
            ],
        );
        // Cancel reports the last known position
        assert_eq!(
            swipe.last(),
            Some(&GestureEvent::SwipeEnd {
                direction: Vec2::new(0.0, -1.0),
                world: Vec2::new(0.0, -200.0)
            })
        );
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[sample(10.0, 10.0, Move, 0.0), sample(10.0, 10.0, End, 0.1)],
        );
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(!c.is_pointer_down());
    }

    #[test]
    fn test_repeated_begin_closes_drag_and_restarts() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 0.0),
                sample(50.0, 0.0, Move, 0.5),
                sample(500.0, 500.0, Begin, 0.6),
            ],
        );
        assert_eq!(count(&events, "drag-start"), 1);
        assert_eq!(events.last(), Some(&GestureEvent::DragEnd));
        assert_eq!(c.phase(), GesturePhase::Armed);
    }

    #[test]
    fn test_secondary_pointer_is_ignored() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                PointerSample::new(1, 0.0, 0.0, Begin, 0.0),
                PointerSample::new(2, 500.0, 500.0, Begin, 0.01),
                PointerSample::new(2, 900.0, 500.0, Move, 0.02),
                PointerSample::new(2, 900.0, 500.0, End, 0.03),
                PointerSample::new(1, 0.0, 0.0, End, 0.05),
            ],
        );
        assert!(events.is_empty());
        assert_eq!(
            c.poll(1.0),
            Some(GestureEvent::Tap {
                world: Vec2::new(0.0, 0.0)
            })
        );
    }

    #[test]
    fn test_time_going_backwards_resets() {
        let mut c = classifier();
        let events = run(
            &mut c,
            &[
                sample(0.0, 0.0, Begin, 1.0),
                sample(30.0, 0.0, Move, 1.1),
                sample(40.0, 0.0, Move, 0.5),
            ],
        );
        assert_eq!(count(&events, "drag-start"), 1);
        assert_eq!(events.last(), Some(&GestureEvent::DragEnd));
        assert!(!c.is_pointer_down());

        // Fresh lifecycle after the discontinuity
        c.process(&sample(0.0, 0.0, Begin, 0.6));
        assert_eq!(c.phase(), GesturePhase::Armed);

        // A tap waiting on its window is confirmed, not dropped
        assert!(c.process(&sample(0.0, 0.0, End, 0.65)).is_empty());
        assert!(c.next_deadline().is_some());
        let events = c.process(&sample(0.0, 0.0, Move, 0.2));
        assert_eq!(
            events,
            vec![GestureEvent::Tap {
                world: Vec2::new(0.0, 0.0)
            }]
        );
        assert_eq!(c.next_deadline(), None);

        // and it can no longer pair into a double tap
        assert!(c.process(&sample(0.0, 0.0, Begin, 0.25)).is_empty());
        assert_eq!(c.phase(), GesturePhase::Armed);
    }

    #[test]
    fn test_pending_tap_fires_before_later_sample() {
        let mut c = classifier();
        run(
            &mut c,
            &[sample(10.0, 10.0, Begin, 0.0), sample(10.0, 10.0, End, 0.05)],
        );

        // A move from a stray pointer long after the deadline still fires the tap first
        let events = c.process(&sample(0.0, 0.0, Move, 2.0));
        assert_eq!(
            events,
            vec![GestureEvent::Tap {
                world: Vec2::new(10.0, 10.0)
            }]
        );
    }

    #[test]
    fn test_drag_start_and_end_are_paired_across_lifecycles() {
        let mut c = classifier();
        let mut samples = Vec::new();
        for i in 0..5 {
            let t = i as f64;
            samples.push(sample(0.0, 0.0, Begin, t));
            samples.push(sample(12.0, 0.0, Move, t + 0.1));
            samples.push(sample(30.0, 0.0, Move, t + 0.2));
            samples.push(sample(30.0, 0.0, if i % 2 == 0 { End } else { Cancel }, t + 0.3));
        }

        let events = run(&mut c, &samples);
        let mut open = 0;
        for event in &events {
            match event {
                GestureEvent::DragStart { .. } => {
                    assert_eq!(open, 0, "nested drag start");
                    open += 1;
                }
                GestureEvent::DragEnd => {
                    assert_eq!(open, 1, "drag end without start");
                    open -= 1;
                }
                _ => {}
            }
        }
        assert_eq!(open, 0);
        assert_eq!(count(&events, "drag-start"), 5);
    }
}
