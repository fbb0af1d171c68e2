//! Gesture recognition
//!
//! Turns raw pointer samples into taps, double taps, drags and swipes, and
//! fans the resulting events out to listeners.

pub mod bus;
pub mod classifier;
pub mod config;
pub mod events;

pub use bus::{EventBus, EventLog, GestureListener, SharedListener};
pub use classifier::{GestureClassifier, GesturePhase};
pub use config::{DragActivation, GestureConfig, SwipeThresholds};
pub use events::GestureEvent;
