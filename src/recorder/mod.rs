//! Pointer-sample traces
//!
//! Samples passing through a [`RecordingSource`] are kept in memory and can
//! be written out as a JSON [`GestureTrace`] for later replay.

pub mod trace;

pub use trace::{GestureTrace, RecordingSource};
