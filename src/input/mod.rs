//! Pointer input
//!
//! Raw per-frame pointer samples and the sources that deliver them to the
//! gesture driver.

pub mod source;
pub mod types;

pub use source::{SampleSource, TraceReplay};
pub use types::{PointerPhase, PointerSample};
