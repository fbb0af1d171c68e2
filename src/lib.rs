//! Touch Canvas - single-touch gestures and sprite painting for 2D scenes.
//!
//! Pointer samples from the host's input layer are classified into taps,
//! double taps, drags and swipes. Those gestures paint, move and erase
//! sprites and draw a trail behind swipes.

pub mod app;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod recorder;
pub mod scene;

pub use app::CanvasApp;
pub use config::AppConfig;
pub use driver::{DriverStats, GestureDriver};
pub use error::{ConfigError, SampleRejection, TraceError};
pub use geometry::{OrthoCamera, ScreenToWorld, Vec2};
pub use gesture::{EventBus, GestureClassifier, GestureConfig, GestureEvent, GestureListener};
pub use input::{PointerPhase, PointerSample, SampleSource};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "touch_canvas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
