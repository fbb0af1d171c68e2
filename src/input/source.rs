//! Sample sources
//!
//! The driver never polls hardware. It pulls samples from a [`SampleSource`]:
//! either a channel fed by the host's input layer, or a recorded trace.

use crate::input::types::PointerSample;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Asynchronous producer of pointer samples
///
/// Returns `None` once the source is exhausted or closed.
#[async_trait]
pub trait SampleSource: Send {
    async fn next_sample(&mut self) -> Option<PointerSample>;
}

#[async_trait]
impl SampleSource for mpsc::Receiver<PointerSample> {
    async fn next_sample(&mut self) -> Option<PointerSample> {
        self.recv().await
    }
}

/// Replays a recorded sequence of samples
///
/// In paced mode each sample is released at its recorded offset from the
/// first sample, so deferred taps fire exactly as they would live. Unpaced
/// replay yields samples back to back.
pub struct TraceReplay {
    samples: VecDeque<PointerSample>,
    paced: bool,
    origin: Option<(Instant, f64)>,
}

impl TraceReplay {
    pub fn new(samples: impl IntoIterator<Item = PointerSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            paced: false,
            origin: None,
        }
    }

    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

#[async_trait]
impl SampleSource for TraceReplay {
    async fn next_sample(&mut self) -> Option<PointerSample> {
        let timestamp = self.samples.front()?.timestamp;

        // Only pop after the wait so a dropped future loses nothing
        if self.paced {
            let (origin_instant, origin_ts) =
                *self.origin.get_or_insert((Instant::now(), timestamp));
            let offset = (timestamp - origin_ts).max(0.0);
            let wait = Duration::try_from_secs_f64(offset).unwrap_or_default();
            tokio::time::sleep_until(origin_instant + wait).await;
        }

        self.samples.pop_front()
    }
}
