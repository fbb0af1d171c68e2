use crate::error::{TraceError, TraceResult};
use crate::gesture::config::GestureConfig;
use crate::input::source::SampleSource;
use crate::input::types::PointerSample;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A recorded sequence of pointer samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureTrace {
    pub recorded_at: DateTime<Utc>,
    /// Thresholds in effect while recording, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GestureConfig>,
    pub samples: Vec<PointerSample>,
}

impl GestureTrace {
    pub fn new(samples: Vec<PointerSample>) -> Self {
        Self {
            recorded_at: Utc::now(),
            config: None,
            samples,
        }
    }

    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Duration covered by the trace in seconds
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0.0,
        }
    }

    pub fn validate(&self) -> TraceResult<()> {
        if let Some(index) = self.samples.iter().position(|s| !s.timestamp.is_finite()) {
            return Err(TraceError::InvalidTrace(format!(
                "sample {} has a non-finite timestamp",
                index
            )));
        }
        if let Some(config) = &self.config {
            config
                .validate()
                .map_err(|e| TraceError::InvalidTrace(e.to_string()))?;
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> TraceResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, data)?;
        tracing::info!(
            "Saved trace with {} samples to {}",
            self.samples.len(),
            path.display()
        );
        Ok(())
    }

    pub fn load(path: &Path) -> TraceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let trace: GestureTrace = serde_json::from_str(&content)?;
        trace.validate()?;
        tracing::info!(
            "Loaded trace with {} samples ({:.2}s) from {}",
            trace.samples.len(),
            trace.duration(),
            path.display()
        );
        Ok(trace)
    }
}

/// Sample source wrapper that keeps a copy of every sample it yields
pub struct RecordingSource<S> {
    inner: S,
    samples: Vec<PointerSample>,
}

impl<S: SampleSource> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            samples: Vec::new(),
        }
    }

    pub fn recorded(&self) -> &[PointerSample] {
        &self.samples
    }

    pub fn into_trace(self) -> GestureTrace {
        GestureTrace::new(self.samples)
    }
}

#[async_trait]
impl<S: SampleSource> SampleSource for RecordingSource<S> {
    async fn next_sample(&mut self) -> Option<PointerSample> {
        let sample = self.inner.next_sample().await?;
        self.samples.push(sample);
        Some(sample)
    }
}
