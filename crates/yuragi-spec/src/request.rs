//! Generation requests: how much signal to render and where it starts.

use serde::{Deserialize, Serialize};

/// Duration, sample rate and absolute start time of one generation call.
///
/// `start_time` is the elapsed time since the logical stream began. Callers that
/// render a stream in short blocks advance it by `duration` after each block so
/// the sawtooth phase stays continuous across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Block length in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Absolute time of the first sample in seconds.
    #[serde(default)]
    pub start_time: f64,
}

impl GenerationRequest {
    /// Creates a request starting at time zero.
    pub fn new(duration: f64, sample_rate: u32) -> Self {
        Self {
            duration,
            sample_rate,
            start_time: 0.0,
        }
    }

    /// Sets the absolute start time.
    pub fn starting_at(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Number of samples this request renders: `floor(duration * sample_rate)`.
    ///
    /// The product is truncated, never rounded, so 0.1 s at 44100 Hz is
    /// exactly 4410 samples.
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration, self.sample_rate)
    }

    /// Returns the request for the block that follows this one.
    pub fn advanced(&self) -> Self {
        Self {
            start_time: self.start_time + self.duration,
            ..*self
        }
    }
}

/// Computes `floor(duration * sample_rate)`, saturating at zero for negative or
/// non-finite durations.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    let product = duration * sample_rate as f64;
    if product.is_finite() && product > 0.0 {
        product.floor() as usize
    } else {
        0
    }
}
