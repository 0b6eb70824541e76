//! YURAGI modulation parameters.

use serde::{Deserialize, Serialize};

use crate::request::sample_count;

/// Parameters of the YURAGI composite generator.
///
/// Motion fields drive the circular trajectory, amplitude fields drive the
/// envelope, and `duration`/`sample_rate`/`seed` are shared by both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YuragiParameters {
    /// Base rotation frequency of the trajectory in Hz.
    pub rotation_frequency: f64,
    /// Trajectory radius.
    pub radius: f64,
    /// Initial phase of the rotation in degrees.
    pub initial_phase: f64,
    /// Base amplitude the envelope modulates around.
    pub base_amplitude: f64,
    /// Sinusoidal envelope frequency in Hz.
    pub envelope_frequency: f64,
    /// Sinusoidal envelope depth.
    pub envelope_depth: f64,
    /// Scale of the 1/f noise added to the envelope.
    pub noise_level: f64,
    /// Bandwidth of the envelope noise in Hz. Carried for parameter documents;
    /// the generator does not read it.
    pub noise_bandwidth: f64,
    /// Peak angular fluctuation in degrees.
    pub angular_fluctuation_amplitude: f64,
    /// Bandwidth of the angular fluctuation in Hz. Carried for parameter
    /// documents; the generator does not read it.
    pub angular_fluctuation_bandwidth: f64,
    /// Depth of the 1/f frequency modulation of the angular velocity.
    pub fm_depth: f64,
    /// Rendered length in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Seed for every noise-derived output. `None` draws fresh entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl Default for YuragiParameters {
    fn default() -> Self {
        crate::presets::YuragiPreset::Moderate.parameters()
    }
}

impl YuragiParameters {
    /// Number of samples rendered: `floor(duration * sample_rate)`.
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration, self.sample_rate)
    }

    /// Returns a copy with the given seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy with a different duration and sample rate.
    pub fn with_timing(mut self, duration: f64, sample_rate: u32) -> Self {
        self.duration = duration;
        self.sample_rate = sample_rate;
        self
    }

    /// Parses parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, crate::error::SpecError> {
        Ok(serde_json::from_str(json)?)
    }
}
