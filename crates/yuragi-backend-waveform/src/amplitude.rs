//! Amplitude envelope: slow sinusoid plus 1/f noise, clipped around the base.

use std::f64::consts::TAU;

use yuragi_spec::request::sample_count;

use crate::error::{
    check_duration, check_finite, check_frequency, check_non_negative, check_sample_rate,
    WaveformResult,
};
use crate::noise::fluctuation_noise;
use crate::spectral::SpectralMethod;

/// Default envelope frequency in Hz.
pub const DEFAULT_ENVELOPE_FREQUENCY: f64 = 0.4;

/// Default envelope depth relative to the base amplitude.
pub const DEFAULT_ENVELOPE_DEPTH: f64 = 0.25;

/// Default weight of the 1/f noise term.
pub const DEFAULT_NOISE_LEVEL: f64 = 0.1;

/// Envelope sinusoid amplitude relative to `envelope_depth`.
const ENVELOPE_SCALE: f64 = 0.7;

/// Envelope phase offset in cycles.
const ENVELOPE_PHASE_CYCLES: f64 = 0.13;

/// Lower clip bound relative to the base amplitude.
pub const MIN_RATIO: f64 = 0.2;

/// Upper clip bound relative to the base amplitude.
pub const MAX_RATIO: f64 = 1.5;

/// Parameters of [`amplitude_modulation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeModulationParams {
    /// Amplitude the envelope modulates around; must be non-negative.
    pub base_amplitude: f64,
    /// Envelope sinusoid frequency in Hz.
    pub envelope_frequency: f64,
    /// Envelope depth relative to the base amplitude.
    pub envelope_depth: f64,
    /// Weight of the 1/f noise term.
    pub noise_level: f64,
    /// Rendered length in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Seed of the noise term.
    pub seed: Option<i64>,
    /// Transform used by the noise generator.
    pub method: SpectralMethod,
}

impl AmplitudeModulationParams {
    /// Creates parameters with the default envelope and noise settings.
    pub fn new(base_amplitude: f64, duration: f64, sample_rate: u32) -> Self {
        Self {
            base_amplitude,
            envelope_frequency: DEFAULT_ENVELOPE_FREQUENCY,
            envelope_depth: DEFAULT_ENVELOPE_DEPTH,
            noise_level: DEFAULT_NOISE_LEVEL,
            duration,
            sample_rate,
            seed: None,
            method: SpectralMethod::Naive,
        }
    }

    fn validate(&self) -> WaveformResult<()> {
        check_non_negative("baseAmplitude", self.base_amplitude)?;
        check_frequency("envelopeFrequency", self.envelope_frequency)?;
        check_finite("envelopeDepth", self.envelope_depth)?;
        check_finite("noiseLevel", self.noise_level)?;
        check_duration(self.duration)?;
        check_sample_rate(self.sample_rate)
    }
}

/// Renders the amplitude envelope.
///
/// `A = base·(1 + depth·0.7·sin(2π·f·t + 2π·0.13) + noise_level·noise)`,
/// clipped to `[0.2·base, 1.5·base]`.
pub fn amplitude_modulation(params: &AmplitudeModulationParams) -> WaveformResult<Vec<f64>> {
    params.validate()?;

    let num_samples = sample_count(params.duration, params.sample_rate);
    if num_samples == 0 {
        return Ok(Vec::new());
    }

    let noise = fluctuation_noise(num_samples, params.seed, params.method);
    let base = params.base_amplitude;
    let (low, high) = (MIN_RATIO * base, MAX_RATIO * base);
    let angular = TAU * params.envelope_frequency;
    let offset = TAU * ENVELOPE_PHASE_CYCLES;
    let rate = params.sample_rate as f64;

    Ok(noise
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let t = i as f64 / rate;
            let envelope = params.envelope_depth * ENVELOPE_SCALE * (angular * t + offset).sin();
            let value = base * (1.0 + envelope + n * params.noise_level);
            value.clamp(low, high)
        })
        .collect())
}
