//! YURAGI composite: circular motion scaled by the amplitude envelope.

use yuragi_spec::{YuragiParameters, YuragiPreset};

use crate::amplitude::{amplitude_modulation, AmplitudeModulationParams};
use crate::error::WaveformResult;
use crate::motion::{circular_motion, CircularMotionParams};
use crate::spectral::SpectralMethod;

/// Output of [`generate_yuragi`]. All five vectors have the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YuragiResult {
    /// Modulated X coordinate.
    pub x: Vec<f64>,
    /// Modulated Y coordinate.
    pub y: Vec<f64>,
    /// Amplitude envelope.
    pub amplitude: Vec<f64>,
    /// Trajectory angle in radians.
    pub theta: Vec<f64>,
    /// Instantaneous angular velocity in rad/s.
    pub omega: Vec<f64>,
}

impl YuragiResult {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Distance from the origin, `sqrt(x² + y²)`, per sample.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.x.iter().zip(&self.y).map(|(x, y)| x.hypot(*y)).collect()
    }
}

/// Options that do not change the meaning of the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorOptions {
    /// Transform used by the noise generators.
    pub method: SpectralMethod,
}

/// Generates a YURAGI trajectory with the default (bit-reproducible) transform.
pub fn generate_yuragi(params: &YuragiParameters) -> WaveformResult<YuragiResult> {
    generate_yuragi_with(params, &GeneratorOptions::default())
}

/// Generates a YURAGI trajectory.
///
/// Motion and amplitude are rendered with the same duration, sample rate and
/// seed; `x` and `y` are then scaled by the envelope sample by sample.
pub fn generate_yuragi_with(
    params: &YuragiParameters,
    options: &GeneratorOptions,
) -> WaveformResult<YuragiResult> {
    log::debug!(
        "generating yuragi: {} samples at {} Hz, seed {:?}, {} transform",
        params.num_samples(),
        params.sample_rate,
        params.seed,
        options.method.name()
    );
    if options.method.is_slow_for(params.num_samples()) {
        log::warn!(
            "naive transform over {} samples is O(n^2) and will be slow; use the fft method for long renders",
            params.num_samples()
        );
    }

    let motion = circular_motion(&CircularMotionParams {
        radius: params.radius,
        rotation_frequency: params.rotation_frequency,
        phase_degrees: params.initial_phase,
        fluctuation_amplitude_degrees: params.angular_fluctuation_amplitude,
        fm_depth: params.fm_depth,
        duration: params.duration,
        sample_rate: params.sample_rate,
        seed: params.seed,
        method: options.method,
    })?;

    let amplitude = amplitude_modulation(&AmplitudeModulationParams {
        base_amplitude: params.base_amplitude,
        envelope_frequency: params.envelope_frequency,
        envelope_depth: params.envelope_depth,
        noise_level: params.noise_level,
        duration: params.duration,
        sample_rate: params.sample_rate,
        seed: params.seed,
        method: options.method,
    })?;

    debug_assert_eq!(motion.len(), amplitude.len());
    debug_assert_eq!(motion.theta.len(), motion.omega.len());

    let x = motion.x.iter().zip(&amplitude).map(|(x, a)| x * a).collect();
    let y = motion.y.iter().zip(&amplitude).map(|(y, a)| y * a).collect();

    Ok(YuragiResult {
        x,
        y,
        amplitude,
        theta: motion.theta,
        omega: motion.omega,
    })
}

/// Generates a preset with its stock timing and the given seed.
pub fn generate_preset(preset: YuragiPreset, seed: Option<i64>) -> WaveformResult<YuragiResult> {
    let params = YuragiParameters {
        seed,
        ..preset.parameters()
    };
    generate_yuragi(&params)
}
