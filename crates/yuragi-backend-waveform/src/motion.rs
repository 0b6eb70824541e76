//! Circular motion with 1/f angular fluctuation.

use std::f64::consts::TAU;

use yuragi_spec::request::sample_count;

use crate::error::{
    check_duration, check_finite, check_frequency, check_non_negative, check_sample_rate,
    WaveformResult,
};
use crate::noise::fluctuation_noise;
use crate::spectral::SpectralMethod;

/// Default peak angular fluctuation in degrees.
pub const DEFAULT_FLUCTUATION_AMPLITUDE_DEGREES: f64 = 10.0;

/// Default FM depth of the angular velocity.
pub const DEFAULT_FM_DEPTH: f64 = 0.05;

/// Parameters of [`circular_motion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularMotionParams {
    /// Trajectory radius.
    pub radius: f64,
    /// Base rotation frequency in Hz.
    pub rotation_frequency: f64,
    /// Initial phase in degrees.
    pub phase_degrees: f64,
    /// Peak angular fluctuation in degrees.
    pub fluctuation_amplitude_degrees: f64,
    /// Depth of the 1/f modulation of the angular velocity.
    pub fm_depth: f64,
    /// Rendered length in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Seed of the angular fluctuation; the FM noise uses `seed + 1`.
    pub seed: Option<i64>,
    /// Transform used by the noise generators.
    pub method: SpectralMethod,
}

impl CircularMotionParams {
    /// Creates parameters with default fluctuation and FM depth, zero phase and no seed.
    pub fn new(radius: f64, rotation_frequency: f64, duration: f64, sample_rate: u32) -> Self {
        Self {
            radius,
            rotation_frequency,
            phase_degrees: 0.0,
            fluctuation_amplitude_degrees: DEFAULT_FLUCTUATION_AMPLITUDE_DEGREES,
            fm_depth: DEFAULT_FM_DEPTH,
            duration,
            sample_rate,
            seed: None,
            method: SpectralMethod::Naive,
        }
    }

    fn validate(&self) -> WaveformResult<()> {
        check_non_negative("radius", self.radius)?;
        check_frequency("rotationFrequency", self.rotation_frequency)?;
        check_finite("phase", self.phase_degrees)?;
        check_finite("fluctuationAmplitude", self.fluctuation_amplitude_degrees)?;
        check_finite("fmDepth", self.fm_depth)?;
        check_duration(self.duration)?;
        check_sample_rate(self.sample_rate)
    }
}

/// Trajectory samples; all four vectors have the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircularMotionResult {
    /// X coordinate.
    pub x: Vec<f64>,
    /// Y coordinate.
    pub y: Vec<f64>,
    /// Angle in radians.
    pub theta: Vec<f64>,
    /// Instantaneous angular velocity in rad/s.
    pub omega: Vec<f64>,
}

impl CircularMotionResult {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Renders a circular trajectory with jittered angle.
///
/// `theta = 2π·f·t + phase + fluctuation·noise` where the noise is 1/f
/// fluctuation noise seeded with `seed`. `omega = 2π·f·(1 + fm_depth·fm)` uses
/// a second noise sequence seeded with `seed + 1` and is reported alongside
/// `theta`; it does not feed back into the angle.
pub fn circular_motion(params: &CircularMotionParams) -> WaveformResult<CircularMotionResult> {
    params.validate()?;

    let num_samples = sample_count(params.duration, params.sample_rate);
    if num_samples == 0 {
        return Ok(CircularMotionResult::default());
    }
    log::debug!(
        "circular motion: {} samples, {} Hz, seed {:?}",
        num_samples,
        params.rotation_frequency,
        params.seed
    );

    let fluctuation = fluctuation_noise(num_samples, params.seed, params.method);
    let fm_seed = params.seed.map(|seed| seed.wrapping_add(1));
    let fm = fluctuation_noise(num_samples, fm_seed, params.method);

    let angular_rate = TAU * params.rotation_frequency;
    let phase = params.phase_degrees.to_radians();
    let fluctuation_amplitude = params.fluctuation_amplitude_degrees.to_radians();
    let rate = params.sample_rate as f64;

    let mut result = CircularMotionResult {
        x: Vec::with_capacity(num_samples),
        y: Vec::with_capacity(num_samples),
        theta: Vec::with_capacity(num_samples),
        omega: Vec::with_capacity(num_samples),
    };

    for (i, (jitter, fm)) in fluctuation.iter().zip(&fm).enumerate() {
        let t = i as f64 / rate;
        let theta = angular_rate * t + phase + jitter * fluctuation_amplitude;
        let (sin, cos) = theta.sin_cos();
        result.x.push(params.radius * cos);
        result.y.push(params.radius * sin);
        result.theta.push(theta);
        result.omega.push(angular_rate * (1.0 + params.fm_depth * fm));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveformError;

    fn still(radius: f64) -> CircularMotionParams {
        CircularMotionParams {
            fluctuation_amplitude_degrees: 0.0,
            fm_depth: 0.0,
            seed: Some(1),
            ..CircularMotionParams::new(radius, 0.0, 0.01, 1000)
        }
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let params = CircularMotionParams::new(1.0, 0.5, 0.0, 44100);
        let result = circular_motion(&params).unwrap();
        assert!(result.is_empty());
        assert!(result.y.is_empty() && result.theta.is_empty() && result.omega.is_empty());
    }

    #[test]
    fn test_non_rotating_without_fluctuation() {
        let result = circular_motion(&still(2.0)).unwrap();
        assert_eq!(result.len(), 10);
        for i in 0..result.len() {
            assert_eq!(result.x[i], 2.0);
            assert_eq!(result.y[i], 0.0);
            assert_eq!(result.omega[i], 0.0);
        }
    }

    #[test]
    fn test_pure_rotation_and_phase() {
        let params = CircularMotionParams {
            phase_degrees: 90.0,
            ..still(1.0)
        };
        let result = circular_motion(&params).unwrap();
        assert!(result.x[0].abs() < 1e-12);
        assert!((result.y[0] - 1.0).abs() < 1e-12);

        let params = CircularMotionParams {
            rotation_frequency: 1.0,
            duration: 1.0,
            sample_rate: 4,
            ..still(1.0)
        };
        let result = circular_motion(&params).unwrap();
        let expected = [0.0, TAU / 4.0, TAU / 2.0, 3.0 * TAU / 4.0];
        for (theta, expected) in result.theta.iter().zip(expected) {
            assert!((theta - expected).abs() < 1e-12);
        }
        assert!(result.omega.iter().all(|&w| w == TAU));
    }

    #[test]
    fn test_fluctuation_stays_on_circle() {
        let params = CircularMotionParams {
            seed: Some(7),
            ..CircularMotionParams::new(0.8, 0.3, 0.05, 2000)
        };
        let result = circular_motion(&params).unwrap();
        assert_eq!(result.len(), 100);
        for i in 0..result.len() {
            let r = result.x[i].hypot(result.y[i]);
            assert!((r - 0.8).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let params = CircularMotionParams {
            seed: Some(42),
            ..CircularMotionParams::new(1.0, 0.5, 0.02, 1000)
        };
        assert_eq!(circular_motion(&params).unwrap(), circular_motion(&params).unwrap());
    }

    #[test]
    fn test_fm_noise_uses_next_seed() {
        let params = CircularMotionParams {
            fluctuation_amplitude_degrees: 0.0,
            seed: Some(10),
            ..CircularMotionParams::new(1.0, 1.0, 0.05, 1000)
        };
        let result = circular_motion(&params).unwrap();
        let fm = fluctuation_noise(50, Some(11), SpectralMethod::Naive);
        for (omega, fm) in result.omega.iter().zip(fm) {
            assert_eq!(*omega, TAU * (1.0 + 0.05 * fm));
        }
    }

    #[test]
    fn test_rejects_negative_radius() {
        let params = CircularMotionParams::new(-1.0, 0.5, 1.0, 100);
        assert!(matches!(
            circular_motion(&params),
            Err(WaveformError::InvalidParameter { name: "radius", .. })
        ));
    }
}
