//! Seeded 1/f^alpha noise.
//!
//! White normal samples from [`SeededRandom`] are shaped in the frequency
//! domain by a `f^(-alpha/2)` gain, then normalized to zero mean and unit
//! variance before the intensity is applied. Short sequences and the white
//! case (`alpha == 0`) skip the spectral step.

use crate::error::{check_finite, WaveformError, WaveformResult};
use crate::rng::SeededRandom;
use crate::spectral::{inverse_real, magnitude_spectrum, SpectralMethod};

/// Smallest accepted spectral exponent.
pub const ALPHA_MIN: f64 = -2.0;

/// Largest accepted spectral exponent.
pub const ALPHA_MAX: f64 = 5.0;

/// Upper bound on any single bin's gain.
pub const MAX_GAIN: f64 = 1000.0;

/// Sequences of this length or shorter are not spectrally filtered.
const MIN_FILTER_LEN: usize = 4;

/// Exponents closer to zero than this are treated as white noise.
const WHITE_EPSILON: f64 = 1e-10;

/// Standard deviations below this are not divided out.
const STD_EPSILON: f64 = 1e-15;

/// Exponent of the fluctuation noise.
const FLUCTUATION_ALPHA: f64 = 1.0;

/// Intensity of the pink noise underlying the fluctuation noise.
const FLUCTUATION_INTENSITY: f64 = 0.3;

/// Fluctuation noise is renormalized to a standard deviation of `1 / 3.1`.
const FLUCTUATION_SPREAD: f64 = 3.1;

/// Generates `n` samples of 1/f^alpha noise with the naive spectral path.
///
/// The output has zero mean and a standard deviation of `intensity`. Identical
/// seeds give bit-identical output; `None` seeds from thread entropy.
///
/// # Errors
///
/// Returns [`WaveformError::InvalidSampleCount`] for negative `n`,
/// [`WaveformError::AlphaOutOfRange`] for `alpha` outside `[-2, 5]`, and
/// [`WaveformError::InvalidParameter`] for a non-finite intensity.
pub fn pink_noise(n: i64, alpha: f64, intensity: f64, seed: Option<i64>) -> WaveformResult<Vec<f64>> {
    let len = usize::try_from(n).map_err(|_| WaveformError::InvalidSampleCount { count: n })?;
    PinkNoise::new(alpha)
        .intensity(intensity)
        .seed(seed)
        .generate(len)
}

/// Configurable 1/f^alpha noise generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinkNoise {
    /// Spectral exponent, in `[-2, 5]`.
    pub alpha: f64,
    /// Output standard deviation.
    pub intensity: f64,
    /// RNG seed; `None` draws one from thread entropy.
    pub seed: Option<i64>,
    /// Transform used by the spectral filter.
    pub method: SpectralMethod,
}

impl PinkNoise {
    /// Creates a generator with unit intensity, no seed and the naive transform.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            intensity: 1.0,
            seed: None,
            method: SpectralMethod::Naive,
        }
    }

    /// Sets the output standard deviation.
    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets the RNG seed.
    pub fn seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the spectral transform.
    pub fn method(mut self, method: SpectralMethod) -> Self {
        self.method = method;
        self
    }

    /// Generates `len` samples.
    pub fn generate(&self, len: usize) -> WaveformResult<Vec<f64>> {
        if !(ALPHA_MIN..=ALPHA_MAX).contains(&self.alpha) {
            return Err(WaveformError::AlphaOutOfRange { alpha: self.alpha });
        }
        check_finite("intensity", self.intensity)?;
        Ok(self.generate_unchecked(len))
    }

    fn generate_unchecked(&self, len: usize) -> Vec<f64> {
        if len == 0 {
            return Vec::new();
        }

        let mut rng = SeededRandom::from_seed_option(self.seed);
        let white = rng.randn_vec(len);

        if self.alpha.abs() < WHITE_EPSILON || len <= MIN_FILTER_LEN {
            return normalize_sample(white, self.intensity);
        }

        log::debug!(
            "shaping {} samples with alpha {} ({} transform)",
            len,
            self.alpha,
            self.method.name()
        );

        let gains = spectral_gains(len, self.alpha);
        let shaped: Vec<f64> = magnitude_spectrum(&white, self.method)
            .into_iter()
            .zip(&gains)
            .map(|(magnitude, gain)| magnitude * gain)
            .collect();

        normalize_population(inverse_real(&shaped, self.method), self.intensity)
    }
}

/// Generates `len` samples of the 1/f fluctuation noise that drives angular
/// jitter, FM and the amplitude noise term.
///
/// This is pink noise with `alpha = 1` and intensity `0.3`, renormalized to
/// zero mean and a standard deviation of `1 / 3.1`. A constant series is
/// returned centered but unscaled.
pub fn fluctuation_noise(len: usize, seed: Option<i64>, method: SpectralMethod) -> Vec<f64> {
    let pink = PinkNoise::new(FLUCTUATION_ALPHA)
        .intensity(FLUCTUATION_INTENSITY)
        .seed(seed)
        .method(method)
        .generate_unchecked(len);

    let m = mean(&pink);
    let std = population_std(&pink);
    if std == 0.0 {
        log::trace!("fluctuation noise has zero spread; returning centered series");
        return pink.into_iter().map(|x| x - m).collect();
    }

    let scale = std * FLUCTUATION_SPREAD;
    pink.into_iter().map(|x| (x - m) / scale).collect()
}

/// Per-bin gain `f^(-alpha/2)` for an `n`-point spectrum.
///
/// Bin 0 (DC) has gain 1. Bins above `n/2` use the mirrored frequency
/// `(n - k) / n`. Frequencies are floored at `1/n` and gains capped at
/// [`MAX_GAIN`].
fn spectral_gains(n: usize, alpha: f64) -> Vec<f64> {
    let n_f = n as f64;
    let min_freq = 1.0 / n_f;
    (0..n)
        .map(|k| {
            if k == 0 {
                return 1.0;
            }
            let bin = if k <= n / 2 { k } else { n - k };
            let freq = (bin as f64 / n_f).max(min_freq);
            freq.powf(-alpha / 2.0).min(MAX_GAIN)
        })
        .collect()
}

/// Centers, divides by the Bessel-corrected std (when defined), scales.
fn normalize_sample(values: Vec<f64>, intensity: f64) -> Vec<f64> {
    let m = mean(&values);
    let std = sample_std(&values);
    let divisor = if values.len() > 1 && std > 0.0 { std } else { 1.0 };
    values
        .into_iter()
        .map(|x| (x - m) / divisor * intensity)
        .collect()
}

/// Centers, divides by the population std (unless degenerate), scales.
fn normalize_population(values: Vec<f64>, intensity: f64) -> Vec<f64> {
    let m = mean(&values);
    let std = population_std(&values);
    let divisor = if std < STD_EPSILON {
        log::trace!("filtered noise std {} below guard; skipping scale", std);
        1.0
    } else {
        std
    };
    values
        .into_iter()
        .map(|x| (x - m) / divisor * intensity)
        .collect()
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with divisor `n`; 0 for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Standard deviation with divisor `n - 1`; 0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}
