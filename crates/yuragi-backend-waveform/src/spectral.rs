//! Magnitude spectrum and real inverse transform used by the pink-noise filter.
//!
//! The forward transform keeps only the magnitude of each DFT bin; the inverse
//! treats those magnitudes as a real spectrum and returns the real part of the
//! inverse DFT. Phase information of the input is discarded, so the filter
//! shapes magnitude spectra rather than performing a linear convolution.
//!
//! Two implementations are provided:
//!
//! - [`SpectralMethod::Naive`] sums the DFT literally in O(n²). Its
//!   floating-point order of operations is fixed, so seeded output is
//!   reproducible bit-for-bit. This is the default.
//! - [`SpectralMethod::Fft`] computes the same transforms with `rustfft` in
//!   O(n log n). Results agree with the naive path to rounding error only.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Naive transforms longer than this are slow enough to be worth a warning.
pub const NAIVE_WARN_LEN: usize = 8192;

/// Transform implementation for the spectral filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpectralMethod {
    /// Literal O(n²) summation (bit-reproducible).
    #[default]
    Naive,
    /// Fast Fourier transform via `rustfft`.
    Fft,
}

impl SpectralMethod {
    /// Returns the method's identifier.
    pub fn name(self) -> &'static str {
        match self {
            SpectralMethod::Naive => "naive",
            SpectralMethod::Fft => "fft",
        }
    }

    /// Parses a method identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "naive" => Some(SpectralMethod::Naive),
            "fft" => Some(SpectralMethod::Fft),
            _ => None,
        }
    }

    /// Returns true if transforming `len` samples with this method is
    /// expected to be slow.
    pub fn is_slow_for(self, len: usize) -> bool {
        self == SpectralMethod::Naive && len > NAIVE_WARN_LEN
    }
}

/// Computes `|X[k]|` for every bin `k` in `0..n`.
pub fn magnitude_spectrum(signal: &[f64], method: SpectralMethod) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    match method {
        SpectralMethod::Naive => naive_magnitude(signal),
        SpectralMethod::Fft => fft_magnitude(signal),
    }
}

/// Computes `x[j] = (1/n) Σ_k X[k] · cos(2πkj/n)`, the real part of the inverse
/// DFT of a real spectrum.
pub fn inverse_real(spectrum: &[f64], method: SpectralMethod) -> Vec<f64> {
    if spectrum.is_empty() {
        return Vec::new();
    }
    match method {
        SpectralMethod::Naive => naive_inverse(spectrum),
        SpectralMethod::Fft => fft_inverse(spectrum),
    }
}

fn naive_magnitude(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let mut magnitudes = Vec::with_capacity(n);

    for k in 0..n {
        let mut re = 0.0;
        let mut im = 0.0;
        for (t, &x) in signal.iter().enumerate() {
            let angle = -2.0 * PI * k as f64 * t as f64 / n as f64;
            re += x * angle.cos();
            im += x * angle.sin();
        }
        magnitudes.push((re * re + im * im).sqrt());
    }

    magnitudes
}

fn naive_inverse(spectrum: &[f64]) -> Vec<f64> {
    let n = spectrum.len();
    let mut output = Vec::with_capacity(n);

    for t in 0..n {
        let mut sum = 0.0;
        for (k, &bin) in spectrum.iter().enumerate() {
            let angle = 2.0 * PI * k as f64 * t as f64 / n as f64;
            sum += bin * angle.cos();
        }
        output.push(sum / n as f64);
    }

    output
}

fn fft_magnitude(signal: &[f64]) -> Vec<f64> {
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer.iter().map(|c| c.norm()).collect()
}

fn fft_inverse(spectrum: &[f64]) -> Vec<f64> {
    let n = spectrum.len();
    let mut buffer: Vec<Complex<f64>> = spectrum.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut buffer);
    // rustfft does not normalize.
    buffer.iter().map(|c| c.re / n as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;
    use std::f64::consts::TAU;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() < tol, "index {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(magnitude_spectrum(&[], SpectralMethod::Naive).is_empty());
        assert!(inverse_real(&[], SpectralMethod::Fft).is_empty());
    }

    #[test]
    fn test_impulse_has_flat_magnitude() {
        let mut signal = vec![0.0; 8];
        signal[0] = 1.0;
        let magnitudes = magnitude_spectrum(&signal, SpectralMethod::Naive);
        assert_close(&magnitudes, &[1.0; 8], 1e-12);
    }

    #[test]
    fn test_sinusoid_concentrates_in_two_bins() {
        let n = 16;
        let signal: Vec<f64> = (0..n)
            .map(|j| (TAU * 3.0 * j as f64 / n as f64).cos())
            .collect();
        let magnitudes = magnitude_spectrum(&signal, SpectralMethod::Naive);
        for (k, m) in magnitudes.iter().enumerate() {
            let expected = if k == 3 || k == n - 3 { n as f64 / 2.0 } else { 0.0 };
            assert!((m - expected).abs() < 1e-9, "bin {}: {}", k, m);
        }
    }

    #[test]
    fn test_inverse_of_dc_bin_is_constant() {
        let mut spectrum = vec![0.0; 10];
        spectrum[0] = 5.0;
        let output = inverse_real(&spectrum, SpectralMethod::Naive);
        assert_close(&output, &[0.5; 10], 1e-12);
    }

    #[test]
    fn test_naive_is_literal_summation() {
        let signal = SeededRandom::new(42).randn_vec(64);
        let n = signal.len() as f64;

        let expected: Vec<f64> = (0..signal.len())
            .map(|k| {
                let (mut re, mut im) = (0.0, 0.0);
                for (t, x) in signal.iter().enumerate() {
                    let angle = -2.0 * PI * k as f64 * t as f64 / n;
                    re += x * angle.cos();
                    im += x * angle.sin();
                }
                (re * re + im * im).sqrt()
            })
            .collect();
        assert_eq!(magnitude_spectrum(&signal, SpectralMethod::Naive), expected);

        let expected_inverse: Vec<f64> = (0..expected.len())
            .map(|t| {
                let mut sum = 0.0;
                for (k, bin) in expected.iter().enumerate() {
                    let angle = 2.0 * PI * k as f64 * t as f64 / n;
                    sum += bin * angle.cos();
                }
                sum / n
            })
            .collect();
        assert_eq!(inverse_real(&expected, SpectralMethod::Naive), expected_inverse);
    }

    #[test]
    fn test_fft_matches_naive() {
        let signal: Vec<f64> = (0..37).map(|i| ((i * 7919) % 97) as f64 / 97.0 - 0.5).collect();

        let naive = magnitude_spectrum(&signal, SpectralMethod::Naive);
        let fast = magnitude_spectrum(&signal, SpectralMethod::Fft);
        assert_close(&naive, &fast, 1e-9);

        let naive_inv = inverse_real(&naive, SpectralMethod::Naive);
        let fast_inv = inverse_real(&naive, SpectralMethod::Fft);
        assert_close(&naive_inv, &fast_inv, 1e-9);
    }

    #[test]
    fn test_method_names() {
        for method in [SpectralMethod::Naive, SpectralMethod::Fft] {
            assert_eq!(SpectralMethod::from_name(method.name()), Some(method));
        }
        assert_eq!(SpectralMethod::from_name("dct"), None);
        assert_eq!(SpectralMethod::default(), SpectralMethod::Naive);
    }

    #[test]
    fn test_slow_lengths() {
        assert!(!SpectralMethod::Naive.is_slow_for(NAIVE_WARN_LEN));
        assert!(SpectralMethod::Naive.is_slow_for(44100));
        assert!(!SpectralMethod::Fft.is_slow_for(44100));
    }
}
