//! Error types for the waveform backend.

use thiserror::Error;
use yuragi_spec::BackendError;

/// Result type for waveform operations.
pub type WaveformResult<T> = Result<T, WaveformError>;

/// Errors raised by the generators.
///
/// Every variant is an invalid-argument failure: generation is pure, so the
/// only way a call fails is a rejected input, reported before any work is done.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaveformError {
    /// Duration is negative or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Sample rate is zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A frequency is negative or not finite.
    #[error("invalid frequency '{name}': {freq} Hz")]
    InvalidFrequency {
        /// Parameter name.
        name: &'static str,
        /// The invalid frequency.
        freq: f64,
    },

    /// Negative sample count requested.
    #[error("invalid sample count: {count}")]
    InvalidSampleCount {
        /// The invalid count.
        count: i64,
    },

    /// Spectral exponent outside [-2, 5].
    #[error("alpha {alpha} is outside [-2, 5]")]
    AlphaOutOfRange {
        /// The rejected exponent.
        alpha: f64,
    },

    /// Any other rejected parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: String,
    },
}

impl WaveformError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Returns true for invalid-argument failures (currently every variant).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            WaveformError::InvalidDuration { .. }
                | WaveformError::InvalidSampleRate { .. }
                | WaveformError::InvalidFrequency { .. }
                | WaveformError::InvalidSampleCount { .. }
                | WaveformError::AlphaOutOfRange { .. }
                | WaveformError::InvalidParameter { .. }
        )
    }
}

impl BackendError for WaveformError {
    fn code(&self) -> &'static str {
        match self {
            WaveformError::InvalidDuration { .. } => "WAVE_001",
            WaveformError::InvalidSampleRate { .. } => "WAVE_002",
            WaveformError::InvalidFrequency { .. } => "WAVE_003",
            WaveformError::InvalidSampleCount { .. } => "WAVE_004",
            WaveformError::AlphaOutOfRange { .. } => "WAVE_005",
            WaveformError::InvalidParameter { .. } => "WAVE_006",
        }
    }

    fn category(&self) -> &'static str {
        "waveform"
    }
}

/// Rejects negative or non-finite durations. Zero is allowed and yields no samples.
pub(crate) fn check_duration(duration: f64) -> WaveformResult<()> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(())
    } else {
        Err(WaveformError::InvalidDuration { duration })
    }
}

pub(crate) fn check_sample_rate(rate: u32) -> WaveformResult<()> {
    if rate == 0 {
        Err(WaveformError::InvalidSampleRate { rate })
    } else {
        Ok(())
    }
}

pub(crate) fn check_frequency(name: &'static str, freq: f64) -> WaveformResult<()> {
    if freq.is_finite() && freq >= 0.0 {
        Ok(())
    } else {
        Err(WaveformError::InvalidFrequency { name, freq })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> WaveformResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveformError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> WaveformResult<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        Err(WaveformError::invalid_param(
            name,
            format!("must be non-negative, got {}", value),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = WaveformError::invalid_param("radius", "must be non-negative, got -1");
        assert!(err.to_string().contains("radius"));
        assert!(err.is_invalid_argument());
        assert_eq!(err.code(), "WAVE_006");
        assert_eq!(err.category(), "waveform");
    }

    #[test]
    fn test_alpha_message_names_range() {
        let err = WaveformError::AlphaOutOfRange { alpha: 7.0 };
        assert_eq!(err.to_string(), "alpha 7 is outside [-2, 5]");
    }

    #[test]
    fn test_checks() {
        assert!(check_duration(0.0).is_ok());
        assert!(check_duration(-0.1).is_err());
        assert!(check_duration(f64::INFINITY).is_err());
        assert!(check_sample_rate(0).is_err());
        assert!(check_frequency("frequency", f64::NAN).is_err());
        assert!(check_non_negative("radius", -0.0).is_ok());
    }
}
