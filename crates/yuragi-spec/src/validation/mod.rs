//! Parameter document validation.
//!
//! Validators collect every problem in a document instead of stopping at the
//! first one. Errors carry a code and a JSON path; warnings flag values outside
//! the dashboard's ranges that the engine still accepts.

pub mod budgets;
pub mod common;

use crate::channel::{ChannelId, ChannelWaveformParameters};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::GenerationRequest;
use crate::vector_force::VectorForce;
use crate::yuragi::YuragiParameters;

pub use budgets::GenerationBudget;
use common::{check_finite, check_non_negative, check_positive, check_sample_rate, join_path};

/// Highest channel frequency the dashboard exposes.
pub const MAX_CHANNEL_FREQUENCY_HZ: f64 = 120.0;

/// Validates a list of channel parameters (a JSON array document).
pub fn validate_channel_parameters(channels: &[ChannelWaveformParameters]) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, channel) in channels.iter().enumerate() {
        validate_channel_at(&mut result, &format!("[{}]", i), channel);
    }
    result
}

/// Validates only the channels a multi-channel render evaluates.
///
/// Inactive and zero-amplitude channels render as silence without reading
/// their other fields, so they are skipped. Paths keep the original indices.
pub fn validate_rendered_channels(channels: &[ChannelWaveformParameters]) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, channel) in channels.iter().enumerate() {
        if channel.is_audible() {
            validate_channel_at(&mut result, &format!("[{}]", i), channel);
        }
    }
    result
}

/// Checks that every `channelId` in a channel record document names one of
/// the four outputs. Entries without a `channelId` are skipped.
pub fn validate_channel_ids(document: &serde_json::Value) -> ValidationResult {
    let mut result = ValidationResult::new();
    let entries = match document.as_array() {
        Some(entries) => entries,
        None => return result,
    };
    for (i, entry) in entries.iter().enumerate() {
        let id = match entry.get("channelId") {
            Some(id) => id,
            None => continue,
        };
        let known = id
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .and_then(|v| ChannelId::try_from(v).ok())
            .is_some();
        if !known {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnknownChannel,
                format!("channelId {} does not name a channel (expected 0-3)", id),
                format!("[{}].channelId", i),
            ));
        }
    }
    result
}

fn validate_channel_at(
    result: &mut ValidationResult,
    prefix: &str,
    channel: &ChannelWaveformParameters,
) {
    let frequency_path = join_path(prefix, "frequency");
    check_non_negative(result, &frequency_path, channel.frequency);
    if channel.frequency.is_finite() && channel.frequency > MAX_CHANNEL_FREQUENCY_HZ {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::FrequencyAboveRange,
            format!(
                "frequency {} Hz is above the {} Hz control range",
                channel.frequency, MAX_CHANNEL_FREQUENCY_HZ
            ),
            frequency_path,
        ));
    }

    let amplitude_path = join_path(prefix, "amplitude");
    if check_finite(result, &amplitude_path, channel.amplitude)
        && !(0.0..=1.0).contains(&channel.amplitude)
    {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AmplitudeOutOfRange,
            format!(
                "amplitude {} is outside [0, 1]; its magnitude is used",
                channel.amplitude
            ),
            amplitude_path,
        ));
    }

    let phase_path = join_path(prefix, "phase");
    if check_finite(result, &phase_path, channel.phase) && !(0.0..360.0).contains(&channel.phase)
    {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::PhaseOutOfRange,
            format!("phase {} is outside [0, 360); it wraps", channel.phase),
            phase_path,
        ));
    }
}

/// Validates a generation request.
pub fn validate_generation_request(request: &GenerationRequest) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_positive(&mut result, "duration", request.duration);
    check_sample_rate(&mut result, "sampleRate", request.sample_rate);
    check_non_negative(&mut result, "startTime", request.start_time);
    result
}

/// Validates a generation request against a budget.
pub fn validate_generation_request_with_budget(
    request: &GenerationRequest,
    budget: &GenerationBudget,
) -> ValidationResult {
    let mut result = validate_generation_request(request);
    if result.is_ok() {
        check_budget(
            &mut result,
            budget,
            request.duration,
            request.num_samples(),
            None,
        );
    }
    result
}

/// Validates YURAGI parameters.
pub fn validate_yuragi_parameters(params: &YuragiParameters) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_non_negative(&mut result, "rotationFrequency", params.rotation_frequency);
    check_non_negative(&mut result, "radius", params.radius);
    check_finite(&mut result, "initialPhase", params.initial_phase);
    check_non_negative(&mut result, "baseAmplitude", params.base_amplitude);
    check_non_negative(&mut result, "envelopeFrequency", params.envelope_frequency);
    check_finite(&mut result, "envelopeDepth", params.envelope_depth);
    check_finite(&mut result, "noiseLevel", params.noise_level);
    check_non_negative(&mut result, "noiseBandwidth", params.noise_bandwidth);
    check_finite(
        &mut result,
        "angularFluctuationAmplitude",
        params.angular_fluctuation_amplitude,
    );
    check_non_negative(
        &mut result,
        "angularFluctuationBandwidth",
        params.angular_fluctuation_bandwidth,
    );
    check_finite(&mut result, "fmDepth", params.fm_depth);
    check_positive(&mut result, "duration", params.duration);
    check_sample_rate(&mut result, "sampleRate", params.sample_rate);

    result
}

/// Validates YURAGI parameters against a budget.
///
/// Every noise sequence has one sample per output sample, so the spectral
/// length limit applies to the full sample count.
pub fn validate_yuragi_parameters_with_budget(
    params: &YuragiParameters,
    budget: &GenerationBudget,
) -> ValidationResult {
    let mut result = validate_yuragi_parameters(params);
    if result.is_ok() {
        let samples = params.num_samples();
        check_budget(&mut result, budget, params.duration, samples, Some(samples));
    }
    result
}

/// Validates a vector-force record.
pub fn validate_vector_force(force: &VectorForce) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_finite(&mut result, "angle", force.angle);
    check_non_negative(&mut result, "magnitude", force.magnitude);
    check_non_negative(&mut result, "frequency", force.frequency);
    if force.frequency.is_finite() && force.frequency > MAX_CHANNEL_FREQUENCY_HZ {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::FrequencyAboveRange,
            format!(
                "frequency {} Hz is above the {} Hz control range",
                force.frequency, MAX_CHANNEL_FREQUENCY_HZ
            ),
            "frequency",
        ));
    }
    result
}

fn check_budget(
    result: &mut ValidationResult,
    budget: &GenerationBudget,
    duration: f64,
    samples: usize,
    spectral_length: Option<usize>,
) {
    if duration > budget.max_duration_seconds {
        result.add_error(ValidationError::with_path(
            ErrorCode::BudgetExceeded,
            format!(
                "duration {} s exceeds the '{}' budget limit of {} s",
                duration, budget.name, budget.max_duration_seconds
            ),
            "duration",
        ));
    }
    if samples > budget.max_samples {
        result.add_error(ValidationError::new(
            ErrorCode::BudgetExceeded,
            format!(
                "{} samples exceeds the '{}' budget limit of {}",
                samples, budget.name, budget.max_samples
            ),
        ));
    }
    if let Some(length) = spectral_length {
        if length > budget.max_spectral_length {
            result.add_error(ValidationError::new(
                ErrorCode::BudgetExceeded,
                format!(
                    "noise sequence of {} samples exceeds the '{}' spectral limit of {}",
                    length, budget.name, budget.max_spectral_length
                ),
            ));
        }
    }
}
