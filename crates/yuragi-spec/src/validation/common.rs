//! Field-level checks shared by the document validators.

use crate::error::{ErrorCode, ValidationError, ValidationResult};

/// Records an error unless `value` is finite. Returns whether it was finite.
pub fn check_finite(result: &mut ValidationResult, path: &str, value: f64) -> bool {
    if value.is_finite() {
        return true;
    }
    result.add_error(ValidationError::with_path(
        ErrorCode::NonFiniteValue,
        format!("{} must be finite, got {}", field_name(path), value),
        path,
    ));
    false
}

/// Records an error unless `value` is finite and >= 0.
pub fn check_non_negative(result: &mut ValidationResult, path: &str, value: f64) {
    if check_finite(result, path, value) && value < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NegativeValue,
            format!("{} must be non-negative, got {}", field_name(path), value),
            path,
        ));
    }
}

/// Records an error unless `value` is finite and > 0.
pub fn check_positive(result: &mut ValidationResult, path: &str, value: f64) {
    if check_finite(result, path, value) && value <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveValue,
            format!("{} must be positive, got {}", field_name(path), value),
            path,
        ));
    }
}

/// Records an error if the sample rate is zero.
pub fn check_sample_rate(result: &mut ValidationResult, path: &str, sample_rate: u32) {
    if sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveValue,
            "sampleRate must be positive, got 0",
            path,
        ));
    }
}

/// Joins a JSON path prefix and a field name.
pub fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn field_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
