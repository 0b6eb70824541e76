//! Error types for parameter validation and processing.

use thiserror::Error;

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Value is NaN or infinite
    NonFiniteValue,
    /// E002: Value is negative where a non-negative value is required
    NegativeValue,
    /// E003: Value must be strictly positive (sample rate, duration)
    NonPositiveValue,
    /// E004: Channel id does not name one of the four outputs
    UnknownChannel,
    /// E005: Request exceeds the active generation budget
    BudgetExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NonFiniteValue => "E001",
            ErrorCode::NegativeValue => "E002",
            ErrorCode::NonPositiveValue => "E003",
            ErrorCode::UnknownChannel => "E004",
            ErrorCode::BudgetExceeded => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for values outside the dashboard's documented ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Amplitude outside [0, 1]
    AmplitudeOutOfRange,
    /// W002: Phase outside [0, 360)
    PhaseOutOfRange,
    /// W003: Channel frequency above 120 Hz
    FrequencyAboveRange,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::AmplitudeOutOfRange => "W001",
            WarningCode::PhaseOutOfRange => "W002",
            WarningCode::FrequencyAboveRange => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "channels\[2\].frequency").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Outcome of validating a parameter document.
///
/// Warnings never make a document invalid; they flag values outside the ranges
/// the dashboard exposes, which the engine still processes as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Errors that make the document unusable.
    pub errors: Vec<ValidationError>,
    /// Non-fatal findings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates an empty (passing) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no errors were recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if at least one error was recorded.
    pub fn is_err(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Appends all findings from another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts into a `Result`, failing with [`SpecError::ValidationFailed`] if
    /// any errors were recorded.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, SpecError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(SpecError::ValidationFailed(self.errors.len()))
        }
    }
}

/// Top-level error type for parameter document operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Validation failed with one or more errors.
    #[error("parameter validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Preset name not recognized.
    #[error("unknown preset '{0}' (expected gentle, moderate, intense, therapeutic, or therapeutic_fluctuation)")]
    UnknownPreset(String),

    /// Channel id outside 0..=3.
    #[error("unknown channel id {0} (expected 0-3)")]
    UnknownChannel(u8),

    /// Device id other than 1 or 2.
    #[error("unknown device id {0} (expected 1 or 2)")]
    UnknownDevice(u8),
}

/// Common interface for backend errors so callers can report them uniformly.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "WAVE_001". These codes are stable and can
    /// be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
