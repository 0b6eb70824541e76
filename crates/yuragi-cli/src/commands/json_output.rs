//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag. Field names and error codes are stable
//! so scripts can parse the output.

use serde::{Deserialize, Serialize};
use yuragi_spec::{ValidationError, ValidationWarning, VectorForce, YuragiParameters};

/// Error codes for CLI operations.
///
/// Format: CLI_XXX for CLI-level errors; validation errors pass their own
/// E00X codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Unknown budget profile
    pub const UNKNOWN_BUDGET: &str = "CLI_003";
    /// Unknown preset name
    pub const UNKNOWN_PRESET: &str = "CLI_004";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// BLAKE3 hashes of each rendered YURAGI signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YuragiHashes {
    pub x: String,
    pub y: String,
    pub amplitude: String,
    pub theta: String,
    pub omega: String,
}

/// Output of `yuragi generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<YuragiHashes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

impl GenerateOutput {
    /// Creates a failure output carrying only errors.
    pub fn failure(errors: Vec<JsonError>, params_hash: Option<String>) -> Self {
        Self {
            success: false,
            preset: None,
            params_hash,
            seed: None,
            method: None,
            num_samples: None,
            hashes: None,
            output: None,
            errors,
            warnings: Vec::new(),
        }
    }
}

/// One channel in `yuragi sawtooth --json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelSummary {
    pub label: String,
    pub active: bool,
    pub hash: String,
}

/// Output of `yuragi sawtooth --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SawtoothOutput {
    pub success: bool,
    pub source_hash: String,
    pub num_samples: usize,
    pub sample_rate: u32,
    pub start_time: f64,
    pub channels: Vec<ChannelSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// Output of `yuragi validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput {
    pub success: bool,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// One entry of `yuragi presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetEntry {
    pub name: String,
    pub params_hash: String,
    pub parameters: YuragiParameters,
}

/// Output of `yuragi vector --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorOutput {
    pub success: bool,
    pub force: VectorForce,
    pub components: [f64; 2],
    pub records: Vec<yuragi_spec::ChannelParameterRecord>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuragi_spec::{ErrorCode, WarningCode};

    #[test]
    fn test_validation_messages_convert() {
        let error = ValidationError::with_path(ErrorCode::NegativeValue, "radius must be non-negative", "radius");
        let json = JsonError::from(&error);
        assert_eq!(json.code, "E002");
        assert_eq!(json.path.as_deref(), Some("radius"));

        let warning = ValidationWarning::with_path(WarningCode::PhaseOutOfRange, "phase wraps", "[0].phase");
        assert_eq!(JsonWarning::from(&warning).code, "W002");
    }

    #[test]
    fn test_failure_output_omits_empty_fields() {
        let output = GenerateOutput::failure(
            vec![JsonError::new(error_codes::UNKNOWN_PRESET, "unknown preset 'calm'")],
            None,
        );
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "CLI_004");
        assert!(json.get("hashes").is_none());
        assert!(json.get("paramsHash").is_none());
    }
}
