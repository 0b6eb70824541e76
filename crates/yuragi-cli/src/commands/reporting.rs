//! Human-readable reporting shared by the commands.

use colored::Colorize;
use yuragi_spec::ValidationResult;

use super::json_output::{JsonError, JsonWarning};

/// Prints validation errors and warnings.
pub(super) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code,
            path.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let path = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code,
            path.dimmed(),
            warning.message
        );
    }
}

/// Converts validation findings to their JSON forms.
pub(super) fn to_json_messages(result: &ValidationResult) -> (Vec<JsonError>, Vec<JsonWarning>) {
    (
        result.errors.iter().map(JsonError::from).collect(),
        result.warnings.iter().map(JsonWarning::from).collect(),
    )
}

/// Abbreviates a hex hash for display.
pub(super) fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}
