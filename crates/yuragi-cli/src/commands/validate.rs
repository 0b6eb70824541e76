//! Validate command implementation
//!
//! Validates a parameter document and reports every problem found.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use yuragi_spec::{
    canonical_params_hash, validate_rendered_channels, validate_vector_force,
    validate_yuragi_parameters_with_budget, GenerationBudget, ValidationResult, VectorForce,
    YuragiParameters,
};

use super::json_output::{error_codes, JsonError, ValidateOutput};
use super::output::to_json;
use super::reporting;
use crate::input::{load_channels, load_json, InputError};

/// Kind of document being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A `YuragiParameters` object.
    Yuragi,
    /// An array of channel parameters or channel records.
    Channels,
    /// A `VectorForce` object.
    Vector,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Yuragi => "yuragi",
            DocumentKind::Channels => "channels",
            DocumentKind::Vector => "vector",
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yuragi" => Ok(DocumentKind::Yuragi),
            "channels" => Ok(DocumentKind::Channels),
            "vector" => Ok(DocumentKind::Vector),
            other => Err(format!(
                "unknown document kind '{}' (expected yuragi, channels, or vector)",
                other
            )),
        }
    }
}

struct Checked {
    source_hash: String,
    params_hash: Option<String>,
    result: ValidationResult,
}

fn check(path: &Path, kind: DocumentKind, budget: &GenerationBudget) -> Result<Checked, InputError> {
    match kind {
        DocumentKind::Yuragi => {
            let loaded = load_json::<YuragiParameters>(path)?;
            Ok(Checked {
                params_hash: canonical_params_hash(&loaded.value).ok(),
                result: validate_yuragi_parameters_with_budget(&loaded.value, budget),
                source_hash: loaded.source_hash,
            })
        }
        DocumentKind::Channels => {
            let loaded = load_channels(path)?;
            let mut result = loaded.value.id_errors;
            result.merge(validate_rendered_channels(&loaded.value.channels));
            Ok(Checked {
                params_hash: None,
                result,
                source_hash: loaded.source_hash,
            })
        }
        DocumentKind::Vector => {
            let loaded = load_json::<VectorForce>(path)?;
            Ok(Checked {
                params_hash: canonical_params_hash(&loaded.value).ok(),
                result: validate_vector_force(&loaded.value),
                source_hash: loaded.source_hash,
            })
        }
    }
}

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(
    params_path: &str,
    kind: DocumentKind,
    budget_name: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(params_path, kind, budget_name)
    } else {
        run_human(params_path, kind, budget_name)
    }
}

fn resolve_budget(budget_name: Option<&str>) -> Result<GenerationBudget, String> {
    match budget_name {
        Some(name) => GenerationBudget::by_name(name).ok_or_else(|| {
            format!(
                "unknown budget profile: {} (expected {})",
                name,
                GenerationBudget::PROFILE_NAMES.join(", ")
            )
        }),
        None => Ok(GenerationBudget::default()),
    }
}

/// Run validate with human-readable (colored) output
fn run_human(params_path: &str, kind: DocumentKind, budget_name: Option<&str>) -> Result<ExitCode> {
    let budget = resolve_budget(budget_name).map_err(anyhow::Error::msg)?;

    println!("{} {} ({})", "Validating:".cyan().bold(), params_path, kind.as_str());
    if budget_name.is_some() {
        println!("{} {}", "Budget:".dimmed(), budget.name);
    }

    let checked = check(Path::new(params_path), kind, &budget)
        .with_context(|| format!("Failed to load parameter file: {}", params_path))?;

    println!("{} {}", "Source:".dimmed(), reporting::short_hash(&checked.source_hash));
    if let Some(hash) = &checked.params_hash {
        println!("{} {}", "Params hash:".dimmed(), reporting::short_hash(hash));
    }

    reporting::print_validation(&checked.result);

    if checked.result.is_ok() {
        println!("\n{} Document is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Document has {} error(s)",
            "FAILED".red().bold(),
            checked.result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(params_path: &str, kind: DocumentKind, budget_name: Option<&str>) -> Result<ExitCode> {
    let failure = |error: JsonError| -> Result<ExitCode> {
        let output = ValidateOutput {
            success: false,
            kind: kind.as_str().to_string(),
            source_hash: None,
            params_hash: None,
            errors: vec![error],
            warnings: Vec::new(),
        };
        print!("{}", to_json(&output)?);
        Ok(ExitCode::from(1))
    };

    let budget = match resolve_budget(budget_name) {
        Ok(budget) => budget,
        Err(message) => return failure(JsonError::new(error_codes::UNKNOWN_BUDGET, message)),
    };

    let checked = match check(Path::new(params_path), kind, &budget) {
        Ok(checked) => checked,
        Err(e) => {
            let code = match e {
                InputError::FileRead { .. } => error_codes::FILE_READ,
                InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            };
            return failure(JsonError::new(code, e.to_string()));
        }
    };

    let (errors, warnings) = reporting::to_json_messages(&checked.result);
    let output = ValidateOutput {
        success: checked.result.is_ok(),
        kind: kind.as_str().to_string(),
        source_hash: Some(checked.source_hash),
        params_hash: checked.params_hash,
        errors,
        warnings,
    };
    print!("{}", to_json(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
