//! Generate command implementation
//!
//! Renders a YURAGI trajectory from a preset or a parameter file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use yuragi_backend_waveform::{
    generate_yuragi_with, signal_hash, GeneratorOptions, SpectralMethod, YuragiResult,
};
use yuragi_spec::{
    canonical_params_hash, validate_yuragi_parameters_with_budget, GenerationBudget,
    YuragiParameters, YuragiPreset,
};

use super::json_output::{error_codes, GenerateOutput, JsonError, YuragiHashes};
use super::output::{time_axis, to_csv, to_json, write_data, Column, DataFormat};
use super::reporting;
use crate::input::load_json;

/// Where the parameters come from.
#[derive(Debug, Clone, Copy)]
pub enum ParamSource<'a> {
    Preset(&'a str),
    File(&'a str),
}

/// Command-line overrides applied on top of the loaded parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub seed: Option<i64>,
    pub duration: Option<f64>,
    pub sample_rate: Option<u32>,
}

impl Overrides {
    fn apply(&self, mut params: YuragiParameters) -> YuragiParameters {
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(duration) = self.duration {
            params.duration = duration;
        }
        if let Some(sample_rate) = self.sample_rate {
            params.sample_rate = sample_rate;
        }
        params
    }
}

/// Sample data document written by `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrajectoryData<'a> {
    sample_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    time: &'a [f64],
    x: &'a [f64],
    y: &'a [f64],
    amplitude: &'a [f64],
    theta: &'a [f64],
    omega: &'a [f64],
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 if the parameters fail validation
pub fn run(
    source: ParamSource<'_>,
    overrides: Overrides,
    method: SpectralMethod,
    budget_name: Option<&str>,
    format: DataFormat,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    let budget = match budget_name {
        Some(name) => match GenerationBudget::by_name(name) {
            Some(budget) => budget,
            None => {
                let message = format!(
                    "unknown budget profile: {} (expected {})",
                    name,
                    GenerationBudget::PROFILE_NAMES.join(", ")
                );
                return fail(json_output, error_codes::UNKNOWN_BUDGET, message);
            }
        },
        None => GenerationBudget::default(),
    };

    let (params, preset_name) = match source {
        ParamSource::Preset(name) => match name.parse::<YuragiPreset>() {
            Ok(preset) => (preset.parameters(), Some(preset.name().to_string())),
            Err(e) => return fail(json_output, error_codes::UNKNOWN_PRESET, e.to_string()),
        },
        ParamSource::File(path) => {
            let loaded = load_json::<YuragiParameters>(Path::new(path))
                .with_context(|| format!("Failed to load parameter file: {}", path))?;
            (loaded.value, None)
        }
    };
    let params = overrides.apply(params);
    let params_hash = canonical_params_hash(&params).ok();

    let validation = validate_yuragi_parameters_with_budget(&params, &budget);
    if validation.is_err() {
        let (errors, warnings) = reporting::to_json_messages(&validation);
        if json_output {
            let out = GenerateOutput {
                warnings,
                ..GenerateOutput::failure(errors, params_hash)
            };
            print!("{}", to_json(&out)?);
        } else {
            eprintln!("{}", "Invalid YURAGI parameters:".red().bold());
            reporting::print_validation(&validation);
        }
        return Ok(ExitCode::from(1));
    }

    let options = GeneratorOptions { method };
    let result = match generate_yuragi_with(&params, &options) {
        Ok(result) => result,
        Err(e) if json_output => {
            return fail(true, error_codes::GENERATION_ERROR, e.to_string());
        }
        Err(e) => return Err(e).context("Generation failed"),
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    let content = render(&result, &params, format)?;

    if json_output {
        if let Some(path) = output {
            write_data(&content, Some(path))?;
        }
        let out = GenerateOutput {
            success: true,
            preset: preset_name,
            params_hash,
            seed: params.seed,
            method: Some(method.name().to_string()),
            num_samples: Some(result.len()),
            hashes: Some(hashes(&result)),
            output: output.map(str::to_string),
            errors: Vec::new(),
            warnings: Vec::new(),
        };
        print!("{}", to_json(&out)?);
        return Ok(ExitCode::SUCCESS);
    }

    write_data(&content, output)?;
    if let Some(path) = output {
        println!(
            "{} {} samples ({}, {} transform, {}ms) -> {}",
            "Generated".green().bold(),
            result.len(),
            preset_name.as_deref().unwrap_or("custom"),
            method.name(),
            duration_ms,
            path
        );
        if let Some(hash) = &params_hash {
            println!("{} {}", "Params hash:".dimmed(), reporting::short_hash(hash));
        }
        println!(
            "{} {}",
            "x hash:".dimmed(),
            reporting::short_hash(&signal_hash(&result.x))
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn render(result: &YuragiResult, params: &YuragiParameters, format: DataFormat) -> Result<String> {
    let time = time_axis(0.0, params.sample_rate, result.len());
    match format {
        DataFormat::Json => to_json(&TrajectoryData {
            sample_rate: params.sample_rate,
            seed: params.seed,
            time: &time,
            x: &result.x,
            y: &result.y,
            amplitude: &result.amplitude,
            theta: &result.theta,
            omega: &result.omega,
        }),
        DataFormat::Csv => Ok(to_csv(&[
            Column { name: "time", values: &time },
            Column { name: "x", values: &result.x },
            Column { name: "y", values: &result.y },
            Column { name: "amplitude", values: &result.amplitude },
            Column { name: "theta", values: &result.theta },
            Column { name: "omega", values: &result.omega },
        ])),
    }
}

/// Hashes every output signal.
pub fn hashes(result: &YuragiResult) -> YuragiHashes {
    YuragiHashes {
        x: signal_hash(&result.x),
        y: signal_hash(&result.y),
        amplitude: signal_hash(&result.amplitude),
        theta: signal_hash(&result.theta),
        omega: signal_hash(&result.omega),
    }
}

fn fail(json_output: bool, code: &str, message: String) -> Result<ExitCode> {
    if json_output {
        let out = GenerateOutput::failure(vec![JsonError::new(code, message)], None);
        print!("{}", to_json(&out)?);
        Ok(ExitCode::from(1))
    } else {
        Err(anyhow::anyhow!(message))
    }
}
