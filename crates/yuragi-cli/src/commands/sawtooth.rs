//! Sawtooth command implementation
//!
//! Renders one sawtooth column per channel from a channel document.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use yuragi_backend_waveform::{generate_channels, signal_hash};
use yuragi_spec::{validate_rendered_channels, validate_generation_request, GenerationRequest};

use super::json_output::{ChannelSummary, SawtoothOutput};
use super::output::{time_axis, to_csv, to_json, write_data, Column, DataFormat};
use super::reporting;
use crate::input::load_channels;

/// Sample data document written by `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SawtoothData<'a> {
    sample_rate: u32,
    start_time: f64,
    labels: &'a [String],
    time: &'a [f64],
    channels: &'a [Vec<f64>],
}

/// Run the sawtooth command
///
/// # Returns
/// Exit code: 0 on success, 1 if the channel document or request is invalid
pub fn run(
    params_path: &str,
    request: GenerationRequest,
    format: DataFormat,
    output: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let loaded = load_channels(Path::new(params_path))
        .with_context(|| format!("Failed to load channel file: {}", params_path))?;
    let source_hash = loaded.source_hash;
    let doc = loaded.value;

    let mut validation = doc.id_errors;
    validation.merge(validate_generation_request(&request));
    validation.merge(validate_rendered_channels(&doc.channels));

    if validation.is_err() {
        let (errors, warnings) = reporting::to_json_messages(&validation);
        if json_output {
            let out = SawtoothOutput {
                success: false,
                source_hash,
                num_samples: 0,
                sample_rate: request.sample_rate,
                start_time: request.start_time,
                channels: Vec::new(),
                output: output.map(str::to_string),
                errors,
                warnings,
            };
            print!("{}", to_json(&out)?);
        } else {
            eprintln!("{} {}", "Invalid channel document:".red().bold(), params_path);
            reporting::print_validation(&validation);
        }
        return Ok(ExitCode::from(1));
    }

    let channels = generate_channels(&doc.channels, &request)?;
    let num_samples = request.num_samples();
    let time = time_axis(request.start_time, request.sample_rate, num_samples);

    let content = match format {
        DataFormat::Json => to_json(&SawtoothData {
            sample_rate: request.sample_rate,
            start_time: request.start_time,
            labels: &doc.labels,
            time: &time,
            channels: &channels,
        })?,
        DataFormat::Csv => {
            let mut columns = vec![Column {
                name: "time",
                values: &time,
            }];
            columns.extend(doc.labels.iter().zip(&channels).map(|(label, values)| Column {
                name: label,
                values,
            }));
            to_csv(&columns)
        }
    };

    if json_output {
        if let Some(path) = output {
            write_data(&content, Some(path))?;
        }
        let (errors, warnings) = reporting::to_json_messages(&validation);
        let out = SawtoothOutput {
            success: true,
            source_hash,
            num_samples,
            sample_rate: request.sample_rate,
            start_time: request.start_time,
            channels: doc
                .labels
                .iter()
                .zip(&doc.channels)
                .zip(&channels)
                .map(|((label, params), samples)| ChannelSummary {
                    label: label.clone(),
                    active: params.is_audible(),
                    hash: signal_hash(samples),
                })
                .collect(),
            output: output.map(str::to_string),
            errors,
            warnings,
        };
        print!("{}", to_json(&out)?);
        return Ok(ExitCode::SUCCESS);
    }

    write_data(&content, output)?;
    if let Some(path) = output {
        reporting::print_validation(&validation);
        println!(
            "{} {} channel(s) x {} samples -> {}",
            "Rendered".green().bold(),
            channels.len(),
            num_samples,
            path
        );
    }
    Ok(ExitCode::SUCCESS)
}
