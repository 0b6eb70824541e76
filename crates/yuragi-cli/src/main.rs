//! YURAGI CLI - Command-line interface for the haptic waveform engine
//!
//! This binary renders sawtooth drive signals and YURAGI trajectories,
//! lists presets, converts vector forces and validates parameter documents.

mod cli_args;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use std::process::ExitCode;
use yuragi_backend_waveform::SpectralMethod;
use yuragi_spec::GenerationRequest;

use cli_args::{Cli, Commands};
use yuragi_cli::commands;
use yuragi_cli::commands::generate::{Overrides, ParamSource};
use yuragi_cli::commands::validate::DocumentKind;
use yuragi_cli::commands::DataFormat;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

fn dispatch(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Sawtooth {
            params,
            duration,
            sample_rate,
            start_time,
            format,
            output,
            json,
        } => {
            let format = format.parse::<DataFormat>().map_err(|e| anyhow!(e))?;
            let request = GenerationRequest::new(duration, sample_rate).starting_at(start_time);
            commands::sawtooth::run(&params, request, format, output.as_deref(), json)
        }
        Commands::Generate {
            preset,
            params,
            seed,
            duration,
            sample_rate,
            method,
            budget,
            format,
            output,
            json,
        } => {
            let source = match (preset.as_deref(), params.as_deref()) {
                (Some(name), _) => ParamSource::Preset(name),
                (None, Some(path)) => ParamSource::File(path),
                (None, None) => bail!("either --preset or --params is required"),
            };
            let method = SpectralMethod::from_name(&method)
                .ok_or_else(|| anyhow!("unknown spectral method '{}'", method))?;
            let format = format.parse::<DataFormat>().map_err(|e| anyhow!(e))?;
            commands::generate::run(
                source,
                Overrides {
                    seed,
                    duration,
                    sample_rate,
                },
                method,
                budget.as_deref(),
                format,
                output.as_deref(),
                json,
            )
        }
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Vector {
            device,
            angle,
            magnitude,
            frequency,
            json,
        } => commands::vector::run(device, angle, magnitude, frequency, json),
        Commands::Validate {
            params,
            kind,
            budget,
            json,
        } => {
            let kind = kind.parse::<DocumentKind>().map_err(|e| anyhow!(e))?;
            commands::validate::run(&params, kind, budget.as_deref(), json)
        }
    }
}
