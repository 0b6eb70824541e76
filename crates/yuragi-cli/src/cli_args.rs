//! CLI argument definitions for the YURAGI command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// YURAGI - haptic waveform and modulation engine
#[derive(Parser)]
#[command(name = "yuragi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace; RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render sawtooth drive signals for a channel document
    Sawtooth {
        /// Path to a JSON array of channel parameters or channel records
        #[arg(short, long)]
        params: String,

        /// Block length in seconds
        #[arg(short, long, default_value_t = 0.1)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Absolute time of the first sample in seconds
        #[arg(long, default_value_t = 0.0)]
        start_time: f64,

        /// Sample data format (json, csv)
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output a machine-readable JSON summary (samples go to --output only)
        #[arg(long)]
        json: bool,
    },

    /// Render a YURAGI trajectory from a preset or a parameter file
    Generate {
        /// Preset name (gentle, moderate, intense, therapeutic, therapeutic_fluctuation)
        #[arg(long, conflicts_with = "params", required_unless_present = "params")]
        preset: Option<String>,

        /// Path to a YURAGI parameter file (JSON)
        #[arg(short, long)]
        params: Option<String>,

        /// Seed for every noise-derived output
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Override the rendered length in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Override the sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Spectral transform (naive is bit-reproducible, fft is fast)
        #[arg(long, default_value = "naive", value_parser = ["naive", "fft"])]
        method: String,

        /// Budget profile to validate against (default, strict, realtime)
        #[arg(long)]
        budget: Option<String>,

        /// Sample data format (json, csv)
        #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output a machine-readable JSON summary (samples go to --output only)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in YURAGI presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a polar vector force into per-axis channel records
    Vector {
        /// Device number (1 or 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        device: u8,

        /// Direction in degrees, counter-clockwise from +X
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,

        /// Force magnitude
        #[arg(long)]
        magnitude: f64,

        /// Drive frequency in Hz
        #[arg(long, default_value_t = 60.0)]
        frequency: f64,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter document without rendering
    Validate {
        /// Path to the document (JSON)
        #[arg(short, long)]
        params: String,

        /// Document kind (yuragi, channels, vector)
        #[arg(long, default_value = "yuragi", value_parser = ["yuragi", "channels", "vector"])]
        kind: String,

        /// Budget profile to validate against (default, strict, realtime)
        #[arg(long)]
        budget: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
