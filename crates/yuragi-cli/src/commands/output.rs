//! Rendering sample columns as JSON or CSV and writing them out.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Sample data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
}

impl std::str::FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(DataFormat::Json),
            "csv" => Ok(DataFormat::Csv),
            other => Err(format!("unknown format '{}' (expected json or csv)", other)),
        }
    }
}

/// A named column of samples.
pub struct Column<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
}

/// Builds the time axis `start + i / sample_rate`.
pub fn time_axis(start_time: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| start_time + i as f64 / sample_rate as f64)
        .collect()
}

/// Renders columns as CSV with a header row. Columns must share one length.
pub fn to_csv(columns: &[Column<'_>]) -> String {
    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|c| c.name).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
    for row in 0..rows {
        let cells: Vec<String> = columns.iter().map(|c| c.values[row].to_string()).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Renders any serializable document as pretty JSON.
pub fn to_json<T: Serialize>(document: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// Writes rendered data to `output`, or to stdout when no path is given.
pub fn write_data(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(Path::new(path), content)
            .with_context(|| format!("failed to write output file: {}", path)),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
