//! Presets command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use yuragi_spec::{canonical_params_hash, YuragiPreset};

use super::json_output::PresetEntry;
use super::output::to_json;
use super::reporting::short_hash;

/// Builds the preset listing.
pub fn entries() -> Result<Vec<PresetEntry>> {
    YuragiPreset::ALL
        .iter()
        .map(|preset| {
            let parameters = preset.parameters();
            Ok(PresetEntry {
                name: preset.name().to_string(),
                params_hash: canonical_params_hash(&parameters)?,
                parameters,
            })
        })
        .collect()
}

/// Run the presets command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = entries()?;

    if json_output {
        print!("{}", to_json(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "YURAGI presets:".cyan().bold());
    for entry in &entries {
        let p = &entry.parameters;
        println!(
            "  {:<24} {}  rotation {} Hz, radius {}, amplitude {}, fluctuation {} deg",
            entry.name.bold(),
            short_hash(&entry.params_hash).dimmed(),
            p.rotation_frequency,
            p.radius,
            p.base_amplitude,
            p.angular_fluctuation_amplitude
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_all_presets() {
        let entries = entries().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "gentle",
                "moderate",
                "intense",
                "therapeutic",
                "therapeutic_fluctuation"
            ]
        );
        assert!(entries.iter().all(|e| e.params_hash.len() == 64));
    }
}
