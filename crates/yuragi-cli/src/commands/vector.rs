//! Vector command implementation
//!
//! Converts a polar vector force into the per-axis channel records a device
//! server expects.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use yuragi_spec::{validate_vector_force, DeviceId, VectorForce};

use super::json_output::VectorOutput;
use super::output::to_json;
use super::reporting;

/// Run the vector command
///
/// # Returns
/// Exit code: 0 on success, 1 if the force is invalid
pub fn run(
    device: u8,
    angle: f64,
    magnitude: f64,
    frequency: f64,
    json_output: bool,
) -> Result<ExitCode> {
    let device_id = DeviceId::try_from(device)?;
    let force = VectorForce::new(device_id, angle, magnitude, frequency);
    let validation = validate_vector_force(&force);
    let (x, y) = force.components();
    let records = if validation.is_ok() {
        force.to_channel_records().to_vec()
    } else {
        Vec::new()
    };

    if json_output {
        let (errors, warnings) = reporting::to_json_messages(&validation);
        let out = VectorOutput {
            success: validation.is_ok(),
            force,
            components: [x, y],
            records,
            errors,
            warnings,
        };
        print!("{}", to_json(&out)?);
    } else {
        reporting::print_validation(&validation);
        if validation.is_ok() {
            println!(
                "{} device {} at {} deg, magnitude {} -> x = {:.6}, y = {:.6}",
                "Vector force:".cyan().bold(),
                device_id.number(),
                angle,
                magnitude,
                x,
                y
            );
            for record in &records {
                println!(
                    "  {:<10} frequency {} Hz, amplitude {:.6}, polarity {}",
                    record.channel_id.to_string(),
                    record.frequency,
                    record.amplitude,
                    if record.polarity { "+" } else { "-" }
                );
            }
        }
    }

    if validation.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_device_is_error() {
        assert!(run(3, 0.0, 1.0, 60.0, true).is_err());
    }

    #[test]
    fn test_invalid_force_exits_one() {
        assert_eq!(run(1, 0.0, -1.0, 60.0, true).unwrap(), ExitCode::from(1));
        assert_eq!(run(2, 135.0, 0.5, 60.0, true).unwrap(), ExitCode::SUCCESS);
    }
}
