//! Static YURAGI presets.
//!
//! Preset values are configuration constants. Snapshot tests fingerprint them,
//! so changing a value is a deliberate, visible change.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SpecError;
use crate::yuragi::YuragiParameters;

/// Named YURAGI parameter sets offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YuragiPreset {
    /// Slow, shallow motion.
    Gentle,
    /// Everyday setting; also the parameter default.
    Moderate,
    /// Fast rotation with strong fluctuation.
    Intense,
    /// Slow rotation with a long breathing envelope.
    Therapeutic,
    /// Therapeutic base with pronounced 1/f fluctuation.
    TherapeuticFluctuation,
}

impl YuragiPreset {
    /// All presets in display order.
    pub const ALL: [YuragiPreset; 5] = [
        YuragiPreset::Gentle,
        YuragiPreset::Moderate,
        YuragiPreset::Intense,
        YuragiPreset::Therapeutic,
        YuragiPreset::TherapeuticFluctuation,
    ];

    /// Returns the preset's identifier.
    pub fn name(self) -> &'static str {
        match self {
            YuragiPreset::Gentle => "gentle",
            YuragiPreset::Moderate => "moderate",
            YuragiPreset::Intense => "intense",
            YuragiPreset::Therapeutic => "therapeutic",
            YuragiPreset::TherapeuticFluctuation => "therapeutic_fluctuation",
        }
    }

    /// Returns the fully-populated parameters for this preset (unseeded).
    pub fn parameters(self) -> YuragiParameters {
        match self {
            YuragiPreset::Gentle => YuragiParameters {
                rotation_frequency: 0.2,
                radius: 0.8,
                initial_phase: 0.0,
                base_amplitude: 0.4,
                envelope_frequency: 0.25,
                envelope_depth: 0.15,
                noise_level: 0.05,
                noise_bandwidth: 1.0,
                angular_fluctuation_amplitude: 5.0,
                angular_fluctuation_bandwidth: 0.8,
                fm_depth: 0.03,
                duration: 1.0,
                sample_rate: 44100,
                seed: None,
            },
            YuragiPreset::Moderate => YuragiParameters {
                rotation_frequency: 0.33,
                radius: 1.0,
                initial_phase: 0.0,
                base_amplitude: 0.6,
                envelope_frequency: 0.4,
                envelope_depth: 0.25,
                noise_level: 0.1,
                noise_bandwidth: 2.0,
                angular_fluctuation_amplitude: 10.0,
                angular_fluctuation_bandwidth: 1.5,
                fm_depth: 0.05,
                duration: 1.0,
                sample_rate: 44100,
                seed: None,
            },
            YuragiPreset::Intense => YuragiParameters {
                rotation_frequency: 0.8,
                radius: 1.0,
                initial_phase: 0.0,
                base_amplitude: 0.85,
                envelope_frequency: 0.8,
                envelope_depth: 0.35,
                noise_level: 0.15,
                noise_bandwidth: 4.0,
                angular_fluctuation_amplitude: 20.0,
                angular_fluctuation_bandwidth: 3.0,
                fm_depth: 0.1,
                duration: 1.0,
                sample_rate: 44100,
                seed: None,
            },
            YuragiPreset::Therapeutic => YuragiParameters {
                rotation_frequency: 0.15,
                radius: 0.9,
                initial_phase: 0.0,
                base_amplitude: 0.5,
                envelope_frequency: 0.2,
                envelope_depth: 0.2,
                noise_level: 0.08,
                noise_bandwidth: 1.0,
                angular_fluctuation_amplitude: 8.0,
                angular_fluctuation_bandwidth: 1.0,
                fm_depth: 0.04,
                duration: 1.0,
                sample_rate: 44100,
                seed: None,
            },
            YuragiPreset::TherapeuticFluctuation => YuragiParameters {
                rotation_frequency: 0.25,
                radius: 1.0,
                initial_phase: 45.0,
                base_amplitude: 0.55,
                envelope_frequency: 0.13,
                envelope_depth: 0.3,
                noise_level: 0.12,
                noise_bandwidth: 1.5,
                angular_fluctuation_amplitude: 15.0,
                angular_fluctuation_bandwidth: 1.2,
                fm_depth: 0.08,
                duration: 1.0,
                sample_rate: 44100,
                seed: None,
            },
        }
    }
}

impl FromStr for YuragiPreset {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YuragiPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| SpecError::UnknownPreset(s.to_string()))
    }
}

impl std::fmt::Display for YuragiPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
