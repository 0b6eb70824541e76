//! Generation budgets.
//!
//! Budgets bound how much signal a single request may render. The naive
//! spectral path of the pink-noise generator is O(n²), so the spectral length
//! (samples per noise sequence) has its own limit, tighter than the plain
//! sample limit in the realtime profile.

use serde::{Deserialize, Serialize};

/// Resource limits for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationBudget {
    /// Profile identifier (e.g., "default", "strict", "realtime").
    pub name: String,
    /// Maximum duration of one request in seconds.
    pub max_duration_seconds: f64,
    /// Maximum samples per output array.
    pub max_samples: usize,
    /// Maximum length of a noise sequence passed through the spectral filter.
    pub max_spectral_length: usize,
}

impl Default for GenerationBudget {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            max_duration_seconds: Self::DEFAULT_MAX_DURATION_SECONDS,
            max_samples: Self::DEFAULT_MAX_SAMPLES,
            max_spectral_length: Self::DEFAULT_MAX_SPECTRAL_LENGTH,
        }
    }
}

impl GenerationBudget {
    /// Default maximum duration in seconds.
    pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 30.0;

    /// Default maximum samples: 30 seconds at 48 kHz.
    pub const DEFAULT_MAX_SAMPLES: usize = 30 * 48_000;

    /// Default maximum spectral length.
    pub const DEFAULT_MAX_SPECTRAL_LENGTH: usize = 65_536;

    /// Profile names accepted by [`GenerationBudget::by_name`].
    pub const PROFILE_NAMES: [&'static str; 3] = ["default", "strict", "realtime"];

    /// Returns the strict profile with reduced limits.
    pub fn strict() -> Self {
        Self {
            name: "strict".to_string(),
            max_duration_seconds: 10.0,
            max_samples: 10 * 48_000,
            max_spectral_length: 48_000,
        }
    }

    /// Returns the realtime profile for per-frame streaming blocks.
    pub fn realtime() -> Self {
        Self {
            name: "realtime".to_string(),
            max_duration_seconds: 1.0,
            max_samples: 48_000,
            max_spectral_length: 8_192,
        }
    }

    /// Looks up a profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "realtime" => Some(Self::realtime()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        for name in GenerationBudget::PROFILE_NAMES {
            assert_eq!(GenerationBudget::by_name(name).unwrap().name, name);
        }
        assert!(GenerationBudget::by_name("zx-8bit").is_none());
    }

    #[test]
    fn test_profiles_tighten() {
        let default = GenerationBudget::default();
        let realtime = GenerationBudget::realtime();
        assert!(realtime.max_spectral_length < default.max_spectral_length);
        assert!(realtime.max_duration_seconds < default.max_duration_seconds);
    }
}
