//! YURAGI composite integration tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use yuragi_backend_waveform::{
    amplitude_modulation, circular_motion, generate_preset, generate_yuragi, generate_yuragi_with,
    AmplitudeModulationParams, CircularMotionParams, GeneratorOptions, SpectralMethod,
    YuragiResult,
};
use yuragi_spec::{YuragiParameters, YuragiPreset};

fn assert_amplitude_band(result: &YuragiResult, base: f64) {
    for &a in &result.amplitude {
        assert!(a >= 0.2 * base && a <= 1.5 * base, "amplitude {} outside band", a);
    }
}

fn check_full_second(result: &YuragiResult, params: &YuragiParameters) {
    assert_eq!(result.len(), 44100);
    assert_eq!(result.y.len(), 44100);
    assert_eq!(result.amplitude.len(), 44100);
    assert_eq!(result.theta.len(), 44100);
    assert_eq!(result.omega.len(), 44100);
    assert_amplitude_band(result, params.base_amplitude);

    for (m, a) in result.magnitudes().iter().zip(&result.amplitude) {
        assert!((m - params.radius * a).abs() < 1e-9);
    }
    assert!(result
        .x
        .iter()
        .chain(&result.y)
        .chain(&result.theta)
        .chain(&result.omega)
        .all(|v| v.is_finite()));
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
#[ignore = "naive O(n^2) transform over 44100 samples; run with --ignored"]
fn test_gentle_preset_full_second_naive() {
    let params = YuragiPreset::Gentle.parameters().with_seed(42);
    let result = generate_preset(YuragiPreset::Gentle, Some(42)).unwrap();
    check_full_second(&result, &params);
    assert_eq!(result, generate_yuragi(&params).unwrap());
}

#[test]
fn test_gentle_preset_full_second_fft() {
    let params = YuragiPreset::Gentle.parameters().with_seed(42);
    let options = GeneratorOptions {
        method: SpectralMethod::Fft,
    };
    let result = generate_yuragi_with(&params, &options).unwrap();
    check_full_second(&result, &params);
}

#[test]
fn test_every_preset_short_render() {
    for preset in YuragiPreset::ALL {
        let params = preset.parameters().with_timing(0.1, 4000).with_seed(7);
        let result = generate_yuragi(&params).unwrap();
        assert_eq!(result.len(), 400, "{}", preset);
        assert_amplitude_band(&result, params.base_amplitude);
    }
}

#[test]
fn test_composite_is_product_of_parts() {
    let params = YuragiPreset::TherapeuticFluctuation
        .parameters()
        .with_timing(0.05, 2000)
        .with_seed(99);
    let result = generate_yuragi(&params).unwrap();

    let motion = circular_motion(&CircularMotionParams {
        phase_degrees: params.initial_phase,
        fluctuation_amplitude_degrees: params.angular_fluctuation_amplitude,
        fm_depth: params.fm_depth,
        seed: params.seed,
        ..CircularMotionParams::new(
            params.radius,
            params.rotation_frequency,
            params.duration,
            params.sample_rate,
        )
    })
    .unwrap();
    let amplitude = amplitude_modulation(&AmplitudeModulationParams {
        envelope_frequency: params.envelope_frequency,
        envelope_depth: params.envelope_depth,
        noise_level: params.noise_level,
        seed: params.seed,
        ..AmplitudeModulationParams::new(params.base_amplitude, params.duration, params.sample_rate)
    })
    .unwrap();

    assert_eq!(result.amplitude, amplitude);
    assert_eq!(result.theta, motion.theta);
    assert_eq!(result.omega, motion.omega);
    for i in 0..result.len() {
        assert_eq!(result.x[i], motion.x[i] * amplitude[i]);
        assert_eq!(result.y[i], motion.y[i] * amplitude[i]);
    }
}

#[test]
fn test_no_fluctuation_traces_exact_circle() {
    let params = YuragiParameters {
        angular_fluctuation_amplitude: 0.0,
        fm_depth: 0.0,
        ..YuragiPreset::Moderate
            .parameters()
            .with_timing(0.02, 1000)
            .with_seed(1)
    };
    let result = generate_yuragi(&params).unwrap();
    for i in 0..result.len() {
        let expected = (params.radius * result.amplitude[i]).powi(2);
        let actual = result.x[i].powi(2) + result.y[i].powi(2);
        assert!((actual - expected).abs() < 1e-12);
    }
    assert!(result
        .omega
        .iter()
        .all(|&w| w == std::f64::consts::TAU * params.rotation_frequency));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_amplitude_always_in_band(
        base in 0.0f64..2.0,
        envelope_frequency in 0.0f64..5.0,
        envelope_depth in -3.0f64..3.0,
        noise_level in -2.0f64..2.0,
        seed in any::<i64>(),
    ) {
        let params = AmplitudeModulationParams {
            envelope_frequency,
            envelope_depth,
            noise_level,
            seed: Some(seed),
            ..AmplitudeModulationParams::new(base, 0.05, 1000)
        };
        let values = amplitude_modulation(&params).unwrap();
        prop_assert_eq!(values.len(), 50);
        for a in values {
            prop_assert!(a >= 0.2 * base && a <= 1.5 * base);
        }
    }
}
