//! Sawtooth generator integration tests.

use proptest::prelude::*;
use yuragi_backend_waveform::sawtooth::sawtooth_value;
use yuragi_backend_waveform::{generate, generate_channels, ChannelStream};
use yuragi_spec::{ChannelParameterRecord, ChannelWaveformParameters, GenerationRequest, CHANNEL_IDS};

// ============================================================================
// Phase continuity
// ============================================================================

#[test]
fn test_two_blocks_match_one_long_block() {
    let params = ChannelWaveformParameters::new(37.0, 0.8, 45.0, true);
    let first = GenerationRequest::new(0.5, 1000);
    let second = first.advanced();

    let mut split = generate(&params, &first).unwrap();
    split.extend(generate(&params, &second).unwrap());
    let whole = generate(&params, &GenerationRequest::new(1.0, 1000)).unwrap();

    assert_eq!(split.len(), whole.len());
    for (i, (a, b)) in split.iter().zip(&whole).enumerate() {
        // A ramp reset can land on either side of a sample at the wrap point.
        let diff = (a - b).abs();
        assert!(diff < 1e-9 || (diff - 1.6).abs() < 1e-9, "sample {}: {} vs {}", i, a, b);
    }
}

#[test]
fn test_stream_matches_single_call() {
    let channels = vec![
        ChannelWaveformParameters::new(12.5, 1.0, 0.0, true),
        ChannelWaveformParameters::new(30.0, 0.4, 90.0, false),
    ];
    let mut stream = ChannelStream::new(channels.clone(), 800).unwrap();
    let mut blocks: Vec<Vec<f64>> = vec![Vec::new(); channels.len()];
    for _ in 0..4 {
        for (out, block) in blocks.iter_mut().zip(stream.next_block(0.25).unwrap()) {
            out.extend(block);
        }
    }

    let whole = generate_channels(&channels, &GenerationRequest::new(1.0, 800)).unwrap();
    for (streamed, single) in blocks.iter().zip(&whole) {
        assert_eq!(streamed.len(), single.len());
        for (a, b) in streamed.iter().zip(single) {
            let diff = (a - b).abs();
            assert!(diff < 1e-9 || (diff - 2.0 * 0.4).abs() < 1e-9 || (diff - 2.0).abs() < 1e-9);
        }
    }
}

// ============================================================================
// Multi-channel
// ============================================================================

#[test]
fn test_four_channels_keep_order_and_silence() {
    let channels = vec![
        ChannelWaveformParameters::new(60.0, 0.5, 0.0, true),
        ChannelWaveformParameters::new(80.0, 0.7, 0.0, true).inactive(),
        ChannelWaveformParameters::new(40.0, 1.0, 180.0, false),
        ChannelWaveformParameters::new(100.0, 0.0, 0.0, true),
    ];
    assert_eq!(channels.len(), CHANNEL_IDS.len());

    let request = GenerationRequest::new(0.02, 44100);
    let output = generate_channels(&channels, &request).unwrap();

    assert_eq!(output.len(), 4);
    assert!(output.iter().all(|c| c.len() == 882));
    assert_eq!(output[0], generate(&channels[0], &request).unwrap());
    assert!(output[1].iter().all(|&v| v == 0.0));
    assert_eq!(output[2], generate(&channels[2], &request).unwrap());
    assert!(output[3].iter().all(|&v| v == 0.0));
}

#[test]
fn test_records_from_server_render_in_channel_order() {
    let records: Vec<ChannelParameterRecord> = CHANNEL_IDS
        .iter()
        .map(|&id| {
            ChannelParameterRecord::new(
                id,
                &ChannelWaveformParameters::new(50.0 + id.index() as f64, 0.5, 0.0, true),
            )
        })
        .collect();
    let channels: Vec<ChannelWaveformParameters> =
        records.into_iter().map(|r| r.into_parameters()).collect();

    let output = generate_channels(&channels, &GenerationRequest::new(0.01, 1000)).unwrap();
    assert_eq!(output.len(), 4);
    // At t=0 with zero phase every rising channel starts at -amplitude.
    assert!(output.iter().all(|c| c[0] == -0.5));
}

#[test]
fn test_inactive_channel_with_bad_values_is_silent() {
    let channels = vec![ChannelWaveformParameters::new(f64::NAN, 1.0, 0.0, true).inactive()];
    let output = generate_channels(&channels, &GenerationRequest::new(0.01, 1000)).unwrap();
    assert_eq!(output, vec![vec![0.0; 10]]);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_zero_amplitude_is_all_zero(
        frequency in 0.0f64..120.0,
        phase in -720.0f64..720.0,
        polarity: bool,
        duration in 0.0f64..0.05,
    ) {
        let params = ChannelWaveformParameters::new(frequency, 0.0, phase, polarity);
        let request = GenerationRequest::new(duration, 8000);
        let samples = generate(&params, &request).unwrap();
        prop_assert_eq!(samples.len(), request.num_samples());
        prop_assert!(samples.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn prop_amplitude_sign_is_absorbed(
        frequency in 0.0f64..120.0,
        amplitude in 0.01f64..2.0,
        phase in 0.0f64..360.0,
        polarity: bool,
        start in 0.0f64..10.0,
    ) {
        let request = GenerationRequest::new(0.01, 4000).starting_at(start);
        let positive = ChannelWaveformParameters::new(frequency, amplitude, phase, polarity);
        let negative = ChannelWaveformParameters::new(frequency, -amplitude, phase, polarity);
        prop_assert_eq!(generate(&positive, &request).unwrap(), generate(&negative, &request).unwrap());
    }

    #[test]
    fn prop_values_within_amplitude(
        frequency in 0.0f64..120.0,
        amplitude in -2.0f64..2.0,
        phase in -1000.0f64..1000.0,
        t in 0.0f64..100.0,
    ) {
        let v = sawtooth_value(frequency, phase, t);
        prop_assert!((-1.0..=1.0).contains(&v));
        let params = ChannelWaveformParameters::new(frequency, amplitude, phase, true);
        let samples = generate(&params, &GenerationRequest::new(0.005, 2000).starting_at(t)).unwrap();
        prop_assert!(samples.iter().all(|s| s.abs() <= amplitude.abs()));
    }
}
