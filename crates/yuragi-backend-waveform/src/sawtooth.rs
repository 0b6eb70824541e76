//! Sawtooth drive generator.
//!
//! Each sample is computed from its absolute time `t = start_time + i / rate`,
//! never from a running phase accumulator, so consecutive blocks rendered with
//! an advancing `start_time` join without a phase jump.

use yuragi_spec::{ChannelWaveformParameters, GenerationRequest};

use crate::error::{check_duration, check_finite, check_frequency, check_sample_rate, WaveformResult};

/// A rendered block together with the absolute time of every sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledWaveform {
    /// Absolute sample times in seconds.
    pub time: Vec<f64>,
    /// Sample values.
    pub samples: Vec<f64>,
}

impl SampledWaveform {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the block has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Renders one channel.
///
/// Returns `floor(duration * sample_rate)` samples. A zero amplitude yields
/// silence without evaluating the ramp. The amplitude's sign is ignored;
/// `polarity` chooses between a rising and a falling ramp.
///
/// The channel's active flag is not consulted here; see [`generate_channels`].
pub fn generate(
    params: &ChannelWaveformParameters,
    request: &GenerationRequest,
) -> WaveformResult<Vec<f64>> {
    check_request(request)?;
    check_channel(params)?;
    Ok(render(params, request))
}

/// Renders one channel and returns the sample times alongside the values.
pub fn generate_with_time(
    params: &ChannelWaveformParameters,
    request: &GenerationRequest,
) -> WaveformResult<SampledWaveform> {
    let samples = generate(params, request)?;
    let time = (0..samples.len())
        .map(|i| sample_time(request, i))
        .collect();
    Ok(SampledWaveform { time, samples })
}

/// Renders every channel with a shared request.
///
/// The output has one entry per input channel, in input order. Inactive and
/// zero-amplitude channels are rendered as silence of the full length.
pub fn generate_channels(
    channels: &[ChannelWaveformParameters],
    request: &GenerationRequest,
) -> WaveformResult<Vec<Vec<f64>>> {
    check_request(request)?;
    let num_samples = request.num_samples();
    log::debug!(
        "rendering {} channels x {} samples from t={}",
        channels.len(),
        num_samples,
        request.start_time
    );

    channels
        .iter()
        .map(|channel| {
            if channel.is_audible() {
                check_channel(channel)?;
                Ok(render(channel, request))
            } else {
                Ok(vec![0.0; num_samples])
            }
        })
        .collect()
}

/// Raw sawtooth value in `[-1, 1]` at absolute time `t`.
#[inline]
pub fn sawtooth_value(frequency: f64, phase_degrees: f64, t: f64) -> f64 {
    let cycles = frequency * t + phase_degrees / 360.0;
    2.0 * cycles.rem_euclid(1.0) - 1.0
}

fn render(params: &ChannelWaveformParameters, request: &GenerationRequest) -> Vec<f64> {
    let num_samples = request.num_samples();
    if params.amplitude == 0.0 {
        return vec![0.0; num_samples];
    }

    let amplitude = params.amplitude.abs();
    let sign = if params.polarity { 1.0 } else { -1.0 };
    (0..num_samples)
        .map(|i| {
            let t = sample_time(request, i);
            amplitude * sign * sawtooth_value(params.frequency, params.phase, t)
        })
        .collect()
}

#[inline]
fn sample_time(request: &GenerationRequest, index: usize) -> f64 {
    request.start_time + index as f64 / request.sample_rate as f64
}

fn check_request(request: &GenerationRequest) -> WaveformResult<()> {
    check_duration(request.duration)?;
    check_sample_rate(request.sample_rate)?;
    check_finite("startTime", request.start_time)
}

fn check_channel(params: &ChannelWaveformParameters) -> WaveformResult<()> {
    check_frequency("frequency", params.frequency)?;
    check_finite("amplitude", params.amplitude)?;
    check_finite("phase", params.phase)
}

/// Caller-owned cursor over a multi-channel sawtooth stream.
///
/// Holds the accumulated start time so successive [`next_block`] calls render
/// a phase-continuous signal. Parameters may be replaced between blocks.
///
/// [`next_block`]: ChannelStream::next_block
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStream {
    channels: Vec<ChannelWaveformParameters>,
    sample_rate: u32,
    elapsed: f64,
}

impl ChannelStream {
    /// Creates a stream starting at time zero.
    pub fn new(channels: Vec<ChannelWaveformParameters>, sample_rate: u32) -> WaveformResult<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            channels,
            sample_rate,
            elapsed: 0.0,
        })
    }

    /// Current channel parameters.
    pub fn channels(&self) -> &[ChannelWaveformParameters] {
        &self.channels
    }

    /// Replaces the channel parameters; the stream time is kept.
    pub fn set_channels(&mut self, channels: Vec<ChannelWaveformParameters>) {
        self.channels = channels;
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Start time of the next block in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Rewinds the stream to time zero.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Renders the next `duration` seconds and advances the stream.
    ///
    /// The stream time only advances when rendering succeeds.
    pub fn next_block(&mut self, duration: f64) -> WaveformResult<Vec<Vec<f64>>> {
        let request = GenerationRequest::new(duration, self.sample_rate).starting_at(self.elapsed);
        let block = generate_channels(&self.channels, &request)?;
        self.elapsed = request.advanced().start_time;
        Ok(block)
    }
}
