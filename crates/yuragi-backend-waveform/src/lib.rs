//! YURAGI Waveform Backend
//!
//! This crate implements the signal engine behind the YURAGI haptic drive:
//!
//! - **Sawtooth** - per-channel drive ramps, phase-continuous across blocks
//! - **Pink noise** - seeded 1/f^alpha noise shaped in the frequency domain
//! - **Circular motion** - rotating trajectory with 1/f angular jitter and FM
//! - **Amplitude modulation** - sinusoidal envelope plus 1/f noise, clipped
//! - **YURAGI** - the trajectory scaled by the envelope
//!
//! # Determinism
//!
//! Every generator is a pure function of its arguments. Noise comes from a
//! Park–Miller LCG with a Box–Muller sampler, so a given seed reproduces
//! bit-identical output. The default [`SpectralMethod::Naive`] transform keeps
//! a fixed floating-point evaluation order; [`SpectralMethod::Fft`] trades that
//! for O(n log n) cost.
//!
//! # Example
//!
//! ```
//! use yuragi_backend_waveform::{generate_yuragi, signal_hash};
//! use yuragi_spec::YuragiPreset;
//!
//! let params = YuragiPreset::Gentle
//!     .parameters()
//!     .with_timing(0.01, 8000)
//!     .with_seed(42);
//! let result = generate_yuragi(&params).unwrap();
//! assert_eq!(result.len(), 80);
//! println!("x hash: {}", signal_hash(&result.x));
//! ```
//!
//! # Crate Structure
//!
//! - [`sawtooth`] - channel drive generator and [`ChannelStream`]
//! - [`rng`] - seeded LCG with normal sampling
//! - [`spectral`] - magnitude DFT and real inverse
//! - [`noise`] - pink and fluctuation noise
//! - [`motion`] - circular motion
//! - [`amplitude`] - amplitude envelope
//! - [`yuragi`] - composite generator
//! - [`digest`] - signal hashes

pub mod amplitude;
pub mod digest;
pub mod error;
pub mod motion;
pub mod noise;
pub mod rng;
pub mod sawtooth;
pub mod spectral;
pub mod yuragi;

pub use amplitude::{amplitude_modulation, AmplitudeModulationParams};
pub use digest::signal_hash;
pub use error::{WaveformError, WaveformResult};
pub use motion::{circular_motion, CircularMotionParams, CircularMotionResult};
pub use noise::{fluctuation_noise, pink_noise, PinkNoise};
pub use rng::SeededRandom;
pub use sawtooth::{generate, generate_channels, generate_with_time, ChannelStream, SampledWaveform};
pub use spectral::SpectralMethod;
pub use yuragi::{generate_preset, generate_yuragi, generate_yuragi_with, GeneratorOptions, YuragiResult};
