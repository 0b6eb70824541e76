//! YURAGI Canonical Parameter Library
//!
//! This crate provides the types, presets, validation, and hashing shared by the
//! YURAGI waveform engine and its command-line driver. Parameter documents are
//! JSON with camelCase keys, matching the payloads exchanged with the device
//! server (`/api/parameters`, `/api/channels/{id}`, `/api/vector-force`).
//!
//! # Example
//!
//! ```
//! use yuragi_spec::{YuragiPreset, validate_yuragi_parameters};
//! use yuragi_spec::hash::canonical_params_hash;
//!
//! let params = YuragiPreset::Gentle.parameters().with_seed(42);
//! assert!(validate_yuragi_parameters(&params).is_ok());
//!
//! let hash = canonical_params_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`channel`]: Channel ids and per-channel waveform parameters
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical hashing of parameter documents
//! - [`presets`]: Static YURAGI presets
//! - [`request`]: Generation requests (duration, sample rate, start time)
//! - [`validation`]: Parameter validation and generation budgets
//! - [`vector_force`]: Polar vector-force records and their per-axis decomposition
//! - [`yuragi`]: YURAGI modulation parameters

pub mod channel;
pub mod error;
pub mod hash;
pub mod presets;
pub mod request;
pub mod validation;
pub mod vector_force;
pub mod yuragi;

// Re-export commonly used types at the crate root
pub use channel::{Axis, ChannelId, ChannelParameterRecord, ChannelWaveformParameters, CHANNEL_IDS};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{canonical_params_hash, canonical_value_hash};
pub use presets::YuragiPreset;
pub use request::GenerationRequest;
pub use validation::{
    validate_channel_ids, validate_channel_parameters, validate_generation_request,
    validate_generation_request_with_budget, validate_rendered_channels, validate_vector_force,
    validate_yuragi_parameters, validate_yuragi_parameters_with_budget, GenerationBudget,
};
pub use vector_force::{DeviceId, VectorForce};
pub use yuragi::YuragiParameters;
