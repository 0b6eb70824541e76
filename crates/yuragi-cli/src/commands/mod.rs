//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod presets;
pub mod sawtooth;
pub mod validate;
pub mod vector;

mod output;
mod reporting;

pub use output::DataFormat;
