//! YURAGI CLI library.
//!
//! Document loading and the command implementations behind the `yuragi`
//! binary.

pub mod commands;
pub mod input;
