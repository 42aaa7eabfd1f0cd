//! Configuration types and parsing
//!
//! The sign is configured by a small `sign.toml` embedded in the firmware.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
