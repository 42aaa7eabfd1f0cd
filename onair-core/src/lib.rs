//! Board-agnostic core logic for the On Air sign
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Display state (on/off) and the scenes shown for each state
//! - Capability traits for the input signal and the display surface
//! - The status poller that reads the input and swaps scenes
//! - Configuration type definitions and the `sign.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod poller;
pub mod scene;
pub mod state;
pub mod traits;
