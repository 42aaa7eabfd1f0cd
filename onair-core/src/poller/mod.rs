//! Status poller
//!
//! Reads the input signal at a bounded rate and swaps the displayed scene
//! whenever the signal changes.

pub mod renderer;

pub use renderer::{PollOutcome, PollerRenderer, Tick};
