//! Sign display state
//!
//! The sign has exactly two modes. Everything it draws is a function of
//! the current mode.

pub mod mode;

pub use mode::DisplayState;
