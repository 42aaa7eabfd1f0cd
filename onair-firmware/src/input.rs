//! Input selection
//!
//! Wraps the configured input variant in one concrete type so the
//! poller task has a fixed signature.

use onair_core::traits::{SignalSource, TransientReadError};
use onair_drivers::input::{ButtonInput, FixedInput};
use onair_hal_rp2040::RpInput;

/// Signal source chosen by `[input] mode`
pub enum SignInput {
    /// Switch on a GPIO
    Button(ButtonInput<RpInput<'static>>),
    /// Fixed level for bench testing
    Fixed(FixedInput),
}

impl SignalSource for SignInput {
    fn read(&mut self) -> Result<bool, TransientReadError> {
        match self {
            SignInput::Button(button) => button.read(),
            SignInput::Fixed(fixed) => fixed.read(),
        }
    }
}
