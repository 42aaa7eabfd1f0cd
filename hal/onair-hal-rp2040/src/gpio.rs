//! GPIO wrappers for RP2040
//!
//! Thin newtypes over the embassy pin drivers so the board-agnostic
//! drivers can take RP2040 pins.

use embassy_rp::gpio::{Input, Output};
use onair_hal::{InputPin, OutputPin, PinError};

/// Digital input backed by an RP2040 GPIO
///
/// On-chip GPIO reads cannot fail, so `is_high` always returns `Ok`.
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Wrap a configured embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&mut self) -> Result<bool, PinError> {
        Ok(self.pin.is_high())
    }
}

/// Digital output backed by an RP2040 GPIO
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
