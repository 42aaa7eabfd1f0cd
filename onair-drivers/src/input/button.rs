//! GPIO switch input
//!
//! Converts the raw pin level into the sign's logical signal. The pin can
//! be active-high (switch to 3V3 with pull-down, the default) or
//! active-low (switch to ground with pull-up).

use onair_core::traits::{SignalSource, TransientReadError};
use onair_hal::InputPin;

/// Switch or button on a GPIO pin
pub struct ButtonInput<P> {
    pin: P,
    /// If true, "on air" = pin LOW
    inverted: bool,
    /// Samples per read that must agree
    samples: u8,
}

impl<P: InputPin> ButtonInput<P> {
    /// Create a new switch input
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to read
    /// - `inverted`: If true, the signal is active when the pin is LOW
    /// - `samples`: Back-to-back reads that must agree (0 is treated as 1)
    pub fn new(pin: P, inverted: bool, samples: u8) -> Self {
        Self {
            pin,
            inverted,
            samples: samples.max(1),
        }
    }

    /// Create an active-high input with a single sample per read
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false, 1)
    }

    /// Create an active-low input with a single sample per read
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true, 1)
    }

    fn sample(&mut self) -> Result<bool, TransientReadError> {
        let high = self.pin.is_high().map_err(|_| TransientReadError::Pin)?;
        // Normal: high → active; inverted: low → active
        Ok(high != self.inverted)
    }
}

impl<P: InputPin> SignalSource for ButtonInput<P> {
    fn read(&mut self) -> Result<bool, TransientReadError> {
        let first = self.sample()?;
        for _ in 1..self.samples {
            if self.sample()? != first {
                return Err(TransientReadError::Unsettled);
            }
        }
        Ok(first)
    }
}
