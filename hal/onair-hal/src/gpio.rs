//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Errors reported by a digital input read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// The pin could not be sampled (e.g. port expander bus error)
    ReadFailed,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Drive a full high-then-low pulse (clock and latch lines)
    fn pulse(&mut self) {
        self.set_high();
        self.set_low();
    }
}

/// Digital input pin
///
/// Reads can fail on inputs that sit behind a bus; on-chip GPIO
/// implementations simply always return `Ok`.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> Result<bool, PinError>;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> Result<bool, PinError> {
        self.is_high().map(|high| !high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOutput {
        high: bool,
        rising_edges: u32,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    struct MockInput {
        level: Result<bool, PinError>,
    }

    impl InputPin for MockInput {
        fn is_high(&mut self) -> Result<bool, PinError> {
            self.level
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockOutput {
            high: false,
            rising_edges: 0,
        };
        pin.set_state(true);
        assert!(pin.high);
        pin.set_state(false);
        assert!(!pin.high);
    }

    #[test]
    fn test_pulse_leaves_pin_low() {
        let mut pin = MockOutput {
            high: false,
            rising_edges: 0,
        };
        pin.pulse();
        pin.pulse();
        assert!(!pin.high);
        assert_eq!(pin.rising_edges, 2);
    }

    #[test]
    fn test_is_low_inverts_level() {
        let mut pin = MockInput { level: Ok(true) };
        assert_eq!(pin.is_low(), Ok(false));

        let mut pin = MockInput {
            level: Err(PinError::ReadFailed),
        };
        assert_eq!(pin.is_low(), Err(PinError::ReadFailed));
    }
}
