//! Fixed-level input
//!
//! Stands in for the switch when the sign is configured to be always on
//! or always off, e.g. when bench testing a panel.

use onair_core::traits::{SignalSource, TransientReadError};

/// Signal source that always reports the same level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedInput {
    level: bool,
}

impl FixedInput {
    /// Create a source stuck at `level`
    pub const fn new(level: bool) -> Self {
        Self { level }
    }
}

impl SignalSource for FixedInput {
    fn read(&mut self) -> Result<bool, TransientReadError> {
        Ok(self.level)
    }
}
