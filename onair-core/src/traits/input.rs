//! Input signal trait

/// A failed input read
///
/// Every read failure is transient by policy: the poller logs it and
/// tries again on its next iteration. The variants only carry detail
/// for the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransientReadError {
    /// The underlying pin read failed
    Pin,
    /// Consecutive samples disagreed (line still settling)
    Unsettled,
}

/// Source of the sign's on/off signal
///
/// Implementations wrap the physical input (button, switch, relay
/// contact) and report its logical level: `true` means "on air".
pub trait SignalSource {
    /// Read the current logical level
    ///
    /// Takes `&mut self` because sampling hardware typically requires
    /// mutable access.
    fn read(&mut self) -> Result<bool, TransientReadError>;
}
