//! Display state definition

/// The mode the sign is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Input inactive; branding scene with unlit wings
    #[default]
    Off,
    /// Input active; "ON AIR" with lit wings and closed frame
    On,
}

impl From<bool> for DisplayState {
    /// Map a logical input level to a state (active = on)
    fn from(active: bool) -> Self {
        if active {
            DisplayState::On
        } else {
            DisplayState::Off
        }
    }
}
