//! Configuration type definitions
//!
//! These types represent the sign configuration parsed from `sign.toml`.

use heapless::String;

use crate::scene::{PaletteColor, MAX_TEXT_LEN};

/// Default minimum time between successful input reads
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;

/// Default button GPIO (Interstate 75 "A" button)
pub const DEFAULT_INPUT_PIN: u8 = 14;

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// Maximum samples per input read
pub const MAX_INPUT_SAMPLES: u8 = 16;

/// Where the on/off signal comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Read the configured GPIO
    #[default]
    Pin,
    /// Always on (bench testing the panel)
    ForceOn,
    /// Always off
    ForceOff,
}

/// Internal pull resistor on the input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputPull {
    /// Floating input (external resistor)
    None,
    /// Pull-up; pair with an active-low (`!`) pin
    Up,
    /// Pull-down; the default for an active-high switch to 3V3
    #[default]
    Down,
}

/// Input pin configuration
///
/// Parsed from strings like `"~gpio14"`:
/// - `!` - active-low (inverted)
/// - `^` - internal pull-up
/// - `~` - internal pull-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Internal pull resistor
    pub pull: InputPull,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_INPUT_PIN,
            inverted: false,
            pull: InputPull::Down,
        }
    }
}

/// Poll loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Minimum time between successful reads in milliseconds
    pub interval_ms: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Input signal configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Signal source
    pub mode: InputMode,
    /// Pin used in [`InputMode::Pin`]
    pub pin: PinConfig,
    /// Samples per read that must agree (1 = single read)
    pub samples: u8,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::Pin,
            pin: PinConfig::default(),
            samples: 1,
        }
    }
}

/// HUB75 matrix configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Bits per color channel shown (1-8)
    pub color_depth: u8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            color_depth: 4,
        }
    }
}

/// Per-scene overrides
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneConfig {
    /// Upper line text
    pub line1: String<MAX_TEXT_LEN>,
    /// Upper line left edge
    pub line1_x: i16,
    /// Lower line text
    pub line2: String<MAX_TEXT_LEN>,
    /// Lower line left edge
    pub line2_x: i16,
    /// Text color for both lines
    pub color: PaletteColor,
    /// Leave the panel dark in this state
    pub blank: bool,
}

impl SceneConfig {
    fn new(line1: &str, line1_x: i16, line2: &str, line2_x: i16, color: PaletteColor) -> Self {
        Self {
            line1: String::try_from(line1).unwrap_or_default(),
            line1_x,
            line2: String::try_from(line2).unwrap_or_default(),
            line2_x,
            color,
            blank: false,
        }
    }
}

/// Scene overrides for both states
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScenesConfig {
    /// Scene shown while off
    pub off: SceneConfig,
    /// Scene shown while on air
    pub on: SceneConfig,
}

impl Default for ScenesConfig {
    fn default() -> Self {
        Self {
            off: SceneConfig::new("Shy", 10, ".Dev", 2, PaletteColor::DimWhite),
            on: SceneConfig::new("ON", 11, "AIR", 9, PaletteColor::Red),
        }
    }
}

/// Complete sign configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignConfig {
    /// Poll loop timing
    pub poll: PollConfig,
    /// Input signal
    pub input: InputConfig,
    /// Matrix output
    pub matrix: MatrixConfig,
    /// Scene text
    pub scenes: ScenesConfig,
}
