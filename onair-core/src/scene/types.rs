//! Scene data types
//!
//! Coordinates are panel pixels on the 32x16 matrix, origin top-left.

use heapless::String;

use super::palette::PaletteColor;
use crate::config::{SceneConfig, ScenesConfig};
use crate::state::DisplayState;

/// Maximum characters per text line (8 glyphs of 4px fill the panel)
pub const MAX_TEXT_LEN: usize = 8;

/// Vertical center of the upper text line
pub const LINE1_Y: i16 = 4;

/// Vertical center of the lower text line
pub const LINE2_Y: i16 = 10;

/// One line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Text content, truncated to [`MAX_TEXT_LEN`]
    pub text: String<MAX_TEXT_LEN>,
    /// Left edge in pixels
    pub x: i16,
    /// Vertical center in pixels
    pub y: i16,
    /// Text color
    pub color: PaletteColor,
}

impl TextLine {
    /// Create a text line, truncating `text` if it is too long
    pub fn new(text: &str, x: i16, y: i16, color: PaletteColor) -> Self {
        let mut line = String::new();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        Self {
            text: line,
            x,
            y,
            color,
        }
    }
}

/// How the corners of the side bars are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameStyle {
    /// Corner masks black: short side bars
    Open,
    /// Corner masks lit: bracket-shaped frame
    Closed,
}

/// Complete visual configuration for one display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// State this scene represents
    pub state: DisplayState,
    /// Upper and lower text lines
    pub lines: [TextLine; 2],
    /// Outline color of the six wing polygons
    pub wing_color: PaletteColor,
    /// Frame corner style
    pub frame: FrameStyle,
    /// Show nothing at all (panel dark)
    pub blank: bool,
}

impl Scene {
    /// Branding scene shown while off
    pub fn off() -> Self {
        Self {
            state: DisplayState::Off,
            lines: [
                TextLine::new("Shy", 10, LINE1_Y, PaletteColor::DimWhite),
                TextLine::new(".Dev", 2, LINE2_Y, PaletteColor::DimWhite),
            ],
            wing_color: PaletteColor::Black,
            frame: FrameStyle::Open,
            blank: false,
        }
    }

    /// "ON AIR" scene
    pub fn on() -> Self {
        Self {
            state: DisplayState::On,
            lines: [
                TextLine::new("ON", 11, LINE1_Y, PaletteColor::Red),
                TextLine::new("AIR", 9, LINE2_Y, PaletteColor::Red),
            ],
            wing_color: PaletteColor::Red,
            frame: FrameStyle::Closed,
            blank: false,
        }
    }

    /// Apply configured text and visibility on top of this scene
    ///
    /// Wing color and frame style stay fixed per state.
    pub fn with_config(mut self, config: &SceneConfig) -> Self {
        self.lines = [
            TextLine::new(config.line1.as_str(), config.line1_x, LINE1_Y, config.color),
            TextLine::new(config.line2.as_str(), config.line2_x, LINE2_Y, config.color),
        ];
        self.blank = config.blank;
        self
    }
}

/// The two scenes, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSet {
    off: Scene,
    on: Scene,
}

impl Default for SceneSet {
    fn default() -> Self {
        Self {
            off: Scene::off(),
            on: Scene::on(),
        }
    }
}

impl SceneSet {
    /// Build both scenes from configuration
    pub fn from_config(config: &ScenesConfig) -> Self {
        Self {
            off: Scene::off().with_config(&config.off),
            on: Scene::on().with_config(&config.on),
        }
    }

    /// Scene for a display state
    pub fn for_state(&self, state: DisplayState) -> &Scene {
        match state {
            DisplayState::Off => &self.off,
            DisplayState::On => &self.on,
        }
    }
}
