//! Scene definitions
//!
//! A scene is the complete, precomputed picture for one display state.
//! Scenes are plain data; drawing them is the job of `onair-display`.

pub mod palette;
pub mod types;

pub use palette::PaletteColor;
pub use types::{FrameStyle, Scene, SceneSet, TextLine, MAX_TEXT_LEN};
