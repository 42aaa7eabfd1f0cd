//! LED matrix panels

pub mod hub75;

pub use hub75::{Hub75, Hub75Config, Hub75Pins};
