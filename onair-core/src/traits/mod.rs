//! Hardware abstraction traits
//!
//! These traits define the interface between the poller and the
//! hardware-specific input and display implementations.

pub mod input;
pub mod surface;

pub use input::{SignalSource, TransientReadError};
pub use surface::{RenderError, SceneSurface};
