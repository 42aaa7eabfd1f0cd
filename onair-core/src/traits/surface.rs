//! Display surface trait

use crate::scene::Scene;

/// Errors reported by a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The surface rejected the draw or could not present the frame
    Surface,
}

/// Something that can show a whole scene at once
pub trait SceneSurface {
    /// Replace everything visible with `scene`
    ///
    /// Implementations must draw the complete scene from a cleared
    /// canvas and make it visible in one step, so a viewer never sees a
    /// partial frame and repeated calls with the same scene are no-ops
    /// to the eye.
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError>;
}
