//! Scene surface backed by the HUB75 panel
//!
//! Scenes are drawn into a back buffer owned by the poller and handed
//! to the refresh task whole, so the panel only ever scans complete
//! frames.

use onair_core::scene::Scene;
use onair_core::traits::{RenderError, SceneSurface};
use onair_display::{draw_scene, MatrixFrame};

use crate::channels::FRAME;

/// Draws scenes and publishes them to the refresh task
pub struct MatrixSurface {
    back: &'static mut MatrixFrame,
}

impl MatrixSurface {
    pub fn new(back: &'static mut MatrixFrame) -> Self {
        Self { back }
    }
}

impl SceneSurface for MatrixSurface {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        draw_scene(&mut *self.back, scene).map_err(|_| RenderError::Surface)?;
        FRAME.signal(self.back.clone());
        Ok(())
    }
}
