pub mod config;
pub mod features;
pub mod info;
pub mod pick;
pub mod project;
pub mod render;

use clap::Args;
use geoverlay_core::session::MapSession;

/// Zoom and pan applied before projecting or rendering.
#[derive(Args, Clone, Debug)]
pub struct ViewArgs {
    /// Zoom scale (clamped to 0.1..=5.0)
    #[arg(long, default_value = "1.0")]
    pub zoom: f64,

    /// Horizontal pan offset in screen pixels
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub pan_x: f64,

    /// Vertical pan offset in screen pixels
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub pan_y: f64,
}

impl ViewArgs {
    pub fn apply(&self, session: &mut MapSession) {
        let viewport = session.viewport_mut();
        viewport.set_zoom(self.zoom);
        viewport.set_pan(self.pan_x, self.pan_y);
    }
}
