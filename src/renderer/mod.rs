//! Frame description
//!
//! `render` turns a post-tick snapshot into everything a graphics backend
//! needs: camera, instance batches and HUD text. It only reads the state.

pub mod hud;
pub mod instance;
pub mod scene;

pub use hud::HudLine;
pub use instance::{DrawBatch, Instance, Mesh};
pub use scene::CameraView;

use glam::Mat4;

use crate::sim::GameState;

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1000, 700)
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub camera: CameraView,
    pub view_proj: Mat4,
    pub batches: Vec<DrawBatch>,
    pub hud: Vec<HudLine>,
}

/// Describe the current snapshot as a frame
pub fn render(state: &GameState, viewport: &Viewport) -> Frame {
    let camera = CameraView::chase(state);
    Frame {
        clear_color: instance::colors::SKY,
        camera,
        view_proj: camera.view_proj(viewport.aspect()),
        batches: scene::build_batches(state),
        hud: hud::hud_lines(state, viewport),
    }
}
