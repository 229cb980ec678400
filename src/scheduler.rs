use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::canvas::SandCanvas;
use crate::render::Renderer;

/// The host's "call me again next refresh" hook.
pub trait FrameHost {
    fn request_next_frame(&self);
}

impl FrameHost for egui::Context {
    fn request_next_frame(&self) {
        self.request_repaint();
    }
}

/// Settle-then-render loop, advanced one tick at a time by the host.
pub struct FrameLoop {
    renderer: Renderer,
    rng: StdRng,
    frame: RgbaImage,
    frame_count: u64,
}

impl FrameLoop {
    pub fn new(renderer: Renderer) -> Self {
        Self::with_rng(renderer, StdRng::from_entropy())
    }

    pub fn with_rng(renderer: Renderer, rng: StdRng) -> Self {
        Self {
            renderer,
            rng,
            frame: RgbaImage::new(0, 0),
            frame_count: 0,
        }
    }

    pub fn tick(&mut self, canvas: &mut SandCanvas, host: &impl FrameHost) -> &RgbaImage {
        canvas.settle();
        self.renderer
            .render_into(&canvas.grid, &mut self.frame, &mut self.rng);
        self.frame_count += 1;
        host.request_next_frame();
        &self.frame
    }

    /// Last rendered frame; empty before the first tick.
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
