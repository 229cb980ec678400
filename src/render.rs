use image::{ImageBuffer, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::color::SandColor;
use crate::grid::GrainGrid;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rasterizes a grid one pixel per cell, shifting every grain's channels by a
/// fresh random amount each frame.
pub struct Renderer {
    jitter: i16,
}

impl Renderer {
    /// `jitter` of N draws offsets from `-N..N`, with N capped to 0..=255.
    pub fn new(jitter: i16) -> Self {
        Self {
            jitter: jitter.clamp(0, 255),
        }
    }

    pub fn jitter(&self) -> i16 {
        self.jitter
    }

    pub fn render_to_image(&self, grid: &GrainGrid, rng: &mut impl RngCore) -> RgbaImage {
        let mut img = ImageBuffer::new(grid.width() as u32, grid.height() as u32);
        self.render_into(grid, &mut img, rng);
        img
    }

    /// Clears `img` and paints the occupied cells. `img` is reallocated if its
    /// size does not match the grid.
    pub fn render_into(&self, grid: &GrainGrid, img: &mut RgbaImage, rng: &mut impl RngCore) {
        let (width, height) = (grid.width() as u32, grid.height() as u32);
        if img.dimensions() != (width, height) {
            *img = ImageBuffer::new(width, height);
        }
        if width == 0 || height == 0 {
            return;
        }

        // Per-row generators keep a frame reproducible whether or not rows run in parallel.
        let frame_seed = rng.next_u64();
        let row_bytes = width as usize * 4;
        let cells = grid.cells();
        let jitter = self.jitter;

        let paint_row = |(y, row): (usize, &mut [u8])| {
            let mut row_rng = StdRng::seed_from_u64(frame_seed.wrapping_add(y as u64));
            let row_cells = &cells[y * width as usize..(y + 1) * width as usize];
            for (pixel, cell) in row.chunks_exact_mut(4).zip(row_cells) {
                let rgba = match cell {
                    Some(color) => grain_pixel(*color, jitter, &mut row_rng),
                    None => BACKGROUND,
                };
                pixel.copy_from_slice(&rgba.0);
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        img.par_chunks_mut(row_bytes).enumerate().for_each(paint_row);

        #[cfg(target_arch = "wasm32")]
        img.chunks_mut(row_bytes).enumerate().for_each(paint_row);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(15)
    }
}

fn grain_pixel(color: SandColor, jitter: i16, rng: &mut impl Rng) -> Rgba<u8> {
    let grain = if jitter == 0 {
        0
    } else {
        rng.gen_range(-jitter..jitter)
    };
    let [r, g, b] = color.with_grain(grain);
    Rgba([r, g, b, 255])
}
