use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::SandColor;
use crate::error::Result;

const FALLBACK_COLOR: SandColor = SandColor::new(0xc2, 0xb2, 0x80);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandConfig {
    /// Stand-in for the browser's window width on native.
    pub viewport_width: u32,
    pub max_canvas_size: u32,
    /// Viewports at or below this width shrink the canvas to `viewport - compact_margin`.
    pub compact_breakpoint: u32,
    pub compact_margin: u32,
    pub default_brush_color: String,
    pub default_brush_size: u32,
    pub max_brush_size: u32,
    /// Display pixels per grain.
    pub cell_size: f32,
    pub grain_jitter: i16,
    pub export_dir: PathBuf,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            viewport_width: 900,
            max_canvas_size: 400,
            compact_breakpoint: 600,
            compact_margin: 40,
            default_brush_color: FALLBACK_COLOR.to_hex(),
            default_brush_size: 4,
            max_brush_size: 20,
            cell_size: 2.0,
            grain_jitter: 15,
            export_dir: PathBuf::from("."),
        }
    }
}

impl SandConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Side length of the square grid for a given viewport width.
    pub fn grid_side(&self, viewport_width: u32) -> usize {
        let side = if viewport_width > self.compact_breakpoint {
            self.max_canvas_size
        } else {
            viewport_width.saturating_sub(self.compact_margin)
        };
        side.max(1) as usize
    }

    pub fn default_color(&self) -> SandColor {
        SandColor::from_hex(&self.default_brush_color).unwrap_or_else(|| {
            log::warn!(
                "Invalid default brush color {:?}, using {}",
                self.default_brush_color,
                FALLBACK_COLOR.to_hex()
            );
            FALLBACK_COLOR
        })
    }
}
