use crate::color::SandColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub color: SandColor,
    /// Half-width of the square footprint; 0 paints a single cell.
    pub radius: u32,
}

impl Brush {
    pub fn new(color: SandColor, radius: u32) -> Self {
        Self { color, radius }
    }

    /// Every cell the brush covers around `(cx, cy)`, in row-major order.
    pub fn footprint(&self, cx: i64, cy: i64) -> impl Iterator<Item = (i64, i64)> {
        let r = self.radius as i64;
        (-r..=r).flat_map(move |dy| (-r..=r).map(move |dx| (cx + dx, cy + dy)))
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(SandColor::new(0xc2, 0xb2, 0x80), 4)
    }
}
