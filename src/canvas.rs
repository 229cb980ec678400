use crate::brush::Brush;
use crate::grid::GrainGrid;
use crate::history::History;
use crate::simulation;

/// Owns everything a drawing session mutates: the grid, its history, the
/// current brush and the symmetry toggle.
#[derive(Debug, Clone)]
pub struct SandCanvas {
    pub grid: GrainGrid,
    pub history: History,
    pub brush: Brush,
    pub symmetry: bool,
}

impl SandCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: GrainGrid::new(width, height),
            history: History::new(),
            brush: Brush::default(),
            symmetry: false,
        }
    }

    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// One pointer sample. With symmetry on, the stroke is repeated at
    /// `width - cx`, and each half is its own undo entry.
    pub fn apply_stroke(&mut self, cx: i64, cy: i64) {
        self.paint(cx, cy);
        if self.symmetry {
            let mirror_x = self.grid.width() as i64 - cx;
            self.paint(mirror_x, cy);
        }
    }

    /// Fills the square brush footprint around `(cx, cy)` as one undoable unit.
    pub fn paint(&mut self, cx: i64, cy: i64) {
        self.history.record(self.grid.snapshot());
        let color = self.brush.color;
        for (x, y) in self.brush.footprint(cx, cy) {
            self.grid.set(x, y, color);
        }
    }

    /// Empties the grid. Unlike a stroke, keeps the redo stack.
    pub fn clear(&mut self) {
        self.history.record_keep_redo(self.grid.snapshot());
        self.grid.clear();
        log::info!("Canvas cleared ({} undo entries)", self.history.undo_depth());
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    pub fn settle(&mut self) -> usize {
        simulation::settle(&mut self.grid)
    }
}
