use crate::color::SandColor;

/// Deep copy of a grid's cells, used by the undo/redo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Vec<Option<SandColor>>,
}

impl Snapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Settled sand. Dimensions are fixed for the lifetime of the grid.
///
/// All coordinate-taking methods accept signed values so brush edges can
/// spill past the border; anything outside `[0, width) x [0, height)` is
/// ignored on write and reads back as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<SandColor>>,
}

impl GrainGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<SandColor> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some()
    }

    pub fn set(&mut self, x: i64, y: i64, color: SandColor) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Some(color);
        }
    }

    pub fn clear_cell(&mut self, x: i64, y: i64) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = None;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub(crate) fn cells(&self) -> &[Option<SandColor>] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Option<SandColor>] {
        &mut self.cells
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Replaces the cells with the snapshot's. A snapshot taken from a grid of
    /// other dimensions is ignored.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.width || snapshot.height != self.height {
            log::warn!(
                "Ignoring {}x{} snapshot for {}x{} grid",
                snapshot.width,
                snapshot.height,
                self.width,
                self.height
            );
            return;
        }
        self.cells.copy_from_slice(&snapshot.cells);
    }
}
