use crate::grid::{GrainGrid, Snapshot};

/// Undo/redo stacks of whole-grid snapshots. Unbounded, session-only.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-mutation state of a user action and discards the redo branch.
    pub fn record(&mut self, before: Snapshot) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Records the pre-mutation state without touching the redo stack.
    pub fn record_keep_redo(&mut self, before: Snapshot) {
        self.undo.push(before);
    }

    pub fn undo(&mut self, grid: &mut GrainGrid) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(grid.snapshot());
                grid.restore(&previous);
                log::debug!("Undo (undo={}, redo={})", self.undo.len(), self.redo.len());
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self, grid: &mut GrainGrid) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(grid.snapshot());
                grid.restore(&next);
                log::debug!("Redo (undo={}, redo={})", self.undo.len(), self.redo.len());
                true
            }
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
