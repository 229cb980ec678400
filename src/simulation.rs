use crate::grid::GrainGrid;

/// One gravity pass: every grain with an empty cell below drops one row.
///
/// Rows are scanned from the second-to-last up to the top so a grain moves at
/// most once per pass. The bottom row is the floor and the outermost columns
/// never move. Returns how many grains fell.
pub fn settle(grid: &mut GrainGrid) -> usize {
    let width = grid.width();
    let height = grid.height();
    if width < 3 || height < 2 {
        return 0;
    }

    let cells = grid.cells_mut();
    let mut moved = 0;
    for y in (0..height - 1).rev() {
        for x in 1..width - 1 {
            let idx = y * width + x;
            let below = idx + width;
            if cells[idx].is_some() && cells[below].is_none() {
                let grain = cells[idx].take();
                cells[below] = grain;
                moved += 1;
            }
        }
    }

    log::trace!("settle: {} grains fell", moved);
    moved
}

/// True when no grain can fall any further.
pub fn is_settled(grid: &GrainGrid) -> bool {
    let width = grid.width();
    let height = grid.height();
    if width < 3 || height < 2 {
        return true;
    }
    let cells = grid.cells();
    (0..height - 1).all(|y| {
        (1..width - 1).all(|x| {
            let idx = y * width + x;
            cells[idx].is_none() || cells[idx + width].is_some()
        })
    })
}
