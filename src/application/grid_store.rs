use std::sync::Arc;

use crate::domain::Grid;

/// GridStore is the single owner of the current generation.
/// Every change swaps in a whole new grid; snapshots handed out by
/// [`GridStore::get`] never see a later mutation.
#[derive(Debug, Default)]
pub struct GridStore {
    current: Arc<Grid>,
}

impl GridStore {
    /// Store holding an empty board
    pub fn new() -> Self {
        Self::with_grid(Grid::empty())
    }

    /// Store seeded with an existing grid
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            current: Arc::new(grid),
        }
    }

    /// Read-only snapshot of the current generation
    pub fn get(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    /// Borrow the current generation without bumping the refcount
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Swap in a complete replacement grid
    pub fn replace(&mut self, grid: Grid) {
        debug_assert_eq!(
            grid.dimensions(),
            self.current.dimensions(),
            "replacement grid must keep the board dimensions"
        );
        self.current = Arc::new(grid);
    }

    /// Flip one cell. Out-of-range coordinates are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.current.get(row, col).is_none() {
            return;
        }
        let next = self.current.toggled(row, col);
        self.replace(next);
    }

    /// Replace the board with an empty one
    pub fn clear(&mut self) {
        self.replace(Grid::empty());
    }

    /// Replace the board with a randomly seeded one
    pub fn randomize(&mut self, density: f64) {
        self.replace(Grid::random(density));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, COLS, ROWS};

    #[test]
    fn test_new_store_is_empty() {
        let store = GridStore::new();
        assert_eq!(store.get().population(), 0);
        assert_eq!(store.get().dimensions(), (ROWS, COLS));
    }

    #[test]
    fn test_snapshot_unaffected_by_toggle() {
        let mut store = GridStore::new();
        let before = store.get();

        store.toggle_cell(2, 3);

        assert_eq!(before.get(2, 3), Some(Cell::Dead));
        assert_eq!(store.get().get(2, 3), Some(Cell::Alive));
        assert_eq!(store.get().population(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut store = GridStore::with_grid(Grid::with_live_cells(&[(1, 1)]));
        let before = store.get();

        store.toggle_cell(ROWS, 0);
        store.toggle_cell(0, COLS);

        assert!(Arc::ptr_eq(&before, &store.get()));
    }

    #[test]
    fn test_replace_swaps_whole_grid() {
        let mut store = GridStore::new();
        let snapshot = store.get();
        let block = Grid::with_live_cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]);

        store.replace(block.clone());

        assert_eq!(*store.get(), block);
        assert_eq!(snapshot.population(), 0);
    }

    #[test]
    fn test_clear_and_randomize() {
        let mut store = GridStore::new();
        store.randomize(1.0);
        assert_eq!(store.current().population(), ROWS * COLS);

        store.clear();
        assert_eq!(store.current().population(), 0);
    }
}
