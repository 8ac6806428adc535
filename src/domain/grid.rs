use super::Cell;
use rand::Rng;

/// Number of rows on the board
pub const ROWS: usize = 20;

/// Number of columns on the board
pub const COLS: usize = 40;

/// Fraction of live cells produced by [`Grid::random`] when no density is configured
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Moore neighborhood as (row, col) offsets, excluding (0, 0)
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// Grid holds one generation of the board.
/// Updates are functional: `step` and `toggled` return a new grid and
/// leave `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Board-sized grid with every cell dead
    pub fn empty() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Dead; ROWS * COLS],
        }
    }

    /// Board-sized grid where each cell is alive with probability `density`
    pub fn random(density: f64) -> Self {
        Self::random_with(&mut rand::rng(), density)
    }

    /// Same as [`Grid::random`] but drawing from a caller-supplied generator
    pub fn random_with<R: Rng>(rng: &mut R, density: f64) -> Self {
        let density = density.clamp(0.0, 1.0);
        Self::from_fn(|_, _| Cell::from(rng.random_bool(density)))
    }

    /// Board-sized grid built cell by cell from `(row, col)`
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let cells = (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();

        Self {
            rows: ROWS,
            cols: COLS,
            cells,
        }
    }

    /// Board-sized grid with exactly the listed cells alive.
    /// Out-of-range coordinates are skipped.
    pub fn with_live_cells(live: &[(usize, usize)]) -> Self {
        let mut grid = Self::empty();
        for &(row, col) in live {
            if let Some(idx) = grid.index(row, col) {
                grid.cells[idx] = Cell::Alive;
            }
        }
        grid
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to a 1D index, `None` when out of bounds
    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Copy of this grid with the cell at (row, col) flipped.
    /// Out-of-range coordinates yield an unchanged copy.
    pub fn toggled(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        if let Some(idx) = self.index(row, col) {
            next.cells[idx] = next.cells[idx].toggle();
        }
        next
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors. Edges do not wrap: offsets that leave the
    /// board contribute nothing.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .map(Cell::value)
            .sum()
    }

    /// Compute the next generation into a freshly allocated grid.
    /// Every neighbor count is taken from `self`, never from partially
    /// updated output.
    pub fn step(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, current)| current.evolve(self.live_neighbors(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Positions of all live cells, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
