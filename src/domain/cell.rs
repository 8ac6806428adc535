/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value used when summing a neighborhood (Alive = 1)
    pub const fn value(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Flip between Alive and Dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state from the live-neighbor count, checked in this order:
    /// 1. Fewer than 2 or more than 3 neighbors: dies (or stays dead)
    /// 2. Dead with exactly 3 neighbors: becomes alive
    /// 3. Otherwise the state carries over
    pub const fn evolve(self, neighbors: u8) -> Self {
        if neighbors < 2 || neighbors > 3 {
            Cell::Dead
        } else if matches!(self, Cell::Dead) && neighbors == 3 {
            Cell::Alive
        } else {
            self
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
