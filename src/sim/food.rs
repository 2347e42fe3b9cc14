//! Food placement on a free cell

use rand::Rng;

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Random draws before falling back to an exhaustive pick. Keeps the common
/// case allocation-free and O(1) while bounding the nearly-full board.
const MAX_REJECTION_ATTEMPTS: usize = 32;

/// Pick a cell uniformly from the grid cells the snake does not occupy.
///
/// Returns `None` only when the snake fills the whole board.
pub fn place<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    let cells = grid.cell_count();
    let free = cells.saturating_sub(snake.len());
    if free == 0 {
        return None;
    }

    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = grid.cell_at(rng.random_range(0..cells));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    // Board is crowded: choose the n-th free cell in row-major order
    let nth = rng.random_range(0..free);
    (0..cells)
        .map(|i| grid.cell_at(i))
        .filter(|cell| !snake.occupies(*cell))
        .nth(nth)
}
