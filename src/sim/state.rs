//! Game state aggregate
//!
//! Everything the tick handler mutates lives in one owned value. Nothing
//! outside the tick context holds a reference into it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::food;
use super::grid::{Cell, Grid, Heading};
use super::snake::Snake;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub grid: Grid,
    pub snake: Snake,
    /// `None` only once the snake fills the board
    pub food: Option<Cell>,
    /// Ticks that advanced the simulation (idle dead ticks excluded)
    pub time_ticks: u64,
    /// Completed games
    pub deaths: u32,
    rng: Pcg32,
}

impl GameState {
    /// Fresh game: length-1 snake at the start cell, random heading, food placed.
    pub fn new(grid: Grid, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let heading = random_heading(&mut rng);
        let snake = Snake::new(&grid, grid.start_cell(), heading);
        let mut state = Self {
            seed,
            grid,
            snake,
            food: None,
            time_ticks: 0,
            deaths: 0,
            rng,
        };
        state.replace_food();
        state
    }

    /// Build a state around a prepared snake, e.g. to resume a position.
    pub fn with_snake(grid: Grid, seed: u64, snake: Snake, food: Option<Cell>) -> Self {
        let mut state = Self {
            seed,
            grid,
            snake,
            food,
            time_ticks: 0,
            deaths: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        if state.food.is_none_or(|f| state.snake.occupies(f) || !state.grid.is_valid(f)) {
            state.replace_food();
        }
        state
    }

    /// Reset the snake and re-roll the food. Only meaningful while dead.
    pub fn revive(&mut self) {
        let heading = random_heading(&mut self.rng);
        self.snake.reset(self.grid.start_cell(), heading);
        self.replace_food();
    }

    /// Move the food to a random cell not covered by the snake.
    pub fn replace_food(&mut self) -> Option<Cell> {
        self.food = food::place(&self.grid, &self.snake, &mut self.rng);
        if self.food.is_none() {
            log::warn!("No free cell left for food");
        }
        self.food
    }
}

pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    Heading::ALL[rng.random_range(0..Heading::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(16, 8).unwrap()
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(grid(), 12345);
        assert!(state.snake.is_alive());
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Cell::new(8, 5));
        let food = state.food.unwrap();
        assert!(state.grid.is_valid(food));
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameState::new(grid(), 99);
        let b = GameState::new(grid(), 99);
        assert_eq!(a.snake.heading(), b.snake.heading());
        assert_eq!(a.food, b.food);
    }

    #[test]
    fn test_revive_resets_and_rerolls() {
        let mut state = GameState::new(grid(), 5);
        state.snake = Snake::new(&state.grid, Cell::new(0, 0), Heading::Up);
        state.snake.step(&state.grid);
        assert!(!state.snake.is_alive());

        state.revive();
        assert!(state.snake.is_alive());
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.grid.start_cell());
        assert!(!state.snake.occupies(state.food.unwrap()));
    }

    #[test]
    fn test_with_snake_moves_bad_food() {
        let grid = grid();
        let snake = Snake::from_segments(&grid, &[Cell::new(1, 1), Cell::new(2, 1)], Heading::Right).unwrap();
        let state = GameState::with_snake(grid, 1, snake, Some(Cell::new(2, 1)));
        assert_ne!(state.food, Some(Cell::new(2, 1)));

        let snake = Snake::from_segments(&grid, &[Cell::new(1, 1)], Heading::Right).unwrap();
        let state = GameState::with_snake(grid, 1, snake, Some(Cell::new(9, 1)));
        assert_eq!(state.food, Some(Cell::new(9, 1)));
    }
}
