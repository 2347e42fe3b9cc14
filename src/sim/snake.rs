//! Snake entity: body, heading and the Alive/Dead state machine

use std::collections::VecDeque;

use super::grid::{Cell, Grid, Heading};
use crate::error::{Error, Result};

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Head committed to the new cell
    Moved { head: Cell },
    /// Move rejected; body frozen where it was
    Crashed { at: Cell },
    /// Snake was already dead, nothing happened
    Dead,
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Tail at the front, head at the back. Capacity is reserved for the whole
    /// grid so pushes never reallocate.
    body: VecDeque<Cell>,
    /// Heading used by the last step
    heading: Heading,
    /// Heading the next step will use
    pending: Heading,
    alive: bool,
    /// Tail cell released by the last successful step, until `grow` reclaims it
    vacated: Option<Cell>,
}

impl Snake {
    pub fn new(grid: &Grid, start: Cell, heading: Heading) -> Self {
        let mut body = VecDeque::with_capacity(grid.cell_count());
        body.push_back(start);
        Self {
            body,
            heading,
            pending: heading,
            alive: true,
            vacated: None,
        }
    }

    /// Build a live snake from explicit segments, tail first. Every segment
    /// must be on the grid and appear only once.
    pub fn from_segments(grid: &Grid, segments: &[Cell], heading: Heading) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::InvalidSnake("no segments".to_string()));
        }
        let mut body = VecDeque::with_capacity(grid.cell_count());
        for &cell in segments {
            if !grid.is_valid(cell) {
                return Err(Error::InvalidSnake(format!(
                    "segment ({}, {}) is off the grid",
                    cell.col, cell.row
                )));
            }
            if body.contains(&cell) {
                return Err(Error::InvalidSnake(format!(
                    "segment ({}, {}) appears twice",
                    cell.col, cell.row
                )));
            }
            body.push_back(cell);
        }
        Ok(Self {
            body,
            heading,
            pending: heading,
            alive: true,
            vacated: None,
        })
    }

    pub fn reset(&mut self, start: Cell, heading: Heading) {
        self.body.clear();
        self.body.push_back(start);
        self.heading = heading;
        self.pending = heading;
        self.alive = true;
        self.vacated = None;
    }

    pub fn head(&self) -> Cell {
        // Body is never empty: every constructor and `reset` push a cell and
        // `step` pushes before it pops.
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_heading(&self) -> Heading {
        self.pending
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queue a heading for the next step. A request to reverse the committed
    /// heading is dropped; the last accepted request before a step wins.
    pub fn request_heading(&mut self, heading: Heading) -> bool {
        if heading == self.heading.opposite() {
            return false;
        }
        self.pending = heading;
        true
    }

    /// Advance one cell along the pending heading.
    ///
    /// Collision is checked against the body as it stands before the move,
    /// so the tail cell about to be vacated still counts as occupied.
    pub fn step(&mut self, grid: &Grid) -> StepResult {
        if !self.alive {
            return StepResult::Dead;
        }
        self.heading = self.pending;
        self.vacated = None;

        let new_head = self.head().step(self.heading);
        if self.is_dead(grid, new_head) {
            self.alive = false;
            return StepResult::Crashed { at: new_head };
        }

        self.body.push_back(new_head);
        self.vacated = self.body.pop_front();
        StepResult::Moved { head: new_head }
    }

    /// Death predicate for a prospective head position
    pub fn is_dead(&self, grid: &Grid, new_head: Cell) -> bool {
        !grid.is_valid(new_head) || self.occupies(new_head)
    }

    /// Lengthen by one by reclaiming the tail cell the last step released.
    ///
    /// Only the first call after a successful step has an effect, so a second
    /// call in the same tick cannot double-grow. Returns the reclaimed cell.
    pub fn grow(&mut self) -> Option<Cell> {
        if !self.alive {
            return None;
        }
        let cell = self.vacated.take()?;
        self.body.push_front(cell);
        Some(cell)
    }
}
