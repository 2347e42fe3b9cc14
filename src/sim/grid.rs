//! Discrete cell space the game is played on

use glam::IVec2;

use crate::error::{Error, Result};

/// A grid-aligned position, `(col, row)` with the origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Neighbouring cell one step along `heading`. May lie off the grid.
    pub fn step(self, heading: Heading) -> Self {
        (IVec2::from(self) + heading.delta()).into()
    }
}

impl From<Cell> for IVec2 {
    fn from(cell: Cell) -> Self {
        IVec2::new(cell.col, cell.row)
    }
}

impl From<IVec2> for Cell {
    fn from(v: IVec2) -> Self {
        Cell::new(v.x, v.y)
    }
}

/// Cardinal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Unit offset in cell space (rows grow downwards)
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::NEG_Y,
            Heading::Down => IVec2::Y,
            Heading::Left => IVec2::NEG_X,
            Heading::Right => IVec2::X,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// Playing field dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    /// Smallest grid that can hold a snake and a food cell at once
    pub const MIN_CELLS: usize = 2;
    /// Largest grid accepted. The snake reserves one slot per cell up front,
    /// so this bounds its allocation.
    pub const MAX_CELLS: usize = 1 << 16;

    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "grid must have positive dimensions, got {width}x{height}"
            )));
        }
        let cells = i64::from(width) * i64::from(height);
        if cells > Self::MAX_CELLS as i64 {
            return Err(Error::InvalidConfiguration(format!(
                "grid {width}x{height} exceeds {} cells",
                Self::MAX_CELLS
            )));
        }
        let grid = Self { width, height };
        if grid.cell_count() < Self::MIN_CELLS {
            return Err(Error::InvalidConfiguration(format!(
                "grid {width}x{height} has fewer than {} cells",
                Self::MIN_CELLS
            )));
        }
        Ok(grid)
    }

    /// Derive the grid from a panel size. Leftover pixels on the right and
    /// bottom edges are unused margin.
    pub fn from_display(screen_width: u32, screen_height: u32, segment_px: u32) -> Result<Self> {
        if segment_px == 0 {
            return Err(Error::InvalidConfiguration(
                "segment size must be at least one pixel".to_string(),
            ));
        }
        let to_cells = |px: u32| i32::try_from(px / segment_px).unwrap_or(i32::MAX);
        Self::new(to_cells(screen_width), to_cells(screen_height))
    }

    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Where a fresh snake spawns: horizontally centred, one row below the middle.
    pub fn start_cell(&self) -> Cell {
        Cell::new(self.width / 2, (self.height / 2 + 1).min(self.height - 1))
    }

    /// Row-major cell at `index`, for `index < cell_count()`
    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width as usize;
        Cell::new((index % width) as i32, (index / width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_bounds() {
        let grid = Grid::new(16, 8).unwrap();
        assert!(grid.is_valid(Cell::new(0, 0)));
        assert!(grid.is_valid(Cell::new(15, 7)));
        assert!(!grid.is_valid(Cell::new(16, 5)));
        assert!(!grid.is_valid(Cell::new(3, 8)));
        assert!(!grid.is_valid(Cell::new(-1, 0)));
        assert!(!grid.is_valid(Cell::new(0, -1)));
    }

    #[test]
    fn test_from_display_ignores_margin() {
        let grid = Grid::from_display(128, 64, 8).unwrap();
        assert_eq!(grid, Grid { width: 16, height: 8 });

        // 130 / 8 = 16 with 2 spare pixels
        let grid = Grid::from_display(130, 70, 8).unwrap();
        assert_eq!(grid, Grid { width: 16, height: 8 });
    }

    #[test]
    fn test_from_display_rejects_degenerate() {
        assert!(matches!(
            Grid::from_display(128, 64, 0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Grid::from_display(4, 4, 8).is_err());
        assert!(Grid::from_display(8, 8, 8).is_err());
        assert!(Grid::from_display(16, 8, 8).is_ok());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            Grid::from_display(u32::MAX, u32::MAX, 1),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Grid::new(i32::MAX, 2).is_err());
        assert!(Grid::new(256, 256).is_ok());
        assert!(Grid::new(256, 257).is_err());
    }

    #[test]
    fn test_start_cell() {
        let grid = Grid::new(16, 8).unwrap();
        assert_eq!(grid.start_cell(), Cell::new(8, 5));
        assert!(grid.is_valid(grid.start_cell()));

        let flat = Grid::new(2, 1).unwrap();
        assert!(flat.is_valid(flat.start_cell()));
    }

    #[test]
    fn test_heading_opposites() {
        for heading in Heading::ALL {
            assert_ne!(heading, heading.opposite());
            assert_eq!(heading, heading.opposite().opposite());
            assert_eq!(heading.delta() + heading.opposite().delta(), IVec2::ZERO);
            assert_eq!(Heading::from_u8(heading.as_u8()), Some(heading));
        }
        assert_eq!(Heading::from_u8(4), None);
    }

    #[test]
    fn test_cell_at_covers_grid() {
        let grid = Grid::new(5, 3).unwrap();
        for i in 0..grid.cell_count() {
            assert!(grid.is_valid(grid.cell_at(i)));
        }
        assert_eq!(grid.cell_at(7), Cell::new(2, 1));
    }
}
