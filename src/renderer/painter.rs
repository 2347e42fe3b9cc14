//! Grid cell to pixel rectangle translation

use glam::IVec2;

use super::{Color, Display};
use crate::consts::FONT_ADVANCE_PX;
use crate::error::DisplayError;
use crate::sim::{Cell, Snake};

const GAME_OVER_TEXT: &str = "Game Over!";

/// Draws single cells scaled by the segment size. Holds no game state, so
/// every call is idempotent.
#[derive(Debug, Clone, Copy)]
pub struct CellPainter {
    segment_px: u32,
    screen_width: u32,
    screen_height: u32,
}

impl CellPainter {
    pub fn new(segment_px: u32, screen_width: u32, screen_height: u32) -> Self {
        Self {
            segment_px,
            screen_width,
            screen_height,
        }
    }

    /// Top-left pixel of a cell
    pub fn origin(&self, cell: Cell) -> IVec2 {
        IVec2::from(cell) * self.segment_px as i32
    }

    /// Fill a cell with background
    pub fn erase<D: Display + ?Sized>(&self, display: &mut D, cell: Cell) -> Result<(), DisplayError> {
        let o = self.origin(cell);
        display.fill_rect(o.x, o.y, self.segment_px, self.segment_px, Color::Off)
    }

    /// Snake segment: cleared cell with a lit outline
    pub fn draw_segment<D: Display + ?Sized>(
        &self,
        display: &mut D,
        cell: Cell,
    ) -> Result<(), DisplayError> {
        self.erase(display, cell)?;
        let o = self.origin(cell);
        display.draw_rect_outline(o.x, o.y, self.segment_px, self.segment_px, Color::On)
    }

    /// Food: solid lit cell
    pub fn draw_food<D: Display + ?Sized>(&self, display: &mut D, cell: Cell) -> Result<(), DisplayError> {
        let o = self.origin(cell);
        display.fill_rect(o.x, o.y, self.segment_px, self.segment_px, Color::On)
    }

    /// Full redraw of a live board (start and revive)
    pub fn draw_board<D: Display + ?Sized>(
        &self,
        display: &mut D,
        snake: &Snake,
        food: Option<Cell>,
    ) -> Result<(), DisplayError> {
        display.clear_all()?;
        if let Some(food) = food {
            self.draw_food(display, food)?;
        }
        for cell in snake.segments() {
            self.draw_segment(display, cell)?;
        }
        Ok(())
    }

    /// Blank the panel and show the final length
    pub fn draw_game_over<D: Display + ?Sized>(
        &self,
        display: &mut D,
        length: usize,
    ) -> Result<(), DisplayError> {
        display.clear_all()?;
        let mid_y = (self.screen_height / 2) as i32;
        display.draw_text(GAME_OVER_TEXT, self.centered_x(GAME_OVER_TEXT), mid_y - 8)?;
        let summary = format!("Snake length:{length}");
        display.draw_text(&summary, self.centered_x(&summary), mid_y + 16)
    }

    fn centered_x(&self, text: &str) -> i32 {
        let text_px = text.chars().count() as i32 * FONT_ADVANCE_PX as i32;
        (self.screen_width / 2) as i32 - text_px / 2
    }
}
