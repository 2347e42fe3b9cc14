//! Display collaborator interface and incremental cell rendering
//!
//! The core never touches pixels directly. It asks a [`Display`] to fill and
//! outline grid-aligned rectangles, so a real panel driver (SSD1306 over I2C,
//! an SPI LCD, ...) only has to implement these five calls.

pub mod framebuffer;
pub mod painter;

pub use framebuffer::MonoFramebuffer;
pub use painter::CellPainter;

use crate::error::DisplayError;

/// Monochrome pixel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Off,
    On,
}

impl Color {
    pub fn is_on(self) -> bool {
        self == Color::On
    }
}

/// Pixel-level operations the game needs from a panel driver.
///
/// Coordinates are pixels with the origin top-left. Drawing outside the
/// panel is clipped, not an error.
pub trait Display {
    fn clear_all(&mut self) -> Result<(), DisplayError>;
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color)
    -> Result<(), DisplayError>;
    fn draw_rect_outline(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), DisplayError>;
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;
    /// Push the back buffer to the panel
    fn present(&mut self) -> Result<(), DisplayError>;
}
