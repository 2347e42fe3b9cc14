//! Pico Snake - a tick-driven Snake engine for small monochrome panels
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, tick)
//! - `game`: Tick handler that renders each step incrementally
//! - `input`: Foreground button polling
//! - `renderer`: Display collaborator trait and cell drawing
//! - `platform`: Input pins, periodic timer, hosted button source
//! - `settings`: Panel geometry and timing

pub mod error;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{DisplayError, Error, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Panel dimensions (SSD1306, 128x64)
    pub const SCREEN_WIDTH: u32 = 128;
    pub const SCREEN_HEIGHT: u32 = 64;

    /// Edge length of one snake segment in pixels
    pub const SEGMENT_PX: u32 = 8;

    /// Simulation ticks per second
    pub const TICK_HZ: u32 = 5;

    /// Horizontal advance of the panel's built-in font
    pub const FONT_ADVANCE_PX: u32 = 8;
}
