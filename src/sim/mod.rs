//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod controls;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use controls::Controls;
pub use grid::{Cell, Grid, Heading};
pub use snake::{Snake, StepResult};
pub use state::GameState;
pub use tick::{TickEvent, advance};
