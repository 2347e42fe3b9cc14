//! Platform abstraction layer
//!
//! Handles what the core needs from the board:
//! - Digital inputs (four pre-debounced, active-low buttons)
//! - A periodic timer driving the tick handler
//! - A scripted button source for hosted runs

pub mod autopilot;
pub mod timer;

pub use autopilot::Autopilot;
pub use timer::PeriodicTimer;

/// Physical direction buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Up, Button::Down, Button::Left, Button::Right];
}

/// Raw button levels. Buttons are wired with pull-ups, so a pressed button
/// reads low. Implementations must not block.
pub trait InputPins {
    fn is_low(&self, button: Button) -> bool;

    fn is_pressed(&self, button: Button) -> bool {
        self.is_low(button)
    }
}

/// Fixed button levels, mostly for tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinLevels {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PinLevels {
    /// All buttons released (pulled high)
    pub fn released() -> Self {
        Self {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }

    /// Only the given buttons held down
    pub fn pressed(buttons: &[Button]) -> Self {
        let mut levels = Self::released();
        for button in buttons {
            *levels.level_mut(*button) = false;
        }
        levels
    }

    fn level_mut(&mut self, button: Button) -> &mut bool {
        match button {
            Button::Up => &mut self.up,
            Button::Down => &mut self.down,
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
        }
    }
}

impl InputPins for PinLevels {
    fn is_low(&self, button: Button) -> bool {
        let high = match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
        };
        !high
    }
}
