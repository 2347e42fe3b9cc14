//! Foreground input router
//!
//! Polled once per pass of the foreground loop. It reads the buttons, turns
//! at most one of them into a request on [`Controls`], and returns at once.
//! It never touches `GameState`; the tick context applies the requests.

use crate::platform::{Button, InputPins};
use crate::sim::{Controls, Heading};

/// Scan order while alive. Simultaneous presses resolve to the first one.
const PRIORITY: [Button; 4] = [Button::Up, Button::Right, Button::Left, Button::Down];

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Heading request accepted for the next tick
    Heading(Heading),
    /// Reversal of the committed heading, dropped
    Rejected(Heading),
    /// Revive requested while dead
    Revive,
    None,
}

fn heading_for(button: Button) -> Heading {
    match button {
        Button::Up => Heading::Up,
        Button::Down => Heading::Down,
        Button::Left => Heading::Left,
        Button::Right => Heading::Right,
    }
}

/// Sample the buttons once and forward the result.
///
/// While alive, the first pressed button in `Up, Right, Left, Down` order
/// becomes a heading request. While dead, Up is the revive trigger and the
/// other buttons are ignored.
pub fn poll<P: InputPins + ?Sized>(pins: &P, controls: &Controls) -> InputAction {
    if !controls.is_alive() {
        if pins.is_pressed(Button::Up) {
            controls.request_revive();
            return InputAction::Revive;
        }
        return InputAction::None;
    }

    let Some(button) = PRIORITY.into_iter().find(|b| pins.is_pressed(*b)) else {
        return InputAction::None;
    };
    let heading = heading_for(button);
    if controls.request_heading(heading) {
        InputAction::Heading(heading)
    } else {
        InputAction::Rejected(heading)
    }
}
