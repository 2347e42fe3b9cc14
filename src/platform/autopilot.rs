//! Random button presses for the headless run

use rand::Rng;
use rand_pcg::Pcg32;

use super::{Button, InputPins};

/// Holds one button at a time for a few polls, then releases it.
/// Deterministic for a given seed and poll count.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: Option<Button>,
    hold_polls: u32,
    press_chance: f64,
}

impl Autopilot {
    pub fn new(rng: Pcg32, press_chance: f64) -> Self {
        Self {
            rng,
            held: None,
            hold_polls: 0,
            press_chance: press_chance.clamp(0.0, 1.0),
        }
    }

    pub fn held(&self) -> Option<Button> {
        self.held
    }

    /// Advance one poll: maybe release the held button or press a new one.
    pub fn advance(&mut self) {
        if self.hold_polls > 0 {
            self.hold_polls -= 1;
            if self.hold_polls == 0 {
                self.held = None;
            }
            return;
        }
        if self.rng.random_bool(self.press_chance) {
            self.held = Some(Button::ALL[self.rng.random_range(0..Button::ALL.len())]);
            self.hold_polls = self.rng.random_range(1..=4);
        }
    }
}

impl InputPins for Autopilot {
    fn is_low(&self, button: Button) -> bool {
        self.held == Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_never_presses_with_zero_chance() {
        let mut pilot = Autopilot::new(Pcg32::seed_from_u64(3), 0.0);
        for _ in 0..100 {
            pilot.advance();
            assert!(Button::ALL.iter().all(|b| !pilot.is_low(*b)));
        }
    }

    #[test]
    fn test_holds_at_most_one_button() {
        let mut pilot = Autopilot::new(Pcg32::seed_from_u64(3), 1.0);
        let mut pressed_any = false;
        for _ in 0..100 {
            pilot.advance();
            let pressed = Button::ALL.iter().filter(|b| pilot.is_low(**b)).count();
            assert!(pressed <= 1);
            pressed_any |= pressed == 1;
        }
        assert!(pressed_any);
    }
}
