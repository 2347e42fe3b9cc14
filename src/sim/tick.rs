//! Fixed-period simulation tick
//!
//! Advances the game by exactly one cell. Pure game logic: drawing the
//! result is up to the caller (see `crate::game`).

use super::controls::Controls;
use super::grid::Cell;
use super::snake::StepResult;
use super::state::GameState;

/// What one tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Head moved to a new cell; the previous tail was released
    Moved { head: Cell },
    /// Head reached the food. `restored` is the tail cell kept by growing,
    /// `food` is where the new food went.
    Ate {
        head: Cell,
        restored: Option<Cell>,
        food: Option<Cell>,
    },
    /// The move would hit a wall or the body
    Died { at: Cell, length: usize },
    /// Dead snake brought back by a revive request
    Revived,
    /// Dead and no revive pending
    Idle,
}

/// Advance the game state by one tick, consuming pending requests from the
/// foreground, then publish the committed heading and liveness back.
pub fn advance(state: &mut GameState, controls: &Controls) -> TickEvent {
    controls.count_tick();

    if !state.snake.is_alive() {
        if !controls.take_revive() {
            return TickEvent::Idle;
        }
        // Anything queued before death is stale
        controls.take_heading();
        state.revive();
        controls.publish(&state.snake);
        return TickEvent::Revived;
    }
    // Revive latched just before the previous revive was published
    controls.take_revive();

    if let Some(heading) = controls.take_heading() {
        state.snake.request_heading(heading);
    }
    state.time_ticks += 1;

    let event = match state.snake.step(&state.grid) {
        StepResult::Crashed { at } => {
            state.deaths += 1;
            TickEvent::Died {
                at,
                length: state.snake.len(),
            }
        }
        StepResult::Moved { head } if state.food == Some(head) => {
            let restored = state.snake.grow();
            let food = state.replace_food();
            log::debug!(
                "Ate at ({}, {}), length {}, next food {:?}",
                head.col,
                head.row,
                state.snake.len(),
                food
            );
            TickEvent::Ate {
                head,
                restored,
                food,
            }
        }
        StepResult::Moved { head } => TickEvent::Moved { head },
        StepResult::Dead => TickEvent::Idle,
    };

    controls.publish(&state.snake);
    log::trace!("Tick {}: {:?}", state.time_ticks, event);
    event
}
