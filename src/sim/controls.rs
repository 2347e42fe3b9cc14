//! State shared between the foreground loop and the tick context
//!
//! The tick handler owns `GameState` outright. The only data crossing the
//! boundary lives here, and every field has exactly one writer:
//!
//! | field       | written by  | read by     |
//! |-------------|-------------|-------------|
//! | `requested` | foreground  | tick (swap) |
//! | `revive`    | foreground  | tick (swap) |
//! | `committed` | tick        | foreground  |
//! | `alive`     | tick        | foreground  |
//! | `ticks`     | tick        | anyone      |
//!
//! Each field is a single atomic word, so a tick that interrupts the
//! foreground sees either the old or the new value, never a torn one.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

use super::grid::Heading;
use super::snake::Snake;

const NO_REQUEST: u8 = u8::MAX;

#[derive(Debug)]
pub struct Controls {
    requested: AtomicU8,
    revive: AtomicBool,
    committed: AtomicU8,
    alive: AtomicBool,
    ticks: AtomicU32,
}

impl Controls {
    pub fn new(snake: &Snake) -> Self {
        Self {
            requested: AtomicU8::new(NO_REQUEST),
            revive: AtomicBool::new(false),
            committed: AtomicU8::new(snake.heading().as_u8()),
            alive: AtomicBool::new(snake.is_alive()),
            ticks: AtomicU32::new(0),
        }
    }

    // Foreground side

    /// Record a heading request for the next tick. Reversing the committed
    /// heading is rejected here so the foreground never overwrites a good
    /// request with one the tick would throw away.
    pub fn request_heading(&self, heading: Heading) -> bool {
        if heading == self.committed_heading().opposite() {
            return false;
        }
        self.requested.store(heading.as_u8(), Ordering::Release);
        true
    }

    pub fn request_revive(&self) {
        self.revive.store(true, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn committed_heading(&self) -> Heading {
        Heading::from_u8(self.committed.load(Ordering::Acquire)).unwrap_or(Heading::Up)
    }

    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }

    // Tick side

    /// Consume the pending heading request, if any.
    pub fn take_heading(&self) -> Option<Heading> {
        Heading::from_u8(self.requested.swap(NO_REQUEST, Ordering::AcqRel))
    }

    pub fn take_revive(&self) -> bool {
        self.revive.swap(false, Ordering::AcqRel)
    }

    /// Publish the snake's committed heading and liveness after a tick.
    pub fn publish(&self, snake: &Snake) {
        self.committed.store(snake.heading().as_u8(), Ordering::Release);
        self.alive.store(snake.is_alive(), Ordering::Release);
    }

    pub fn count_tick(&self) {
        self.ticks.fetch_add(1, Ordering::AcqRel);
    }
}
