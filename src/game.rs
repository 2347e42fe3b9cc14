//! Game controller
//!
//! Wraps the simulation tick with incremental drawing. Runs in the timer
//! context and is the only owner of `GameState` and the display.

use std::ops::ControlFlow;
use std::sync::Arc;

use crate::error::Result;
use crate::renderer::{CellPainter, Display};
use crate::settings::Settings;
use crate::sim::{Controls, GameState, TickEvent, advance};

pub struct Game<D> {
    pub state: GameState,
    controls: Arc<Controls>,
    painter: CellPainter,
    display: D,
    /// Set when a tick failed part-way; the panel no longer matches the state
    needs_redraw: bool,
    failed_ticks: u64,
}

impl<D: Display> Game<D> {
    pub fn new(settings: &Settings, seed: u64, display: D) -> Result<Self> {
        settings.validate()?;
        let state = GameState::new(settings.grid()?, seed);
        Ok(Self::with_state(state, settings.painter(), display))
    }

    pub fn with_state(state: GameState, painter: CellPainter, display: D) -> Self {
        let controls = Arc::new(Controls::new(&state.snake));
        Self {
            state,
            controls,
            painter,
            display,
            needs_redraw: false,
            failed_ticks: 0,
        }
    }

    /// Handle for the foreground loop
    pub fn controls(&self) -> Arc<Controls> {
        Arc::clone(&self.controls)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Ticks abandoned because of a display failure
    pub fn failed_ticks(&self) -> u64 {
        self.failed_ticks
    }

    /// Draw the opening board
    pub fn start(&mut self) -> Result<()> {
        log::info!(
            "Game start: {}x{} grid, seed {}, heading {:?}",
            self.state.grid.width,
            self.state.grid.height,
            self.state.seed,
            self.state.snake.heading()
        );
        self.controls.publish(&self.state.snake);
        self.painter
            .draw_board(&mut self.display, &self.state.snake, self.state.food)?;
        self.display.present()?;
        Ok(())
    }

    /// Timer entry point. A failed tick is logged and dropped; the timer
    /// keeps firing and the next tick repaints the board.
    pub fn on_timer(&mut self) -> ControlFlow<()> {
        if let Err(e) = self.tick() {
            log::error!("Tick dropped: {}", e);
        }
        ControlFlow::Continue(())
    }

    /// Advance one tick and draw it. Any display failure aborts the tick.
    pub fn tick(&mut self) -> Result<TickEvent> {
        let result = self.tick_and_draw();
        if result.is_err() {
            self.needs_redraw = true;
            self.failed_ticks += 1;
        }
        result
    }

    fn tick_and_draw(&mut self) -> Result<TickEvent> {
        let repaint = self.needs_redraw;
        if self.state.snake.is_alive() && !repaint {
            // Cell about to be vacated; redrawn below if growing keeps it
            self.painter
                .erase(&mut self.display, self.state.snake.tail())?;
        }

        let event = advance(&mut self.state, &self.controls);
        match event {
            TickEvent::Died { length, .. } => log::info!("Game over, snake length {}", length),
            TickEvent::Revived => log::info!("Snake revived (game {})", self.state.deaths + 1),
            _ => {}
        }

        if repaint {
            self.repaint()?;
        } else {
            match event {
                TickEvent::Idle => return Ok(event),
                TickEvent::Moved { head } => {
                    self.painter.draw_segment(&mut self.display, head)?;
                }
                TickEvent::Ate {
                    head,
                    restored,
                    food,
                } => {
                    if let Some(tail) = restored {
                        self.painter.draw_segment(&mut self.display, tail)?;
                    }
                    if let Some(food) = food {
                        self.painter.draw_food(&mut self.display, food)?;
                    }
                    self.painter.draw_segment(&mut self.display, head)?;
                }
                TickEvent::Died { length, .. } => {
                    self.painter.draw_game_over(&mut self.display, length)?;
                }
                TickEvent::Revived => {
                    self.painter
                        .draw_board(&mut self.display, &self.state.snake, self.state.food)?;
                }
            }
        }

        self.display.present()?;
        self.needs_redraw = false;
        Ok(event)
    }

    /// Redraw the whole panel from the current state
    fn repaint(&mut self) -> Result<()> {
        if self.state.snake.is_alive() {
            self.painter
                .draw_board(&mut self.display, &self.state.snake, self.state.food)?;
        } else {
            self.painter
                .draw_game_over(&mut self.display, self.state.snake.len())?;
        }
        Ok(())
    }
}
