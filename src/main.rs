//! Pico Snake entry point
//!
//! Hosted run: an in-memory panel, a timer thread standing in for the tick
//! interrupt, and a foreground loop polling a random button source.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use pico_snake::platform::{Autopilot, PeriodicTimer};
use pico_snake::renderer::MonoFramebuffer;
use pico_snake::{Game, Settings, input};

/// Pause between foreground polls so the loop does not spin a core
const POLL_INTERVAL: Duration = Duration::from_millis(5);

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Could not load settings from {}: {}; using defaults", path, e);
            Settings::default()
        }
    }
}

fn main() -> pico_snake::Result<()> {
    env_logger::init();
    log::info!("Pico Snake (native) starting...");

    let settings = load_settings();
    let seed = settings.seed.unwrap_or_else(rand::random);
    let period = settings.tick_period()?;
    let panel = MonoFramebuffer::new(settings.screen_width, settings.screen_height);

    let mut game = Game::new(&settings, seed, panel)?;
    game.start()?;
    let controls = game.controls();

    let timer = PeriodicTimer::start(period, game, |game| game.on_timer());

    let mut pilot = Autopilot::new(
        Pcg32::seed_from_u64(seed.wrapping_add(1)),
        settings.autopilot_press_chance,
    );
    while timer.is_running() && controls.ticks() < settings.run_ticks {
        pilot.advance();
        let action = input::poll(&pilot, &controls);
        if action != input::InputAction::None {
            log::debug!("Input: {:?}", action);
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    let game = match timer.stop() {
        Ok(game) => game,
        Err(_) => {
            log::error!("Tick handler panicked");
            std::process::exit(1);
        }
    };
    log::info!(
        "Finished after {} ticks: {} deaths, snake length {}",
        controls.ticks(),
        game.state.deaths,
        game.state.snake.len()
    );
    if game.failed_ticks() > 0 {
        log::warn!("{} ticks dropped on display errors", game.failed_ticks());
    }
    print!("{}", game.display().to_ascii(settings.segment_px));
    Ok(())
}
