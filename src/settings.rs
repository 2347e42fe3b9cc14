//! Game settings
//!
//! Panel geometry and timing. Defaults match a 128x64 SSD1306 panel with
//! 8-pixel segments and a 5 Hz tick.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::renderer::CellPainter;
use crate::sim::Grid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Panel width in pixels
    pub screen_width: u32,
    /// Panel height in pixels
    pub screen_height: u32,
    /// Edge length of one grid cell in pixels
    pub segment_px: u32,
    /// Tick frequency
    pub tick_hz: u32,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    // === Hosted run ===
    /// Ticks to run before the native binary exits
    pub run_ticks: u32,
    /// Chance per foreground poll that the autopilot presses a button
    pub autopilot_press_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            segment_px: SEGMENT_PX,
            tick_hz: TICK_HZ,
            seed: None,

            run_ticks: 200,
            autopilot_press_chance: 0.02,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything startup depends on
    pub fn validate(&self) -> Result<()> {
        self.grid()?;
        self.tick_period()?;
        if !(0.0..=1.0).contains(&self.autopilot_press_chance) {
            return Err(Error::InvalidConfiguration(format!(
                "autopilot_press_chance {} is outside 0..=1",
                self.autopilot_press_chance
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::from_display(self.screen_width, self.screen_height, self.segment_px)
    }

    pub fn tick_period(&self) -> Result<Duration> {
        if self.tick_hz == 0 {
            return Err(Error::InvalidConfiguration(
                "tick frequency must be non-zero".to_string(),
            ));
        }
        Ok(Duration::from_secs(1) / self.tick_hz)
    }

    pub fn painter(&self) -> CellPainter {
        CellPainter::new(self.segment_px, self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.grid().unwrap(), Grid { width: 16, height: 8 });
        assert_eq!(settings.tick_period().unwrap(), Duration::from_millis(200));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "segment_px": 4, "seed": 7 }"#).unwrap();
        assert_eq!(settings.grid().unwrap(), Grid { width: 32, height: 16 });
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tick_hz, TICK_HZ);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(3),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            Settings::from_json(r#"{ "tick_hz": 0 }"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "segment_px": 0 }"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "segment_px": 128 }"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(Settings::from_json("{ nope"), Err(Error::Settings(_))));
    }

    #[test]
    fn test_oversized_panel_is_rejected() {
        let json = r#"{ "screen_width": 4294967295, "screen_height": 4294967295, "segment_px": 1 }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }
}
