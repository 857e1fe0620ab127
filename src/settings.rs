//! Arena and physics settings
//!
//! Loaded from a JSON file when one is configured, otherwise the classic
//! 640x350 arena with eight buildings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Bounds, TerrainParams};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "GORILLAS_SETTINGS";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Skyline ===
    pub building_count: usize,
    pub building_min_height: i32,
    pub building_max_height: i32,

    // === Physics ===
    pub gravity: f64,
    /// Integration step in simulated seconds
    pub time_step: f64,
    /// Wind is drawn from [-wind_limit, wind_limit)
    pub wind_limit: f64,

    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    /// Delay between replayed trajectory points, for animated shells
    pub animation_delay_ms: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            building_count: NUM_BUILDINGS,
            building_min_height: BUILDING_MIN_HEIGHT,
            building_max_height: BUILDING_MAX_HEIGHT,

            gravity: GRAVITY,
            time_step: SIM_DT,
            wind_limit: WIND_LIMIT,

            seed: None,

            animation_delay_ms: 20,

            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from the file named by `GORILLAS_SETTINGS`, or use defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values that would make generation or flight ill-defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::Invalid("screen dimensions must be positive"));
        }
        if self.building_count < 2 {
            return Err(ConfigError::Invalid("need at least two buildings"));
        }
        if TerrainParams::from(self).slot_width() <= WIDTH_JITTER {
            return Err(ConfigError::Invalid("buildings are too narrow for the screen"));
        }
        if self.building_min_height < 1 || self.building_min_height > self.building_max_height {
            return Err(ConfigError::Invalid("building height range is empty"));
        }
        if self.building_max_height <= PERCH_DROP {
            return Err(ConfigError::Invalid("building_max_height leaves no perch"));
        }
        if self.building_max_height > self.screen_height - ACTOR_HEIGHT {
            return Err(ConfigError::Invalid("buildings leave no room for the actors"));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::Invalid("gravity must be positive"));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::Invalid("time_step must be positive"));
        }
        if !(0.0..=MAX_WIND_LIMIT).contains(&self.wind_limit) {
            return Err(ConfigError::Invalid("wind_limit must be within [0, 100]"));
        }
        Ok(())
    }

    /// Playfield extent for the trajectory simulator
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.screen_width,
            height: self.screen_height,
        }
    }
}
