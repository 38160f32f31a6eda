//! World and physics settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! built-in constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Per-tick physics tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity on jump (negative = up)
    pub jump_force: f32,
    /// Horizontal velocity set while a move action is held
    pub movement_speed: f32,
    /// Horizontal damping factor on the ground
    pub friction: f32,
    /// Horizontal damping factor in the air
    pub air_resistance: f32,
    /// World units per tile, shared with the camera
    pub tile_size: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            movement_speed: MOVEMENT_SPEED,
            friction: FRICTION,
            air_resistance: AIR_RESISTANCE,
            tile_size: TILE_SIZE,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// World width in tiles
    pub world_width: i32,
    /// World height in tiles
    pub world_height: i32,
    /// Generation seed (None = fresh seed from OS entropy each run)
    pub seed: Option<u64>,
    /// Chance that a stone cell becomes a cave pocket
    pub cave_chance: f64,

    // === Physics ===
    pub physics: PhysicsParams,

    // === Loop / view ===
    /// Scheduler cadence for the fixed-rate driver
    pub tick_rate_hz: u32,
    /// Viewport size in pixels handed to the renderer
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            seed: None,
            cave_chance: CAVE_CHANCE,

            physics: PhysicsParams::default(),

            tick_rate_hz: TICK_RATE_HZ,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl Settings {
    /// Settings with a fixed seed, everything else default
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Resolve the seed for this run, drawing one if none is configured
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
