//! World state: the single top-level context the loop mutates
//!
//! The grid is generated once and shared read-only by every tick; only the
//! player body and tick counter change afterwards.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::TileGrid;
use super::player::PlayerBody;
use super::worldgen::generate_with;
use crate::error::WorldError;
use crate::settings::{PhysicsParams, Settings};

/// Complete simulation state (deterministic given seed and inputs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Seed the grid was generated from, for replays
    pub seed: u64,
    /// Static terrain
    pub grid: TileGrid,
    /// The controllable body
    pub player: PlayerBody,
    /// Physics tuning applied every tick
    pub physics: PhysicsParams,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Generate a fresh world from settings
    ///
    /// Fails before generating anything if the configured dimensions are not
    /// positive.
    pub fn new(settings: &Settings) -> Result<Self, WorldError> {
        let seed = settings.resolve_seed();
        log::info!(
            "Generating {}x{} world with seed {}",
            settings.world_width,
            settings.world_height,
            seed
        );

        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = generate_with(
            settings.world_width,
            settings.world_height,
            settings.cave_chance,
            &mut rng,
        )?;

        Ok(Self::from_grid(grid, seed, settings.physics))
    }

    /// Wrap an existing grid, spawning the player in it
    pub fn from_grid(grid: TileGrid, seed: u64, physics: PhysicsParams) -> Self {
        let player = PlayerBody::spawn(&grid, physics.tile_size);
        Self {
            seed,
            grid,
            player,
            physics,
            time_ticks: 0,
        }
    }
}
