//! Tileworld - a minimal 2D tile-world platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain generation, collision, physics step)
//! - `schedule`: Loop scheduler that drives the physics step at a steady cadence
//! - `camera`: Viewport math for consumers that draw the world
//! - `render`: Text renderer and tile appearance mapping
//! - `settings`: Data-driven world and physics configuration

pub mod camera;
pub mod error;
pub mod render;
pub mod schedule;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, WorldError};
pub use settings::{PhysicsParams, Settings};

/// World and physics constants
pub mod consts {
    /// Edge length of one tile in world units (pixels)
    pub const TILE_SIZE: f32 = 40.0;

    /// Default world width, in tiles
    pub const WORLD_WIDTH: i32 = 100;
    /// Default world height, in tiles
    pub const WORLD_HEIGHT: i32 = 20;

    /// Probability that a stone candidate cell is carved out to air
    pub const CAVE_CHANCE: f64 = 0.08;

    /// Per-tick downward acceleration
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set on jump (negative = up)
    pub const JUMP_FORCE: f32 = -14.0;
    /// Horizontal speed set while a move action is held
    pub const MOVEMENT_SPEED: f32 = 5.0;
    /// Horizontal damping while grounded
    pub const FRICTION: f32 = 0.7;
    /// Horizontal damping while airborne
    pub const AIR_RESISTANCE: f32 = 0.9;

    /// Player body width as a fraction of a tile
    pub const PLAYER_WIDTH_TILES: f32 = 0.6;
    /// Player body height as a fraction of a tile
    pub const PLAYER_HEIGHT_TILES: f32 = 1.2;

    /// Default scheduling cadence (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Default viewport width in pixels
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    /// Default viewport height in pixels
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Tile index containing a world coordinate
#[inline]
pub fn tile_index(coord: f32, tile_size: f32) -> i32 {
    (coord / tile_size).floor() as i32
}
