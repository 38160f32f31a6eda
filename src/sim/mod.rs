//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-call step only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod input;
pub mod player;
pub mod state;
pub mod tick;
pub mod tile;
pub mod worldgen;

pub use collision::{Aabb, is_blocked};
pub use grid::TileGrid;
pub use input::{Action, InputSource, InputState, SharedInput};
pub use player::PlayerBody;
pub use state::World;
pub use tick::{StepEvents, step_player, tick};
pub use tile::Tile;
pub use worldgen::{generate, generate_with, surface_height};
