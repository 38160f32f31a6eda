//! Procedural terrain generation
//!
//! Each column gets a smooth surface row from a sine wave. Rows past the
//! surface (larger y) are open air, the surface row is grass, the three rows
//! before it are dirt, and everything else is stone with independent
//! single-cell cave pockets.

use rand::Rng;

use super::grid::TileGrid;
use super::tile::Tile;
use crate::consts::CAVE_CHANCE;
use crate::error::WorldError;

/// Thickness of the dirt band between grass and stone
pub const DIRT_DEPTH: i32 = 3;

/// Surface row for column `x` in a world `height` tiles tall
///
/// `floor(sin(x / 15) * 3 + height / 2 - 2)`, evaluated in f64 so the
/// terrain line does not drift with float precision.
#[inline]
pub fn surface_height(x: i32, height: i32) -> i32 {
    let x = f64::from(x);
    let h = f64::from(height);
    ((x / 15.0).sin() * 3.0 + h / 2.0 - 2.0).floor() as i32
}

/// Classify a cell relative to its column's surface, ignoring caves
#[inline]
fn band(y: i32, surface: i32) -> Tile {
    if y > surface {
        Tile::Air
    } else if y == surface {
        Tile::Grass
    } else if y > surface - (DIRT_DEPTH + 1) {
        Tile::Dirt
    } else {
        Tile::Stone
    }
}

/// Generate a world with the default cave chance
pub fn generate<R: Rng>(
    width: i32,
    height: i32,
    rng: &mut R,
) -> Result<TileGrid, WorldError> {
    generate_with(width, height, CAVE_CHANCE, rng)
}

/// Generate a world, carving each stone candidate to air with `cave_chance`
///
/// The RNG is drawn exactly once per stone candidate cell, columns left to
/// right and rows in increasing y, so a seeded RNG reproduces the grid exactly.
pub fn generate_with<R: Rng>(
    width: i32,
    height: i32,
    cave_chance: f64,
    rng: &mut R,
) -> Result<TileGrid, WorldError> {
    if width <= 0 || height <= 0 {
        return Err(WorldError::InvalidDimensions { width, height });
    }

    let surface: Vec<i32> = (0..width).map(|x| surface_height(x, height)).collect();

    let grid = TileGrid::from_fn(width, height, |x, y| {
        match band(y, surface[x as usize]) {
            Tile::Stone => {
                if rng.random::<f64>() < cave_chance {
                    Tile::Air
                } else {
                    Tile::Stone
                }
            }
            tile => tile,
        }
    })?;

    log::info!(
        "Generated {}x{} world: {} stone, {} grass",
        width,
        height,
        grid.count(Tile::Stone),
        grid.count(Tile::Grass)
    );

    Ok(grid)
}
