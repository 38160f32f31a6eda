//! Tile kinds

use serde::{Deserialize, Serialize};

/// Terrain kind of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
}

impl Tile {
    /// Air is the only passable kind
    #[inline]
    pub fn is_solid(self) -> bool {
        self != Tile::Air
    }
}
