//! Static tile grid
//!
//! Tiles are stored in row-major order: index = y * width + x.
//! The grid is built once and never edited afterwards.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::error::WorldError;

/// Rectangular W x H mapping from integer coordinates to tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// Unchecked wire form; converted through the same checks as `from_fn`
#[derive(Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TryFrom<RawGrid> for TileGrid {
    type Error = WorldError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.width <= 0 || raw.height <= 0 {
            return Err(WorldError::InvalidDimensions {
                width: raw.width,
                height: raw.height,
            });
        }
        let expected = raw.width as usize * raw.height as usize;
        if raw.tiles.len() != expected {
            return Err(WorldError::TileCountMismatch {
                expected,
                actual: raw.tiles.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

impl TileGrid {
    /// Build a grid by evaluating `f(x, y)` for every cell
    ///
    /// Cells are visited column by column (x outer, y inner), which is the
    /// order world generation relies on for reproducible RNG consumption.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(i32, i32) -> Tile,
    ) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }

        let mut tiles = vec![Tile::Air; width as usize * height as usize];
        for x in 0..width {
            for y in 0..height {
                tiles[y as usize * width as usize + x as usize] = f(x, y);
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Grid where every cell holds the same tile
    pub fn filled(width: i32, height: i32, tile: Tile) -> Result<Self, WorldError> {
        Self::from_fn(width, height, |_, _| tile)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at (x, y), or `None` outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Whether (x, y) blocks movement. Out-of-range cells are passable.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Tile::is_solid)
    }

    /// Iterate one column from y = 0 downward
    pub fn column(&self, x: i32) -> impl Iterator<Item = Tile> + '_ {
        (0..self.height).filter_map(move |y| self.get(x, y))
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
