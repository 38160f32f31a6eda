//! Player body kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, is_blocked};
use super::grid::TileGrid;
use crate::consts::{PLAYER_HEIGHT_TILES, PLAYER_WIDTH_TILES};
use crate::error::WorldError;

/// The single controllable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBody")]
pub struct PlayerBody {
    /// Top-left corner in world units
    pub pos: Vec2,
    /// Per-tick velocity
    pub vel: Vec2,
    /// Resting on solid ground (enables jumping)
    pub grounded: bool,
    size: Vec2,
}

#[derive(Deserialize)]
struct RawBody {
    pos: Vec2,
    vel: Vec2,
    grounded: bool,
    size: Vec2,
}

impl TryFrom<RawBody> for PlayerBody {
    type Error = WorldError;

    fn try_from(raw: RawBody) -> Result<Self, Self::Error> {
        // Rejects NaN as well
        if !(raw.size.x > 0.0 && raw.size.y > 0.0) {
            return Err(WorldError::InvalidBodySize {
                width: raw.size.x,
                height: raw.size.y,
            });
        }
        Ok(Self {
            pos: raw.pos,
            vel: raw.vel,
            grounded: raw.grounded,
            size: raw.size,
        })
    }
}

impl PlayerBody {
    /// New body at rest. Non-positive sizes fall back to the default body size.
    pub fn new(pos: Vec2, size: Vec2, tile_size: f32) -> Self {
        let size = if size.x > 0.0 && size.y > 0.0 {
            size
        } else {
            Self::default_size(tile_size)
        };
        Self {
            pos,
            vel: Vec2::ZERO,
            grounded: false,
            size,
        }
    }

    /// 0.6 x 1.2 tiles
    pub fn default_size(tile_size: f32) -> Vec2 {
        Vec2::new(tile_size * PLAYER_WIDTH_TILES, tile_size * PLAYER_HEIGHT_TILES)
    }

    /// Fixed for the body's lifetime
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Bounding box at the current position
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Bounding box if the body stood at `pos`
    #[inline]
    pub fn aabb_at(&self, pos: Vec2) -> Aabb {
        Aabb::from_pos_size(pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Spawn in the middle column of the world
    ///
    /// The body starts at the top of the column (y = 0). If that spot is
    /// solid it moves down one tile at a time to the first clear placement;
    /// a column with no clear placement spawns just past the last row.
    pub fn spawn(grid: &TileGrid, tile_size: f32) -> Self {
        let x = grid.width() as f32 / 2.0 * tile_size;
        let mut body = Self::new(Vec2::new(x, 0.0), Self::default_size(tile_size), tile_size);

        let clear_row = (0..grid.height())
            .find(|&row| {
                let aabb = body.aabb_at(Vec2::new(x, row as f32 * tile_size));
                !is_blocked(grid, &aabb, tile_size)
            })
            .unwrap_or(grid.height());
        body.pos.y = clear_row as f32 * tile_size;

        log::info!("Player spawned at ({}, {})", body.pos.x, body.pos.y);
        body
    }
}
