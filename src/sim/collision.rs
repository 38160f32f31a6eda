//! Box-vs-grid collision queries
//!
//! The resolver never moves anything. Callers test a candidate placement
//! and decide whether to commit it.

use glam::Vec2;

use super::grid::TileGrid;
use crate::tile_index;

/// Axis-aligned box in world units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box with its top-left corner at `pos`
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    /// Inclusive tile index ranges covered by this box: `(x0, x1, y0, y1)`
    ///
    /// An edge lying exactly on a tile boundary counts as touching the next tile.
    #[inline]
    pub fn tile_span(&self, tile_size: f32) -> (i32, i32, i32, i32) {
        (
            tile_index(self.left, tile_size),
            tile_index(self.right, tile_size),
            tile_index(self.top, tile_size),
            tile_index(self.bottom, tile_size),
        )
    }
}

/// Whether any in-range cell covered by `aabb` is solid
///
/// Cells outside the grid are passable, so a box hanging over the world
/// edge is only blocked by the part that still overlaps the grid. The scan
/// is clamped to the grid so far-away boxes cost nothing.
pub fn is_blocked(grid: &TileGrid, aabb: &Aabb, tile_size: f32) -> bool {
    let (x0, x1, y0, y1) = aabb.tile_span(tile_size);

    let x0 = x0.max(0);
    let x1 = x1.min(grid.width() - 1);
    let y0 = y0.max(0);
    let y1 = y1.min(grid.height() - 1);

    (x0..=x1).any(|x| (y0..=y1).any(|y| grid.is_solid(x, y)))
}
