//! Viewport camera
//!
//! Centers the view on the player and works out which tiles are on screen.
//! Reads simulation state only; nothing here feeds back into physics.

use std::ops::Range;

use glam::Vec2;

use crate::sim::{PlayerBody, TileGrid};

/// Top-left corner of the view in world units plus its pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    /// Camera centered on the player's body
    pub fn follow(player: &PlayerBody, viewport_width: f32, viewport_height: f32) -> Self {
        let viewport = Vec2::new(viewport_width, viewport_height);
        Self {
            origin: player.center() - viewport / 2.0,
            viewport,
        }
    }

    /// Half-open tile ranges `(xs, ys)` overlapping the view, clamped to the grid
    pub fn visible_tiles(&self, grid: &TileGrid, tile_size: f32) -> (Range<i32>, Range<i32>) {
        let far = self.origin + self.viewport;

        let clamp = |start: f32, end: f32, len: i32| {
            let lo = ((start / tile_size).floor() as i32).clamp(0, len);
            let hi = ((end / tile_size).ceil() as i32).clamp(0, len);
            lo..hi.max(lo)
        };

        (
            clamp(self.origin.x, far.x, grid.width()),
            clamp(self.origin.y, far.y, grid.height()),
        )
    }

    /// World position to viewport pixels
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.origin
    }
}
