//! Text renderer and tile appearance
//!
//! Colors belong to the presentation side only; the simulation emits tile
//! kinds and never looks at them.

use crate::camera::Camera;
use crate::schedule::Frame;
use crate::sim::Tile;

/// Player fill color
pub const PLAYER_COLOR: &str = "#ff0000";

/// Fill color for a tile kind (air doubles as the sky/background)
pub fn tile_color(tile: Tile) -> &'static str {
    match tile {
        Tile::Air => "#7ec0ee",
        Tile::Grass => "#567a35",
        Tile::Dirt => "#8b5e3c",
        Tile::Stone => "#7a7a7a",
    }
}

/// Single-character glyph for a tile kind
pub fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Air => ' ',
        Tile::Grass => '"',
        Tile::Dirt => '#',
        Tile::Stone => '%',
    }
}

const PLAYER_GLYPH: char = '@';

/// Draw the visible part of a frame, one line per tile row
///
/// Cells the player's box touches are drawn as `@`.
pub fn ascii_frame(frame: &Frame<'_>, tile_size: f32) -> String {
    let camera = Camera::follow(frame.player, frame.viewport_width, frame.viewport_height);
    let (xs, ys) = camera.visible_tiles(frame.grid, tile_size);
    let (px0, px1, py0, py1) = frame.player.aabb().tile_span(tile_size);

    let mut out = String::with_capacity((xs.len() + 1) * ys.len());
    for y in ys {
        for x in xs.clone() {
            let glyph = if (px0..=px1).contains(&x) && (py0..=py1).contains(&y) {
                PLAYER_GLYPH
            } else {
                frame.grid.get(x, y).map_or(' ', tile_glyph)
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
