//! Seamless tiling by duplication.
//!
//! Each shape is emitted at the 3×3 grid of offsets `{-S, 0, S}²`, so any
//! part that falls off one edge reappears on the opposite edge. No clipping.

use crate::geom::Polygon;

/// Offsets in tile units, `dx` outer and `dy` inner; index 4 is `(0, 0)`.
pub const TILE_OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Nine translated copies of `poly` for a square tile of side `tile_px`.
pub fn wrapped_instances(poly: &Polygon, tile_px: u32) -> [Polygon; 9] {
    let s = tile_px as f64;
    TILE_OFFSETS.map(|(i, j)| poly.translate(i as f64 * s, j as f64 * s))
}
