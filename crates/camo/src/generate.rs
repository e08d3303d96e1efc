//! One generation pass: seed, macro masses, micro bites, draw-order sort.

use crate::place::{place_macro, place_micro};
use crate::shape::{sort_by_draw_order, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Generation parameters.
///
/// Numeric fields are not validated; odd values produce degenerate output
/// (e.g. `px_per_mm = 0` gives a 0×0 tile) rather than errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CamoCfg {
    /// Reproducibility key for the single RNG stream.
    pub seed: u64,
    /// Physical tile side in mm.
    pub tile_mm: u32,
    /// Resolution in pixels per mm.
    pub px_per_mm: f64,
    pub macro_count: usize,
    pub micro_count: usize,
}

impl Default for CamoCfg {
    fn default() -> Self {
        Self {
            seed: 12345,
            tile_mm: 640,
            px_per_mm: 2.0,
            macro_count: 42,
            micro_count: 140,
        }
    }
}

impl CamoCfg {
    /// Tile side in pixels, `round(tile_mm * px_per_mm)`.
    pub fn tile_px(&self) -> u32 {
        let side = (self.tile_mm as f64 * self.px_per_mm).round();
        if side.is_finite() && side > 0.0 {
            side as u32
        } else {
            0
        }
    }
}

/// Final, draw-ordered shape list of one tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub tile_px: u32,
    pub shapes: Vec<Shape>,
}

impl Pattern {
    pub fn macro_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_macro())
    }

    pub fn micro_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_micro())
    }
}

/// Runs the full pipeline for `cfg`. Same `cfg` ⇒ same `Pattern`.
pub fn generate(cfg: &CamoCfg) -> Pattern {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut shapes = Vec::with_capacity(cfg.macro_count + cfg.micro_count);

    place_macro(&mut rng, cfg, &mut shapes);
    place_micro(&mut rng, cfg, &mut shapes);
    sort_by_draw_order(&mut shapes);

    tracing::debug!(
        seed = cfg.seed,
        tile_px = cfg.tile_px(),
        shapes = shapes.len(),
        "generated pattern"
    );
    Pattern {
        tile_px: cfg.tile_px(),
        shapes,
    }
}
