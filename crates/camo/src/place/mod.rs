//! Shape placement on the tile.
//!
//! - `masses`: macro masses in three size classes, independently rotated,
//!   anisotropically scaled and dropped anywhere on the tile.
//! - `bites`: micro shapes anchored on an edge of an existing shape and
//!   pushed across it so they bite into (or bulge out of) the silhouette.
//!
//! Both phases append to one ordered shape list and draw from the run RNG.

mod bites;
mod masses;

pub use bites::{place_micro, MICRO_SIZE_MM};
pub use masses::{place_macro, size_class_plan, SizeClass};

/// Converts a size range in mm to a pixel radius range with per-bound shrink factors.
#[inline]
pub(crate) fn radius_range_px(min_mm: f64, max_mm: f64, px_per_mm: f64, shrink: (f64, f64)) -> (f64, f64) {
    (min_mm * px_per_mm * shrink.0, max_mm * px_per_mm * shrink.1)
}
