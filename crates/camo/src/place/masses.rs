//! Macro masses: the base silhouette of the pattern.

use super::radius_range_px;
use crate::blob::{chance, random_blob, uniform, BlobCfg};
use crate::generate::CamoCfg;
use crate::palette::Role;
use crate::shape::{Shape, Z_MACRO};
use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;

/// Shrink factors keep jagged, stretched blobs near their nominal size.
const SHRINK: (f64, f64) = (0.50, 0.60);
/// Anisotropic scale bounds, drawn independently per axis.
const SCALE: (f64, f64) = (0.75, 1.35);

/// Macro size class. The label survives the shuffle and drives color choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Medium,
    Large,
    Huge,
}

impl SizeClass {
    /// Nominal size range in mm.
    pub const fn range_mm(self) -> (f64, f64) {
        match self {
            SizeClass::Medium => (50.0, 60.0),
            SizeClass::Large => (70.0, 80.0),
            SizeClass::Huge => (90.0, 110.0),
        }
    }

    /// Medium masses lean olive (C3); larger ones lean coyote (C1).
    fn pick_role<R: Rng + ?Sized>(self, rng: &mut R) -> Role {
        match self {
            SizeClass::Medium => {
                if chance(rng, 0.70) {
                    Role::C3
                } else {
                    Role::C1
                }
            }
            SizeClass::Large | SizeClass::Huge => {
                if chance(rng, 0.55) {
                    Role::C1
                } else {
                    Role::C3
                }
            }
        }
    }
}

/// Size classes for `count` macro masses, unshuffled: 50% medium, 30% large,
/// the remainder huge (clamped at zero).
pub fn size_class_plan(count: usize) -> Vec<SizeClass> {
    let n_mid = (count as f64 * 0.50).round_ties_even() as usize;
    let n_big = (count as f64 * 0.30).round_ties_even() as usize;
    let n_huge = count.saturating_sub(n_mid + n_big);
    let mut plan = Vec::with_capacity(n_mid + n_big + n_huge);
    plan.extend(std::iter::repeat(SizeClass::Medium).take(n_mid));
    plan.extend(std::iter::repeat(SizeClass::Large).take(n_big));
    plan.extend(std::iter::repeat(SizeClass::Huge).take(n_huge));
    plan
}

/// Appends `cfg.macro_count` macro masses to `shapes`.
pub fn place_macro<R: Rng + ?Sized>(rng: &mut R, cfg: &CamoCfg, shapes: &mut Vec<Shape>) {
    let tile = cfg.tile_px() as f64;
    let mut plan = size_class_plan(cfg.macro_count);
    plan.shuffle(rng);

    for class in plan {
        let (a_mm, b_mm) = class.range_mm();
        let (r_min, r_max) = radius_range_px(a_mm, b_mm, cfg.px_per_mm, SHRINK);
        let blob = random_blob(rng, r_min, r_max, &BlobCfg::MACRO);

        let angle = uniform(rng, 0.0, TAU);
        let sx = uniform(rng, SCALE.0, SCALE.1);
        let sy = uniform(rng, SCALE.0, SCALE.1);
        let cx = uniform(rng, 0.0, tile);
        let cy = uniform(rng, 0.0, tile);
        let poly = blob.rotate(angle).scale(sx, sy).translate(cx, cy);

        let role = class.pick_role(rng);
        shapes.push(Shape::new(poly, role, Z_MACRO));
    }
    tracing::debug!(count = cfg.macro_count, "placed macro masses");
}
