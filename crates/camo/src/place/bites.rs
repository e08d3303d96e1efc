//! Micro bites: small shapes straddling the edges of placed shapes.

use super::radius_range_px;
use crate::blob::{chance, random_blob, uniform, BlobCfg};
use crate::generate::CamoCfg;
use crate::geom::{edge_normal, lerp, Point};
use crate::palette::Role;
use crate::shape::{Shape, Z_MICRO};
use rand::Rng;
use std::f64::consts::TAU;

/// Nominal micro size range in mm.
pub const MICRO_SIZE_MM: (f64, f64) = (8.0, 25.0);

const SHRINK: (f64, f64) = (0.35, 0.55);
/// Anchor parameter along the target edge, away from its corners.
const EDGE_T: (f64, f64) = (0.15, 0.85);
/// Signed bite offset, in units of `size_px * BITE_SCALE`.
const BITE: (f64, f64) = (-1.1, 1.1);
const BITE_SCALE: f64 = 0.55;
/// Probability and extent (in units of `size_px`) of reaching across to a neighbor mass.
const REACH_P: f64 = 0.20;
const REACH: (f64, f64) = (0.8, 1.4);

/// Appends `cfg.micro_count` micro shapes to `shapes`.
///
/// Each anchor is drawn from the list as it stands at that moment, so later
/// bites may anchor on earlier ones. With an empty list nothing is placed.
pub fn place_micro<R: Rng + ?Sized>(rng: &mut R, cfg: &CamoCfg, shapes: &mut Vec<Shape>) {
    if cfg.micro_count > 0 && shapes.is_empty() {
        tracing::warn!(
            micro_count = cfg.micro_count,
            "no shapes to anchor micro bites on; skipping micro placement"
        );
        return;
    }

    for _ in 0..cfg.micro_count {
        let size_mm = uniform(rng, MICRO_SIZE_MM.0, MICRO_SIZE_MM.1);
        let size_px = size_mm * cfg.px_per_mm;
        let (r_min, r_max) = radius_range_px(size_mm, size_mm, cfg.px_per_mm, SHRINK);
        let blob = random_blob(rng, r_min, r_max, &BlobCfg::MICRO);
        let blob = blob.rotate(uniform(rng, 0.0, TAU));

        let anchor = bite_anchor(rng, shapes, size_px);
        tracing::trace!(
            edge_t = anchor.edge_t,
            offset = anchor.offset,
            reached = anchor.reached,
            "bite anchor"
        );
        let role = pick_role(rng);
        shapes.push(Shape::new(blob.translate_by(anchor.point), role, Z_MICRO));
    }
    tracing::debug!(count = cfg.micro_count, "placed micro bites");
}

/// Verdigris (C4) dominates the bites; earth (C2) is secondary.
fn pick_role<R: Rng + ?Sized>(rng: &mut R) -> Role {
    if chance(rng, 0.68) {
        Role::C4
    } else {
        Role::C2
    }
}

/// Where a bite lands relative to its target edge.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    point: Point,
    /// Parameter along the target edge.
    edge_t: f64,
    /// Total signed offset along the edge normal, reach included.
    offset: f64,
    reached: bool,
}

/// Picks a target shape and edge, then offsets a point on that edge along its normal.
fn bite_anchor<R: Rng + ?Sized>(rng: &mut R, shapes: &[Shape], size_px: f64) -> Anchor {
    let target = &shapes[rng.gen_range(0..shapes.len())].poly;
    let (p, q) = target.edge(rng.gen_range(0..target.len()));

    let edge_t = uniform(rng, EDGE_T.0, EDGE_T.1);
    let normal = edge_normal(p, q);

    let mut offset = uniform(rng, BITE.0, BITE.1) * size_px * BITE_SCALE;
    let reached = chance(rng, REACH_P);
    if reached {
        offset += uniform(rng, REACH.0, REACH.1) * size_px;
    }
    Anchor {
        point: lerp(p, q, edge_t) + normal * offset,
        edge_t,
        offset,
        reached,
    }
}
