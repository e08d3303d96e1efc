//! Organic "blob" polygons: radial jitter plus jagged edge subdivision.
//!
//! Model
//! - `n` base vertices on evenly spaced angles with ±18° angular jitter and a
//!   per-vertex radius factor in [0.62, 1.05] of one shared base radius.
//! - Each base edge is split into `k+1` segments; interior points are pushed
//!   along the edge normal by `±base_r * amp`, giving sharp, jagged contours.
//! - Output keeps traversal order: base vertex, then its edge's jag points.
//!
//! Draw order from the RNG is fixed (n, radius, vertices, then edges) so
//! that seeded runs are reproducible.

use crate::geom::{edge_normal, lerp, Point, Polygon};
use nalgebra::Vector2;
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

/// Angular jitter bound per base vertex, in degrees.
const ANGLE_JITTER_DEG: f64 = 18.0;
/// Per-vertex radius factor bounds (relative to the base radius).
const RADIUS_FACTOR: (f64, f64) = (0.62, 1.05);

/// Shape-complexity parameters of a blob.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobCfg {
    /// Base vertex count range. Values below 3 are raised to 3.
    pub vertices: RangeInclusive<usize>,
    /// Interior jag points per base edge.
    pub subdivisions: RangeInclusive<usize>,
    /// Jag amplitude as a fraction of the base radius.
    pub jag_amp: (f64, f64),
}

impl BlobCfg {
    pub const MACRO: BlobCfg = BlobCfg {
        vertices: 7..=13,
        subdivisions: 1..=3,
        jag_amp: (0.10, 0.30),
    };

    /// Fewer vertices and subdivisions give a crisper small silhouette.
    pub const MICRO: BlobCfg = BlobCfg {
        vertices: 6..=10,
        subdivisions: 1..=2,
        jag_amp: (0.12, 0.28),
    };
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self::MACRO
    }
}

/// Uniform draw on `[a, b]` as `a + (b - a) u`; tolerates `a >= b`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

/// Bernoulli draw: true with probability `p`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

fn sample_count<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<usize>, floor: usize) -> usize {
    let lo = (*range.start()).max(floor);
    let hi = (*range.end()).max(lo);
    rng.gen_range(lo..=hi)
}

/// Jagged polygon centered at the origin with base radius drawn from `[r_min, r_max]`.
pub fn random_blob<R: Rng + ?Sized>(rng: &mut R, r_min: f64, r_max: f64, cfg: &BlobCfg) -> Polygon {
    let n = sample_count(rng, &cfg.vertices, 3);
    let base_r = uniform(rng, r_min, r_max);

    let step = TAU / n as f64;
    let base: Vec<Point> = (0..n)
        .map(|i| {
            let jitter = uniform(rng, -ANGLE_JITTER_DEG, ANGLE_JITTER_DEG).to_radians();
            let a = step * i as f64 + jitter;
            let r = base_r * uniform(rng, RADIUS_FACTOR.0, RADIUS_FACTOR.1);
            Vector2::new(a.cos() * r, a.sin() * r)
        })
        .collect();

    let mut out = Vec::with_capacity(n * (cfg.subdivisions.end() + 1));
    for i in 0..n {
        let p = base[i];
        let q = base[(i + 1) % n];
        out.push(p);

        let k = sample_count(rng, &cfg.subdivisions, 0);
        let normal = edge_normal(p, q);
        for j in 1..=k {
            let t = j as f64 / (k + 1) as f64;
            let amp = base_r * uniform(rng, cfg.jag_amp.0, cfg.jag_amp.1);
            let sign = if chance(rng, 0.5) { -1.0 } else { 1.0 };
            out.push(lerp(p, q, t) + normal * (amp * sign));
        }
    }
    Polygon::new(out)
}
