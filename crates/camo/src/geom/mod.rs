//! Plain 2D polygon helpers in canvas units (pixels).
//!
//! - `Polygon`: ordered vertex list, closed implicitly (last connects to first).
//! - All transforms are pure and return a new polygon; generation chains them
//!   as rotate → scale → translate.
//! - No simplicity check: jagged blobs may self-intersect, which is accepted.

use nalgebra::Vector2;

/// A point in canvas space.
pub type Point = Vector2<f64>;

/// Added to edge lengths before normalizing so zero-length edges stay finite.
const NORMAL_EPS: f64 = 1e-9;

/// Closed polygon in traversal order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned area via the shoelace formula.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Shoelace area, positive for counterclockwise order in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut s = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            s += p.x * q.y - q.x * p.y;
        }
        s / 2.0
    }

    /// Rotation about the origin by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sa, ca) = angle.sin_cos();
        self.map(|p| Vector2::new(p.x * ca - p.y * sa, p.x * sa + p.y * ca))
    }

    /// Axis-aligned scale about the origin.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.map(|p| Vector2::new(p.x * sx, p.y * sy))
    }

    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.translate_by(Vector2::new(dx, dy))
    }

    #[inline]
    pub fn translate_by(&self, d: Point) -> Self {
        self.map(|p| p + d)
    }

    /// Edge `i → i+1`, wrapping at the end.
    ///
    /// Panics if the polygon is empty.
    #[inline]
    pub fn edge(&self, i: usize) -> (Point, Point) {
        let n = self.points.len();
        (self.points[i % n], self.points[(i + 1) % n])
    }

    /// Axis-aligned bounding box, `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.points.first()?;
        let mut bb = Aabb {
            min: first,
            max: first,
        };
        for p in &self.points[1..] {
            bb.min = bb.min.inf(p);
            bb.max = bb.max.sup(p);
        }
        Some(bb)
    }

    fn map(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

/// Left unit normal `(-vy, vx)` of the segment `a → b`.
///
/// For counterclockwise polygons (y-up) this points inward; callers use it as
/// a signed direction, so the side does not matter.
#[inline]
pub fn edge_normal(a: Point, b: Point) -> Point {
    let v = b - a;
    let len = v.norm() + NORMAL_EPS;
    Vector2::new(-v.y / len, v.x / len)
}

/// Linear interpolation `a + (b - a) t`.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

#[cfg(test)]
mod tests;
