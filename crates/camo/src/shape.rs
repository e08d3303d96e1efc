//! Colored polygon with a draw order.

use crate::geom::Polygon;
use crate::palette::Role;

/// Draw order of macro masses.
pub const Z_MACRO: i32 = 10;
/// Draw order of micro bites; painted over every macro mass.
pub const Z_MICRO: i32 = 30;

/// Immutable once created; renderers only read it.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub poly: Polygon,
    pub role: Role,
    pub z: i32,
}

impl Shape {
    #[inline]
    pub fn new(poly: Polygon, role: Role, z: i32) -> Self {
        Self { poly, role, z }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.poly.area()
    }

    #[inline]
    pub fn is_macro(&self) -> bool {
        self.z == Z_MACRO
    }

    #[inline]
    pub fn is_micro(&self) -> bool {
        self.z == Z_MICRO
    }
}

/// Stable sort by `z`: equal draw orders keep generation order.
pub fn sort_by_draw_order(shapes: &mut [Shape]) {
    shapes.sort_by_key(|s| s.z);
}
