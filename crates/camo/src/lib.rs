//! Tileable camouflage pattern generation.
//!
//! Pipeline
//! - `blob`: jittered radial polygons with jagged edges.
//! - `place`: macro masses in three size classes, then micro "bites" anchored
//!   on the edges of already placed shapes.
//! - `tile`: 3×3 offset duplication so shapes crossing the tile border wrap.
//! - `render`: SVG and PNG encoders consuming the sorted shape list.
//!
//! Every random decision is drawn from one `StdRng` owned by a single
//! generation pass, so a fixed `CamoCfg` reproduces the same shape list.

pub mod blob;
pub mod error;
pub mod generate;
pub mod geom;
pub mod palette;
pub mod place;
pub mod render;
pub mod report;
pub mod shape;
pub mod tile;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::CamoError;
pub use generate::{generate, CamoCfg, Pattern};
pub use geom::{Point, Polygon};
pub use palette::{Rgb, Role};
pub use shape::Shape;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::blob::{random_blob, BlobCfg};
    pub use crate::generate::{generate, CamoCfg, Pattern};
    pub use crate::geom::{Aabb, Point, Polygon};
    pub use crate::palette::{Rgb, Role, BACKGROUND};
    pub use crate::place::{place_macro, place_micro, size_class_plan, SizeClass};
    pub use crate::report::AreaReport;
    pub use crate::shape::{Shape, Z_MACRO, Z_MICRO};
    pub use crate::tile::wrapped_instances;
    pub use nalgebra::Vector2 as Vec2;
}
