//! Output encoders. Both consume a finished `Pattern` read-only and draw
//! every shape at its nine wrapped positions, in list order, over a C3
//! background.

pub mod raster;
pub mod svg;

pub use raster::{render_raster, write_png};
pub use svg::{render_svg, write_svg};
