//! PNG preview via `image` + `imageproc` scanline polygon fill.

use crate::error::CamoError;
use crate::generate::Pattern;
use crate::geom::Polygon;
use crate::palette::{Rgb, BACKGROUND};
use crate::tile::wrapped_instances;
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as IPoint;
use std::path::Path;

/// Rasterizes `pattern` onto a `tile_px`² RGB canvas.
pub fn render_raster(pattern: &Pattern) -> Result<RgbImage, CamoError> {
    let w = pattern.tile_px;
    let Rgb(bg) = BACKGROUND.rgb()?;
    let mut img = RgbImage::from_pixel(w, w, Pixel(bg));

    for shape in &pattern.shapes {
        let Rgb(fill) = shape.role.rgb()?;
        for poly in wrapped_instances(&shape.poly, w) {
            fill_instance(&mut img, &pixel_ring(&poly), Pixel(fill));
        }
    }
    Ok(img)
}

/// Renders and writes `pattern` as PNG to `path`.
pub fn write_png(pattern: &Pattern, path: impl AsRef<Path>) -> Result<(), CamoError> {
    let img = render_raster(pattern)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Rounds to integer pixels and drops repeated points.
///
/// `draw_polygon_mut` rejects an explicitly closed ring (first == last), so
/// closing duplicates are removed as well.
fn pixel_ring(poly: &Polygon) -> Vec<IPoint<i32>> {
    let mut pts: Vec<IPoint<i32>> = Vec::with_capacity(poly.len());
    for p in &poly.points {
        let q = IPoint::new(p.x.round() as i32, p.y.round() as i32);
        if pts.last() != Some(&q) {
            pts.push(q);
        }
    }
    while pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    pts
}

/// Fills a rounded ring. Rings that collapsed to one or two pixels are still
/// painted as a dot or a segment.
fn fill_instance(img: &mut RgbImage, ring: &[IPoint<i32>], color: Pixel<u8>) {
    let as_f32 = |p: &IPoint<i32>| (p.x as f32, p.y as f32);
    match ring {
        [] => {}
        [p] => draw_line_segment_mut(img, as_f32(p), as_f32(p), color),
        [p, q] => draw_line_segment_mut(img, as_f32(p), as_f32(q), color),
        _ => draw_polygon_mut(img, ring, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Role;
    use crate::shape::{Shape, Z_MACRO, Z_MICRO};
    use nalgebra::vector;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            vector![x0, y0],
            vector![x0 + side, y0],
            vector![x0 + side, y0 + side],
            vector![x0, y0 + side],
        ])
    }

    #[test]
    fn empty_pattern_is_uniform_background() {
        let img = render_raster(&Pattern {
            tile_px: 16,
            shapes: Vec::new(),
        })
        .unwrap();
        assert_eq!(img.dimensions(), (16, 16));
        assert!(img.pixels().all(|p| p.0 == [0x4b, 0x53, 0x20]));
    }

    #[test]
    fn shapes_wrap_across_the_border() {
        // Square straddling the right edge must also paint the left edge.
        let pattern = Pattern {
            tile_px: 20,
            shapes: vec![Shape::new(square(16.0, 8.0, 8.0), Role::C1, Z_MACRO)],
        };
        let img = render_raster(&pattern).unwrap();
        let coyote = [0x81, 0x61, 0x3c];
        assert_eq!(img.get_pixel(18, 12).0, coyote);
        assert_eq!(img.get_pixel(1, 12).0, coyote);
        assert_eq!(img.get_pixel(10, 12).0, [0x4b, 0x53, 0x20]);
    }

    #[test]
    fn micro_paints_over_macro() {
        let pattern = Pattern {
            tile_px: 30,
            shapes: vec![
                Shape::new(square(2.0, 2.0, 20.0), Role::C1, Z_MACRO),
                Shape::new(square(8.0, 8.0, 6.0), Role::C4, Z_MICRO),
            ],
        };
        let img = render_raster(&pattern).unwrap();
        assert_eq!(img.get_pixel(11, 11).0, [0x7a, 0x8b, 0x7a]);
        assert_eq!(img.get_pixel(4, 4).0, [0x81, 0x61, 0x3c]);
    }

    #[test]
    fn ring_drops_repeats_and_closing_point() {
        let closed = Polygon::new(vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.2, 0.1],
        ]);
        assert_eq!(pixel_ring(&closed).len(), 3);
        assert!(pixel_ring(&Polygon::default()).is_empty());
    }

    #[test]
    fn collapsed_instances_still_paint() {
        let bg = [0x4b, 0x53, 0x20];
        let earth = [0x7c, 0x6d, 0x66];
        // Rounds to the single pixel (5, 5).
        let dot = Polygon::new(vec![
            vector![5.1, 5.1],
            vector![5.2, 5.2],
            vector![4.9, 5.3],
        ]);
        // Rounds to (2, 12) -> (8, 12) -> (2, 12): a horizontal segment.
        let sliver = Polygon::new(vec![
            vector![2.0, 12.0],
            vector![8.0, 12.0],
            vector![2.2, 12.1],
        ]);
        assert_eq!(pixel_ring(&dot).len(), 1);
        assert_eq!(pixel_ring(&sliver).len(), 2);

        let pattern = Pattern {
            tile_px: 20,
            shapes: vec![
                Shape::new(dot, Role::C2, Z_MICRO),
                Shape::new(sliver, Role::C2, Z_MICRO),
            ],
        };
        let img = render_raster(&pattern).unwrap();
        assert_eq!(img.get_pixel(5, 5).0, earth);
        assert_eq!(img.get_pixel(5, 12).0, earth);
        assert_eq!(img.get_pixel(5, 15).0, bg);
    }

    #[test]
    fn png_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        let pattern = Pattern {
            tile_px: 12,
            shapes: vec![Shape::new(square(2.0, 2.0, 5.0), Role::C2, Z_MICRO)],
        };
        write_png(&pattern, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (12, 12));
        assert_eq!(back.get_pixel(4, 4).0, [0x7c, 0x6d, 0x66]);
    }
}
