//! Hand-written SVG: one `<polygon>` per wrapped instance.

use crate::error::CamoError;
use crate::generate::Pattern;
use crate::geom::Polygon;
use crate::palette::{Rgb, BACKGROUND};
use crate::tile::wrapped_instances;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// SVG document for `pattern`; lines joined by `\n`, no trailing newline.
pub fn render_svg(pattern: &Pattern) -> Result<String, CamoError> {
    let w = pattern.tile_px;
    let bg = checked_hex(BACKGROUND.hex())?;

    let mut lines: Vec<String> = Vec::with_capacity(3 + 9 * pattern.shapes.len());
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{w}" viewBox="0 0 {w} {w}">"#
    ));
    lines.push(format!(
        r#"<rect x="0" y="0" width="{w}" height="{w}" fill="{bg}"/>"#
    ));
    for shape in &pattern.shapes {
        let fill = checked_hex(shape.role.hex())?;
        for poly in wrapped_instances(&shape.poly, w) {
            lines.push(format!(
                r#"<polygon points="{}" fill="{fill}" />"#,
                points_attr(&poly)
            ));
        }
    }
    lines.push("</svg>".to_string());
    Ok(lines.join("\n"))
}

/// Renders and writes `pattern` to `path`.
pub fn write_svg(pattern: &Pattern, path: impl AsRef<Path>) -> Result<(), CamoError> {
    let doc = render_svg(pattern)?;
    fs::write(path, doc)?;
    Ok(())
}

fn checked_hex(hex: &'static str) -> Result<&'static str, CamoError> {
    Rgb::from_hex(hex).map(|_| hex)
}

fn points_attr(poly: &Polygon) -> String {
    let mut s = String::with_capacity(poly.len() * 16);
    for (i, p) in poly.points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(s, "{:.2},{:.2}", p.x, p.y);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, CamoCfg};
    use crate::palette::Role;
    use crate::shape::{Shape, Z_MACRO};
    use nalgebra::vector;

    #[test]
    fn empty_pattern_is_background_only() {
        let pattern = Pattern {
            tile_px: 100,
            shapes: Vec::new(),
        };
        let doc = render_svg(&pattern).unwrap();
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(r#"width="100" height="100" viewBox="0 0 100 100""#));
        assert!(doc.contains(r##"<rect x="0" y="0" width="100" height="100" fill="#4B5320"/>"##));
        assert!(!doc.contains("<polygon"));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn each_shape_emits_nine_polygons() {
        let tri = Polygon::new(vec![vector![1.0, 2.0], vector![3.5, 2.0], vector![1.0, 4.25]]);
        let pattern = Pattern {
            tile_px: 10,
            shapes: vec![Shape::new(tri, Role::C1, Z_MACRO)],
        };
        let doc = render_svg(&pattern).unwrap();
        assert_eq!(doc.matches("<polygon").count(), 9);
        assert_eq!(doc.matches(r##"fill="#81613C""##).count(), 9);
        assert!(doc.contains(r##"<polygon points="1.00,2.00 3.50,2.00 1.00,4.25" fill="#81613C" />"##));
        assert!(doc.contains("-9.00,-8.00"));
        assert!(doc.contains("11.00,12.00"));
    }

    #[test]
    fn same_seed_same_bytes() {
        let cfg = CamoCfg {
            macro_count: 6,
            micro_count: 12,
            ..CamoCfg::default()
        };
        let a = render_svg(&generate(&cfg)).unwrap();
        let b = render_svg(&generate(&cfg)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.matches("<polygon").count(), 9 * 18);
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.svg");
        let pattern = Pattern {
            tile_px: 8,
            shapes: Vec::new(),
        };
        write_svg(&pattern, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, render_svg(&pattern).unwrap());
    }
}
