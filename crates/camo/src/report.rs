//! Area summary per color role (diagnostic only).
//!
//! Ratios use summed shoelace areas, so overlapping shapes are counted twice;
//! the numbers are a sanity check against the target shares, not coverage.

use crate::palette::Role;
use crate::shape::Shape;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleArea {
    pub role: Role,
    pub hex: &'static str,
    /// Summed polygon area in px².
    pub area: f64,
    /// Share of the total area; 0 when the total is 0.
    pub ratio: f64,
    pub target: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaReport {
    pub total_area: f64,
    /// One row per role in `Role::REPORT_ORDER`.
    pub rows: Vec<RoleArea>,
}

impl AreaReport {
    pub fn from_shapes(shapes: &[Shape]) -> Self {
        let mut by_role = [0.0f64; 4];
        for s in shapes {
            by_role[role_index(s.role)] += s.area();
        }
        let total_area: f64 = by_role.iter().sum();
        let rows = Role::REPORT_ORDER
            .iter()
            .map(|&role| {
                let area = by_role[role_index(role)];
                RoleArea {
                    role,
                    hex: role.hex(),
                    area,
                    ratio: if total_area > 0.0 { area / total_area } else { 0.0 },
                    target: role.target_ratio(),
                }
            })
            .collect();
        Self { total_area, rows }
    }

    pub fn ratio(&self, role: Role) -> f64 {
        self.rows
            .iter()
            .find(|r| r.role == role)
            .map_or(0.0, |r| r.ratio)
    }

    /// Sum of all ratios: 1 for a non-empty shape list, 0 otherwise.
    pub fn total_ratio(&self) -> f64 {
        self.rows.iter().map(|r| r.ratio).sum()
    }
}

fn role_index(role: Role) -> usize {
    match role {
        Role::C1 => 0,
        Role::C2 => 1,
        Role::C3 => 2,
        Role::C4 => 3,
    }
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Area (approx, overlaps counted twice):")?;
        for r in &self.rows {
            writeln!(
                f,
                "  {} {} : {:.1}% (target {:.1}%)",
                r.role,
                r.hex,
                r.ratio * 100.0,
                r.target * 100.0
            )?;
        }
        Ok(())
    }
}
