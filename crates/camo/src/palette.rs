//! Fixed four-color palette.
//!
//! The hex strings are a compatibility contract: outputs must use them verbatim.

use crate::error::CamoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color role of a shape. The palette is a lookup indexed by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Coyote: large masses only.
    C1,
    /// Earth: secondary micro color.
    C2,
    /// Olive: medium and large masses, also the background.
    C3,
    /// Verdigris: dominant micro color.
    C4,
}

/// Background fill of every output.
pub const BACKGROUND: Role = Role::C3;

impl Role {
    pub const ALL: [Role; 4] = [Role::C1, Role::C2, Role::C3, Role::C4];

    /// Row order of the area summary.
    pub const REPORT_ORDER: [Role; 4] = [Role::C1, Role::C3, Role::C2, Role::C4];

    pub const fn hex(self) -> &'static str {
        match self {
            Role::C1 => "#81613C",
            Role::C2 => "#7C6D66",
            Role::C3 => "#4B5320",
            Role::C4 => "#7A8B7A",
        }
    }

    /// Indicative area share; overlaps make the measured value approximate.
    pub const fn target_ratio(self) -> f64 {
        match self {
            Role::C1 => 0.32,
            Role::C2 => 0.22,
            Role::C3 => 0.28,
            Role::C4 => 0.18,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Role::C1 => "C1",
            Role::C2 => "C2",
            Role::C3 => "C3",
            Role::C4 => "C4",
        }
    }

    pub fn rgb(self) -> Result<Rgb, CamoError> {
        Rgb::from_hex(self.hex())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Parse `#rrggbb` (surrounding whitespace ignored, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, CamoError> {
        let h = s.trim();
        let digits = match h.strip_prefix('#') {
            Some(d) if h.len() == 7 && d.bytes().all(|b| b.is_ascii_hexdigit()) => d,
            _ => return Err(CamoError::invalid_color(s)),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| CamoError::invalid_color(s))
        };
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}
