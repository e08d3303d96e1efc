//! Error type shared by the palette parser and the output encoders.

use std::fmt;

#[derive(Debug)]
pub enum CamoError {
    /// Color string is not `#rrggbb`.
    InvalidColor { value: String },
    Io(std::io::Error),
    Image(image::ImageError),
}

impl CamoError {
    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}

impl fmt::Display for CamoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { value } => write!(f, "invalid color: {value:?}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Image(e) => write!(f, "image encoding error: {e}"),
        }
    }
}

impl std::error::Error for CamoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { .. } => None,
            Self::Io(e) => Some(e),
            Self::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CamoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for CamoError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
