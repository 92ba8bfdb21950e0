#![forbid(unsafe_code)]

//! Perch public facade crate.
//!
//! Re-exports the geometry, element and placement surface of the internal
//! crates and offers a prelude for day-to-day usage.

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use perch_core::geometry::{Rect, Sides, Size, Viewport};

// --- Element re-exports ----------------------------------------------------

pub use perch_dom::{
    Element, HeadlessElement, PixelParseError, PixelValue, StyleProperty, find_parent_dialog,
    is_dialog,
};

// --- Placement re-exports --------------------------------------------------

pub use perch_place::{
    Placement, PlacementConfig, ParsePositionError, Position, PositionRequest,
    apply_tooltip_position, compute_placement, containing_bounds, determine_auto_position,
    position_tooltip,
};

// --- Errors ---------------------------------------------------------------

/// Errors surfaced at Perch's parsing edges.
///
/// Placement itself never fails; these only arise when reading positions or
/// pixel values back from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string did not name a tooltip position.
    Position(ParsePositionError),
    /// A style value was not a finite pixel length.
    Pixel(PixelParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(err) => write!(f, "{err}"),
            Self::Pixel(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position(err) => Some(err),
            Self::Pixel(err) => Some(err),
        }
    }
}

impl From<ParsePositionError> for Error {
    fn from(err: ParsePositionError) -> Self {
        Self::Position(err)
    }
}

impl From<PixelParseError> for Error {
    fn from(err: PixelParseError) -> Self {
        Self::Pixel(err)
    }
}

/// Standard result type for Perch APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Read back the offset last written to a tooltip element.
///
/// Returns `Ok(None)` when either style is unset.
pub fn read_offset<E: Element>(tooltip: &E) -> Result<Option<(PixelValue, PixelValue)>> {
    let left = tooltip.pixel_style(StyleProperty::Left)?;
    let top = tooltip.pixel_style(StyleProperty::Top)?;
    Ok(left.zip(top))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Element, Error, HeadlessElement, PlacementConfig, Position, PositionRequest, Rect, Result,
        Viewport, find_parent_dialog, position_tooltip,
    };
}
