#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS pixels in viewport coordinates (origin at the top-left
//! of the visible window, y growing downwards). Coordinates are `f64`
//! because bounding-rect queries report sub-pixel positions.

/// A bounding rectangle as reported by an element's rect query.
///
/// The six edges and extents are stored as a snapshot, not derived from one
/// another, so a rect handed in by a host is used exactly as reported.
/// Use [`Rect::new`] or [`Rect::from_edges`] to build a consistent one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether every field is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.width,
            self.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Shrink the rectangle by the given margin on each side.
    ///
    /// Width and height never go below zero.
    pub fn inset(&self, margin: Sides) -> Rect {
        let left = self.left + margin.left;
        let top = self.top + margin.top;
        let right = (self.right - margin.right).max(left);
        let bottom = (self.bottom - margin.bottom).max(top);
        Rect::from_edges(left, top, right, bottom)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Dimensions of the visible window.
///
/// Hosts read this at call time and pass it in; nothing in Perch reads a
/// global window size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport(Size);

impl Viewport {
    /// Create a viewport of the given size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self(Size::new(width, height))
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.0.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.0.height
    }

    #[inline]
    pub const fn size(&self) -> Size {
        self.0
    }

    /// The viewport as a rectangle anchored at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.0)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self(size)
    }
}

/// One value per side, for margins and per-direction measurements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create sides with specific values (CSS order: top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Subtract `amount` from every side.
    #[must_use]
    pub fn shrink(&self, amount: f64) -> Self {
        Self {
            top: self.top - amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
            left: self.left - amount,
        }
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}
