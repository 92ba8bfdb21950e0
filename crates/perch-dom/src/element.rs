#![forbid(unsafe_code)]

//! The element capability trait.

use perch_core::geometry::Rect;

use crate::style::{PixelParseError, PixelValue, StyleProperty};

/// A handle to a UI node that can be measured, styled and walked upwards.
///
/// Implementations are expected to be cheap handles (reference counted or
/// index based), since [`Element::parent`] returns a new handle by value.
pub trait Element: Sized {
    /// Current bounding rectangle in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Raw inline style value, if set.
    fn style(&self, property: StyleProperty) -> Option<String>;

    /// Overwrite an inline style value.
    fn set_style(&mut self, property: StyleProperty, value: &str);

    /// The parent element, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Attribute value, or `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether the class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Read a positional style as a pixel length.
    ///
    /// Returns `Ok(None)` when the property is unset.
    fn pixel_style(&self, property: StyleProperty) -> Result<Option<PixelValue>, PixelParseError> {
        self.style(property).map(|raw| raw.parse()).transpose()
    }

    /// Write a positional style as a pixel length.
    fn set_pixel_style(&mut self, property: StyleProperty, value: PixelValue) {
        self.set_style(property, &value.to_string());
    }
}
