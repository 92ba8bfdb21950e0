#![forbid(unsafe_code)]

//! Overflow adjustment and style application.

use perch_core::geometry::{Rect, Sides};
use perch_dom::{Element, PixelValue, StyleProperty};

use crate::config::PlacementConfig;
use crate::position::Position;
use crate::space::{Offset, candidate_offset};

/// Where a tooltip ended up, relative to its trigger's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub left: f64,
    pub top: f64,
}

impl Placement {
    /// The offset as pixel values, in `(left, top)` order.
    #[must_use]
    pub fn pixels(&self) -> (PixelValue, PixelValue) {
        (PixelValue(self.left), PixelValue(self.top))
    }

    /// Serialize to JSON (for diagnostics/evidence logs).
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"position":"{}","left":{},"top":{}}}"#,
            self.position.as_str(),
            self.left + 0.0,
            self.top + 0.0
        )
    }
}

/// Compute the adjusted offset for placing the tooltip on `position`.
///
/// The candidate offset is shifted back inside `bounds` (inset by the
/// configured margin) on each axis: first away from the far edge, then away
/// from the near edge. The offset itself is never clamped at zero, so it is
/// negative whenever the tooltip ends up left of or above the trigger's
/// origin.
#[must_use]
pub fn compute_placement(
    trigger: &Rect,
    tooltip: &Rect,
    position: Position,
    bounds: &Rect,
    config: &PlacementConfig,
) -> Placement {
    let Offset { left, top } = candidate_offset(trigger, tooltip, position, config);
    let area = bounds.inset(Sides::all(config.viewport_margin));

    let left = shift_inside(left, trigger.left, tooltip.width, area.left, area.right);
    let top = shift_inside(top, trigger.top, tooltip.height, area.top, area.bottom);

    Placement {
        position,
        left: finite_or_zero(left),
        top: finite_or_zero(top),
    }
}

/// Place the tooltip on `position` and write `top`/`left` to its style.
///
/// Both properties are always written as pixel strings. The returned
/// [`Placement`] mirrors what was written.
pub fn apply_tooltip_position<E: Element>(
    tooltip_element: &mut E,
    trigger: &Rect,
    tooltip: &Rect,
    position: Position,
    bounds: &Rect,
    config: &PlacementConfig,
) -> Placement {
    let placement = compute_placement(trigger, tooltip, position, bounds, config);
    let (left, top) = placement.pixels();
    tooltip_element.set_pixel_style(StyleProperty::Top, top);
    tooltip_element.set_pixel_style(StyleProperty::Left, left);
    perch_core::trace!(placement = %placement.to_json(), "tooltip style applied");
    placement
}

/// Shift a one-dimensional offset so `[origin + offset, origin + offset + extent]`
/// lies within `[min, max]` where possible. The near edge wins when the
/// extent is larger than the range.
fn shift_inside(offset: f64, origin: f64, extent: f64, min: f64, max: f64) -> f64 {
    let mut offset = offset;
    let overflow = origin + offset + extent - max;
    if overflow > 0.0 {
        perch_core::trace!(overflow, "shifting tooltip back from far edge");
        offset -= overflow;
    }
    let underflow = min - (origin + offset);
    if underflow > 0.0 {
        perch_core::trace!(underflow, "shifting tooltip back from near edge");
        offset += underflow;
    }
    offset
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        perch_core::warn!(value, "non-finite tooltip coordinate, writing 0px");
        0.0
    }
}
