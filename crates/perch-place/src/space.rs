#![forbid(unsafe_code)]

//! Available space and candidate offsets per direction.
//!
//! Offsets are relative to the trigger's top-left corner: the tooltip is
//! absolutely positioned inside the trigger's positioning context, so
//! `left: 0px; top: 0px` puts it exactly over the trigger's origin.

use perch_core::geometry::{Rect, Sides};

use crate::config::PlacementConfig;
use crate::position::{Axis, Position};

/// Tooltip offset relative to the trigger's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    #[inline]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Distance from each trigger edge to the matching edge of `bounds`.
#[must_use]
pub fn raw_space(trigger: &Rect, bounds: &Rect) -> Sides {
    Sides::new(
        trigger.top - bounds.top,
        bounds.right - trigger.right,
        bounds.bottom - trigger.bottom,
        trigger.left - bounds.left,
    )
}

/// Room a tooltip may occupy on each side of the trigger, after the gap and
/// the bounds margin are taken out. May be negative.
#[must_use]
pub fn available_space(trigger: &Rect, bounds: &Rect, config: &PlacementConfig) -> Sides {
    raw_space(trigger, bounds).shrink(config.gap + config.viewport_margin)
}

/// Pick the value for `position` out of a per-side measurement.
#[inline]
#[must_use]
pub fn side(sides: &Sides, position: Position) -> f64 {
    match position {
        Position::Left => sides.left,
        Position::Right => sides.right,
        Position::Top => sides.top,
        Position::Bottom => sides.bottom,
    }
}

/// Tooltip extent that must fit in the direction: width for left/right,
/// height for top/bottom.
#[inline]
#[must_use]
pub fn required_extent(tooltip: &Rect, position: Position) -> f64 {
    match position.axis() {
        Axis::Horizontal => tooltip.width,
        Axis::Vertical => tooltip.height,
    }
}

/// Whether the tooltip fits on the `position` side.
#[must_use]
pub fn fits(space: &Sides, tooltip: &Rect, position: Position) -> bool {
    required_extent(tooltip, position) <= side(space, position)
}

/// Room left over on the `position` side once the tooltip is placed there.
#[must_use]
pub fn slack(space: &Sides, tooltip: &Rect, position: Position) -> f64 {
    side(space, position) - required_extent(tooltip, position)
}

/// Unadjusted offset placing the tooltip next to the trigger edge, centred
/// on the cross axis.
#[must_use]
pub fn candidate_offset(
    trigger: &Rect,
    tooltip: &Rect,
    position: Position,
    config: &PlacementConfig,
) -> Offset {
    let center_top = (trigger.height - tooltip.height) / 2.0;
    let center_left = (trigger.width - tooltip.width) / 2.0;
    match position {
        Position::Right => Offset::new(trigger.width + config.gap, center_top),
        Position::Left => Offset::new(-(tooltip.width + config.gap), center_top),
        Position::Top => Offset::new(center_left, -(tooltip.height + config.gap)),
        Position::Bottom => Offset::new(center_left, trigger.height + config.gap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::geometry::Viewport;

    fn trigger() -> Rect {
        Rect::new(100.0, 100.0, 100.0, 30.0)
    }

    fn tooltip() -> Rect {
        Rect::new(100.0, 100.0, 50.0, 30.0)
    }

    fn bounds() -> Rect {
        Viewport::new(1024.0, 768.0).bounds()
    }

    #[test]
    fn raw_space_measures_each_side() {
        let raw = raw_space(&trigger(), &bounds());
        assert_eq!(raw, Sides::new(100.0, 824.0, 638.0, 100.0));
    }

    #[test]
    fn available_space_removes_gap_and_margin() {
        let space = available_space(&trigger(), &bounds(), &PlacementConfig::default());
        assert_eq!(space, Sides::new(84.0, 808.0, 622.0, 84.0));
    }

    #[test]
    fn available_space_can_be_negative() {
        let pinned = Rect::from_edges(0.0, 0.0, 10.0, 10.0);
        let space = available_space(&pinned, &bounds(), &PlacementConfig::default());
        assert_eq!(space.left, -16.0);
        assert_eq!(space.top, -16.0);
    }

    #[test]
    fn required_extent_follows_axis() {
        assert_eq!(required_extent(&tooltip(), Position::Left), 50.0);
        assert_eq!(required_extent(&tooltip(), Position::Bottom), 30.0);
    }

    #[test]
    fn fits_and_slack() {
        let space = available_space(&trigger(), &bounds(), &PlacementConfig::default());
        assert!(fits(&space, &tooltip(), Position::Right));
        assert_eq!(slack(&space, &tooltip(), Position::Top), 54.0);
        let wide = Rect::new(0.0, 0.0, 900.0, 30.0);
        assert!(!fits(&space, &wide, Position::Right));
    }

    #[test]
    fn candidate_offsets() {
        let config = PlacementConfig::default();
        let t = trigger();
        let p = tooltip();
        assert_eq!(candidate_offset(&t, &p, Position::Right, &config), Offset::new(108.0, 0.0));
        assert_eq!(candidate_offset(&t, &p, Position::Left, &config), Offset::new(-58.0, 0.0));
        assert_eq!(candidate_offset(&t, &p, Position::Top, &config), Offset::new(25.0, -38.0));
        assert_eq!(candidate_offset(&t, &p, Position::Bottom, &config), Offset::new(25.0, 38.0));
    }
}
