#![forbid(unsafe_code)]

//! Automatic direction selection.

use perch_core::geometry::Rect;

use crate::config::PlacementConfig;
use crate::position::Position;
use crate::space::{available_space, fits, slack};

/// Choose the side of the trigger to place the tooltip on.
///
/// The preferred side is kept whenever the tooltip fits there. Otherwise the
/// side with the most room left over after placement wins, with ties going
/// to the earliest entry of [`Position::ALL`]. NaN measurements never win,
/// so the result is always a valid direction even for degenerate rects.
#[must_use]
pub fn determine_auto_position(
    trigger: &Rect,
    tooltip: &Rect,
    preferred: Position,
    bounds: &Rect,
    config: &PlacementConfig,
) -> Position {
    let space = available_space(trigger, bounds, config);
    if fits(&space, tooltip, preferred) {
        perch_core::trace!(position = %preferred, "preferred position fits");
        return preferred;
    }

    let mut best = Position::ALL[0];
    let mut best_slack = f64::NEG_INFINITY;
    for position in Position::ALL {
        let room = slack(&space, tooltip, position);
        if room > best_slack {
            best = position;
            best_slack = room;
        }
    }

    perch_core::debug!(
        preferred = %preferred,
        chosen = %best,
        slack = best_slack,
        "preferred position does not fit, falling back"
    );
    best
}
