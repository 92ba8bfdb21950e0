#![forbid(unsafe_code)]

//! Top-level entry point: measure, choose, apply.

use perch_core::geometry::{Rect, Viewport};
use perch_dom::{Element, find_parent_dialog};

use crate::apply::apply_tooltip_position;
use crate::auto::determine_auto_position;
use crate::config::PlacementConfig;
use crate::position::Position;

/// Inputs for [`position_tooltip`].
///
/// Either element may be left unset; the request then resolves to the
/// preferred direction without touching any style.
#[derive(Debug)]
pub struct PositionRequest<'a, E> {
    tooltip: Option<&'a mut E>,
    trigger: Option<&'a E>,
    preferred_position: Option<Position>,
    auto_position: bool,
    contain_in_dialog: bool,
    viewport: Viewport,
    config: PlacementConfig,
}

impl<'a, E: Element> PositionRequest<'a, E> {
    /// Create a request against the given viewport.
    ///
    /// The configuration starts from [`PlacementConfig::from_env`]; use
    /// [`PositionRequest::config`] to pin it instead.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            tooltip: None,
            trigger: None,
            preferred_position: None,
            auto_position: false,
            contain_in_dialog: false,
            viewport,
            config: PlacementConfig::from_env(),
        }
    }

    /// Element receiving the `top`/`left` styles.
    #[must_use]
    pub fn tooltip(mut self, tooltip: &'a mut E) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Element the tooltip is anchored to.
    #[must_use]
    pub fn trigger(mut self, trigger: &'a E) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Preferred side. Falls back to the configured default when unset.
    #[must_use]
    pub fn preferred_position(mut self, position: Position) -> Self {
        self.preferred_position = Some(position);
        self
    }

    /// Let the positioner move the tooltip to a side with more room.
    #[must_use]
    pub fn auto_position(mut self, auto: bool) -> Self {
        self.auto_position = auto;
        self
    }

    /// Use the trigger's dialog ancestor, if any, as the containing bounds.
    #[must_use]
    pub fn contain_in_dialog(mut self, contain: bool) -> Self {
        self.contain_in_dialog = contain;
        self
    }

    #[must_use]
    pub fn config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    fn preferred(&self) -> Position {
        self.preferred_position
            .unwrap_or(self.config.default_position)
    }
}

/// Rectangle used for space and overflow checks.
///
/// With `contain_in_dialog`, the nearest dialog ancestor of the trigger
/// bounds the tooltip; otherwise, or when there is no such ancestor, the
/// viewport does.
#[must_use]
pub fn containing_bounds<E: Element>(
    trigger: &E,
    viewport: Viewport,
    contain_in_dialog: bool,
) -> Rect {
    if contain_in_dialog && let Some(dialog) = find_parent_dialog(trigger) {
        perch_core::debug!("containing tooltip within dialog ancestor");
        return dialog.bounding_rect();
    }
    viewport.bounds()
}

/// Position a tooltip next to its trigger and return the side used.
///
/// - Missing tooltip or trigger: returns the preferred side, no mutation.
/// - `auto_position` off: applies and returns the preferred side.
/// - `auto_position` on: chooses via [`determine_auto_position`], applies
///   and returns the choice.
///
/// The preferred side defaults to [`PlacementConfig::default_position`]
/// (right unless configured otherwise).
pub fn position_tooltip<E: Element>(request: PositionRequest<'_, E>) -> Position {
    let preferred = request.preferred();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "tooltip_position",
        preferred = %preferred,
        auto = request.auto_position,
        contain_in_dialog = request.contain_in_dialog,
        viewport_w = request.viewport.width(),
        viewport_h = request.viewport.height(),
        config = %request.config.to_json()
    )
    .entered();

    let PositionRequest {
        tooltip,
        trigger,
        auto_position,
        contain_in_dialog,
        viewport,
        config,
        ..
    } = request;

    let (Some(tooltip), Some(trigger)) = (tooltip, trigger) else {
        perch_core::debug!("tooltip or trigger missing, nothing to position");
        return preferred;
    };

    let trigger_rect = trigger.bounding_rect();
    let tooltip_rect = tooltip.bounding_rect();
    if !(trigger_rect.is_finite() && tooltip_rect.is_finite()) {
        perch_core::warn!("non-finite bounding rect measured");
    }
    let bounds = containing_bounds(trigger, viewport, contain_in_dialog);

    let position = if auto_position {
        determine_auto_position(&trigger_rect, &tooltip_rect, preferred, &bounds, &config)
    } else {
        preferred
    };

    apply_tooltip_position(tooltip, &trigger_rect, &tooltip_rect, position, &bounds, &config);
    position
}
