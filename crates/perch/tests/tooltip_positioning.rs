//! End-to-end tooltip positioning scenarios through the facade.

use perch::prelude::*;
use perch::{
    Element, StyleProperty, apply_tooltip_position, determine_auto_position, read_offset,
};

fn create_rect(overrides: impl FnOnce(&mut Rect)) -> Rect {
    let mut rect = Rect::from_edges(100.0, 100.0, 200.0, 130.0);
    overrides(&mut rect);
    rect
}

fn viewport() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

fn config() -> PlacementConfig {
    PlacementConfig::default()
}

#[test]
fn apply_sets_pixel_styles_for_each_position() {
    for position in Position::ALL {
        let mut tooltip = HeadlessElement::default();
        apply_tooltip_position(
            &mut tooltip,
            &create_rect(|_| {}),
            &create_rect(|r| {
                r.width = 50.0;
                r.height = 30.0;
            }),
            position,
            &viewport().bounds(),
            &config(),
        );
        let top = tooltip.style(StyleProperty::Top).expect("top");
        let left = tooltip.style(StyleProperty::Left).expect("left");
        assert!(top.ends_with("px"), "{position}: {top}");
        assert!(left.ends_with("px"), "{position}: {left}");
    }
}

#[test]
fn auto_falls_back_for_corner_trigger_and_huge_tooltip() {
    let small_trigger = create_rect(|r| {
        r.left = 0.0;
        r.top = 0.0;
        r.right = 10.0;
        r.bottom = 10.0;
    });
    let large_tooltip = create_rect(|r| {
        r.width = 2000.0;
        r.height = 2000.0;
    });
    let pos = determine_auto_position(
        &small_trigger,
        &large_tooltip,
        Position::Left,
        &viewport().bounds(),
        &config(),
    );
    assert!(Position::ALL.contains(&pos));
}

#[test]
fn auto_uses_preferred_when_space_available() {
    let result = determine_auto_position(
        &create_rect(|_| {}),
        &create_rect(|r| r.width = 50.0),
        Position::Right,
        &viewport().bounds(),
        &config(),
    );
    assert_eq!(result, Position::Right);
}

#[test]
fn auto_avoids_preferred_without_space() {
    let trigger = create_rect(|r| {
        r.left = 0.0;
        r.right = 10.0;
    });
    let tooltip = create_rect(|r| r.width = 1000.0);
    let result = determine_auto_position(
        &trigger,
        &tooltip,
        Position::Right,
        &viewport().bounds(),
        &config(),
    );
    assert_ne!(result, Position::Right);
}

#[test]
fn apply_adjusts_for_overflow_to_the_right() {
    let trigger = create_rect(|r| {
        r.left = 950.0;
        r.width = 100.0;
    });
    let tooltip_rect = create_rect(|r| r.width = 200.0);
    let mut tooltip = HeadlessElement::default();
    apply_tooltip_position(
        &mut tooltip,
        &trigger,
        &tooltip_rect,
        Position::Right,
        &viewport().bounds(),
        &config(),
    );
    let (left, _) = read_offset(&tooltip).expect("valid").expect("set");
    assert!(left.get() < 0.0, "left={left}");
}

#[test]
fn position_tooltip_defaults_to_right_without_preference() {
    let trigger = HeadlessElement::new(create_rect(|_| {}));
    let mut tooltip = HeadlessElement::new(create_rect(|r| r.width = 50.0));
    let result = position_tooltip(
        PositionRequest::new(viewport())
            .tooltip(&mut tooltip)
            .trigger(&trigger)
            .auto_position(false),
    );
    assert_eq!(result, Position::Right);
}

#[test]
fn position_tooltip_auto_returns_a_direction() {
    let trigger = HeadlessElement::new(create_rect(|_| {}));
    let mut tooltip = HeadlessElement::new(create_rect(|r| r.width = 50.0));
    let result = position_tooltip(
        PositionRequest::new(viewport())
            .tooltip(&mut tooltip)
            .trigger(&trigger)
            .auto_position(true)
            .preferred_position(Position::Top),
    );
    assert!(Position::ALL.contains(&result));
}

#[test]
fn position_tooltip_without_elements_is_a_no_op() {
    let result =
        position_tooltip(PositionRequest::<HeadlessElement>::new(viewport()).preferred_position(Position::Top));
    assert_eq!(result, Position::Top);
}

#[test]
fn find_parent_dialog_none_without_ancestor() {
    let el = HeadlessElement::default();
    assert!(find_parent_dialog(&el).is_none());
}

#[test]
fn find_parent_dialog_by_role() {
    let dialog = HeadlessElement::default().with_attribute("role", "dialog");
    let el = HeadlessElement::default().with_parent(&dialog);
    assert!(find_parent_dialog(&el).expect("dialog").ptr_eq(&dialog));
}

#[test]
fn find_parent_dialog_by_modal_class() {
    let modal = HeadlessElement::default().with_class("modal");
    let el = HeadlessElement::default().with_parent(&modal);
    assert!(find_parent_dialog(&el).expect("modal").ptr_eq(&modal));
}
