#![forbid(unsafe_code)]

//! Tooltip placement: choose a side of the trigger, keep the tooltip inside
//! its bounds, and write the result as `top`/`left` pixel styles.
//!
//! # Example
//!
//! ```
//! use perch_core::geometry::{Rect, Viewport};
//! use perch_dom::{Element, HeadlessElement, StyleProperty};
//! use perch_place::{Position, PositionRequest, position_tooltip};
//!
//! let trigger = HeadlessElement::new(Rect::new(100.0, 100.0, 100.0, 30.0));
//! let mut tooltip = HeadlessElement::new(Rect::new(0.0, 0.0, 50.0, 30.0));
//! let observer = tooltip.clone();
//!
//! let side = position_tooltip(
//!     PositionRequest::new(Viewport::new(1024.0, 768.0))
//!         .tooltip(&mut tooltip)
//!         .trigger(&trigger)
//!         .preferred_position(Position::Top)
//!         .auto_position(true),
//! );
//! assert_eq!(side, Position::Top);
//! assert_eq!(observer.style(StyleProperty::Top).as_deref(), Some("-38px"));
//! ```

pub mod apply;
pub mod auto;
pub mod config;
pub mod position;
pub mod positioner;
pub mod space;

pub use apply::{Placement, apply_tooltip_position, compute_placement};
pub use auto::determine_auto_position;
pub use config::PlacementConfig;
pub use position::{Axis, ParsePositionError, Position};
pub use positioner::{PositionRequest, containing_bounds, position_tooltip};
