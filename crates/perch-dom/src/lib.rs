#![forbid(unsafe_code)]

//! Element access for tooltip placement.
//!
//! Placement logic never touches a concrete UI toolkit. Hosts implement
//! [`Element`] for their node handle (a `web_sys::HtmlElement`, a retained
//! widget id, ...) and Perch reads rects, writes `top`/`left` and walks the
//! parent chain through it. [`HeadlessElement`] is an in-memory
//! implementation for tests and non-browser hosts.

pub mod dialog;
pub mod element;
pub mod headless;
pub mod style;

pub use dialog::{find_parent_dialog, is_dialog};
pub use element::Element;
pub use headless::HeadlessElement;
pub use style::{PixelParseError, PixelValue, StyleProperty};
