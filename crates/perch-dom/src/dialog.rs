#![forbid(unsafe_code)]

//! Dialog ancestor lookup.

use crate::element::Element;

/// ARIA role marking a dialog container.
const DIALOG_ROLE: &str = "dialog";
/// Class name conventionally used by modal containers.
const MODAL_CLASS: &str = "modal";

/// Whether `element` is a dialog container: `role="dialog"` or class `modal`.
pub fn is_dialog<E: Element>(element: &E) -> bool {
    element.attribute("role").as_deref() == Some(DIALOG_ROLE) || element.has_class(MODAL_CLASS)
}

/// Find the nearest ancestor of `element` that is a dialog container.
///
/// The element itself is not considered, only its ancestors. Returns `None`
/// when the parent chain ends without a match.
pub fn find_parent_dialog<E: Element>(element: &E) -> Option<E> {
    let mut current = element.parent();
    while let Some(candidate) = current {
        if is_dialog(&candidate) {
            perch_core::trace!("dialog ancestor found");
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}
