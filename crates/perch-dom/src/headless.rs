#![forbid(unsafe_code)]

//! In-memory element tree.
//!
//! [`HeadlessElement`] is a reference-counted handle to a node holding a
//! fixed bounding rect, attributes, a class list, inline styles and a link
//! to its parent. Clones share the node, so a style written through one
//! handle is visible through all of them.
//!
//! Children hold their parent; parents do not track children. Re-parenting
//! that would make a node its own ancestor is refused, so parent chains
//! always end at a root.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use perch_core::geometry::Rect;

use crate::element::Element;
use crate::style::StyleProperty;

#[derive(Default)]
struct Node {
    rect: Cell<Rect>,
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    styles: RefCell<BTreeMap<StyleProperty, String>>,
    parent: RefCell<Option<HeadlessElement>>,
}

/// Shared handle to an in-memory element.
#[derive(Clone, Default)]
pub struct HeadlessElement {
    node: Rc<Node>,
}

impl HeadlessElement {
    /// Create a detached element with the given bounding rect.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let element = Self::default();
        element.node.rect.set(rect);
        element
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node
            .attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        self
    }

    /// Add a class to the class list.
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        {
            let mut classes = self.node.classes.borrow_mut();
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        self
    }

    /// Attach this element under `parent`.
    ///
    /// The link is skipped if `parent` is this element or one of its
    /// descendants.
    #[must_use]
    pub fn with_parent(self, parent: &HeadlessElement) -> Self {
        self.set_parent(Some(parent));
        self
    }

    /// Re-parent or detach this element.
    ///
    /// Returns `false` and leaves the current parent in place when `parent`
    /// is this element or one of its descendants.
    pub fn set_parent(&self, parent: Option<&HeadlessElement>) -> bool {
        if let Some(parent) = parent
            && parent.is_self_or_descendant_of(self)
        {
            perch_core::warn!("refusing re-parent that would form a cycle");
            return false;
        }
        *self.node.parent.borrow_mut() = parent.cloned();
        true
    }

    fn is_self_or_descendant_of(&self, ancestor: &HeadlessElement) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.ptr_eq(ancestor) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Whether any inline style has been written.
    #[must_use]
    pub fn has_styles(&self) -> bool {
        !self.node.styles.borrow().is_empty()
    }

    /// Whether both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &HeadlessElement) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Element for HeadlessElement {
    fn bounding_rect(&self) -> Rect {
        self.node.rect.get()
    }

    fn style(&self, property: StyleProperty) -> Option<String> {
        self.node.styles.borrow().get(&property).cloned()
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.node
            .styles
            .borrow_mut()
            .insert(property, value.to_owned());
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent.borrow().clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node.attributes.borrow().get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.classes.borrow().iter().any(|c| c == class)
    }
}

impl fmt::Debug for HeadlessElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessElement")
            .field("rect", &self.node.rect.get())
            .field("attributes", &self.node.attributes.borrow())
            .field("classes", &self.node.classes.borrow())
            .field("styles", &self.node.styles.borrow())
            .field("has_parent", &self.node.parent.borrow().is_some())
            .finish()
    }
}
