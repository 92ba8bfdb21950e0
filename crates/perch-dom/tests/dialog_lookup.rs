//! Dialog lookup through a host-defined, index-based element handle.
//!
//! Hosts with retained trees usually hand out ids rather than shared
//! pointers; this exercises `Element` for such a handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use perch_core::geometry::Rect;
use perch_dom::{Element, StyleProperty, find_parent_dialog, is_dialog};

#[derive(Default)]
struct ArenaNode {
    parent: Option<usize>,
    role: Option<String>,
    classes: Vec<String>,
    styles: HashMap<StyleProperty, String>,
}

#[derive(Clone)]
struct NodeId {
    arena: Rc<RefCell<Vec<ArenaNode>>>,
    index: usize,
}

impl NodeId {
    fn push(arena: &Rc<RefCell<Vec<ArenaNode>>>, node: ArenaNode) -> Self {
        let mut nodes = arena.borrow_mut();
        nodes.push(node);
        Self {
            arena: Rc::clone(arena),
            index: nodes.len() - 1,
        }
    }
}

impl Element for NodeId {
    fn bounding_rect(&self) -> Rect {
        Rect::default()
    }

    fn style(&self, property: StyleProperty) -> Option<String> {
        self.arena.borrow()[self.index].styles.get(&property).cloned()
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.arena.borrow_mut()[self.index]
            .styles
            .insert(property, value.to_owned());
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.arena.borrow()[self.index].parent?;
        Some(Self {
            arena: Rc::clone(&self.arena),
            index: parent,
        })
    }

    fn attribute(&self, name: &str) -> Option<String> {
        if name == "role" {
            self.arena.borrow()[self.index].role.clone()
        } else {
            None
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.arena.borrow()[self.index]
            .classes
            .iter()
            .any(|c| c == class)
    }
}

fn arena() -> Rc<RefCell<Vec<ArenaNode>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn root_without_parent_has_no_dialog() {
    let arena = arena();
    let root = NodeId::push(&arena, ArenaNode::default());
    assert!(find_parent_dialog(&root).is_none());
}

#[test]
fn role_dialog_ancestor_several_levels_up() {
    let arena = arena();
    let dialog = NodeId::push(
        &arena,
        ArenaNode {
            role: Some("dialog".into()),
            ..ArenaNode::default()
        },
    );
    let body = NodeId::push(
        &arena,
        ArenaNode {
            parent: Some(dialog.index),
            ..ArenaNode::default()
        },
    );
    let button = NodeId::push(
        &arena,
        ArenaNode {
            parent: Some(body.index),
            ..ArenaNode::default()
        },
    );

    let found = find_parent_dialog(&button).expect("dialog ancestor");
    assert_eq!(found.index, dialog.index);
}

#[test]
fn modal_class_ancestor_without_role() {
    let arena = arena();
    let modal = NodeId::push(
        &arena,
        ArenaNode {
            classes: vec!["overlay".into(), "modal".into()],
            ..ArenaNode::default()
        },
    );
    let child = NodeId::push(
        &arena,
        ArenaNode {
            parent: Some(modal.index),
            ..ArenaNode::default()
        },
    );

    assert!(is_dialog(&modal));
    assert_eq!(find_parent_dialog(&child).map(|n| n.index), Some(modal.index));
}

#[test]
fn styles_written_through_handle_are_visible_in_arena() {
    let arena = arena();
    let mut node = NodeId::push(&arena, ArenaNode::default());
    node.set_style(StyleProperty::Left, "12px");
    assert_eq!(
        arena.borrow()[0].styles.get(&StyleProperty::Left).map(String::as_str),
        Some("12px")
    );
}
