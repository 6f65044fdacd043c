//! RcDom helpers
//!
//! Small queries over html5ever's reference-counted DOM. Every descent
//! uses an explicit stack; html5ever lowercases tag and attribute names.

use std::rc::Rc;

use markup5ever_rcdom::{Handle, NodeData};

/// Local tag name of an element
pub(crate) fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

#[inline]
pub(crate) fn is_tag(handle: &Handle, tag: &str) -> bool {
    tag_name(handle) == Some(tag)
}

/// Attribute value by (lowercase) name
pub(crate) fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Element children in document order
pub(crate) fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated text of all descendants
pub(crate) fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![handle.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    text
}

/// First descendant (document order, `root` excluded) matching `pred`.
/// Elements tagged `barrier` are neither matched nor entered.
pub(crate) fn find_first(root: &Handle, barrier: Option<&str>, pred: impl Fn(&Handle) -> bool) -> Option<Handle> {
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if barrier.is_some() && tag_name(&node) == barrier {
            continue;
        }
        if pred(&node) {
            return Some(node);
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

/// All descendants matching `pred`, in document order
pub(crate) fn find_all(root: &Handle, pred: impl Fn(&Handle) -> bool) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if pred(&node) {
            found.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    found
}

/// Parent element, if still alive
pub(crate) fn parent(handle: &Handle) -> Option<Handle> {
    // `parent` is a Cell, so the weak ref has to be taken out and put back
    let weak = handle.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    handle.parent.set(weak);
    parent
}

/// Element siblings following `handle`
pub(crate) fn following_siblings(handle: &Handle) -> Vec<Handle> {
    let Some(parent) = parent(handle) else {
        return Vec::new();
    };
    let siblings = element_children(&parent);
    match siblings.iter().position(|s| Rc::ptr_eq(s, handle)) {
        Some(index) => siblings[index + 1..].to_vec(),
        None => Vec::new(),
    }
}
