// SPDX-License-Identifier: GPL-3.0-only

//! Headless element tree that receives the renderer's visual side effects.
//!
//! The tree mirrors the handful of DOM features the keyboard needs: text,
//! a class list, a transform, a display flag and ordered children. Handles
//! are cheap to clone and compare by identity, so timed effects can capture
//! the exact element they were applied to.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::app_settings;

/// Kind of visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// Plain container.
    Container,
    /// A pressable key.
    Button,
    /// Toast message box.
    Toast,
}

#[derive(Debug)]
struct Element {
    kind: ElementKind,
    id: Option<String>,
    text: String,
    classes: Vec<String>,
    transform: Option<String>,
    displayed: bool,
    children: Vec<ElementHandle>,
}

/// Shared handle to an element of the surface tree.
#[derive(Debug, Clone)]
pub struct ElementHandle(Rc<RefCell<Element>>);

impl ElementHandle {
    /// Creates a detached element.
    pub fn new(kind: ElementKind) -> Self {
        Self(Rc::new(RefCell::new(Element {
            kind,
            id: None,
            text: String::new(),
            classes: Vec::new(),
            transform: None,
            displayed: true,
            children: Vec::new(),
        })))
    }

    /// Creates a detached element carrying an id.
    pub fn with_id(kind: ElementKind, id: impl Into<String>) -> Self {
        let handle = Self::new(kind);
        handle.0.borrow_mut().id = Some(id.into());
        handle
    }

    pub fn kind(&self) -> ElementKind {
        self.0.borrow().kind
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().text = text.into();
    }

    /// Adds `class` unless already present.
    pub fn add_class(&self, class: &str) {
        let mut element = self.0.borrow_mut();
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
    }

    /// Removes `class`; removing an absent class does nothing.
    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Current class list in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn transform(&self) -> Option<String> {
        self.0.borrow().transform.clone()
    }

    pub fn set_transform(&self, transform: impl Into<String>) {
        self.0.borrow_mut().transform = Some(transform.into());
    }

    pub fn is_displayed(&self) -> bool {
        self.0.borrow().displayed
    }

    pub fn set_displayed(&self, displayed: bool) {
        self.0.borrow_mut().displayed = displayed;
    }

    pub fn append_child(&self, child: ElementHandle) {
        self.0.borrow_mut().children.push(child);
    }

    /// Detaches and drops every child.
    pub fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    /// Child at `index`, or `None` when out of bounds.
    pub fn child(&self, index: usize) -> Option<ElementHandle> {
        self.0.borrow().children.get(index).cloned()
    }

    pub fn children(&self) -> Vec<ElementHandle> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Returns `true` if both handles point at the same element.
    pub fn ptr_eq(&self, other: &ElementHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Captures the element and its subtree.
    pub fn snapshot(&self) -> ElementSnapshot {
        let element = self.0.borrow();
        ElementSnapshot {
            kind: element.kind,
            id: element.id.clone(),
            text: element.text.clone(),
            classes: element.classes.clone(),
            transform: element.transform.clone(),
            displayed: element.displayed,
            children: element.children.iter().map(ElementHandle::snapshot).collect(),
        }
    }
}

/// Serializable copy of an element subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    pub displayed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

// ============================================================================
// Surface
// ============================================================================

/// The mount points the keyboard renders into.
///
/// Each mount is optional; operations against a missing mount do nothing.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Container holding both key groups; toggled by keyboard mode.
    pub main: Option<ElementHandle>,
    /// Parent of the left ring's keys.
    pub keyboard_left: Option<ElementHandle>,
    /// Parent of the right ring's keys.
    pub keyboard_right: Option<ElementHandle>,
    /// Toast message box.
    pub toast: Option<ElementHandle>,
}

impl Surface {
    /// Builds the standard tree: `main` holding both groups, plus the toast.
    pub fn new() -> Self {
        let main = ElementHandle::with_id(ElementKind::Container, app_settings::MAIN_ID);
        let left = ElementHandle::with_id(ElementKind::Container, app_settings::KEYBOARD_LEFT_ID);
        let right = ElementHandle::with_id(ElementKind::Container, app_settings::KEYBOARD_RIGHT_ID);
        main.append_child(left.clone());
        main.append_child(right.clone());

        Self {
            main: Some(main),
            keyboard_left: Some(left),
            keyboard_right: Some(right),
            toast: Some(ElementHandle::with_id(ElementKind::Toast, app_settings::TOAST_ID)),
        }
    }

    /// A surface with no mount points at all.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Captures the keyboard container and the toast.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            main: self.main.as_ref().map(ElementHandle::snapshot),
            toast: self.toast.as_ref().map(ElementHandle::snapshot),
        }
    }
}

/// Serializable copy of the whole surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceSnapshot {
    pub main: Option<ElementSnapshot>,
    pub toast: Option<ElementSnapshot>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_add_is_idempotent() {
        let key = ElementHandle::new(ElementKind::Button);
        key.add_class("focus");
        key.add_class("focus");
        key.add_class("pressed");

        assert_eq!(key.classes(), vec!["focus", "pressed"]);

        key.remove_class("focus");
        key.remove_class("focus");
        assert!(!key.has_class("focus"));
        assert!(key.has_class("pressed"));
    }

    #[test]
    fn test_handles_compare_by_identity() {
        let a = ElementHandle::new(ElementKind::Button);
        let b = ElementHandle::new(ElementKind::Button);

        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_standard_surface_shape() {
        let surface = Surface::new();
        let main = surface.main.as_ref().unwrap();

        assert_eq!(main.child_count(), 2);
        assert!(main.child(0).unwrap().ptr_eq(surface.keyboard_left.as_ref().unwrap()));
        assert!(main.child(1).unwrap().ptr_eq(surface.keyboard_right.as_ref().unwrap()));
        assert!(main.child(2).is_none());
        assert_eq!(surface.toast.as_ref().unwrap().id().as_deref(), Some("toast"));
    }

    #[test]
    fn test_snapshot_serializes_tree() {
        let surface = Surface::new();
        let key = ElementHandle::new(ElementKind::Button);
        key.set_text("A");
        key.add_class("focus");
        surface.keyboard_left.as_ref().unwrap().append_child(key);

        let json = serde_json::to_value(surface.snapshot()).unwrap();
        let left = &json["main"]["children"][0];
        assert_eq!(left["id"], "keyboard-left");
        assert_eq!(left["children"][0]["text"], "A");
        assert_eq!(left["children"][0]["classes"][0], "focus");
        assert_eq!(json["toast"]["kind"], "toast");
    }

    #[test]
    fn test_detached_surface_snapshot_is_empty() {
        let snapshot = Surface::detached().snapshot();
        assert!(snapshot.main.is_none());
        assert!(snapshot.toast.is_none());
    }
}
