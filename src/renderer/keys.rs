// SPDX-License-Identifier: GPL-3.0-only

//! Materializes a keyboard variant into key elements.

use crate::layout::{Group, KeyboardVariant};
use crate::renderer::geometry::layout_ring;
use crate::renderer::surface::{ElementHandle, ElementKind, Surface};

/// Ordered key handles for both groups of the rendered variant.
///
/// Focus and press feedback address keys through this view instead of
/// walking the element tree.
#[derive(Debug, Clone, Default)]
pub struct RenderedKeys {
    left: Vec<ElementHandle>,
    right: Vec<ElementHandle>,
}

impl RenderedKeys {
    /// Key at `index` in `group`, or `None` when out of bounds.
    pub fn get(&self, group: Group, index: usize) -> Option<&ElementHandle> {
        self.group(group).get(index)
    }

    /// All keys of `group` in angular order.
    pub fn group(&self, group: Group) -> &[ElementHandle] {
        match group {
            Group::Left => &self.left,
            Group::Right => &self.right,
        }
    }

    /// Total number of keys across both groups.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Renders variants into the left and right mount points.
#[derive(Debug, Clone)]
pub struct Renderer {
    left: Option<ElementHandle>,
    right: Option<ElementHandle>,
    radius: f64,
}

impl Renderer {
    pub fn new(surface: &Surface, radius: f64) -> Self {
        Self {
            left: surface.keyboard_left.clone(),
            right: surface.keyboard_right.clone(),
            radius,
        }
    }

    /// Replaces both groups' keys with freshly created ones for `variant`.
    ///
    /// Previous keys are discarded, never reused. Returns an empty view and
    /// leaves the tree alone if either mount point is missing.
    pub fn render(&self, variant: &KeyboardVariant) -> RenderedKeys {
        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            tracing::debug!("Keyboard mount points missing, skipping render");
            return RenderedKeys::default();
        };
        left.clear_children();
        right.clear_children();

        let rendered = RenderedKeys {
            left: self.render_group(left, variant.labels(Group::Left)),
            right: self.render_group(right, variant.labels(Group::Right)),
        };
        tracing::debug!(
            "Rendered {} left and {} right keys",
            rendered.left.len(),
            rendered.right.len()
        );
        rendered
    }

    fn render_group(&self, parent: &ElementHandle, labels: &[String]) -> Vec<ElementHandle> {
        layout_ring(labels, self.radius)
            .into_iter()
            .map(|placement| {
                let key = ElementHandle::new(ElementKind::Button);
                key.set_text(placement.label.as_str());
                key.set_transform(placement.transform());
                parent.append_child(key.clone());
                key
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
