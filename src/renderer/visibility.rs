// SPDX-License-Identifier: GPL-3.0-only

//! Shows or hides the whole keyboard surface.

use crate::renderer::surface::ElementHandle;

/// Toggles display of the keyboard container.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    container: Option<ElementHandle>,
}

impl VisibilityController {
    pub fn new(container: Option<ElementHandle>) -> Self {
        Self { container }
    }

    /// Shows the surface when `active`, hides it otherwise.
    pub fn set_active(&self, active: bool) {
        match &self.container {
            Some(container) => container.set_displayed(active),
            None => tracing::debug!("Keyboard container missing, ignoring mode change"),
        }
    }

    /// Returns `true` when the container exists and is displayed.
    pub fn is_active(&self) -> bool {
        self.container.as_ref().is_some_and(ElementHandle::is_displayed)
    }
}
