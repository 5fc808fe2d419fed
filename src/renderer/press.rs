// SPDX-License-Identifier: GPL-3.0-only

//! Transient "pressed" flash on the focused key.

use std::time::Duration;

use crate::app_settings::PRESSED_CLASS;
use crate::renderer::surface::ElementHandle;
use crate::scheduler::Scheduler;

/// Flashes a key for a fixed duration on every press.
#[derive(Debug, Clone, Copy)]
pub struct PressFeedback {
    duration: Duration,
}

impl PressFeedback {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Marks `target` as pressed and schedules removal of the marker from
    /// that same element.
    ///
    /// Each press schedules its own removal; later presses neither extend nor
    /// cancel earlier ones. Without a target the press is ignored.
    pub fn flash(&self, target: Option<ElementHandle>, scheduler: &dyn Scheduler) {
        let Some(key) = target else {
            tracing::debug!("Key press with no focused key");
            return;
        };
        key.add_class(PRESSED_CLASS);
        scheduler.schedule(self.duration, Box::new(move || key.remove_class(PRESSED_CLASS)));
    }
}

// ============================================================================
// Tests
// ============================================================================
