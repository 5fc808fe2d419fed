// SPDX-License-Identifier: GPL-3.0-only

//! Toast notifications shown over the keyboard surface.
//!
//! A toast shows one message at a time and hides itself after a fixed
//! duration. There is no queue: a newer message replaces the visible text
//! immediately, and the older message's hide timer still fires on its own
//! schedule, possibly hiding the newer message early.

use std::time::Duration;

use crate::app_settings::TOAST_SHOW_CLASS;
use crate::renderer::surface::ElementHandle;
use crate::scheduler::Scheduler;

/// Shows transient messages in the toast element.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    element: Option<ElementHandle>,
    duration: Duration,
}

impl ToastNotifier {
    pub fn new(element: Option<ElementHandle>, duration: Duration) -> Self {
        Self { element, duration }
    }

    /// Displays `message` and schedules the toast to hide.
    pub fn show(&self, message: &str, scheduler: &dyn Scheduler) {
        let Some(toast) = &self.element else {
            tracing::debug!("Toast element missing, dropping message: {}", message);
            return;
        };
        toast.set_text(message);
        toast.add_class(TOAST_SHOW_CLASS);

        let toast = toast.clone();
        scheduler.schedule(self.duration, Box::new(move || toast.remove_class(TOAST_SHOW_CLASS)));
    }

    /// Returns `true` while the toast is showing.
    pub fn is_visible(&self) -> bool {
        self.element
            .as_ref()
            .is_some_and(|toast| toast.has_class(TOAST_SHOW_CLASS))
    }

    /// Text of the last shown message.
    pub fn message(&self) -> Option<String> {
        self.element.as_ref().map(ElementHandle::text)
    }
}

// ============================================================================
// Tests
// ============================================================================
