// SPDX-License-Identifier: GPL-3.0-only

//! Registry of the keyboard variants received from the backend.

use crate::layout::variant::KeyboardVariant;

/// Holds the available variants and which one is active.
///
/// The registry starts empty. `initialize` replaces its contents wholesale and
/// resets the active index to `0`; `select` only ever moves the active index to
/// a valid position.
#[derive(Debug, Clone, Default)]
pub struct KeyboardRegistry {
    variants: Vec<KeyboardVariant>,
    active_index: usize,
    initialized: bool,
}

impl KeyboardRegistry {
    /// Creates an empty, uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the variant list and activates the first variant.
    pub fn initialize(&mut self, variants: Vec<KeyboardVariant>) {
        if self.initialized {
            tracing::debug!("Replacing {} keyboard variants", self.variants.len());
        }
        self.variants = variants;
        self.active_index = 0;
        self.initialized = true;
    }

    /// Activates the variant at `index`.
    ///
    /// Returns `false` and leaves the registry untouched when `index` does not
    /// address a variant.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.variants.len() {
            tracing::debug!(
                "Ignoring switch to keyboard {} ({} available)",
                index,
                self.variants.len()
            );
            return false;
        }
        self.active_index = index;
        true
    }

    /// Returns the active variant, or `None` before initialization.
    pub fn current(&self) -> Option<&KeyboardVariant> {
        self.variants.get(self.active_index)
    }

    /// Index of the active variant.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns `true` once `initialize` has been called.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` when no variants are registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
