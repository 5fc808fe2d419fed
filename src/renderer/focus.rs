// SPDX-License-Identifier: GPL-3.0-only

//! Focus marker tracking across the two key groups.

use serde::{Deserialize, Serialize};

use crate::app_settings::FOCUS_CLASS;
use crate::layout::Group;
use crate::renderer::keys::RenderedKeys;
use crate::renderer::surface::ElementHandle;

/// Sentinel for "no focus" in either slot of a [`FocusPair`].
pub const NO_FOCUS: i32 = -1;

/// Focused index per group as sent on the wire: `[left, right]`, `-1` for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPair(pub i32, pub i32);

/// Focused index per group; `None` means the group has no focus.
///
/// The backend normally focuses at most one group, but both may be set.
/// Only [`NO_FOCUS`] maps to `None`. Other negative indices are kept as
/// focused: they take part in left precedence but never resolve to a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    pub left: Option<i32>,
    pub right: Option<i32>,
}

impl FocusState {
    pub fn new(left: Option<i32>, right: Option<i32>) -> Self {
        Self { left, right }
    }

    /// Index for `group`.
    pub fn index(&self, group: Group) -> Option<i32> {
        match group {
            Group::Left => self.left,
            Group::Right => self.right,
        }
    }

    /// The group and index a press applies to, left taking precedence.
    pub fn primary(&self) -> Option<(Group, i32)> {
        self.left
            .map(|index| (Group::Left, index))
            .or_else(|| self.right.map(|index| (Group::Right, index)))
    }
}

impl From<FocusPair> for FocusState {
    fn from(pair: FocusPair) -> Self {
        let slot = |index: i32| (index != NO_FOCUS).then_some(index);
        Self {
            left: slot(pair.0),
            right: slot(pair.1),
        }
    }
}

/// Looks up the key at a wire index; negative indices never match.
fn key_at(keys: &RenderedKeys, group: Group, index: i32) -> Option<&ElementHandle> {
    usize::try_from(index).ok().and_then(|i| keys.get(group, i))
}

/// Applies and clears the focus marker as focus events arrive.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    state: FocusState,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied focus state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Resolves the focused key in the live view, left taking precedence.
    ///
    /// Returns `None` when nothing is focused or the stored index does not
    /// exist in the currently rendered variant.
    pub fn focused_key(&self, keys: &RenderedKeys) -> Option<ElementHandle> {
        let (group, index) = self.state.primary()?;
        key_at(keys, group, index).cloned()
    }

    /// Moves the focus marker to `next`.
    ///
    /// The previously focused key is unmarked first, then each group's new
    /// index is marked independently. Indices missing from `keys` are skipped.
    /// The new state is stored unconditionally.
    pub fn apply(&mut self, keys: &RenderedKeys, next: FocusState) {
        if let Some(previous) = self.focused_key(keys) {
            previous.remove_class(FOCUS_CLASS);
        }

        for group in Group::ALL {
            let Some(index) = next.index(group) else {
                continue;
            };
            match key_at(keys, group, index) {
                Some(key) => key.add_class(FOCUS_CLASS),
                None => tracing::debug!("No {:?} key at index {} to focus", group, index),
            }
        }

        self.state = next;
    }
}

// ============================================================================
// Tests
// ============================================================================
