// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard variant data structures.

use serde::{Deserialize, Serialize};

/// One of the two independent key clusters composing a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Group {
    /// Keys driven by the left stick.
    Left,
    /// Keys driven by the right stick.
    Right,
}

impl Group {
    /// Both groups in rendering order.
    pub const ALL: [Group; 2] = [Group::Left, Group::Right];
}

/// One complete keyboard layout: a left and a right ring of labels.
///
/// Variants are immutable once received and are addressed by their position
/// in the list delivered with the `init` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardVariant {
    /// Labels of the left ring, in angular order.
    pub left: Vec<String>,
    /// Labels of the right ring, in angular order.
    pub right: Vec<String>,
}

impl KeyboardVariant {
    /// Creates a variant from anything yielding labels.
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            left: left.into_iter().map(Into::into).collect(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the labels of one group.
    pub fn labels(&self, group: Group) -> &[String] {
        match group {
            Group::Left => &self.left,
            Group::Right => &self.right,
        }
    }
}
