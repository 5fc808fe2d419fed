// SPDX-License-Identifier: GPL-3.0-only

//! Radial placement of keys around a circle.
//!
//! `N` labels are spread at equal angular steps of `360 / N` degrees, label 0
//! at angle 0. Each key is positioned with a three-step transform:
//!
//! ```text
//! rotate(-θ) translateX(R) rotate(θ)
//! ```
//!
//! Rotating back after the translation keeps the label text upright while the
//! key itself sits on the ring.

/// Position of one key on the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPlacement {
    /// Label displayed by the key.
    pub label: String,
    /// Angular offset in degrees, counter-clockwise from the positive x-axis.
    pub angle: f64,
    /// Distance from the ring center in pixels.
    pub radius: f64,
}

impl KeyPlacement {
    /// CSS-style transform that places the key while keeping it upright.
    pub fn transform(&self) -> String {
        format!(
            "rotate(-{}deg) translateX({}px) rotate({}deg)",
            self.angle, self.radius, self.angle
        )
    }
}

/// Places `labels` evenly around a circle of `radius`.
///
/// Angles are `index * 360 / N` computed per key, so the transform text of
/// key `i` does not depend on rounding in a precomputed step.
pub fn layout_ring<S: AsRef<str>>(labels: &[S], radius: f64) -> Vec<KeyPlacement> {
    let count = labels.len();
    if count == 0 {
        return Vec::new();
    }
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| KeyPlacement {
            label: label.as_ref().to_string(),
            angle: (index * 360) as f64 / count as f64,
            radius,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
