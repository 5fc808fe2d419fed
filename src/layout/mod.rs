// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout data for the radial keyboard.
//!
//! A layout is delivered by the backend as an ordered list of
//! [`KeyboardVariant`]s, each made of a left and a right ring of labels. The
//! [`KeyboardRegistry`] stores that list and tracks the active variant.
//!
//! ```rust,ignore
//! use radboard::layout::{KeyboardRegistry, default_variants};
//!
//! let mut registry = KeyboardRegistry::new();
//! registry.initialize(default_variants());
//! assert!(registry.select(1));
//! assert!(!registry.select(99)); // ignored, variant 1 stays active
//! ```

pub mod defaults;
pub mod registry;
pub mod variant;

pub use defaults::default_variants;
pub use registry::KeyboardRegistry;
pub use variant::{Group, KeyboardVariant};
