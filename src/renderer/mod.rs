// SPDX-License-Identifier: GPL-3.0-only

//! Radial keyboard renderer.
//!
//! This module turns keyboard variants and backend-decided state into visual
//! side effects on a [`Surface`]. It never decides what is focused or pressed;
//! it only reflects what the backend reports.
//!
//! # Architecture
//!
//! - **geometry**: Even angular placement of labels on a ring.
//! - **surface**: Headless element tree with the four mount points.
//! - **keys**: Renders a variant's two groups and keeps their key handles.
//! - **focus**: Moves the focus marker between keys.
//! - **press**: Flashes the focused key on a press.
//! - **toast**: Transient message display with auto-hide.
//! - **visibility**: Shows or hides the whole keyboard.
//!
//! # Usage
//!
//! ```rust,ignore
//! use radboard::layout::default_variants;
//! use radboard::renderer::{FocusPair, FocusTracker, Renderer, Surface};
//!
//! let surface = Surface::new();
//! let renderer = Renderer::new(&surface, 150.0);
//! let keys = renderer.render(&default_variants()[0]);
//!
//! let mut focus = FocusTracker::new();
//! focus.apply(&keys, FocusPair(2, -1).into());
//! ```

pub mod focus;
pub mod geometry;
pub mod keys;
pub mod press;
pub mod surface;
pub mod toast;
pub mod visibility;

pub use focus::{FocusPair, FocusState, FocusTracker};
pub use geometry::{KeyPlacement, layout_ring};
pub use keys::{RenderedKeys, Renderer};
pub use press::PressFeedback;
pub use surface::{ElementHandle, ElementKind, ElementSnapshot, Surface, SurfaceSnapshot};
pub use toast::ToastNotifier;
pub use visibility::VisibilityController;
