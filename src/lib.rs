// SPDX-License-Identifier: GPL-3.0-only

//! Radboard - A radial on-screen keyboard driven by backend events
//!
//! This crate is the client-side presentation layer of a radial soft keyboard.
//! A backend process owns the layouts and decides which key is focused or
//! pressed; this crate receives those decisions as a stream of events and
//! keeps the visual state consistent with them.
//!
//! # Architecture
//!
//! 1. **Channel** (`channel`): The backend is initialized once with the
//!    sending half of an event channel and pushes tagged [`channel::UiEvent`]s.
//!
//! 2. **Dispatcher** (`app`): [`app::AppModel`] applies each event in arrival
//!    order to the registry and the renderer components.
//!
//! 3. **Renderer** (`renderer`): Places keys on two rings, tracks focus,
//!    flashes pressed keys, shows toasts and toggles the keyboard surface.
//!
//! Timed effects go through a [`scheduler::Scheduler`], which has no way to
//! cancel a callback once scheduled.
//!
//! # Modules
//!
//! - `app`: Event dispatcher owning all client state
//! - `app_settings`: Centralized application constants
//! - `channel`: Event wire type, backend trait and script replay backend
//! - `config`: User configuration loaded from JSON
//! - `layout`: Keyboard variants and the variant registry
//! - `renderer`: Geometry, element tree and visual components
//! - `scheduler`: Deferred callbacks for flashes and toasts

pub mod app;
pub mod app_settings;
pub mod channel;
pub mod config;
pub mod layout;
pub mod renderer;
pub mod scheduler;

// ============================================================================
// Integration Tests
// ============================================================================
