// SPDX-License-Identifier: GPL-3.0-only

//! Event dispatcher driving the keyboard surface.

use std::rc::Rc;

use futures::{Stream, StreamExt};

use crate::channel::{Backend, UiEvent, connect};
use crate::config::Config;
use crate::layout::{KeyboardRegistry, KeyboardVariant};
use crate::renderer::{
    FocusState, FocusTracker, PressFeedback, RenderedKeys, Renderer, Surface, ToastNotifier,
    VisibilityController,
};
use crate::scheduler::Scheduler;

/// The application model owns all client-side state and applies each backend
/// event to it.
///
/// Events are handled one at a time, fully, in arrival order. Each field has a
/// single writer: the registry changes only on `init` and `switchKeyboard`,
/// the focus state only on `keyFocus`.
pub struct AppModel {
    /// Variants received with `init` and the active index.
    registry: KeyboardRegistry,
    /// Builds key elements into the surface.
    renderer: Renderer,
    /// Handles of the currently rendered keys.
    keys: RenderedKeys,
    /// Last focus pair and the focus marker.
    focus: FocusTracker,
    /// Pressed flash on the focused key.
    press: PressFeedback,
    /// Transient messages.
    toast: ToastNotifier,
    /// Keyboard mode display toggle.
    visibility: VisibilityController,
    /// Runs the flash and toast timers.
    scheduler: Rc<dyn Scheduler>,
}

impl AppModel {
    /// Creates the model against `surface`'s mount points.
    pub fn new(surface: &Surface, config: &Config, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            registry: KeyboardRegistry::new(),
            renderer: Renderer::new(surface, config.radius),
            keys: RenderedKeys::default(),
            focus: FocusTracker::new(),
            press: PressFeedback::new(config.press_flash()),
            toast: ToastNotifier::new(surface.toast.clone(), config.toast_duration()),
            visibility: VisibilityController::new(surface.main.clone()),
            scheduler,
        }
    }

    /// Applies a single event.
    pub fn update(&mut self, event: UiEvent) {
        tracing::debug!("UI event '{}': {:?}", event.tag(), event);
        match event {
            UiEvent::Init(variants) => {
                self.registry.initialize(variants);
                self.render_active();
            }
            UiEvent::KeyFocus(pair) => {
                self.focus.apply(&self.keys, pair.into());
            }
            UiEvent::ShowToast(message) => {
                self.toast.show(&message, self.scheduler.as_ref());
            }
            UiEvent::SwitchKeyboard(index) => {
                if self.registry.select(index) {
                    self.render_active();
                }
            }
            UiEvent::KeyPress => {
                let target = self.focus.focused_key(&self.keys);
                self.press.flash(target, self.scheduler.as_ref());
            }
            UiEvent::KeyboardMode(active) => {
                self.visibility.set_active(active);
            }
            UiEvent::Unknown(tag) => {
                tracing::debug!("Ignoring unknown UI event '{}'", tag);
            }
        }
    }

    /// Decodes and applies one JSON-encoded event.
    ///
    /// Undecodable events are logged and dropped.
    pub fn update_from_json(&mut self, json: &str) {
        match UiEvent::from_json(json) {
            Ok(event) => self.update(event),
            Err(e) => tracing::warn!("Dropping undecodable UI event: {}", e),
        }
    }

    /// Applies events from `events` until the stream ends.
    ///
    /// Returns the number of events handled.
    pub async fn run<S>(&mut self, mut events: S) -> usize
    where
        S: Stream<Item = UiEvent> + Unpin,
    {
        let mut handled = 0;
        while let Some(event) = events.next().await {
            self.update(event);
            handled += 1;
        }
        tracing::debug!("Event channel closed after {} events", handled);
        handled
    }

    /// Connects to `backend` and dispatches its events until it closes the
    /// channel.
    ///
    /// If initialization fails the model stays in its pre-`init` state and
    /// `0` is returned.
    pub async fn start<B: Backend>(&mut self, backend: &mut B) -> usize {
        match connect(backend).await {
            Some(events) => self.run(events).await,
            None => 0,
        }
    }

    /// Re-renders the active variant, or clears the keys if there is none.
    fn render_active(&mut self) {
        self.keys = match self.registry.current() {
            Some(variant) => self.renderer.render(variant),
            None => self.renderer.render(&KeyboardVariant::default()),
        };
    }

    pub fn registry(&self) -> &KeyboardRegistry {
        &self.registry
    }

    pub fn keys(&self) -> &RenderedKeys {
        &self.keys
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn toast(&self) -> &ToastNotifier {
        &self.toast
    }

    pub fn is_keyboard_visible(&self) -> bool {
        self.visibility.is_active()
    }
}

impl std::fmt::Debug for AppModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModel")
            .field("registry", &self.registry)
            .field("keys", &self.keys.len())
            .field("focus", &self.focus.state())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_settings::{FOCUS_CLASS, PRESSED_CLASS};
    use crate::layout::Group;
    use crate::renderer::{ElementHandle, FocusPair};
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    fn variants() -> Vec<KeyboardVariant> {
        vec![
            KeyboardVariant::new(["E", "T", "A", "O"], ["N", "S", "H", "R"]),
            KeyboardVariant::new(["G", "Y"], ["B", "K", "J"]),
        ]
    }

    fn model() -> (AppModel, Surface, ManualScheduler) {
        let surface = Surface::new();
        let scheduler = ManualScheduler::new();
        let app = AppModel::new(&surface, &Config::default(), Rc::new(scheduler.clone()));
        (app, surface, scheduler)
    }

    fn labels(parent: &Option<ElementHandle>) -> Vec<String> {
        parent
            .as_ref()
            .unwrap()
            .children()
            .iter()
            .map(ElementHandle::text)
            .collect()
    }

    fn key(app: &AppModel, group: Group, index: usize) -> ElementHandle {
        app.keys().get(group, index).unwrap().clone()
    }

    #[test]
    fn test_nothing_rendered_before_init() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::SwitchKeyboard(0));
        app.update(UiEvent::KeyFocus(FocusPair(0, -1)));
        app.update(UiEvent::KeyPress);

        assert!(app.keys().is_empty());
        assert!(labels(&surface.keyboard_left).is_empty());
        assert!(!app.registry().is_initialized());
    }

    #[test]
    fn test_init_renders_first_variant() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::Init(variants()));

        assert_eq!(labels(&surface.keyboard_left), vec!["E", "T", "A", "O"]);
        assert_eq!(labels(&surface.keyboard_right), vec!["N", "S", "H", "R"]);
        assert_eq!(app.registry().active_index(), 0);
    }

    /// Switching to an out-of-range variant leaves variant 1 on screen.
    #[test]
    fn test_out_of_range_switch_is_ignored() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::SwitchKeyboard(1));
        let before = surface.snapshot();
        let first_key = key(&app, Group::Left, 0);

        app.update(UiEvent::SwitchKeyboard(99));
        assert_eq!(app.registry().active_index(), 1);
        assert_eq!(surface.snapshot(), before);
        assert!(first_key.ptr_eq(&key(&app, Group::Left, 0)));
        assert_eq!(labels(&surface.keyboard_right), vec!["B", "K", "J"]);
    }

    /// After a switch the old focus marker is gone with the old keys, and
    /// later focus events address the new variant.
    #[test]
    fn test_focus_across_switch() {
        let (mut app, _, _) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::KeyFocus(FocusPair(3, -1)));
        app.update(UiEvent::SwitchKeyboard(1));

        assert!(app.keys().group(Group::Left).iter().all(|k| !k.has_class(FOCUS_CLASS)));

        // Stored left index 3 does not exist in variant 1; focusing right works.
        app.update(UiEvent::KeyFocus(FocusPair(-1, 2)));
        assert!(key(&app, Group::Right, 2).has_class(FOCUS_CLASS));
        assert_eq!(app.focus_state(), FocusState::new(None, Some(2)));
    }

    #[test]
    fn test_key_press_flashes_focused_key() {
        let (mut app, _, scheduler) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::KeyFocus(FocusPair(-1, 1)));
        app.update(UiEvent::KeyPress);

        let pressed = key(&app, Group::Right, 1);
        assert!(pressed.has_class(PRESSED_CLASS));
        assert!(pressed.has_class(FOCUS_CLASS));

        scheduler.advance(Duration::from_millis(100));
        assert!(!pressed.has_class(PRESSED_CLASS));
        assert!(pressed.has_class(FOCUS_CLASS));
    }

    /// Moving focus mid-flash does not move the flash.
    #[test]
    fn test_focus_change_during_flash() {
        let (mut app, _, scheduler) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::KeyFocus(FocusPair(0, -1)));
        app.update(UiEvent::KeyPress);
        scheduler.advance(Duration::from_millis(40));
        app.update(UiEvent::KeyFocus(FocusPair(1, -1)));

        let first = key(&app, Group::Left, 0);
        let second = key(&app, Group::Left, 1);
        assert!(first.has_class(PRESSED_CLASS));
        assert!(!second.has_class(PRESSED_CLASS));

        scheduler.advance(Duration::from_millis(60));
        assert!(!first.has_class(PRESSED_CLASS));
    }

    #[test]
    fn test_key_press_without_focus() {
        let (mut app, surface, scheduler) = model();
        app.update(UiEvent::Init(variants()));
        let before = surface.snapshot();

        app.update(UiEvent::KeyPress);
        assert_eq!(surface.snapshot(), before);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_keyboard_mode_toggles_without_replaying_init() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::KeyFocus(FocusPair(2, -1)));

        app.update(UiEvent::KeyboardMode(false));
        assert!(!app.is_keyboard_visible());
        assert!(!surface.main.as_ref().unwrap().is_displayed());

        app.update(UiEvent::KeyboardMode(true));
        assert!(app.is_keyboard_visible());
        assert_eq!(labels(&surface.keyboard_left), vec!["E", "T", "A", "O"]);
        assert!(key(&app, Group::Left, 2).has_class(FOCUS_CLASS));
    }

    #[test]
    fn test_show_toast_and_overlap() {
        let (mut app, _, scheduler) = model();
        app.update(UiEvent::ShowToast("A".to_string()));
        scheduler.advance(Duration::from_millis(500));
        app.update(UiEvent::ShowToast("B".to_string()));

        assert_eq!(app.toast().message().as_deref(), Some("B"));
        assert!(app.toast().is_visible());

        scheduler.advance(Duration::from_millis(2500));
        assert!(!app.toast().is_visible());
    }

    /// A second init replaces the variants; an empty one clears the keys.
    #[test]
    fn test_reinit() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::SwitchKeyboard(1));

        app.update(UiEvent::Init(vec![KeyboardVariant::new(["Q"], ["W"])]));
        assert_eq!(app.registry().active_index(), 0);
        assert_eq!(labels(&surface.keyboard_left), vec!["Q"]);

        app.update(UiEvent::Init(Vec::new()));
        assert!(app.keys().is_empty());
        assert!(labels(&surface.keyboard_right).is_empty());
    }

    #[test]
    fn test_unknown_and_invalid_events_are_ignored() {
        let (mut app, surface, _) = model();
        app.update(UiEvent::Init(variants()));
        let before = surface.snapshot();

        app.update(UiEvent::Unknown("rumble".to_string()));
        app.update_from_json(r#"{"event":"rumble","data":1}"#);
        app.update_from_json(r#"{"event":"keyFocus","data":"left"}"#);
        app.update_from_json("garbage");
        assert_eq!(surface.snapshot(), before);

        app.update_from_json(r#"{"event":"keyFocus","data":[1,-1]}"#);
        assert!(key(&app, Group::Left, 1).has_class(FOCUS_CLASS));
    }

    /// A surface without mount points accepts every event silently.
    #[test]
    fn test_detached_surface() {
        let scheduler = ManualScheduler::new();
        let mut app = AppModel::new(
            &Surface::detached(),
            &Config::default(),
            Rc::new(scheduler.clone()),
        );

        app.update(UiEvent::Init(variants()));
        app.update(UiEvent::KeyFocus(FocusPair(0, -1)));
        app.update(UiEvent::KeyPress);
        app.update(UiEvent::ShowToast("hidden".to_string()));
        app.update(UiEvent::KeyboardMode(true));

        assert!(app.keys().is_empty());
        assert!(app.registry().is_initialized());
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_run_consumes_stream_in_order() {
        let (mut app, surface, _) = model();
        let events = futures::stream::iter(vec![
            UiEvent::Init(variants()),
            UiEvent::SwitchKeyboard(1),
            UiEvent::KeyFocus(FocusPair(1, -1)),
        ]);

        assert_eq!(app.run(events).await, 3);
        assert_eq!(labels(&surface.keyboard_left), vec!["G", "Y"]);
        assert!(key(&app, Group::Left, 1).has_class(FOCUS_CLASS));
    }
}
