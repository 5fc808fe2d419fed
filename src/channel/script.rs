// SPDX-License-Identifier: GPL-3.0-only

//! A backend that replays a recorded event script.
//!
//! Scripts are JSON lines. Each line is either an event or a pause:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"event": "init", "data": [{"left": ["E", "T"], "right": ["N", "S"]}]}
//! {"event": "keyFocus", "data": [1, -1]}
//! {"wait_ms": 120}
//! {"event": "keyPress"}
//! ```
//!
//! Parsing is permissive: lines that fail to decode are skipped with a
//! warning, so one bad line does not lose the rest of the script.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::channel::event::UiEvent;
use crate::channel::{Backend, BackendError, BackendResult, EventSender};
use crate::layout::default_variants;
use crate::renderer::FocusPair;

/// One step of an event script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Pause before sending the next event.
    Wait(Duration),
    /// Send an event.
    Event(UiEvent),
}

impl ScriptStep {
    /// Parses one script line.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(line)?;
        if let Some(wait) = value.get("wait_ms") {
            let millis: u64 = serde_json::from_value(wait.clone())?;
            return Ok(ScriptStep::Wait(Duration::from_millis(millis)));
        }
        serde_json::from_value(value).map(ScriptStep::Event)
    }
}

/// Replays scripted events into the client channel.
#[derive(Debug, Clone, Default)]
pub struct ScriptBackend {
    steps: Vec<ScriptStep>,
    skipped: usize,
}

impl ScriptBackend {
    /// Creates a backend from prepared steps.
    pub fn from_steps(steps: Vec<ScriptStep>) -> Self {
        Self { steps, skipped: 0 }
    }

    /// Parses script text, skipping lines that do not decode.
    pub fn parse(text: &str) -> Self {
        let mut backend = Self::default();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match ScriptStep::parse(line) {
                Ok(step) => backend.steps.push(step),
                Err(e) => {
                    tracing::warn!("Skipping script line {}: {}", number + 1, e);
                    backend.skipped += 1;
                }
            }
        }
        backend
    }

    /// Reads and parses a script file.
    pub fn from_path(path: impl AsRef<Path>) -> BackendResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BackendError::ScriptIo {
            source,
            path: Some(path.display().to_string()),
        })?;
        Ok(Self::parse(&text))
    }

    /// Reads and parses a script from any reader, such as stdin.
    pub fn from_reader(mut reader: impl Read) -> BackendResult<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| BackendError::ScriptIo { source, path: None })?;
        Ok(Self::parse(&text))
    }

    /// Steps still to be replayed.
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Number of lines dropped while parsing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Backend for ScriptBackend {
    /// Spawns the replay task; the channel closes when the script ends.
    async fn initialize(&mut self, on_event: EventSender) -> BackendResult<()> {
        if on_event.is_closed() {
            return Err(BackendError::ChannelClosed);
        }
        let steps = std::mem::take(&mut self.steps);
        tracing::debug!("Replaying {} script steps", steps.len());
        tokio::spawn(replay(steps, on_event));
        Ok(())
    }
}

async fn replay(steps: Vec<ScriptStep>, on_event: EventSender) {
    for step in steps {
        match step {
            ScriptStep::Wait(delay) => tokio::time::sleep(delay).await,
            ScriptStep::Event(event) => {
                if on_event.unbounded_send(event).is_err() {
                    tracing::debug!("Event receiver dropped, stopping replay");
                    return;
                }
            }
        }
    }
}

/// A short session using the built-in variants that touches every event kind.
pub fn demo_script() -> ScriptBackend {
    let wait = |millis| ScriptStep::Wait(Duration::from_millis(millis));
    let event = ScriptStep::Event;

    ScriptBackend::from_steps(vec![
        event(UiEvent::Init(default_variants())),
        event(UiEvent::ShowToast("Remote Activated".to_string())),
        event(UiEvent::KeyboardMode(true)),
        event(UiEvent::ShowToast("Keyboard mode Activated".to_string())),
        event(UiEvent::KeyFocus(FocusPair(0, -1))),
        wait(50),
        event(UiEvent::KeyFocus(FocusPair(3, -1))),
        event(UiEvent::KeyPress),
        wait(150),
        event(UiEvent::KeyFocus(FocusPair(-1, 5))),
        event(UiEvent::KeyPress),
        wait(150),
        event(UiEvent::SwitchKeyboard(1)),
        event(UiEvent::KeyFocus(FocusPair(-1, 2))),
        event(UiEvent::KeyPress),
        wait(150),
        event(UiEvent::SwitchKeyboard(0)),
        event(UiEvent::KeyFocus(FocusPair(6, -1))),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::connect;
    use futures::StreamExt;
    use std::io::Write;

    const SCRIPT: &str = r#"
# two events with a pause between
{"event": "keyboardMode", "data": true}
{"wait_ms": 250}

{"event": "keyPress"}
"#;

    #[test]
    fn test_parse_script_lines() {
        let backend = ScriptBackend::parse(SCRIPT);

        assert_eq!(backend.skipped(), 0);
        assert_eq!(
            backend.steps(),
            &[
                ScriptStep::Event(UiEvent::KeyboardMode(true)),
                ScriptStep::Wait(Duration::from_millis(250)),
                ScriptStep::Event(UiEvent::KeyPress),
            ]
        );
    }

    /// Bad lines are counted and skipped; unknown tags are kept.
    #[test]
    fn test_parse_is_permissive() {
        let backend = ScriptBackend::parse(
            "not json\n{\"event\":\"keyFocus\",\"data\":\"x\"}\n{\"event\":\"rumble\"}\n{\"wait_ms\":-5}",
        );

        assert_eq!(backend.skipped(), 3);
        assert_eq!(
            backend.steps(),
            &[ScriptStep::Event(UiEvent::Unknown("rumble".to_string()))]
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let backend = ScriptBackend::from_path(file.path()).unwrap();
        assert_eq!(backend.steps().len(), 3);

        let missing = ScriptBackend::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(BackendError::ScriptIo { path: Some(_), .. })));
    }

    #[test]
    fn test_from_reader() {
        let backend = ScriptBackend::from_reader(SCRIPT.as_bytes()).unwrap();
        assert_eq!(backend.steps().len(), 3);
    }

    #[test]
    fn test_demo_script_starts_with_init() {
        let demo = demo_script();
        assert!(matches!(demo.steps()[0], ScriptStep::Event(UiEvent::Init(_))));
        assert!(
            demo.steps()
                .iter()
                .any(|s| matches!(s, ScriptStep::Event(UiEvent::KeyPress)))
        );
    }

    /// The replay honours pauses and closes the channel at the end.
    #[tokio::test(start_paused = true)]
    async fn test_replay_sends_events_with_pauses() {
        let mut backend = ScriptBackend::parse(SCRIPT);
        let mut events = connect(&mut backend).await.unwrap();
        let start = tokio::time::Instant::now();

        assert_eq!(events.next().await, Some(UiEvent::KeyboardMode(true)));
        assert_eq!(events.next().await, Some(UiEvent::KeyPress));
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert_eq!(events.next().await, None);
        assert!(backend.steps().is_empty());
    }
}
