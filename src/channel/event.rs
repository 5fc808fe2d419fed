// SPDX-License-Identifier: GPL-3.0-only

//! Events pushed by the backend over the UI channel.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::layout::KeyboardVariant;
use crate::renderer::FocusPair;

/// A single event from the backend.
///
/// On the wire each event is a JSON object tagged by `event`, with its
/// payload under `data`:
///
/// ```json
/// {"event": "keyFocus", "data": [2, -1]}
/// {"event": "keyPress"}
/// ```
///
/// Tags this client does not know decode to [`UiEvent::Unknown`] so newer
/// backends keep working with older clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum UiEvent {
    /// Full list of keyboard variants; the first one is shown.
    Init(Vec<KeyboardVariant>),
    /// Show a transient message.
    ShowToast(String),
    /// Show (`true`) or hide (`false`) the keyboard.
    KeyboardMode(bool),
    /// Activate the variant at this index.
    SwitchKeyboard(usize),
    /// Focused key per group, `-1` for none.
    KeyFocus(FocusPair),
    /// The focused key was pressed.
    KeyPress,
    /// An event tag this client does not understand.
    #[serde(skip_serializing)]
    Unknown(String),
}

impl UiEvent {
    /// The wire tag of this event.
    pub fn tag(&self) -> &str {
        match self {
            UiEvent::Init(_) => "init",
            UiEvent::ShowToast(_) => "showToast",
            UiEvent::KeyboardMode(_) => "keyboardMode",
            UiEvent::SwitchKeyboard(_) => "switchKeyboard",
            UiEvent::KeyFocus(_) => "keyFocus",
            UiEvent::KeyPress => "keyPress",
            UiEvent::Unknown(tag) => tag,
        }
    }

    /// Decodes one event from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn from_wire(wire: WireEvent) -> Result<Self, serde_json::Error> {
        let data = wire.data;
        let event = match wire.event.as_str() {
            "init" => UiEvent::Init(serde_json::from_value(data)?),
            "showToast" => UiEvent::ShowToast(serde_json::from_value(data)?),
            "keyboardMode" => UiEvent::KeyboardMode(serde_json::from_value(data)?),
            "switchKeyboard" => UiEvent::SwitchKeyboard(serde_json::from_value(data)?),
            "keyFocus" => UiEvent::KeyFocus(serde_json::from_value(data)?),
            "keyPress" => UiEvent::KeyPress,
            _ => UiEvent::Unknown(wire.event),
        };
        Ok(event)
    }
}

/// Undecoded event envelope.
#[derive(Deserialize)]
struct WireEvent {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl<'de> Deserialize<'de> for UiEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireEvent::deserialize(deserializer)?;
        let tag = wire.event.clone();
        UiEvent::from_wire(wire)
            .map_err(|e| de::Error::custom(format!("invalid `{}` payload: {}", tag, e)))
    }
}

// ============================================================================
// Tests
// ============================================================================
