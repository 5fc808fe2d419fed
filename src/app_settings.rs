// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application name used in log directives and the binary.
pub const APP_NAME: &str = "radboard";

/// Environment variable naming the optional JSON config file.
pub const CONFIG_ENV: &str = "RADBOARD_CONFIG";

/// Distance in pixels from the ring center to each key.
pub const DEFAULT_RADIUS: f64 = 150.0;

/// How long a key keeps the pressed marker, in milliseconds.
pub const PRESS_FLASH_MS: u64 = 100;

/// How long a toast stays visible, in milliseconds.
pub const TOAST_DURATION_MS: u64 = 3000;

/// Class applied to the focused key.
pub const FOCUS_CLASS: &str = "focus";

/// Class applied to a key while it flashes after a press.
pub const PRESSED_CLASS: &str = "pressed";

/// Class applied to the toast while it is visible.
pub const TOAST_SHOW_CLASS: &str = "show";

/// Element id of the keyboard surface container.
pub const MAIN_ID: &str = "main";

/// Element id of the left key group.
pub const KEYBOARD_LEFT_ID: &str = "keyboard-left";

/// Element id of the right key group.
pub const KEYBOARD_RIGHT_ID: &str = "keyboard-right";

/// Element id of the toast.
pub const TOAST_ID: &str = "toast";
