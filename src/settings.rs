//! Game settings and preferences
//!
//! The rules themselves are fixed (see `consts`); only presentation and key
//! bindings live here.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_TITLE, WINDOW_SCALE};
use crate::platform::input::Key;

/// Which key drives each logical input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub p1_up: Key,
    pub p1_down: Key,
    pub p2_up: Key,
    pub p2_down: Key,
    /// Start / pause / resume / play again
    pub toggle: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            p1_up: Key::E,
            p1_down: Key::D,
            p2_up: Key::Up,
            p2_down: Key::Down,
            toggle: Key::P,
        }
    }
}

impl KeyBindings {
    /// True if `key` drives any input
    pub fn is_bound(&self, key: Key) -> bool {
        [self.p1_up, self.p1_down, self.p2_up, self.p2_down, self.toggle].contains(&key)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub bindings: KeyBindings,
    /// Window size as a multiple of the 640x480 logical resolution
    pub window_scale: u32,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            window_scale: WINDOW_SCALE,
            title: GAME_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
        let scale = self.window_scale.max(1);
        (SCREEN_WIDTH as u32 * scale, SCREEN_HEIGHT as u32 * scale)
    }
}
