//! Keyboard state to tick input
//!
//! Direction keys are level-triggered (held = moving). The toggle key fires
//! once, on the frame it is released.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::settings::KeyBindings;
use crate::sim::{PaddleInput, TickInput};

/// Keys the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    E,
    D,
    P,
    Space,
    Escape,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::E => "e",
            Key::D => "d",
            Key::P => "p",
            Key::Space => "space",
            Key::Escape => "escape",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "e" => Some(Key::E),
            "d" => Some(Key::D),
            "p" => Some(Key::P),
            "space" => Some(Key::Space),
            "escape" | "esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Turns per-frame keyboard snapshots into `TickInput`s
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
    toggle_held: bool,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            toggle_held: false,
        }
    }

    /// Build this frame's input from the set of keys currently held
    pub fn sample(&mut self, held: &HashSet<Key>) -> TickInput {
        let b = &self.bindings;
        let toggle_down = held.contains(&b.toggle);
        let released = self.toggle_held && !toggle_down;
        self.toggle_held = toggle_down;

        TickInput {
            left: PaddleInput {
                up: held.contains(&b.p1_up),
                down: held.contains(&b.p1_down),
            },
            right: PaddleInput {
                up: held.contains(&b.p2_up),
                down: held.contains(&b.p2_down),
            },
            toggle: released,
        }
    }
}
