//! Keyboard state
//!
//! Key events arrive between ticks; the next tick reads whatever is held.

use std::collections::HashSet;

use crate::sim::TickInput;

const LEFT_KEYS: [&str; 2] = ["arrowleft", "a"];
const RIGHT_KEYS: [&str; 2] = ["arrowright", "d"];
const BOOST_KEY: &str = "shift";

/// Set of currently held keys, by lowercased `KeyboardEvent.key` name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.held.contains(&key.to_lowercase())
    }

    fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    /// Steering snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.any_pressed(&LEFT_KEYS),
            right: self.any_pressed(&RIGHT_KEYS),
        }
    }

    /// Forget everything (focus loss, restart)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Whether a key name is the boost modifier
pub fn is_boost_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(BOOST_KEY)
}
