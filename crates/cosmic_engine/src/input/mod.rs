//! Input management system
//!
//! The window layer is external; it feeds key and mouse transitions into an
//! [`InputState`] (or implements [`InputSource`] directly) and the game polls
//! that state once per frame.

mod bindings;

pub use bindings::{ActionSet, ControlsConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Polled "is pressed" capability consumed by the game loop
pub trait InputSource {
    /// Whether a key is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Whether a mouse button is currently held down
    fn is_mouse_pressed(&self, _button: MouseButton) -> bool {
        false
    }
}

/// Input state tracking for held keys and buttons
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
}

impl InputState {
    /// Create an input state with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}

impl InputSource for InputState {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// F key
    F,
    /// R key
    R,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.handle_key_input(KeyCode::W, true);
        input.handle_mouse_button(MouseButton::Middle, true);
        assert!(input.is_key_pressed(KeyCode::W));
        assert!(input.is_mouse_pressed(MouseButton::Middle));

        input.handle_key_input(KeyCode::W, false);
        assert!(!input.is_key_pressed(KeyCode::W));

        input.clear();
        assert!(!input.is_mouse_pressed(MouseButton::Middle));
    }
}
