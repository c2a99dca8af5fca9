//! Key bindings and per-frame action polling

use super::{InputSource, KeyCode, MouseButton};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Game actions held during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActionSet: u16 {
        /// Strafe along the camera up vector
        const MOVE_UP = 1 << 0;
        /// Strafe against the camera up vector
        const MOVE_DOWN = 1 << 1;
        /// Strafe left in the horizontal frame
        const MOVE_LEFT = 1 << 2;
        /// Strafe right in the horizontal frame
        const MOVE_RIGHT = 1 << 3;
        /// Pitch up
        const LOOK_UP = 1 << 4;
        /// Pitch down
        const LOOK_DOWN = 1 << 5;
        /// Yaw left
        const LOOK_LEFT = 1 << 6;
        /// Yaw right
        const LOOK_RIGHT = 1 << 7;
        /// Fire the planet-clearing weapon
        const FIRE = 1 << 8;
        /// Restart after game over
        const RESTART = 1 << 9;
        /// Leave the game
        const QUIT = 1 << 10;
    }
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Strafe up key
    pub up_key: KeyCode,

    /// Strafe down key
    pub down_key: KeyCode,

    /// Strafe left key
    pub left_key: KeyCode,

    /// Strafe right key
    pub right_key: KeyCode,

    /// Pitch up key
    pub look_up_key: KeyCode,

    /// Pitch down key
    pub look_down_key: KeyCode,

    /// Yaw left key
    pub look_left_key: KeyCode,

    /// Yaw right key
    pub look_right_key: KeyCode,

    /// Fire key
    pub fire_key: KeyCode,

    /// Alternative fire button
    pub fire_button: MouseButton,

    /// Restart key (only honoured after game over)
    pub restart_key: KeyCode,

    /// Quit key
    pub quit_key: KeyCode,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            up_key: KeyCode::W,
            down_key: KeyCode::S,
            left_key: KeyCode::A,
            right_key: KeyCode::D,
            look_up_key: KeyCode::Up,
            look_down_key: KeyCode::Down,
            look_left_key: KeyCode::Left,
            look_right_key: KeyCode::Right,
            fire_key: KeyCode::Space,
            fire_button: MouseButton::Middle,
            restart_key: KeyCode::R,
            quit_key: KeyCode::Escape,
        }
    }
}

impl ControlsConfig {
    /// Translate the raw input state into the actions held this frame
    pub fn poll(&self, input: &impl InputSource) -> ActionSet {
        let bindings = [
            (self.up_key, ActionSet::MOVE_UP),
            (self.down_key, ActionSet::MOVE_DOWN),
            (self.left_key, ActionSet::MOVE_LEFT),
            (self.right_key, ActionSet::MOVE_RIGHT),
            (self.look_up_key, ActionSet::LOOK_UP),
            (self.look_down_key, ActionSet::LOOK_DOWN),
            (self.look_left_key, ActionSet::LOOK_LEFT),
            (self.look_right_key, ActionSet::LOOK_RIGHT),
            (self.fire_key, ActionSet::FIRE),
            (self.restart_key, ActionSet::RESTART),
            (self.quit_key, ActionSet::QUIT),
        ];

        let mut actions = bindings
            .iter()
            .filter(|(key, _)| input.is_key_pressed(*key))
            .fold(ActionSet::empty(), |acc, (_, action)| acc | *action);

        if input.is_mouse_pressed(self.fire_button) {
            actions |= ActionSet::FIRE;
        }
        actions
    }
}
