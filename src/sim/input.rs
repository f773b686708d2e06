//! Keyboard input latch
//!
//! Directions are level-triggered (held until key-up). Jump is edge-triggered
//! and acts on the actor immediately, inside the key-down callback.

use serde::Serialize;

use super::state::GameState;
use super::tick::try_jump;

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent` (`key`, `code`) to a game key.
    ///
    /// Jump is matched on the physical code so it works on any layout.
    pub fn from_event(key: &str, code: &str) -> Option<Self> {
        if code == "Space" {
            return Some(Key::Jump);
        }
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Escape" | "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// Held-key state between frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputLatch {
    pub left: bool,
    pub right: bool,
    /// Jump key is physically down (suppresses re-fire on repeat)
    pub jump_held: bool,
}

impl InputLatch {
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

/// What the platform layer should do with the originating event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Suppress the browser's default action (page scroll on Space)
    pub prevent_default: bool,
    /// A jump was applied to the actor
    pub jumped: bool,
}

impl GameState {
    /// Route a key-down event. `repeat` is the event's auto-repeat flag.
    pub fn key_down(&mut self, key: Key, repeat: bool) -> KeyResponse {
        match key {
            Key::Left => self.input.left = true,
            Key::Right => self.input.right = true,
            Key::Jump => {
                let fresh = !repeat && !self.input.jump_held;
                self.input.jump_held = true;
                let jumped = fresh && try_jump(&mut self.actor, self.tuning.jump_impulse);
                if jumped {
                    log::trace!("jump at frame {}", self.frame);
                }
                return KeyResponse {
                    prevent_default: true,
                    jumped,
                };
            }
            Key::Pause => {
                if !repeat {
                    let running = self.toggle_running();
                    log::info!("{}", if running { "Resumed" } else { "Paused" });
                }
            }
        }
        KeyResponse::default()
    }

    /// Route a key-up event
    pub fn key_up(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Left => self.input.left = false,
            Key::Right => self.input.right = false,
            Key::Jump => {
                self.input.jump_held = false;
                return KeyResponse {
                    prevent_default: true,
                    jumped: false,
                };
            }
            Key::Pause => {}
        }
        KeyResponse::default()
    }
}
