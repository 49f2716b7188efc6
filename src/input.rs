use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Key that drives the character to the right.
pub const WALK_RIGHT_KEY: KeyCode = KeyCode::ArrowRight;

/// Tracks held keys and derives the scene's movement intent.
#[derive(Debug, Default)]
pub struct Input {
    keys_down: HashSet<KeyCode>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event and update key state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(key) = event.physical_key {
                match event.state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
            }
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Returns true if the key is currently held down.
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// The "move" intent, read once per update.
    pub fn walk_right(&self) -> bool {
        self.key_down(WALK_RIGHT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_follows_arrow_key() {
        let mut input = Input::new();
        assert!(!input.walk_right());

        input.press(KeyCode::ArrowRight);
        assert!(input.walk_right());

        input.release(KeyCode::ArrowRight);
        assert!(!input.walk_right());
    }

    #[test]
    fn other_keys_do_not_walk() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowLeft);
        input.press(KeyCode::KeyD);

        assert!(input.key_down(KeyCode::ArrowLeft));
        assert!(!input.walk_right());
    }

    #[test]
    fn repeated_press_needs_single_release() {
        let mut input = Input::new();
        input.press(KeyCode::ArrowRight);
        input.press(KeyCode::ArrowRight);
        input.release(KeyCode::ArrowRight);
        assert!(!input.walk_right());
    }
}
