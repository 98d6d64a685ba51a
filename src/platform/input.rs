//! Keyboard state tracking
//!
//! Hosts forward raw key names (as reported by the browser's
//! `KeyboardEvent.key`, case-insensitive) and the simulation polls a
//! [`TickInput`] snapshot. Unknown keys are ignored.

use super::InputSource;
use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    RotateLeft,
    RotateRight,
    Fire,
}

impl Key {
    /// Map a raw key name to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" => Some(Key::Up),
            "s" => Some(Key::Down),
            "a" => Some(Key::Left),
            "d" => Some(Key::Right),
            "arrowleft" => Some(Key::RotateLeft),
            "arrowright" => Some(Key::RotateRight),
            " " | "space" | "spacebar" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: TickInput,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down by raw name; returns false if the key is not bound
    pub fn key_down(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.set(key, true);
                true
            }
            None => false,
        }
    }

    /// Handle a key-up by raw name; returns false if the key is not bound
    pub fn key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.set(key, false);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, key: Key, down: bool) {
        let slot = match key {
            Key::Up => &mut self.held.up,
            Key::Down => &mut self.held.down,
            Key::Left => &mut self.held.left,
            Key::Right => &mut self.held.right,
            Key::RotateLeft => &mut self.held.rotate_left,
            Key::RotateRight => &mut self.held.rotate_right,
            Key::Fire => &mut self.held.fire,
        };
        *slot = down;
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.held = TickInput::default();
    }

    pub fn held(&self) -> TickInput {
        self.held
    }
}

impl InputSource for KeyState {
    fn poll(&mut self) -> TickInput {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("W"), Some(Key::Up));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::RotateLeft));
        assert_eq!(Key::from_name("arrowright"), Some(Key::RotateRight));
        assert_eq!(Key::from_name(" "), Some(Key::Fire));
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name("Escape"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        assert!(keys.key_down("w"));
        assert!(keys.key_down("a"));
        assert!(keys.key_down(" "));
        let input = keys.poll();
        assert!(input.up && input.left && input.fire);
        assert!(!input.down && !input.right);

        assert!(keys.key_up("W"));
        let input = keys.poll();
        assert!(!input.up && input.left);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.key_down("q"));
        assert!(!keys.key_down("Shift"));
        assert_eq!(keys.poll(), TickInput::default());
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::new();
        keys.key_down("d");
        keys.key_down("arrowright");
        keys.clear();
        assert_eq!(keys.held(), TickInput::default());
    }
}
