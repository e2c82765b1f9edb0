//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key counts as held until it is released or until no press (or repeat)
//! for it has arrived within the timeout.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::{map_key, Key};
use crate::types::InputSnapshot;

// A tap shorter than one frame still shows up in at least one snapshot.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which game keys are currently down.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    last_press_ms: [Option<u64>; 5],
    key_release_timeout_ms: u64,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            last_press_ms: [None; 5],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    /// Record a press (or auto-repeat). Returns the mapped key, if any.
    pub fn handle_key_press(&mut self, code: KeyCode, now_ms: u64) -> Option<Key> {
        let key = map_key(code)?;
        self.last_press_ms[key.slot()] = Some(now_ms);
        Some(key)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = map_key(code) {
            self.last_press_ms[key.slot()] = None;
        }
    }

    pub fn is_held(&self, key: Key, now_ms: u64) -> bool {
        self.last_press_ms[key.slot()]
            .is_some_and(|at| now_ms.saturating_sub(at) <= self.key_release_timeout_ms)
    }

    /// Keys held at `now_ms`, in [`Key::ALL`] order.
    pub fn held(&self, now_ms: u64) -> ArrayVec<Key, 5> {
        Key::ALL
            .into_iter()
            .filter(|&key| self.is_held(key, now_ms))
            .collect()
    }

    /// Sample the held keys into a frame snapshot.
    pub fn snapshot(&self, now_ms: u64) -> InputSnapshot {
        InputSnapshot {
            up: self.is_held(Key::Up, now_ms),
            down: self.is_held(Key::Down, now_ms),
            left: self.is_held(Key::Left, now_ms),
            right: self.is_held(Key::Right, now_ms),
            cancel: self.is_held(Key::Cancel, now_ms),
        }
    }

    pub fn reset(&mut self) {
        self.last_press_ms = [None; 5];
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_press_is_held_until_release() {
        let mut ks = KeyboardState::new().with_key_release_timeout_ms(10_000);

        assert_eq!(ks.handle_key_press(KeyCode::Left, 0), Some(Key::Left));
        assert!(ks.is_held(Key::Left, 500));
        assert_eq!(ks.snapshot(500).direction(), Some(Direction::Left));

        ks.handle_key_release(KeyCode::Left);
        assert!(!ks.is_held(Key::Left, 500));
        assert_eq!(ks.snapshot(500), InputSnapshot::default());
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ks = KeyboardState::new().with_key_release_timeout_ms(50);

        ks.handle_key_press(KeyCode::Char('w'), 100);
        assert!(ks.is_held(Key::Up, 150));
        assert!(!ks.is_held(Key::Up, 151));

        // Auto-repeat extends the hold.
        ks.handle_key_press(KeyCode::Char('w'), 140);
        assert!(ks.is_held(Key::Up, 151));
    }

    #[test]
    fn test_unmapped_key_does_not_extend_hold() {
        let mut ks = KeyboardState::new().with_key_release_timeout_ms(50);

        ks.handle_key_press(KeyCode::Right, 0);
        assert_eq!(ks.handle_key_press(KeyCode::Char('x'), 40), None);
        assert!(!ks.is_held(Key::Right, 51));
    }

    #[test]
    fn test_held_lists_keys_in_order() {
        let mut ks = KeyboardState::new();
        ks.handle_key_press(KeyCode::Esc, 0);
        ks.handle_key_press(KeyCode::Down, 0);
        ks.handle_key_press(KeyCode::Up, 0);

        assert_eq!(ks.held(10).as_slice(), &[Key::Up, Key::Down, Key::Cancel]);
        let snapshot = ks.snapshot(10);
        assert!(snapshot.cancel);
        // Up wins over Down.
        assert_eq!(snapshot.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ks = KeyboardState::new();
        ks.handle_key_press(KeyCode::Left, 0);
        ks.reset();
        assert!(ks.held(0).is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyboardState::new().key_release_timeout_ms() > 0);
    }
}
