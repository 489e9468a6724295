//! Keys currently held down in the app

use heapless::Vec;

use super::{make_key, Key, StoreError};

/// Maximum number of keys held at the same time
pub const MAX_PRESSED: usize = 16;

/// Set of pressed command keys
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: Vec<Key, MAX_PRESSED>,
}

impl PressedKeys {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Mark `key` as held
    ///
    /// Pressing a key that is already held is a no-op.
    pub fn set_pressed(&mut self, key: &str) -> Result<(), StoreError> {
        if self.is_pressed(key) {
            return Ok(());
        }
        let key = make_key(key)?;
        self.keys.push(key).map_err(|_| StoreError::Full)
    }

    /// Mark `key` as released
    ///
    /// Releasing a key that is not held is a no-op.
    pub fn clear_pressed(&mut self, key: &str) {
        if let Some(index) = self.keys.iter().position(|k| k.as_str() == key) {
            self.keys.swap_remove(index);
        }
    }

    /// Release every key
    pub fn clear_all(&mut self) {
        self.keys.clear();
    }

    /// Returns true if `key` is held
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.as_str() == key)
    }

    /// Number of held keys
    pub fn count(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut pressed = PressedKeys::new();
        pressed.set_pressed("a").unwrap();
        pressed.set_pressed("up").unwrap();
        assert!(pressed.is_pressed("a"));
        assert_eq!(pressed.count(), 2);

        pressed.clear_pressed("a");
        assert!(!pressed.is_pressed("a"));
        assert!(pressed.is_pressed("up"));
        assert_eq!(pressed.count(), 1);
    }

    #[test]
    fn test_double_press_counts_once() {
        let mut pressed = PressedKeys::new();
        pressed.set_pressed("a").unwrap();
        pressed.set_pressed("a").unwrap();
        assert_eq!(pressed.count(), 1);
    }

    #[test]
    fn test_release_unpressed_is_noop() {
        let mut pressed = PressedKeys::new();
        pressed.set_pressed("b").unwrap();
        pressed.clear_pressed("a");
        assert_eq!(pressed.count(), 1);
        assert!(pressed.is_pressed("b"));
    }

    #[test]
    fn test_clear_all() {
        let mut pressed = PressedKeys::new();
        pressed.clear_all();
        assert_eq!(pressed.count(), 0);

        for key in ["1", "2", "3"] {
            pressed.set_pressed(key).unwrap();
        }
        pressed.clear_all();
        pressed.clear_all();
        assert_eq!(pressed.count(), 0);
    }

    #[test]
    fn test_full_set() {
        let mut pressed = PressedKeys::new();
        for i in 0..MAX_PRESSED {
            let mut key = Key::new();
            core::fmt::Write::write_fmt(&mut key, format_args!("{}", i)).unwrap();
            pressed.set_pressed(&key).unwrap();
        }
        assert_eq!(pressed.set_pressed("extra"), Err(StoreError::Full));
        assert!(!pressed.is_pressed("extra"));
    }
}
