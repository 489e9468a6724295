//! Per-key toggle and counter state
//!
//! Backs stateful buttons (mute/unmute, cycling through N modes). A key's
//! counter starts at 0 the first time it is used and lives for as long as
//! the store does.
//!
//! Only non-zero counters take a slot. A counter that returns to 0 frees
//! its slot, so the capacity bounds how many keys are "on" at once, not how
//! many keys were ever used.

use heapless::Vec;

use super::{make_key, Key, StoreError};

/// Maximum number of keys with a non-zero counter at once
pub const MAX_TOGGLES: usize = 32;

/// Small per-key counters
#[derive(Debug, Clone, Default)]
pub struct ToggleStore {
    entries: Vec<(Key, u8), MAX_TOGGLES>,
}

impl ToggleStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Flip the 0/1 state of `key`
    ///
    /// Returns true if the key is now on. The first call for a key turns it on.
    /// On error the state is unchanged.
    pub fn toggle(&mut self, key: &str) -> Result<bool, StoreError> {
        self.update(key, |count| if count == 0 { 1 } else { 0 })
            .map(|count| count == 1)
    }

    /// Advance the counter of `key`, wrapping to 0 after `max`
    ///
    /// Counts `1, 2, ..., max, 0, 1, ...`. With `max = 1` this alternates
    /// like [`toggle`](Self::toggle).
    pub fn increment_bounded(&mut self, key: &str, max: u8) -> Result<u8, StoreError> {
        self.update(key, |count| if count < max { count + 1 } else { 0 })
    }

    /// Current counter of `key` (0 if never used)
    pub fn get(&self, key: &str) -> u8 {
        self.position(key)
            .map(|index| self.entries[index].1)
            .unwrap_or(0)
    }

    /// Number of keys with a non-zero counter
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if every counter is 0
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn update(&mut self, key: &str, step: impl FnOnce(u8) -> u8) -> Result<u8, StoreError> {
        if let Some(index) = self.position(key) {
            let next = step(self.entries[index].1);
            if next == 0 {
                self.entries.swap_remove(index);
            } else {
                self.entries[index].1 = next;
            }
            return Ok(next);
        }

        let next = step(0);
        if next == 0 {
            return Ok(0);
        }

        let owned = make_key(key)?;
        if self.entries.push((owned, next)).is_err() {
            warn!("Toggle store full, {} not changed", key);
            return Err(StoreError::Full);
        }
        Ok(next)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == key)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn toggle_has_period_two(presses in 1usize..64) {
            let mut toggles = ToggleStore::new();
            for i in 0..presses {
                prop_assert_eq!(toggles.toggle("t"), Ok(i % 2 == 0));
            }
        }

        #[test]
        fn counter_stays_within_bounds(max in 0u8..10, calls in 1usize..64) {
            let mut toggles = ToggleStore::new();
            for i in 0..calls {
                let count = toggles.increment_bounded("c", max).unwrap();
                prop_assert!(count <= max);
                prop_assert_eq!(count as usize, (i + 1) % (max as usize + 1));
            }
        }
    }
}
