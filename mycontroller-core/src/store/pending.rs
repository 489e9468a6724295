//! Coalescing queue of commands waiting for dispatch
//!
//! Holds at most one value per key. Offering a value for a key that is
//! already pending overwrites it in place, so a burst of slider or joystick
//! updates collapses to the latest sample. Keys drain first-in first-out,
//! one at a time.

use heapless::Vec;

use super::{make_key, Key, StoreError};

/// Maximum number of distinct keys pending at once
pub const MAX_PENDING: usize = 32;

/// Latest undelivered value per command key
#[derive(Debug, Clone, Default)]
pub struct PendingCommands {
    entries: Vec<(Key, f64), MAX_PENDING>,
}

impl PendingCommands {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite the pending value for `key`
    ///
    /// An overwrite keeps the key's position in the queue.
    pub fn offer(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        if let Some(index) = self.position(key) {
            self.entries[index].1 = value;
            return Ok(());
        }

        let key = make_key(key)?;
        self.entries
            .push((key, value))
            .map_err(|_| StoreError::Full)
    }

    /// Remove and return the oldest pending key with its latest value
    pub fn drain_next(&mut self) -> Option<(Key, f64)> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.remove(0))
    }

    /// Latest pending value for `key`
    pub fn get(&self, key: &str) -> Option<f64> {
        self.position(key).map(|index| self.entries[index].1)
    }

    /// Number of pending keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is waiting for dispatch
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == key)
    }
}
