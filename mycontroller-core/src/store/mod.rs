//! Per-key command state
//!
//! Fixed-capacity stores keyed by command key. They never allocate; when a
//! store is full or a key is too long, the caller gets a [`StoreError`]
//! and decides whether to drop the update.

pub mod pending;
pub mod pressed;
pub mod toggles;

pub use pending::{PendingCommands, MAX_PENDING};
pub use pressed::{PressedKeys, MAX_PRESSED};
pub use toggles::{ToggleStore, MAX_TOGGLES};

use heapless::String;
use mycontroller_protocol::MAX_KEY_LEN;

/// An owned command key
pub type Key = String<MAX_KEY_LEN>;

/// Errors returned by the key stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// No free slot for a new key
    Full,
    /// Key longer than [`MAX_KEY_LEN`]
    KeyTooLong,
}

/// Copy a borrowed key into an owned one
pub(crate) fn make_key(key: &str) -> Result<Key, StoreError> {
    let mut owned = Key::new();
    owned.push_str(key).map_err(|_| StoreError::KeyTooLong)?;
    Ok(owned)
}

/// The command being dispatched in the current cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentCommand {
    key: Key,
    value: f64,
}

impl CurrentCommand {
    /// Create a snapshot of a drained command
    pub fn new(key: Key, value: f64) -> Self {
        Self { key, value }
    }

    /// Command key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Command value (may be NaN for non-numeric payloads)
    pub fn value(&self) -> f64 {
        self.value
    }
}
