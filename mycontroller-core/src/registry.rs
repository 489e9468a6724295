//! Handler registration
//!
//! Command handlers run in registration order on every dispatch cycle.
//! There is at most one setup callback; it only runs when the handshake
//! applies settings.

use alloc::boxed::Box;
use heapless::Vec;

use crate::config::ConfirmationMode;
use crate::session::Session;

/// Maximum number of command handlers
pub const MAX_HANDLERS: usize = 8;

/// A boxed handler closure
pub type Handler = Box<dyn FnMut(&mut Session<'_>)>;

/// Errors that can occur when registering handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// [`MAX_HANDLERS`] command handlers are already registered
    Full,
}

/// The setup callback and how the handshake should treat it
pub struct SetupHandler {
    pub(crate) mode: ConfirmationMode,
    pub(crate) callback: Handler,
}

/// Registered handlers
#[derive(Default)]
pub struct HandlerRegistry {
    setup: Option<SetupHandler>,
    commands: Vec<Handler, MAX_HANDLERS>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            setup: None,
            commands: Vec::new(),
        }
    }

    /// Append a command handler
    pub fn add_command(&mut self, handler: Handler) -> Result<(), RegistryError> {
        self.commands
            .push(handler)
            .map_err(|_| RegistryError::Full)
    }

    /// Install the setup callback
    ///
    /// Returns true if an earlier callback was replaced.
    pub fn set_setup(&mut self, mode: ConfirmationMode, callback: Handler) -> bool {
        self.setup
            .replace(SetupHandler { mode, callback })
            .is_some()
    }

    /// Confirmation mode of the setup callback, if one is installed
    pub fn setup_mode(&self) -> Option<ConfirmationMode> {
        self.setup.as_ref().map(|setup| setup.mode)
    }

    /// Number of command handlers
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub(crate) fn setup_mut(&mut self) -> Option<&mut SetupHandler> {
        self.setup.as_mut()
    }

    pub(crate) fn commands_mut(&mut self) -> impl Iterator<Item = &mut Handler> {
        self.commands.iter_mut()
    }
}
