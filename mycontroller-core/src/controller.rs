//! Main controller tying links, stores, handshake and handlers together
//!
//! The controller is the single owner of all command state:
//! - Transport events feed [`Controller::on_line_received`] and
//!   [`Controller::on_connected`], which only update the stores
//! - [`Controller::tick`] drains one pending key per call and runs the
//!   handshake and the handlers for it
//!
//! Handlers never run from a transport callback, so a dispatch cycle is
//! never re-entered.

use alloc::boxed::Box;

use mycontroller_hal::{LineTransport, LinkEvent, LinkKind};
use mycontroller_protocol::{parse, ConfigLine, ParsedCommand, MAX_LINE_LEN};

use crate::config::ConfirmationMode;
use crate::handshake::{SetupAction, SetupEvent, SetupState};
use crate::link::{read_line, ConnectionState, LinkError, Links, Outbound};
use crate::registry::{HandlerRegistry, RegistryError};
use crate::session::{send_config, send_settings, Session};
use crate::store::{CurrentCommand, PendingCommands, PressedKeys, ToggleStore};

/// Command engine for one device
pub struct Controller<B, S> {
    /// Values waiting for dispatch
    pending: PendingCommands,
    /// Keys held down
    pressed: PressedKeys,
    /// Per-key toggle counters
    toggles: ToggleStore,
    /// Last dispatched command
    current: Option<CurrentCommand>,
    /// Handshake state
    setup_state: SetupState,
    /// BLE and serial links
    links: Links<B, S>,
    /// Registered handlers
    handlers: HandlerRegistry,
}

impl<B, S> Default for Controller<B, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, S> Controller<B, S> {
    /// Create a controller with no links and no handlers
    pub const fn new() -> Self {
        Self {
            pending: PendingCommands::new(),
            pressed: PressedKeys::new(),
            toggles: ToggleStore::new(),
            current: None,
            setup_state: SetupState::Idle,
            links: Links::new(),
            handlers: HandlerRegistry::new(),
        }
    }

    /// Register a command handler
    ///
    /// Handlers run in registration order, once per dispatched key.
    pub fn on_command<F>(&mut self, handler: F) -> Result<(), RegistryError>
    where
        F: FnMut(&mut Session<'_>) + 'static,
    {
        self.handlers.add_command(Box::new(handler))
    }

    /// Register the setup callback that sends the button layout
    ///
    /// Replaces any earlier setup callback.
    pub fn on_setup<F>(&mut self, mode: ConfirmationMode, callback: F)
    where
        F: FnMut(&mut Session<'_>) + 'static,
    {
        if self.handlers.set_setup(mode, Box::new(callback)) {
            warn!("Setup callback replaced");
        }
    }

    /// Feed one received line
    ///
    /// Updates the pressed keys and queues the value. Lines that cannot be
    /// stored are dropped with a warning.
    pub fn on_line_received(&mut self, line: &str) {
        let command = parse(line);

        match command {
            ParsedCommand::Press { key } => {
                if let Err(e) = self.pressed.set_pressed(key) {
                    warn!("Cannot track press of {}: {:?}", key, e);
                }
            }
            ParsedCommand::Release { key } => self.pressed.clear_pressed(key),
            ParsedCommand::ReleaseAll => self.pressed.clear_all(),
            ParsedCommand::Value { .. } => {}
            ParsedCommand::Empty => {
                trace!("Ignoring empty line");
                return;
            }
        }

        if let (Some(key), Some(value)) = (command.key(), command.value()) {
            if let Err(e) = self.pending.offer(key, value) {
                warn!("Dropping command {}: {:?}", key, e);
            }
        }
    }

    /// Handle a link connect event
    ///
    /// Keys held before the connect are released. A BLE link becomes active
    /// here; a serial link only once `usbOn` is dispatched.
    pub fn on_connected(&mut self, kind: LinkKind) {
        if kind == LinkKind::Bluetooth {
            self.links.activate(LinkKind::Bluetooth);
        }
        self.pressed.clear_all();
        debug!("Link connected: {:?}", kind);
    }

    /// Key of the last dispatched command
    pub fn current_key(&self) -> Option<&str> {
        self.current.as_ref().map(CurrentCommand::key)
    }

    /// Value of the last dispatched command
    pub fn current_value(&self) -> Option<f64> {
        self.current.as_ref().map(CurrentCommand::value)
    }

    /// Number of keys waiting for dispatch
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Check if a key is held down
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.is_pressed(key)
    }

    /// Number of keys held down
    pub fn pressed_count(&self) -> usize {
        self.pressed.count()
    }

    /// Toggle counter of a key
    pub fn toggle_state(&self, key: &str) -> u8 {
        self.toggles.get(key)
    }

    /// Handshake state
    pub fn setup_state(&self) -> SetupState {
        self.setup_state
    }

    /// Which links are active
    pub fn connection(&self) -> ConnectionState {
        self.links.connection_state()
    }

    /// Borrow the links
    pub fn links_mut(&mut self) -> &mut Links<B, S> {
        &mut self.links
    }
}

impl<B: LineTransport, S: LineTransport> Controller<B, S> {
    /// Attach and start the BLE transport
    pub fn use_bluetooth(&mut self, link: B) -> Result<(), LinkError> {
        self.links.attach_bluetooth(link)
    }

    /// Attach and start the serial transport
    pub fn use_serial(&mut self, link: S) -> Result<(), LinkError> {
        self.links.attach_serial(link)
    }

    /// Drain every pending transport event into the stores
    ///
    /// Never runs handlers; call [`Controller::tick`] for that.
    pub fn poll_links(&mut self) {
        for kind in [LinkKind::Bluetooth, LinkKind::Serial] {
            while let Some(event) = self.next_event(kind) {
                match event {
                    LinkEvent::Connected => self.on_connected(kind),
                    LinkEvent::LineReady => {
                        let mut buf = [0u8; MAX_LINE_LEN];
                        match self.read_from(kind, &mut buf) {
                            Ok(line) => self.on_line_received(line),
                            Err(e) => warn!("Dropping line from {:?}: {:?}", kind, e),
                        }
                    }
                }
            }
        }
    }

    fn next_event(&mut self, kind: LinkKind) -> Option<LinkEvent> {
        match kind {
            LinkKind::Bluetooth => self.links.bluetooth_mut()?.poll_event(),
            LinkKind::Serial => self.links.serial_mut()?.poll_event(),
        }
    }

    fn read_from<'b>(&mut self, kind: LinkKind, buf: &'b mut [u8]) -> Result<&'b str, LinkError> {
        match kind {
            LinkKind::Bluetooth => match self.links.bluetooth_mut() {
                Some(link) => read_line(link, buf),
                None => Err(LinkError::ReadFailed),
            },
            LinkKind::Serial => match self.links.serial_mut() {
                Some(link) => read_line(link, buf),
                None => Err(LinkError::ReadFailed),
            },
        }
    }

    /// Run one dispatch cycle
    ///
    /// Drains at most one key. Returns false if nothing was pending.
    pub fn tick(&mut self) -> bool {
        let Some((key, value)) = self.pending.drain_next() else {
            return false;
        };

        let Self {
            pressed,
            toggles,
            current,
            setup_state,
            links,
            handlers,
            ..
        } = self;

        let command = &*current.insert(CurrentCommand::new(key, value));
        trace!("Dispatching {} = {}", command.key(), command.value());

        if let Some(event) = SetupEvent::from_key(command.key()) {
            let mode = handlers.setup_mode();
            if event.needs_setup() && mode.is_none() {
                trace!("No setup callback, ignoring {:?}", event);
            } else {
                let (next, action) = setup_state.transition(event, mode.unwrap_or_default());
                debug!("Handshake {:?} -> {:?}: {:?}", *setup_state, next, action);
                *setup_state = next;

                match action {
                    SetupAction::Advertise => {
                        let _ = send_config(links, &ConfigLine::HasSettings);
                    }
                    SetupAction::Apply => {
                        if let Some(setup) = handlers.setup_mut() {
                            let _ = send_config(links, &ConfigLine::Loader(true));
                            let mut session = Session::new(command, pressed, toggles, links);
                            (setup.callback)(&mut session);
                            let _ = send_config(links, &ConfigLine::Loader(false));
                        }
                    }
                    SetupAction::AttachSerial => {
                        links.activate(LinkKind::Serial);
                        pressed.clear_all();
                    }
                }
            }
        }

        for handler in handlers.commands_mut() {
            let mut session = Session::new(command, pressed, toggles, links);
            handler(&mut session);
        }

        true
    }

    /// Send a raw line to every active link
    pub fn send_data(&mut self, line: &str) {
        self.links.send_line(line);
    }

    /// Send an exported settings string, one line at a time
    pub fn apply_settings(&mut self, data: &str) {
        send_settings(&mut self.links, data);
    }

    /// Reset the app layout
    pub fn restore_defaults(&mut self) {
        let _ = send_config(&mut self.links, &ConfigLine::Init);
    }
}
