//! Links to the app and outbound fan-out
//!
//! The device may be reached over BLE and serial at the same time. Every
//! outbound line goes to each link that is currently active; inactive links
//! are skipped, never queued.

use mycontroller_hal::{LineRx, LineTransport, LineTx, LinkEvent, LinkKind};

/// Errors that can occur on a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The transport failed to start
    StartFailed,
    /// The transport failed to read a line
    ReadFailed,
    /// A received line was not valid UTF-8
    InvalidUtf8,
}

/// Which links are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionState {
    /// The app connected over BLE
    pub bluetooth: bool,
    /// The app announced itself over serial (`usbOn`)
    pub serial: bool,
}

impl ConnectionState {
    /// Check if a link of the given kind is active
    pub fn is_active(&self, kind: LinkKind) -> bool {
        match kind {
            LinkKind::Bluetooth => self.bluetooth,
            LinkKind::Serial => self.serial,
        }
    }

    /// Check if any link is active
    pub fn any_active(&self) -> bool {
        self.bluetooth || self.serial
    }
}

/// Sink for outbound lines
///
/// Object-safe so handlers can send without knowing the transport types.
pub trait Outbound {
    /// Send one line to every active link
    ///
    /// Write failures are logged and dropped.
    fn send_line(&mut self, line: &str);

    /// Current connection state
    fn connection(&self) -> ConnectionState;
}

/// The device's links to the app
#[derive(Debug)]
pub struct Links<B, S> {
    bluetooth: Option<B>,
    serial: Option<S>,
    state: ConnectionState,
}

impl<B, S> Default for Links<B, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, S> Links<B, S> {
    /// Create with no links attached
    pub const fn new() -> Self {
        Self {
            bluetooth: None,
            serial: None,
            state: ConnectionState {
                bluetooth: false,
                serial: false,
            },
        }
    }

    /// Mark a link active
    pub fn activate(&mut self, kind: LinkKind) {
        match kind {
            LinkKind::Bluetooth => self.state.bluetooth = true,
            LinkKind::Serial => self.state.serial = true,
        }
    }

    /// Which links are active
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// Borrow the BLE transport
    pub fn bluetooth_mut(&mut self) -> Option<&mut B> {
        self.bluetooth.as_mut()
    }

    /// Borrow the serial transport
    pub fn serial_mut(&mut self) -> Option<&mut S> {
        self.serial.as_mut()
    }
}

impl<B: LineTransport, S: LineTransport> Links<B, S> {
    /// Attach and start the BLE transport
    ///
    /// The link becomes active when the app connects.
    pub fn attach_bluetooth(&mut self, mut link: B) -> Result<(), LinkError> {
        link.start().map_err(|_| LinkError::StartFailed)?;
        self.bluetooth = Some(link);
        debug!("Bluetooth link started");
        Ok(())
    }

    /// Attach and start the serial transport
    ///
    /// The link becomes active when the app sends `usbOn`.
    pub fn attach_serial(&mut self, mut link: S) -> Result<(), LinkError> {
        link.start().map_err(|_| LinkError::StartFailed)?;
        self.serial = Some(link);
        debug!("Serial link started");
        Ok(())
    }
}

impl<B: LineTx, S: LineTx> Outbound for Links<B, S> {
    fn send_line(&mut self, line: &str) {
        if self.state.bluetooth {
            if let Some(link) = self.bluetooth.as_mut() {
                if link.write_line(line).is_err() {
                    warn!("Bluetooth write failed, dropping line");
                }
            }
        }

        if self.state.serial {
            if let Some(link) = self.serial.as_mut() {
                if link.write_line(line).is_err() {
                    warn!("Serial write failed, dropping line");
                }
            }
        }
    }

    fn connection(&self) -> ConnectionState {
        self.connection_state()
    }
}

/// Read the next line from a link into `buf`
pub(crate) fn read_line<'b, L: LineRx>(link: &mut L, buf: &'b mut [u8]) -> Result<&'b str, LinkError> {
    let len = link.read_line(buf).map_err(|_| LinkError::ReadFailed)?;
    let len = len.min(buf.len());
    core::str::from_utf8(&buf[..len]).map_err(|_| LinkError::InvalidUtf8)
}

/// Placeholder for a link the device does not have
///
/// Uninhabited, so a `Controller<Ble, NoLink>` can never attach a serial link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoLink {}

impl LineTx for NoLink {
    type Error = core::convert::Infallible;

    fn write_line(&mut self, _line: &str) -> Result<(), Self::Error> {
        match *self {}
    }
}

impl LineRx for NoLink {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Option<LinkEvent> {
        match *self {}
    }

    fn read_line(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        match *self {}
    }
}

impl LineTransport for NoLink {
    fn start(&mut self) -> Result<(), <Self as LineTx>::Error> {
        match *self {}
    }
}
