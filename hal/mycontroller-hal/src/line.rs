//! Line-oriented link abstractions
//!
//! A link delivers newline-delimited text lines with the delimiter already
//! stripped, and accepts outgoing lines to which it appends its own
//! delimiter.

/// Which class of link a transport belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkKind {
    /// Radio link (BLE UART service)
    Bluetooth,
    /// Wired serial link (WebUSB)
    Serial,
}

/// Something that happened on a link since it was last polled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// The remote app connected
    Connected,
    /// A complete line is ready to be read with [`LineRx::read_line`]
    LineReady,
}

/// Line transmitter
pub trait LineTx {
    /// Error type for transmit operations
    type Error;

    /// Write one line, appending the link's delimiter
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Line receiver
pub trait LineRx {
    /// Error type for receive operations
    type Error;

    /// Return the next pending event, if any
    ///
    /// Never blocks.
    fn poll_event(&mut self) -> Option<LinkEvent>;

    /// Read the next complete line into `buf`, without its delimiter
    ///
    /// Returns the number of bytes written. Bytes that do not fit are
    /// discarded by the implementation.
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Combined line link
///
/// For links that can be started and used in both directions.
pub trait LineTransport: LineTx + LineRx {
    /// Bring the link up (advertise the UART service, configure the port, ...)
    fn start(&mut self) -> Result<(), <Self as LineTx>::Error>;
}
