//! In-memory link for tests

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use mycontroller_hal::{LineRx, LineTransport, LineTx, LinkEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Records written lines and replays scripted inbound events
#[derive(Debug, Default)]
pub struct MockLink {
    sent: Vec<String>,
    events: VecDeque<LinkEvent>,
    lines: VecDeque<Vec<u8>>,
    started: bool,
    fail_writes: bool,
    fail_start: bool,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Queue a connect event
    pub fn connect(&mut self) {
        self.events.push_back(LinkEvent::Connected);
    }

    /// Queue an inbound line
    pub fn push_line(&mut self, line: &str) {
        self.push_raw(line.as_bytes());
    }

    /// Queue an inbound line as raw bytes
    pub fn push_raw(&mut self, bytes: &[u8]) {
        self.events.push_back(LinkEvent::LineReady);
        self.lines.push_back(bytes.to_vec());
    }

    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    pub fn fail_start(&mut self) {
        self.fail_start = true;
    }
}

impl LineTx for MockLink {
    type Error = MockError;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError);
        }
        self.sent.push(String::from(line));
        Ok(())
    }
}

impl LineRx for MockLink {
    type Error = MockError;

    fn poll_event(&mut self) -> Option<LinkEvent> {
        self.events.pop_front()
    }

    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let line = self.lines.pop_front().ok_or(MockError)?;
        let len = line.len().min(buf.len());
        buf[..len].copy_from_slice(&line[..len]);
        Ok(len)
    }
}

impl LineTransport for MockLink {
    fn start(&mut self) -> Result<(), <Self as LineTx>::Error> {
        if self.fail_start {
            return Err(MockError);
        }
        self.started = true;
        Ok(())
    }
}
