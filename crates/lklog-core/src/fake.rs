//! Fake collaborators for tests and host-side development.
//!
//! `FakeTransport` records everything printed to it, split into
//! completed lines; `FakeTimeSource` is a manual clock whose delays
//! advance it. Both live in the library proper so platform crates and
//! downstream firmware can reuse them.

use core::cell::Cell;
use core::mem;

use heapless::{String, Vec};

use crate::time::TimeSource;
use crate::transport::SerialTransport;

/// Longest line a fake can hold, prefix included.
pub const FAKE_LINE_CAPACITY: usize = 320;

/// How many completed lines a fake retains.
pub const FAKE_LINE_COUNT: usize = 16;

/// In-memory transport that captures output instead of sending it.
pub struct FakeTransport {
    ready: bool,
    opened_baud_rate: Option<u32>,
    current: String<FAKE_LINE_CAPACITY>,
    lines: Vec<String<FAKE_LINE_CAPACITY>, FAKE_LINE_COUNT>,
}

impl FakeTransport {
    pub const fn new() -> Self {
        Self {
            ready: true,
            opened_baud_rate: None,
            current: String::new(),
            lines: Vec::new(),
        }
    }

    /// A transport whose `is_ready` never turns true, for exercising
    /// the startup timeout.
    pub const fn never_ready() -> Self {
        Self {
            ready: false,
            opened_baud_rate: None,
            current: String::new(),
            lines: Vec::new(),
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Baud rate passed to the last `open`, if any.
    pub fn opened_baud_rate(&self) -> Option<u32> {
        self.opened_baud_rate
    }

    /// Completed lines, oldest first.
    pub fn lines(&self) -> &[String<FAKE_LINE_CAPACITY>] {
        &self.lines
    }

    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(|line| line.as_str())
    }

    /// Text printed since the last line break.
    pub fn pending(&self) -> &str {
        self.current.as_str()
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialTransport for FakeTransport {
    fn open(&mut self, baud_rate: u32) {
        self.opened_baud_rate = Some(baud_rate);
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn print(&mut self, text: &str) {
        let _ = self.current.push_str(text);
    }

    fn println(&mut self, text: &str) {
        let _ = self.current.push_str(text);
        let line = mem::take(&mut self.current);
        let _ = self.lines.push(line);
    }
}

/// Manual clock. `delay_ms` advances it, so code that polls with
/// delays sees time move.
pub struct FakeTimeSource {
    now_ms: Cell<u64>,
    delay_calls: Cell<u32>,
}

impl FakeTimeSource {
    pub const fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            delay_calls: Cell::new(0),
        }
    }

    pub fn delay_calls(&self) -> u32 {
        self.delay_calls.get()
    }
}

impl Default for FakeTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for FakeTimeSource {
    fn millis(&self) -> u64 {
        self.now_ms.get()
    }

    fn delay_ms(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get() + u64::from(ms));
        self.delay_calls.set(self.delay_calls.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_output_into_lines() {
        let mut transport = FakeTransport::new();
        transport.print("a");
        transport.print("b");
        transport.println("c");
        transport.print("d");
        assert_eq!(transport.lines().len(), 1);
        assert_eq!(transport.last_line(), Some("abc"));
        assert_eq!(transport.pending(), "d");
    }

    #[test]
    fn records_open() {
        let mut transport = FakeTransport::new();
        assert_eq!(transport.opened_baud_rate(), None);
        transport.open(115_200);
        assert_eq!(transport.opened_baud_rate(), Some(115_200));
    }

    #[test]
    fn delays_advance_the_clock() {
        let time = FakeTimeSource::new();
        assert_eq!(time.millis(), 0);
        time.delay_ms(10);
        time.delay_ms(15);
        assert_eq!(time.millis(), 25);
        assert_eq!(time.delay_calls(), 2);
    }
}
