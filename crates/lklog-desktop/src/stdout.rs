use std::io::{self, Write};

use lklog_core::SerialTransport;

/// Host stdout as the serial transport. Always ready; `open` is a
/// no-op because there is nothing to configure.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutTransport;

impl StdoutTransport {
    pub const fn new() -> Self {
        Self
    }
}

impl SerialTransport for StdoutTransport {
    fn open(&mut self, _baud_rate: u32) {}

    fn is_ready(&self) -> bool {
        true
    }

    fn print(&mut self, text: &str) {
        let _ = io::stdout().write_all(text.as_bytes());
    }

    fn println(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.write_all(b"\n");
        let _ = out.flush();
    }
}
