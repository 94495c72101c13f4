use std::io::{self, Write};

use lklog_core::{Logger, SerialTransport, StandardLogger};

use crate::backend::EspLogBackend;

/// ESP-IDF console (stdout) as the serial transport.
///
/// The runtime owns the console UART and configures its baud rate from
/// sdkconfig, so `open` is a no-op and the transport is always ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub const fn new() -> Self {
        Self
    }
}

impl SerialTransport for ConsoleTransport {
    fn open(&mut self, _baud_rate: u32) {}

    fn is_ready(&self) -> bool {
        true
    }

    fn print(&mut self, text: &str) {
        let _ = io::stdout().write_all(text.as_bytes());
    }

    fn println(&mut self, text: &str) {
        let mut out = io::stdout();
        let _ = out.write_all(text.as_bytes());
        let _ = out.write_all(b"\n");
        let _ = out.flush();
    }
}

/// Logger over the console with the native backend composed in.
pub fn console_logger() -> StandardLogger<ConsoleTransport, EspLogBackend> {
    Logger::with_native_backend(ConsoleTransport::new(), EspLogBackend::new())
}
