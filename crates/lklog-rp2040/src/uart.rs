use embassy_rp::uart::{Blocking, UartTx};

use lklog_core::{Logger, SerialTransport, StandardLogger};

/// Blocking UART transmit half as the serial transport.
///
/// A hardware UART has no enumeration phase, so it reports ready
/// immediately and `begin` only pays the settle delay. Lines end with
/// CRLF for serial-terminal compatibility.
pub struct UartTransport<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartTransport<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }

    pub fn into_inner(self) -> UartTx<'d, Blocking> {
        self.tx
    }
}

impl SerialTransport for UartTransport<'_> {
    fn open(&mut self, baud_rate: u32) {
        self.tx.set_baudrate(baud_rate);
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn print(&mut self, text: &str) {
        let _ = self.tx.blocking_write(text.as_bytes());
    }

    fn println(&mut self, text: &str) {
        let _ = self.tx.blocking_write(text.as_bytes());
        let _ = self.tx.blocking_write(b"\r\n");
        let _ = self.tx.blocking_flush();
    }
}

/// Logger over one UART transmit half.
pub fn uart_logger<'d>(tx: UartTx<'d, Blocking>) -> StandardLogger<UartTransport<'d>> {
    Logger::new(UartTransport::new(tx))
}
