//! Character-output transport abstraction.

/// Serial/UART-like byte-stream sink for plain-text log lines.
///
/// Implementations are fire-and-forget: they swallow their own I/O
/// errors, and a transport that is not ready simply drops writes. The
/// facility never observes a transport failure.
pub trait SerialTransport {
    /// Open the transport at the given baud rate.
    fn open(&mut self, baud_rate: u32);

    /// Whether the transport can accept writes.
    ///
    /// USB-CDC-backed ports report false until the host enumerates them;
    /// hardware UARTs are ready as soon as they are open.
    fn is_ready(&self) -> bool;

    /// Write text without a line terminator.
    fn print(&mut self, text: &str);

    /// Write text followed by the transport's line ending.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }
}
