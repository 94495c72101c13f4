use esp_idf_hal::uart::UartDriver;
use esp_idf_hal::units::Hertz;

use lklog_core::{Logger, SerialTransport, StandardLogger};

use crate::backend::EspLogBackend;

/// Dedicated UART as the serial transport, for boards whose console is
/// taken by something else (USB JTAG, modem passthrough).
///
/// `open` reprograms the baud rate on the already-constructed driver;
/// write errors are swallowed like everywhere else in the facility.
pub struct UartTransport<'d> {
    driver: UartDriver<'d>,
}

impl<'d> UartTransport<'d> {
    pub fn new(driver: UartDriver<'d>) -> Self {
        Self { driver }
    }

    pub fn into_inner(self) -> UartDriver<'d> {
        self.driver
    }
}

impl SerialTransport for UartTransport<'_> {
    fn open(&mut self, baud_rate: u32) {
        let _ = self.driver.change_baudrate(Hertz(baud_rate));
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn print(&mut self, text: &str) {
        let _ = self.driver.write(text.as_bytes());
    }
}

/// Logger over a dedicated UART with the native backend composed in.
pub fn uart_logger<'d>(driver: UartDriver<'d>) -> StandardLogger<UartTransport<'d>, EspLogBackend> {
    Logger::with_native_backend(UartTransport::new(driver), EspLogBackend::new())
}
