//! ESP-IDF implementations of the logging capability traits.
//!
//! `ConsoleTransport` and `UartTransport` carry the serial line format,
//! `EspLogBackend` routes into the native `esp_log` machinery, and
//! `FreeRtosTime` drives the startup wait. Everything is compiled only
//! for `target_os = "espidf"`; on other targets this crate is an empty
//! shell so the workspace still builds on the host.

#[cfg(target_os = "espidf")]
mod backend;
#[cfg(target_os = "espidf")]
mod console;
#[cfg(target_os = "espidf")]
mod time;
#[cfg(target_os = "espidf")]
mod uart;

#[cfg(target_os = "espidf")]
pub use self::{
    backend::EspLogBackend,
    console::{ConsoleTransport, console_logger},
    time::FreeRtosTime,
    uart::{UartTransport, uart_logger},
};
