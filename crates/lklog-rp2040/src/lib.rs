//! RP2040 implementations of the logging capability traits, built on
//! the blocking half of the embassy-rp UART.
//!
//! Compiled only for ARM targets; on the host this crate is an empty
//! shell so the workspace still builds there. The ARM build enables the
//! core crate's `defmt` feature so its enums carry `defmt::Format`.

#![no_std]

#[cfg(target_arch = "arm")]
mod time;
#[cfg(target_arch = "arm")]
mod uart;

#[cfg(target_arch = "arm")]
pub use self::{
    time::EmbassyTimeSource,
    uart::{UartTransport, uart_logger},
};
