use core::fmt;
use std::ffi::CString;

use lklog_core::{NativeLogBackend, NativeSeverity};

/// Native backend over ESP-IDF's `esp_log` machinery.
///
/// Messages are pre-formatted on the Rust side and handed to
/// `esp_log_write` through a `"%s\n"` format, so the trailing line
/// break is part of every record. Tags or messages with interior NUL
/// bytes degrade to empty C strings instead of failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct EspLogBackend;

impl EspLogBackend {
    pub const fn new() -> Self {
        Self
    }
}

impl NativeLogBackend for EspLogBackend {
    fn available(&self) -> bool {
        true
    }

    fn write(&mut self, severity: NativeSeverity, tag: &str, args: fmt::Arguments<'_>) {
        let level = match severity {
            NativeSeverity::Error => esp_idf_svc::sys::esp_log_level_t_ESP_LOG_ERROR,
            NativeSeverity::Warn => esp_idf_svc::sys::esp_log_level_t_ESP_LOG_WARN,
            NativeSeverity::Info => esp_idf_svc::sys::esp_log_level_t_ESP_LOG_INFO,
        };

        let tag = CString::new(tag).unwrap_or_default();
        let message = CString::new(format!("{}", args)).unwrap_or_default();

        unsafe {
            esp_idf_svc::sys::esp_log_write(
                level,
                tag.as_ptr() as *const u8,
                b"%s\n\0".as_ptr(),
                message.as_ptr(),
            );
        }
    }
}
