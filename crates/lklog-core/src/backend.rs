//! Native structured-logging backend abstraction.

use core::fmt;

use crate::level::NativeSeverity;

/// Platform-provided logging subsystem with its own severities and
/// formatting. ESP-IDF's `esp_log` family is the one real instance;
/// everywhere else `NoNativeBackend` stands in.
pub trait NativeLogBackend {
    /// Whether the backend exists on this build.
    fn available(&self) -> bool;

    /// Format and emit one message, including the trailing line break.
    fn write(&mut self, severity: NativeSeverity, tag: &str, args: fmt::Arguments<'_>);
}

/// Stand-in for platforms without a native backend.
///
/// `Logger::new` composes this; `set_native_esp` soft-rejects against it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNativeBackend;

impl NativeLogBackend for NoNativeBackend {
    fn available(&self) -> bool {
        false
    }

    fn write(&mut self, _severity: NativeSeverity, _tag: &str, _args: fmt::Arguments<'_>) {}
}
