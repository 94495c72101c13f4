//! The logger itself: startup, routing, and the formatted entry points.

use core::fmt;

use crate::backend::{NativeLogBackend, NoNativeBackend};
use crate::level::LogLevel;
use crate::message::MessageBuffer;
use crate::time::TimeSource;
use crate::transport::SerialTransport;

/// Baud rate used by [`Logger::begin_default`].
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// How long `begin` waits for the transport to report ready. Matters
/// mostly for USB CDC consoles that enumerate after power-on.
pub const READY_TIMEOUT_MS: u64 = 2_000;

/// Poll interval inside the readiness wait.
pub const READY_POLL_MS: u32 = 10;

/// Fixed settle delay after the readiness wait, ready or not.
pub const SETTLE_MS: u32 = 100;

/// Tag the logger uses for its own diagnostics.
pub const SELF_TAG: &str = "LKLOG";

/// Message capacity for the constrained device class (AVR and
/// ESP8266), prefix excluded.
pub const COMPACT_MESSAGE_CAPACITY: usize = 128;

/// Message capacity everywhere else, prefix excluded.
pub const MESSAGE_CAPACITY: usize = 256;

/// Logger with the regular 256-byte message buffer.
pub type StandardLogger<T, B = NoNativeBackend> = Logger<T, B, MESSAGE_CAPACITY>;

/// Logger with the 128-byte message buffer for small parts.
pub type CompactLogger<T, B = NoNativeBackend> = Logger<T, B, COMPACT_MESSAGE_CAPACITY>;

/// Unified logging front end over a serial transport and an optional
/// native backend.
///
/// Construct one per process at the composition root and hand it to
/// every component that logs. All operations are fire-and-forget: a
/// logger never reports failure to its caller.
pub struct Logger<T, B, const CAP: usize> {
    transport: T,
    backend: B,
    use_native: bool,
}

impl<T: SerialTransport, const CAP: usize> Logger<T, NoNativeBackend, CAP> {
    /// Logger over a plain serial transport, no native backend.
    pub fn new(transport: T) -> Self {
        Self::with_native_backend(transport, NoNativeBackend)
    }
}

impl<T: SerialTransport, B: NativeLogBackend, const CAP: usize> Logger<T, B, CAP> {
    /// Logger that can additionally route into a platform backend once
    /// [`set_native_esp`](Self::set_native_esp) enables it.
    pub fn with_native_backend(transport: T, backend: B) -> Self {
        Self {
            transport,
            backend,
            use_native: false,
        }
    }

    /// Open the transport at `baud_rate` and wait for it to come up.
    ///
    /// Polls readiness every [`READY_POLL_MS`] for at most
    /// [`READY_TIMEOUT_MS`], then settles for [`SETTLE_MS`] either way.
    /// A transport that never reports ready is not an error; output
    /// just goes nowhere until it does. Native routing is switched off
    /// so a fresh `begin` always starts in serial mode.
    pub fn begin(&mut self, baud_rate: u32, time: &impl TimeSource) {
        self.transport.open(baud_rate);
        self.use_native = false;
        let start = time.millis();
        while !self.transport.is_ready() && time.millis().wrapping_sub(start) < READY_TIMEOUT_MS {
            time.delay_ms(READY_POLL_MS);
        }
        time.delay_ms(SETTLE_MS);
    }

    /// [`begin`](Self::begin) at [`DEFAULT_BAUD_RATE`].
    pub fn begin_default(&mut self, time: &impl TimeSource) {
        self.begin(DEFAULT_BAUD_RATE, time);
    }

    /// Format and emit one message.
    ///
    /// With the native backend available and enabled the record goes
    /// there, levels collapsed to its severity set. Otherwise the
    /// message is expanded into a bounded buffer (overflow truncates
    /// silently) and written to the transport as
    /// `[<LEVEL>][<TAG>] <message>` plus a line break.
    pub fn log(&mut self, level: LogLevel, tag: &str, args: fmt::Arguments<'_>) {
        if self.backend.available() && self.use_native {
            self.backend.write(level.native_severity(), tag, args);
            return;
        }
        let mut message = MessageBuffer::<CAP>::new();
        message.write_args(args);
        self.transport.print("[");
        self.transport.print(level.label());
        self.transport.print("][");
        self.transport.print(tag);
        self.transport.print("] ");
        self.transport.println(message.as_str());
    }

    /// [`log`](Self::log) at [`LogLevel::Info`].
    pub fn log_info(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, tag, args);
    }

    /// [`log`](Self::log) at [`LogLevel::Warning`].
    pub fn log_warning(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, tag, args);
    }

    /// [`log`](Self::log) at [`LogLevel::Error`].
    pub fn log_error(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, tag, args);
    }

    /// Toggle routing into the native backend.
    ///
    /// Without an available backend the request is dropped and one
    /// informational line tagged [`SELF_TAG`] notes the feature is
    /// ESP32-only. A soft rejection, not an error.
    pub fn set_native_esp(&mut self, enable: bool) {
        if self.backend.available() {
            self.use_native = enable;
        } else {
            self.log_info(SELF_TAG, format_args!("Only for ESP32!"));
        }
    }

    /// Whether records currently route into the native backend.
    pub fn is_native_enabled(&self) -> bool {
        self.use_native
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Log at an explicit level with inline format arguments.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log($level, $tag, ::core::format_args!($($arg)+))
    };
}

/// Log at info level with inline format arguments.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log_info($tag, ::core::format_args!($($arg)+))
    };
}

/// Log at warning level with inline format arguments.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log_warning($tag, ::core::format_args!($($arg)+))
    };
}

/// Log at error level with inline format arguments.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log_error($tag, ::core::format_args!($($arg)+))
    };
}
