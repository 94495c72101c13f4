//! Cross-platform logging facility for embedded firmware.
//!
//! The core crate is platform-free: it owns the severity model, bounded
//! message formatting and output routing, and defines the capability
//! traits (`SerialTransport`, `NativeLogBackend`, `TimeSource`) that the
//! platform crates implement. A composition root constructs one `Logger`
//! per process and passes it around by reference.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod fake;
pub mod level;
pub mod logger;
pub mod message;
pub mod time;
pub mod transport;

pub use backend::{NativeLogBackend, NoNativeBackend};
pub use level::{LogLevel, NativeSeverity};
pub use logger::{
    COMPACT_MESSAGE_CAPACITY, CompactLogger, DEFAULT_BAUD_RATE, Logger, MESSAGE_CAPACITY,
    READY_POLL_MS, READY_TIMEOUT_MS, SELF_TAG, SETTLE_MS, StandardLogger,
};
pub use message::MessageBuffer;
pub use time::TimeSource;
pub use transport::SerialTransport;
