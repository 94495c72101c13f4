//! Monotonic time abstraction for the readiness wait in `begin`.

/// Milliseconds-since-start clock plus a blocking sleep.
pub trait TimeSource {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn millis(&self) -> u64;

    /// Block for `ms` milliseconds.
    fn delay_ms(&self, ms: u32);
}
