use embassy_time::{Duration, Instant, block_for};

use lklog_core::TimeSource;

/// Millisecond clock over the embassy time driver. Delays busy-wait,
/// which is what the startup poll wants outside an async context.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyTimeSource;

impl EmbassyTimeSource {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for EmbassyTimeSource {
    fn millis(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn delay_ms(&self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
