use esp_idf_hal::delay::FreeRtos;

use lklog_core::TimeSource;

/// Millisecond clock over `esp_timer`, delays through FreeRTOS so the
/// scheduler keeps running during the startup wait.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeRtosTime;

impl FreeRtosTime {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for FreeRtosTime {
    fn millis(&self) -> u64 {
        let micros = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        (micros / 1_000) as u64
    }

    fn delay_ms(&self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
