use lklog_core::{CompactLogger, LogLevel, StandardLogger, log_error, log_info, log_warning};
use lklog_desktop::{StdoutTransport, SystemTimeSource};

fn main() -> anyhow::Result<()> {
    let time = SystemTimeSource::new();
    let mut logger = StandardLogger::new(StdoutTransport::new());
    logger.begin_default(&time);

    logger.log(LogLevel::None, "demo", format_args!("logger up"));
    log_info!(logger, "wifi", "connected, rssi {}", -61);
    log_warning!(logger, "wifi", "weak signal");
    log_error!(logger, "sd", "mount failed");
    lklog_core::log!(logger, LogLevel::Debug, "dht", "t={} h={}", 21, 48);
    lklog_core::log!(logger, LogLevel::Verbose, "dht", "raw read ok");

    // No native backend on the host, so this logs the rejection line.
    logger.set_native_esp(true);

    // The compact capacity class cuts the message at 127 bytes.
    let mut compact = CompactLogger::new(StdoutTransport::new());
    let long = "x".repeat(300);
    log_info!(compact, "demo", "{long}");

    // log-crate macros land in the same line format.
    lklog_desktop::install()?;
    log::info!(target: "facade", "routed through the log crate");
    log::trace!(target: "facade", "trace maps to VERBOSE");

    Ok(())
}
