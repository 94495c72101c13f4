//! Bridge from the `log` facade to the serial line format, so code
//! written against `log::info!` and friends lands in the same
//! `[<LEVEL>][<TAG>] <message>` output as direct logger calls.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use lklog_core::{LogLevel, SerialTransport, StandardLogger};

use crate::stdout::StdoutTransport;

/// `log::Log` adapter over a [`StandardLogger`].
///
/// The facade hands out `&self`, so the logger sits behind a mutex.
/// `record.target()` becomes the tag. No level filtering happens here;
/// whatever `log::max_level` lets through gets written.
pub struct FacadeLogger<T> {
    inner: Mutex<StandardLogger<T>>,
}

impl<T: SerialTransport> FacadeLogger<T> {
    pub fn new(logger: StandardLogger<T>) -> Self {
        Self {
            inner: Mutex::new(logger),
        }
    }

    /// Run `f` against the wrapped logger. `None` if the mutex is
    /// poisoned.
    pub fn with_logger<R>(&self, f: impl FnOnce(&mut StandardLogger<T>) -> R) -> Option<R> {
        self.inner.lock().ok().map(|mut guard| f(&mut guard))
    }
}

impl<T: SerialTransport + Send> Log for FacadeLogger<T> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = match record.level() {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warning,
            Level::Info => LogLevel::Info,
            Level::Debug => LogLevel::Debug,
            Level::Trace => LogLevel::Verbose,
        };
        if let Ok(mut logger) = self.inner.lock() {
            logger.log(level, record.target(), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Install a stdout-backed facade as the process-wide `log` logger.
///
/// Leaks one logger to satisfy the `'static` registration; fails if
/// another logger got there first. The max level opens up to `Trace`
/// because the facility does not filter.
pub fn install() -> anyhow::Result<&'static FacadeLogger<StdoutTransport>> {
    let facade: &'static FacadeLogger<StdoutTransport> = Box::leak(Box::new(FacadeLogger::new(
        StandardLogger::new(StdoutTransport::new()),
    )));
    log::set_logger(facade)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(facade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lklog_core::fake::FakeTransport;

    fn new_facade() -> FacadeLogger<FakeTransport> {
        FacadeLogger::new(StandardLogger::new(FakeTransport::new()))
    }

    fn captured(facade: &FacadeLogger<FakeTransport>) -> Vec<String> {
        facade
            .with_logger(|logger| {
                logger
                    .transport()
                    .lines()
                    .iter()
                    .map(|line| line.as_str().to_owned())
                    .collect()
            })
            .unwrap()
    }

    #[test]
    fn maps_every_facade_level() {
        let facade = new_facade();
        let levels = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ];
        for level in levels {
            facade.log(
                &Record::builder()
                    .level(level)
                    .target("app")
                    .args(format_args!("m"))
                    .build(),
            );
        }
        assert_eq!(
            captured(&facade),
            [
                "[ERROR][app] m",
                "[WARNING][app] m",
                "[INFO][app] m",
                "[DEBUG][app] m",
                "[VERBOSE][app] m",
            ]
        );
    }

    #[test]
    fn target_becomes_the_tag_and_args_format() {
        let facade = new_facade();
        facade.log(
            &Record::builder()
                .level(Level::Info)
                .target("net")
                .args(format_args!("ip={}", "10.0.0.2"))
                .build(),
        );
        assert_eq!(captured(&facade), ["[INFO][net] ip=10.0.0.2"]);
    }

    #[test]
    fn enabled_is_unconditional() {
        let facade = new_facade();
        let metadata = Metadata::builder().level(Level::Trace).target("x").build();
        assert!(facade.enabled(&metadata));
    }
}
