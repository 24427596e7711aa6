//! `log` backend that writes to the browser console.
//!
//! On wasm each record goes to the matching `console.*` method so the
//! browser's level filter works. Native builds (tests, tooling) fall back
//! to stderr.

use log::{LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

pub fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);

        #[cfg(target_arch = "wasm32")]
        {
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line.into()),
                log::Level::Warn => web_sys::console::warn_1(&line.into()),
                log::Level::Info => web_sys::console::info_1(&line.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line.into()),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use log::Level;
    use std::error::Error;

    #[test]
    fn record_format_includes_level_and_target() {
        let record = Record::builder()
            .level(Level::Warn)
            .target("career_compass::pages::login")
            .args(format_args!("sign-in cancelled"))
            .build();
        assert_eq!(
            format_record(&record),
            "[WARN] career_compass::pages::login: sign-in cancelled"
        );
    }

    #[test]
    fn second_install_is_a_startup_error() {
        // Whichever call runs first in this process wins; the next one fails.
        let _ = init(LevelFilter::Info);
        let err: AppError = match init(LevelFilter::Info) {
            Ok(()) => panic!("logger installed twice"),
            Err(e) => e.into(),
        };
        assert_eq!(err.to_string(), "logger already installed");
        assert!(err.source().is_some());
    }
}
