//! `log` backend for the board. Records go to every logger enabled through
//! cargo features: defmt over RTT and/or plain text on the debug serial port.

#[cfg(feature = "defmt_logger")]
mod defmt_logger;

#[cfg(feature = "serial_logger")]
pub mod serial_logger;

pub use log::Level;
use log::{Metadata, Record, SetLoggerError};

struct LoggerType;

static LOGGER: LoggerType = LoggerType;

/// Installs the logger. With `serial_logger`, hand the port over through
/// `serial_logger::init` first or serial output is dropped.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}

impl log::Log for LoggerType {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            #[cfg(feature = "defmt_logger")]
            defmt_logger::log(record);

            #[cfg(feature = "serial_logger")]
            serial_logger::log(record);
        }
    }

    fn flush(&self) {}
}
