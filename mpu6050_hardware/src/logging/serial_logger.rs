use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{Level, Record};

use crate::serial::DebugSerialPort;

static SERIAL_LOGGER: Mutex<RefCell<Option<DebugSerialPort>>> = Mutex::new(RefCell::new(None));

pub fn init(port: DebugSerialPort) {
    interrupt::free(|cs| {
        *SERIAL_LOGGER.borrow(cs).borrow_mut() = Some(port);
    });
}

pub(super) fn log(record: &Record) {
    let level = match record.metadata().level() {
        Level::Trace => "trace",
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Warn => "warn",
        Level::Error => "error",
    };

    interrupt::free(|cs| {
        if let Some(tx) = SERIAL_LOGGER.borrow(cs).borrow_mut().as_mut() {
            writeln!(tx, "{}: {}\r", level, record.args()).ok();
        }
    });
}
