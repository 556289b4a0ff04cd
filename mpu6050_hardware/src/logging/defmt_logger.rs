use defmt::{debug, error, info, trace, warn, Display2Format};
use defmt_rtt as _;
use log::{Level, Record};

pub(super) fn log(record: &Record) {
    let args = Display2Format(record.args());
    match record.metadata().level() {
        Level::Trace => trace!("{}", args),
        Level::Debug => debug!("{}", args),
        Level::Info => info!("{}", args),
        Level::Warn => warn!("{}", args),
        Level::Error => error!("{}", args),
    }
}
