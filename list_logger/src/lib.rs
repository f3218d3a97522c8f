#![cfg_attr(not(test), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::todo,
)]
#![deny(
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::missing_const_for_fn,
    unsafe_code
)]

use alloc::string::ToString;
use log::{Level, LevelFilter};

extern crate alloc;

pub mod events;

/// Signature of the callback every accepted record is handed to.
pub type Store = fn(&str, Level);

/// Initializes the logger for use with the log library
///
/// Records above `max_level` are dropped before they reach `store`.
///
/// # Errors
///
/// This function will return an error if the logger was already initialized.
pub fn init(store: Store, max_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    use alloc::boxed::Box;
    let logger = Box::new(Logger::new(store, max_level));

    log::set_logger(Box::leak(logger))?;
    log::set_max_level(max_level);

    Ok(())
}

pub struct Logger {
    store: Store,
    max_level: LevelFilter,
}

impl Logger {
    pub const fn new(store: Store, max_level: LevelFilter) -> Self {
        Self { store, max_level }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            match record.args().as_str() {
                Some(text) => (self.store)(text, record.level()),
                None => (self.store)(&record.args().to_string(), record.level()),
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::Logger;
    use log::{Level, LevelFilter, Log, Metadata};

    fn discard(_: &str, _: Level) {}

    #[test]
    fn respects_max_level() {
        let logger = Logger::new(discard, LevelFilter::Info);

        let warn = Metadata::builder().level(Level::Warn).build();
        let trace = Metadata::builder().level(Level::Trace).build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&trace));
    }
}
