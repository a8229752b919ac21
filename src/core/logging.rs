//! Logger setup.
//!
//! The browser build logs through `console_log`; native builds (tests,
//! headless runs) write records to stderr.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
fn install(level: LevelFilter) {
    // Off has no `Level`; the max-level filter below silences everything anyway
    let level = level.to_level().unwrap_or(log::Level::Error);
    // fails when a logger is already installed; keep the first one
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
mod stderr {
    use log::{Log, Metadata, Record};

    pub(super) struct StderrLogger;

    pub(super) static LOGGER: StderrLogger = StderrLogger;

    impl Log for StderrLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
            }
        }

        fn flush(&self) {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(_level: LevelFilter) {
    let _ = log::set_logger(&stderr::LOGGER);
}

/// Install the logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    install(level);
    log::set_max_level(level);
}

/// Parse a level name from config ("off", "error", ..., "trace").
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}
