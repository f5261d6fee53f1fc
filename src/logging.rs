#![cfg(feature = "std")]
//! Diagnostics for a console session. Records go to stderr so they never
//! interleave with the board printouts on stdout.

use std::env;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "BATTLESHIPS_LOG";

struct SessionLogger;

impl log::Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: SessionLogger = SessionLogger;

/// Render a record as `[level module] message`, with the crate prefix
/// dropped from the module path.
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target
        .strip_prefix("battleships::")
        .unwrap_or(target);
    format!(
        "[{} {}] {}",
        record.level().as_str().to_ascii_lowercase(),
        module,
        record.args()
    )
}

/// Parse a level name, falling back to `warn` for anything unrecognised.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level from [`LOG_ENV`].
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
