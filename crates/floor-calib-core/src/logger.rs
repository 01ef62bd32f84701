//! Process-wide logging setup shared by the floor-calib crates.
//!
//! The default logger writes `LEVEL +elapsed_ms message` lines to stderr.
//! With the `tracing` feature, `init_tracing` installs a `tracing`
//! subscriber instead and bridges the crates' `log` records into it.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
    start: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_millis();
        let _ = writeln!(
            std::io::stderr(),
            "{:>5} +{}ms {}",
            record.level(),
            elapsed_ms,
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            start: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default
/// `info`) and forward `log` records into it.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_log::LogTracer::init();
    let _ = fmt().with_env_filter(filter).try_init();
}
