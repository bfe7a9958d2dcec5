use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console, tagged with the emitting module
struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let component = record.module_path().unwrap_or("app");
        let line = format!("[{}] {}", component, record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

pub struct Logger;

impl Logger {
    /// Install the console logger at `level` ("error" through "trace")
    pub fn init(level: &str) -> Result<()> {
        let level = level
            .parse::<LevelFilter>()
            .with_context(|| format!("unknown log level {:?}", level))?;

        log::set_boxed_logger(Box::new(ConsoleLogger { level }))
            .context("a logger is already installed")?;
        log::set_max_level(level);
        Ok(())
    }
}
