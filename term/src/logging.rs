use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use log::{LevelFilter, Metadata, Record};

/// Line-oriented log sink.
///
/// Lines end in `\r\n` because the terminal is in raw mode while the game
/// runs and a bare `\n` would not return the carriage.
struct TermLogger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for TermLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(format_line(record).as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

fn format_line(record: &Record) -> String {
    format!("{:<5} {} - {}\r\n", record.level(), record.target(), record.args())
}

/// Highest level allowed on stderr, which shares the screen with the board.
///
/// Records below warn would be printed between frames and shift the inline
/// redraw, so they need a log file.
fn stderr_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Warn)
}

/// Installs the global logger. Records go to `log_file` when given,
/// otherwise to stderr, capped at warn.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let (sink, max_level): (Box<dyn Write + Send>, LevelFilter) = match log_file {
        Some(path) => (
            Box::new(
                File::create(path)
                    .with_context(|| format!("could not open log file {}", path.display()))?,
            ),
            level,
        ),
        None => (Box::new(io::stderr()), stderr_level(level)),
    };

    log::set_boxed_logger(Box::new(TermLogger {
        sink: Mutex::new(sink),
    }))
    .context("logger already installed")?;
    log::set_max_level(max_level);

    if max_level < level {
        log::warn!("Logging to stderr stops at {max_level}, use --log-file for {level} records");
    }
    Ok(())
}
