// Wed Oct 14 2026 - Alex

use colored::*;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the colored stderr logger. `RUST_LOG` still overrides `level`
    /// per module. Only the first call in a process takes effect.
    pub fn init_logger(level: LevelFilter) {
        Self::builder(level).try_init().ok();
    }

    /// Logger for unit tests: output is captured by the test harness.
    pub fn init_for_tests() {
        Self::builder(LevelFilter::Trace).is_test(true).try_init().ok();
    }

    fn builder(level: LevelFilter) -> Builder {
        let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
        builder.format(|buf, record| {
            let target = if record.target().is_empty() {
                String::new()
            } else {
                format!("[{}]", record.target())
            };
            writeln!(buf, "{} {} {}", format_level(record.level()), target.dimmed(), record.args())
        });
        builder
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    /// 0 shows load problems only; each step adds detail down to the
    /// per-action trace of the address interpreter.
    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn format_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".green().bold(),
        Level::Debug => "DEBUG".blue().bold(),
        Level::Trace => "TRACE".magenta().bold(),
    }
}

pub struct ScopedTimer {
    name: String,
    start: std::time::Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!("[TIMER] {} took {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name)
}
